//! Scene renderer - sky/floor, wall strips, impact highlights.

use crate::core::grid::GridMap;
use crate::core::player::PlayerState;
use crate::core::raycast::cast;
use crate::fb::PixelBuffer;
use crate::types::{
    FLOOR_COLOR, FOV, IMPACT_COLOR, IMPACT_TTL_TICKS, SHADE_FALLOFF_DISTANCE, SKY_COLOR,
    WALL_COLORS,
};

/// Distances below this are considered degenerate (inside a wall surface)
/// and draw nothing rather than an infinite strip.
const MIN_DRAW_DISTANCE: f64 = 0.1;

/// Render one frame of the 3D view into `fb`.
///
/// Does not draw the weapon overlay; that is composited last by the caller
/// so the z-order stays sky/floor, walls, impacts, weapon.
pub fn render_scene(player: &PlayerState, grid: &GridMap, fb: &mut PixelBuffer) {
    let width = fb.width();
    let height = fb.height();

    // Sky above the horizon, floor below.
    fb.fill(SKY_COLOR);
    fb.fill_rect(
        0,
        (height / 2) as i32,
        width as u32,
        (height - height / 2) as u32,
        FLOOR_COLOR,
    );

    for column in 0..width {
        let ray_angle = column_angle(player.heading, column, width);
        let hit = cast(player.x, player.y, ray_angle, grid);

        // Perpendicular distance; without this, flat walls bow outward.
        let distance = hit.distance * (ray_angle - player.heading).cos();
        if distance <= MIN_DRAW_DISTANCE {
            continue;
        }

        let (top, bottom) = strip_extent(distance, height);
        let shade = 1.0 - distance / SHADE_FALLOFF_DISTANCE;
        let color = WALL_COLORS[hit.parity as usize].scaled(shade);
        fb.fill_column(column, top, bottom, color);
    }

    draw_impacts(player, grid, fb);
}

/// Ray angle for a column: linear interpolation across the FOV, centered on
/// the player heading.
pub fn column_angle(heading: f64, column: usize, width: usize) -> f64 {
    heading - FOV / 2.0 + (column as f64 / width as f64) * FOV
}

/// Vertical extent of a wall strip at the given perpendicular distance:
/// height inversely proportional to distance, centered on the horizon.
fn strip_extent(distance: f64, frame_height: usize) -> (i32, i32) {
    let wall_height = (frame_height as f64 / distance) as i32;
    let top = (frame_height as i32 - wall_height) / 2;
    (top, top + wall_height)
}

/// Bullet impacts: re-cast the ray at the recorded column to find the
/// current strip center, then draw a shrinking highlight.
fn draw_impacts(player: &PlayerState, grid: &GridMap, fb: &mut PixelBuffer) {
    let width = fb.width();
    let height = fb.height();

    for impact in player.impacts() {
        if impact.ttl == 0 {
            continue;
        }

        let ray_angle = column_angle(player.heading, impact.column, width);
        let hit = cast(player.x, player.y, ray_angle, grid);
        let distance = hit.distance * (ray_angle - player.heading).cos();
        if distance <= MIN_DRAW_DISTANCE {
            continue;
        }

        let (top, bottom) = strip_extent(distance, height);
        let center_y = (top + bottom) / 2;
        let radius = (5 * impact.ttl as i32 / IMPACT_TTL_TICKS as i32).max(2);
        fb.fill_circle(impact.column as i32, center_y, radius, IMPACT_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::GridMap;
    use crate::core::player::PlayerState;
    use crate::types::{ActionSet, GameAction, FRAME_HEIGHT, FRAME_WIDTH};

    fn arena() -> GridMap {
        GridMap::default_arena().unwrap()
    }

    #[test]
    fn center_column_has_fisheye_factor_one() {
        // The column whose ray angle equals the heading gets no correction.
        let heading = 1.234;
        let center = FRAME_WIDTH / 2;
        let angle = column_angle(heading, center, FRAME_WIDTH);
        assert!(((angle - heading).cos() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn edge_columns_span_the_fov() {
        let heading = 0.0;
        let left = column_angle(heading, 0, FRAME_WIDTH);
        assert!((left + FOV / 2.0).abs() < 1e-12);
        let right = column_angle(heading, FRAME_WIDTH - 1, FRAME_WIDTH);
        assert!(right < FOV / 2.0);
    }

    #[test]
    fn sky_and_floor_fill_their_halves() {
        // A room large enough that no wall is within ray reach, so the test
        // columns show bare sky and floor.
        let mut rows = vec!["#".repeat(16)];
        for _ in 0..14 {
            rows.push(format!("#{}#", ".".repeat(14)));
        }
        rows.push("#".repeat(16));
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let open = GridMap::parse(&refs).unwrap();

        let player = PlayerState::new(8.0, 8.0, 0.7);
        let mut fb = PixelBuffer::new(FRAME_WIDTH, FRAME_HEIGHT);
        render_scene(&player, &open, &mut fb);

        assert_eq!(fb.get(0, 0), Some(SKY_COLOR));
        assert_eq!(fb.get(FRAME_WIDTH - 1, FRAME_HEIGHT / 2 - 1), Some(SKY_COLOR));
        assert_eq!(fb.get(0, FRAME_HEIGHT / 2), Some(FLOOR_COLOR));
        assert_eq!(fb.get(FRAME_WIDTH - 1, FRAME_HEIGHT - 1), Some(FLOOR_COLOR));
    }

    #[test]
    fn facing_wall_draws_centered_strip() {
        let grid = arena();
        // Half a cell from the pillar at (2, 2): a very close wall fills the
        // whole center column.
        let player = PlayerState::new(1.6, 2.5, 0.0);
        let mut fb = PixelBuffer::new(FRAME_WIDTH, FRAME_HEIGHT);
        render_scene(&player, &grid, &mut fb);

        let center_x = FRAME_WIDTH / 2;
        let center_y = FRAME_HEIGHT / 2;
        let pixel = fb.get(center_x, center_y).unwrap();
        assert_ne!(pixel, SKY_COLOR);
        assert_ne!(pixel, FLOOR_COLOR);
    }

    #[test]
    fn distant_wall_is_darker_than_near_wall() {
        let grid = GridMap::parse(&[
            "######", "#....#", "#....#", "#....#", "#....#", "######",
        ])
        .unwrap();
        let center_x = FRAME_WIDTH / 2;
        let center_y = FRAME_HEIGHT / 2;

        let near = PlayerState::new(4.5, 3.0, 0.0);
        let mut fb = PixelBuffer::new(FRAME_WIDTH, FRAME_HEIGHT);
        render_scene(&near, &grid, &mut fb);
        let near_pixel = fb.get(center_x, center_y).unwrap();

        let far = PlayerState::new(1.5, 3.0, 0.0);
        render_scene(&far, &grid, &mut fb);
        let far_pixel = fb.get(center_x, center_y).unwrap();

        // Both hit the same border wall; the farther view is more shaded.
        assert!(far_pixel.r < near_pixel.r);
    }

    #[test]
    fn impact_draws_highlight_at_strip_center() {
        let grid = arena();
        let mut player = PlayerState::new(3.5, 2.5, 0.0);
        let mut fire = ActionSet::empty();
        fire.insert(GameAction::Fire);
        player.apply_actions(fire, &grid);
        assert_eq!(player.impacts().len(), 1);

        let mut fb = PixelBuffer::new(FRAME_WIDTH, FRAME_HEIGHT);
        render_scene(&player, &grid, &mut fb);

        // The highlight sits at the center column, on the strip center.
        let found = (0..FRAME_HEIGHT)
            .any(|y| fb.get(FRAME_WIDTH / 2, y) == Some(IMPACT_COLOR));
        assert!(found, "expected an impact highlight in the center column");
    }
}
