//! Weapon overlay - pixel-art pistol and muzzle flash.
//!
//! Cosmetic layer composited after the scene so it always sits on top.

use crate::fb::PixelBuffer;
use crate::types::Rgb;

const GUN_DARK: Rgb = Rgb::new(60, 60, 70);
const GUN_LIGHT: Rgb = Rgb::new(140, 140, 150);
const GUN_BARREL: Rgb = Rgb::new(50, 50, 60);
const HANDLE: Rgb = Rgb::new(100, 70, 50);
const GRIP_LINE: Rgb = Rgb::new(80, 50, 30);
const SIGHT: Rgb = Rgb::new(255, 255, 100);

const FLASH_OUTER: Rgb = Rgb::new(255, 80, 0);
const FLASH_MID: Rgb = Rgb::new(255, 200, 50);
const FLASH_CORE: Rgb = Rgb::new(255, 255, 255);
const FLASH_RAY: Rgb = Rgb::new(255, 255, 200);

/// Draw the pistol at the bottom center, with recoil and muzzle flash driven
/// by the remaining flash timer.
pub fn draw_weapon(fb: &mut PixelBuffer, muzzle_flash: u8) {
    let base_x = fb.width() as i32 / 2;
    let base_y = fb.height() as i32 - 80;

    let recoil = match muzzle_flash {
        t if t > 3 => 8,
        t if t > 0 => 3,
        _ => 0,
    };
    let weapon_y = base_y + recoil;

    // Barrel.
    fb.fill_rect(base_x - 16, weapon_y + 10, 32, 20, GUN_BARREL);
    // Slide.
    fb.fill_rect(base_x - 24, weapon_y + 25, 48, 18, GUN_LIGHT);
    fb.fill_rect(base_x - 20, weapon_y + 28, 40, 12, GUN_DARK);
    // Frame.
    fb.fill_rect(base_x - 20, weapon_y + 43, 40, 24, GUN_LIGHT);
    // Trigger guard.
    fb.fill_rect(base_x - 8, weapon_y + 55, 16, 10, GUN_DARK);
    // Grip.
    fb.fill_rect(base_x - 16, weapon_y + 65, 24, 35, HANDLE);
    for i in 0..4 {
        fb.fill_rect(base_x - 12, weapon_y + 70 + i * 6, 20, 2, GRIP_LINE);
    }
    // Front sight.
    fb.fill_rect(base_x - 4, weapon_y + 20, 8, 8, SIGHT);

    if muzzle_flash > 0 {
        let flash_x = base_x;
        let flash_y = weapon_y + 10;
        let flash_size = if muzzle_flash > 3 { 50 } else { 30 };

        fb.fill_circle(flash_x, flash_y, flash_size + 20, FLASH_OUTER);
        fb.fill_circle(flash_x, flash_y, flash_size + 10, FLASH_MID);
        fb.fill_circle(flash_x, flash_y, flash_size, FLASH_CORE);

        // Rays only while the flash is at full strength.
        if muzzle_flash > 3 {
            for i in 0..8 {
                let angle = i as f64 * std::f64::consts::FRAC_PI_4;
                draw_ray(fb, flash_x, flash_y, angle, 60);
            }
        }
    }
}

/// Thick ray from a point, stepped along the direction.
fn draw_ray(fb: &mut PixelBuffer, x: i32, y: i32, angle: f64, length: i32) {
    let (sin, cos) = angle.sin_cos();
    for t in 0..length {
        let px = x + (cos * t as f64) as i32;
        let py = y + (sin * t as f64) as i32;
        fb.fill_rect(px - 2, py - 2, 5, 5, FLASH_RAY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FRAME_HEIGHT, FRAME_WIDTH};

    #[test]
    fn weapon_is_drawn_at_bottom_center() {
        let mut fb = PixelBuffer::new(FRAME_WIDTH, FRAME_HEIGHT);
        draw_weapon(&mut fb, 0);

        // The grip occupies the bottom-center area.
        let grip = fb.get(FRAME_WIDTH / 2 - 10, FRAME_HEIGHT - 20).unwrap();
        assert_ne!(grip, Rgb::BLACK);
    }

    #[test]
    fn muzzle_flash_appears_only_while_timer_runs() {
        let mut cold = PixelBuffer::new(FRAME_WIDTH, FRAME_HEIGHT);
        draw_weapon(&mut cold, 0);

        let mut hot = PixelBuffer::new(FRAME_WIDTH, FRAME_HEIGHT);
        draw_weapon(&mut hot, 5);

        // Sample in the outer flash ring, clear of the inner circles and rays.
        let flash_y = FRAME_HEIGHT - 80 + 8 + 10;
        let sample = |fb: &PixelBuffer| fb.get(FRAME_WIDTH / 2 + 65, flash_y).unwrap();
        assert_eq!(sample(&cold), Rgb::BLACK);
        assert_eq!(sample(&hot), FLASH_OUTER);
    }
}
