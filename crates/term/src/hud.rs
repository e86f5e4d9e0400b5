//! HUD status lines.
//!
//! Two lines under the picture: player state and controls, then streaming
//! throughput. The second line is the only place transient device failures
//! ever surface - a dead matrix shows up as FAILED climbing and FPS at zero
//! while the game keeps running.

use std::time::Duration;

use wled_raycaster_core::PlayerState;
use wled_raycaster_matrix::StreamStats;

/// Build the HUD lines for one frame.
///
/// `stream` is `None` when streaming is disabled.
pub fn status_lines(
    player: &PlayerState,
    stream: Option<(&str, &StreamStats)>,
    elapsed: Duration,
) -> [String; 2] {
    let heading_deg = player.heading.to_degrees().rem_euclid(360.0);
    let player_line = format!(
        "POS {:.1},{:.1} HDG {:>3.0} | arrows turn, WASD move, SPACE fire, Q quit",
        player.x, player.y, heading_deg
    );

    let stream_line = match stream {
        Some((target, stats)) => {
            let secs = elapsed.as_secs_f64();
            let fps = if secs > 0.0 {
                stats.sent() as f64 / secs
            } else {
                0.0
            };
            format!(
                "WLED {} | SENT {} FAILED {} DROP {} | {:.1} FPS",
                target,
                stats.sent(),
                stats.failed(),
                stats.dropped(),
                fps
            )
        }
        None => "WLED disabled".to_string(),
    };

    [player_line, stream_line]
}
