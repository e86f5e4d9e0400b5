//! Lanczos downsampler - full frame to matrix resolution.
//!
//! A 16x8 target cannot afford point sampling: thin wall strips alias badly
//! when each device pixel covers a 20x25 source block. This is a separable
//! Lanczos3 resampler (windowed sinc, the filter PIL calls LANCZOS): per-axis
//! weights are computed once per output coordinate, applied horizontally into
//! an intermediate float image, then vertically.

use crate::fb::PixelBuffer;
use crate::types::Rgb;

/// Lanczos window size. 3 lobes on either side of the center.
const LOBES: f64 = 3.0;

/// The Lanczos3 kernel: sinc(x) * sinc(x / 3) for |x| < 3, else 0.
fn lanczos3(x: f64) -> f64 {
    let x = x.abs();
    if x < 1e-9 {
        return 1.0;
    }
    if x >= LOBES {
        return 0.0;
    }
    let pi_x = std::f64::consts::PI * x;
    LOBES * pi_x.sin() * (pi_x / LOBES).sin() / (pi_x * pi_x)
}

/// Weights for one output coordinate along one axis.
struct Tap {
    start: usize,
    weights: Vec<f64>,
}

/// Compute normalized filter taps for resizing an axis of `src` samples down
/// (or up) to `dst` samples.
fn axis_taps(src: usize, dst: usize) -> Vec<Tap> {
    let scale = src as f64 / dst as f64;
    // When shrinking, widen the kernel by the scale so every source sample
    // under an output pixel contributes.
    let filter_scale = scale.max(1.0);
    let support = LOBES * filter_scale;

    (0..dst)
        .map(|o| {
            let center = (o as f64 + 0.5) * scale;
            let start = (center - support).floor().max(0.0) as usize;
            let end = ((center + support).ceil() as usize).min(src);

            let mut weights: Vec<f64> = (start..end)
                .map(|i| lanczos3((i as f64 + 0.5 - center) / filter_scale))
                .collect();

            let sum: f64 = weights.iter().sum();
            if sum != 0.0 {
                for w in &mut weights {
                    *w /= sum;
                }
            }

            Tap { start, weights }
        })
        .collect()
}

/// Resample `src` to `target_width` x `target_height`.
pub fn downsample(src: &PixelBuffer, target_width: usize, target_height: usize) -> PixelBuffer {
    let src_w = src.width();
    let src_h = src.height();

    let h_taps = axis_taps(src_w, target_width);
    let v_taps = axis_taps(src_h, target_height);

    // Horizontal pass: src_w x src_h -> target_width x src_h, in floats to
    // avoid double rounding.
    let mut mid = vec![[0.0f64; 3]; target_width * src_h];
    for y in 0..src_h {
        let row = src.row(y);
        for (ox, tap) in h_taps.iter().enumerate() {
            let mut acc = [0.0f64; 3];
            for (k, &w) in tap.weights.iter().enumerate() {
                let p = row[tap.start + k];
                acc[0] += p.r as f64 * w;
                acc[1] += p.g as f64 * w;
                acc[2] += p.b as f64 * w;
            }
            mid[y * target_width + ox] = acc;
        }
    }

    // Vertical pass with final clamp to u8.
    let mut out = PixelBuffer::new(target_width, target_height);
    for (oy, tap) in v_taps.iter().enumerate() {
        for ox in 0..target_width {
            let mut acc = [0.0f64; 3];
            for (k, &w) in tap.weights.iter().enumerate() {
                let p = mid[(tap.start + k) * target_width + ox];
                acc[0] += p[0] * w;
                acc[1] += p[1] * w;
                acc[2] += p[2] * w;
            }
            out.set(
                ox,
                oy,
                Rgb::new(
                    acc[0].round().clamp(0.0, 255.0) as u8,
                    acc[1].round().clamp(0.0, 255.0) as u8,
                    acc[2].round().clamp(0.0, 255.0) as u8,
                ),
            );
        }
    }

    out
}
