//! Index mapper - (x, y) to device pixel order.
//!
//! Two addressing regimes exist in the field:
//!
//! - **Native 2D**: the WLED firmware knows the panel topology and takes
//!   plain row-major indices.
//! - **Panels**: the firmware sees one long strip and the software must
//!   account for panel boundaries and serpentine wiring itself.
//!
//! The panel parameters (origin, scan direction, which row parity is
//! flipped) cannot be derived from geometry; they are discovered once with a
//! calibration tool against the physical installation and then supplied here
//! as plain configuration. `index_of` must stay pure so that tool can call
//! it directly.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("matrix must have a non-zero area, got {width}x{height}")]
    ZeroArea { width: usize, height: usize },
    #[error("panel {index} has zero area")]
    EmptyPanel { index: usize },
    #[error("device index {index} is produced by more than one pixel")]
    DuplicateIndex { index: usize },
    #[error("pixel ({x}, {y}) maps outside the device range (index {index}, count {count})")]
    IndexOutOfRange {
        x: usize,
        y: usize,
        index: usize,
        count: usize,
    },
    #[error("pixel ({x}, {y}) is not covered by any panel")]
    Uncovered { x: usize, y: usize },
}

/// Direction the wiring walks the panel's rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    TopDown,
    BottomUp,
}

/// One physical panel inside the matrix.
///
/// `flip_parity` names the local scan-row parity whose pixels run
/// right-to-left; the opposite parity runs left-to-right. Which parity that
/// is depends on where the wiring enters the panel, not on its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    /// Top-left corner of the panel within the matrix.
    pub x0: usize,
    pub y0: usize,
    pub width: usize,
    pub height: usize,
    pub scan: ScanDirection,
    pub flip_parity: u8,
}

impl PanelConfig {
    fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x0 && x < self.x0 + self.width && y >= self.y0 && y < self.y0 + self.height
    }

    /// Local pixel index within the panel, serpentine applied.
    fn local_index(&self, x: usize, y: usize) -> usize {
        let lx = x - self.x0;
        let ly = match self.scan {
            ScanDirection::TopDown => y - self.y0,
            ScanDirection::BottomUp => self.height - 1 - (y - self.y0),
        };
        let flipped = (ly % 2) as u8 == self.flip_parity;
        let col = if flipped { self.width - 1 - lx } else { lx };
        ly * self.width + col
    }
}

/// Addressing scheme for the whole matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixLayout {
    /// Firmware-side 2D mapping: plain row-major order.
    Native2d { width: usize, height: usize },
    /// Manual panel/serpentine mapping. Panel order is wiring order; panel
    /// `n` starts at the sum of the preceding panels' pixel counts.
    Panels {
        width: usize,
        height: usize,
        panels: Vec<PanelConfig>,
    },
}

impl MatrixLayout {
    pub fn native_2d(width: usize, height: usize) -> Result<Self, LayoutError> {
        if width == 0 || height == 0 {
            return Err(LayoutError::ZeroArea { width, height });
        }
        Ok(Self::Native2d { width, height })
    }

    pub fn panels(
        width: usize,
        height: usize,
        panels: Vec<PanelConfig>,
    ) -> Result<Self, LayoutError> {
        if width == 0 || height == 0 {
            return Err(LayoutError::ZeroArea { width, height });
        }
        for (index, panel) in panels.iter().enumerate() {
            if panel.width == 0 || panel.height == 0 {
                return Err(LayoutError::EmptyPanel { index });
            }
        }
        Ok(Self::Panels {
            width,
            height,
            panels,
        })
    }

    /// The two-panel 16x8 installation this project was built against:
    /// panel 0 top-left with odd rows flipped, panel 1 wired from the
    /// bottom-right with even scan rows flipped.
    pub fn two_panel_serpentine() -> Result<Self, LayoutError> {
        Self::panels(
            16,
            8,
            vec![
                PanelConfig {
                    x0: 0,
                    y0: 0,
                    width: 8,
                    height: 8,
                    scan: ScanDirection::TopDown,
                    flip_parity: 1,
                },
                PanelConfig {
                    x0: 8,
                    y0: 0,
                    width: 8,
                    height: 8,
                    scan: ScanDirection::BottomUp,
                    flip_parity: 0,
                },
            ],
        )
    }

    pub fn width(&self) -> usize {
        match self {
            Self::Native2d { width, .. } | Self::Panels { width, .. } => *width,
        }
    }

    pub fn height(&self) -> usize {
        match self {
            Self::Native2d { height, .. } | Self::Panels { height, .. } => *height,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Device pixel index for an (x, y) coordinate.
    ///
    /// Returns `None` for coordinates outside the matrix or, in panel mode,
    /// not covered by any panel; callers leave such pixels dark. A correct
    /// configuration covers every coordinate exactly once - see
    /// [`verify_bijection`](Self::verify_bijection).
    pub fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        match self {
            Self::Native2d { width, height } => {
                if x >= *width || y >= *height {
                    return None;
                }
                Some(y * width + x)
            }
            Self::Panels { width, height, panels } => {
                if x >= *width || y >= *height {
                    return None;
                }
                let mut base = 0;
                for panel in panels {
                    if panel.contains(x, y) {
                        return Some(base + panel.local_index(x, y));
                    }
                    base += panel.width * panel.height;
                }
                None
            }
        }
    }

    /// Check that the mapping covers `[0, pixel_count)` exactly once.
    ///
    /// The physical truth is only observable on the device; this verifies
    /// the arithmetic half of the invariant so calibration can focus on
    /// wiring direction.
    pub fn verify_bijection(&self) -> Result<(), LayoutError> {
        let count = self.pixel_count();
        let mut seen = vec![false; count];
        for y in 0..self.height() {
            for x in 0..self.width() {
                let index = self
                    .index_of(x, y)
                    .ok_or(LayoutError::Uncovered { x, y })?;
                if index >= count {
                    return Err(LayoutError::IndexOutOfRange { x, y, index, count });
                }
                if seen[index] {
                    return Err(LayoutError::DuplicateIndex { index });
                }
                seen[index] = true;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_2d_is_row_major() {
        let layout = MatrixLayout::native_2d(16, 8).unwrap();
        assert_eq!(layout.index_of(0, 0), Some(0));
        assert_eq!(layout.index_of(15, 0), Some(15));
        assert_eq!(layout.index_of(0, 1), Some(16));
        assert_eq!(layout.index_of(15, 7), Some(127));
        assert_eq!(layout.index_of(16, 0), None);
        assert_eq!(layout.index_of(0, 8), None);
    }

    #[test]
    fn zero_area_is_rejected() {
        assert!(matches!(
            MatrixLayout::native_2d(0, 8),
            Err(LayoutError::ZeroArea { .. })
        ));
        assert!(matches!(
            MatrixLayout::panels(16, 0, Vec::new()),
            Err(LayoutError::ZeroArea { .. })
        ));
    }

    #[test]
    fn two_panel_preset_matches_calibrated_wiring() {
        let layout = MatrixLayout::two_panel_serpentine().unwrap();

        // Panel 0, top-left serpentine: even rows run left to right.
        assert_eq!(layout.index_of(0, 0), Some(0));
        assert_eq!(layout.index_of(7, 0), Some(7));
        // Odd rows are flipped.
        assert_eq!(layout.index_of(7, 1), Some(8));
        assert_eq!(layout.index_of(0, 1), Some(15));

        // Panel 1 starts at 64 and is wired from the bottom-right: the
        // bottom row scans first, right to left.
        assert_eq!(layout.index_of(15, 7), Some(64));
        assert_eq!(layout.index_of(8, 7), Some(71));
        // Next scan row up runs left to right.
        assert_eq!(layout.index_of(8, 6), Some(72));
        assert_eq!(layout.index_of(15, 6), Some(79));
        // Top-right corner is the panel's last flipped row.
        assert_eq!(layout.index_of(15, 0), Some(127));
    }

    #[test]
    fn bijection_holds_for_both_regimes() {
        MatrixLayout::native_2d(16, 8)
            .unwrap()
            .verify_bijection()
            .unwrap();
        MatrixLayout::two_panel_serpentine()
            .unwrap()
            .verify_bijection()
            .unwrap();
    }

    #[test]
    fn bijection_catches_overlapping_panels() {
        let panel = PanelConfig {
            x0: 0,
            y0: 0,
            width: 8,
            height: 8,
            scan: ScanDirection::TopDown,
            flip_parity: 1,
        };
        let layout = MatrixLayout::panels(16, 8, vec![panel, panel]).unwrap();
        assert!(layout.verify_bijection().is_err());
    }

    #[test]
    fn bijection_catches_coverage_gaps() {
        let layout = MatrixLayout::panels(
            16,
            8,
            vec![PanelConfig {
                x0: 0,
                y0: 0,
                width: 8,
                height: 8,
                scan: ScanDirection::TopDown,
                flip_parity: 1,
            }],
        )
        .unwrap();
        assert_eq!(
            layout.verify_bijection(),
            Err(LayoutError::Uncovered { x: 8, y: 0 })
        );
    }
}
