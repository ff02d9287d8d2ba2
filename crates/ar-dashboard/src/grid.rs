//! Grid packing
//!
//! Widgets occupy half-open cell rectangles on a bounded grid. Placement is
//! first-fit: candidate origins are scanned row-major and the first one
//! whose full rectangle is in bounds and unoccupied wins.

use ahash::AHashSet;

use ar_core::Widget;

/// The logical cell grid of a dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    rows: u32,
    cols: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self { rows: 12, cols: 12 }
    }
}

impl GridLayout {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Union of every cell covered by the given widgets
    fn occupied_cells(&self, widgets: &[Widget]) -> AHashSet<(u32, u32)> {
        let mut cells = AHashSet::new();
        for widget in widgets {
            let rect = widget.position;
            for y in rect.y..rect.y + rect.h {
                for x in rect.x..rect.x + rect.w {
                    cells.insert((x, y));
                }
            }
        }
        cells
    }

    /// First origin where a `w × h` rectangle fits entirely in bounds with
    /// every covered cell free. `None` when no such origin exists.
    pub fn find_position(&self, widgets: &[Widget], w: u32, h: u32) -> Option<(u32, u32)> {
        if w == 0 || h == 0 || w > self.cols || h > self.rows {
            return None;
        }

        let occupied = self.occupied_cells(widgets);

        for y in 0..self.rows {
            if y + h > self.rows {
                continue;
            }
            'origins: for x in 0..=(self.cols - w) {
                for cy in y..y + h {
                    for cx in x..x + w {
                        if occupied.contains(&(cx, cy)) {
                            continue 'origins;
                        }
                    }
                }
                return Some((x, y));
            }
        }

        None
    }
}
