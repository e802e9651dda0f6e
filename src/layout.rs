//! Screen geometry: where each card sits and which card is under the cursor.
//!
//! The table fills the left part of the window in columns of three cards,
//! column-major (card `i` is in column `i / 3`, row `i % 3`). Chosen cards are
//! stacked in a single column against the right edge, using the same card size.
//! All coordinates are logical pixels with the origin at the top left.

use crate::core::GameConfig;

/// Cards per table column.
pub const ROWS: usize = 3;

/// Axis-aligned rectangle in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[must_use]
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

/// Card placement for a table of a given size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    width: f32,
    height: f32,
    table_width: f32,
    table_len: usize,
}

impl Layout {
    #[must_use]
    pub fn new(config: &GameConfig, table_len: usize) -> Self {
        Self {
            width: config.window_width as f32,
            height: config.window_height as f32,
            table_width: config.table_width as f32,
            table_len,
        }
    }

    /// Number of table columns. A partial last column still counts.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.table_len.div_ceil(ROWS)
    }

    /// Width and height of one card, or `None` for an empty table.
    #[must_use]
    pub fn card_size(&self) -> Option<(f32, f32)> {
        let columns = self.columns();
        if columns == 0 {
            return None;
        }
        Some((self.table_width / columns as f32, self.height / ROWS as f32))
    }

    /// Rectangle of the table card at `index`.
    #[must_use]
    pub fn table_rect(&self, index: usize) -> Option<Rect> {
        if index >= self.table_len {
            return None;
        }
        let (w, h) = self.card_size()?;
        let column = index / ROWS;
        let row = index % ROWS;
        Some(Rect::new(column as f32 * w, row as f32 * h, w, h))
    }

    /// Rectangle of the `slot`-th chosen card in the right-hand column.
    #[must_use]
    pub fn chosen_rect(&self, slot: usize) -> Option<Rect> {
        if slot >= ROWS {
            return None;
        }
        let (w, h) = self.card_size()?;
        Some(Rect::new(self.width - w, slot as f32 * h, w, h))
    }

    /// Table position under the point, if any.
    #[must_use]
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        let (w, h) = self.card_size()?;
        if x < 0.0 || y < 0.0 || x >= self.table_width || y >= self.height {
            return None;
        }
        let column = (x / w) as usize;
        let row = ((y / h) as usize).min(ROWS - 1);
        let index = column * ROWS + row;
        (index < self.table_len).then_some(index)
    }
}
