#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn shrink(self, top: u16, right: u16, bottom: u16, left: u16) -> Self {
        let x = self.x.saturating_add(left);
        let y = self.y.saturating_add(top);
        let width = self.width.saturating_sub(left + right);
        let height = self.height.saturating_sub(top + bottom);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrink by the same amount horizontally and vertically.
    pub fn inset(self, horizontal: u16, vertical: u16) -> Self {
        self.shrink(vertical, horizontal, vertical, horizontal)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Take `height` rows from the top, clamped to this rect.
    pub fn top_rows(self, height: u16) -> Self {
        Self {
            height: height.min(self.height),
            ..self
        }
    }

    /// Take `height` rows from the bottom, clamped to this rect.
    pub fn bottom_rows(self, height: u16) -> Self {
        let height = height.min(self.height);
        Self {
            y: self.bottom() - height,
            height,
            ..self
        }
    }

    /// Split off `height` rows from the top, returning (taken, rest).
    pub fn split_top(self, height: u16) -> (Self, Self) {
        let taken = self.top_rows(height);
        let rest = Self {
            y: taken.bottom(),
            height: self.height - taken.height,
            ..self
        };
        (taken, rest)
    }
}
