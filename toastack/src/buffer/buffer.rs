use super::Cell;
use crate::layout::Rect;
use crate::style::{Rgb, Style};
use crate::text::char_width;

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }

    /// Blank `rect` with the given background.
    pub fn fill(&mut self, rect: Rect, bg: Rgb) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                self.set(x, y, Cell::new(' ').with_bg(bg));
            }
        }
    }

    /// Darken the cells inside `rect`, used as a modal backdrop.
    pub fn dim(&mut self, rect: Rect, amount: f32) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.fg = cell.fg.darken(amount);
                    cell.bg = cell.bg.darken(amount);
                }
            }
        }
    }

    /// Write a single line of text starting at (x, y), clipped to `max_x`.
    /// Keeps the existing background when the style has none.
    /// Returns the number of columns written.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: &Style, max_x: u16) -> u16 {
        if y >= self.height {
            return 0;
        }

        let max_x = max_x.min(self.width);
        let fg = style.fg_rgb();
        let mut cx = x;

        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if cx + w > max_x {
                break;
            }

            let bg = style
                .bg_rgb()
                .unwrap_or_else(|| self.get(cx, y).map(|c| c.bg).unwrap_or(Rgb::BLACK));

            self.set(
                cx,
                y,
                Cell::new(ch)
                    .with_fg(fg)
                    .with_bg(bg)
                    .with_style(style.text_style),
            );
            if w == 2 {
                let mut cont = Cell::new(' ').with_bg(bg);
                cont.wide_continuation = true;
                self.set(cx + 1, y, cont);
            }
            cx += w;
        }

        cx - x
    }

    /// Draw the style's border around `rect`. Backgrounds are preserved.
    pub fn draw_border(&mut self, rect: Rect, style: &Style) {
        let Some((tl, tr, bl, br, h, v)) = style.border.glyphs() else {
            return;
        };

        if rect.width < 2 || rect.height < 2 {
            return;
        }

        let fg = style.fg_rgb();
        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;

        self.set_char(rect.x, rect.y, tl, fg);
        self.set_char(right, rect.y, tr, fg);
        self.set_char(rect.x, bottom, bl, fg);
        self.set_char(right, bottom, br, fg);

        for x in (rect.x + 1)..right {
            self.set_char(x, rect.y, h, fg);
            self.set_char(x, bottom, h, fg);
        }

        for y in (rect.y + 1)..bottom {
            self.set_char(rect.x, y, v, fg);
            self.set_char(right, y, v, fg);
        }
    }

    fn set_char(&mut self, x: u16, y: u16, ch: char, fg: Rgb) {
        if let Some(cell) = self.get_mut(x, y) {
            cell.char = ch;
            cell.fg = fg;
        }
    }

    /// The characters of row `y`, skipping wide-character continuations.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|c| !c.wide_continuation)
            .map(|c| c.char)
            .collect()
    }

    /// Find the first row containing `needle`.
    pub fn find_row(&self, needle: &str) -> Option<u16> {
        (0..self.height).find(|&y| self.row_text(y).contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Border;

    #[test]
    fn put_str_clips_at_max_x() {
        let mut buf = Buffer::new(10, 1);
        let written = buf.put_str(2, 0, "hello world", &Style::new(), 6);
        assert_eq!(written, 4);
        assert_eq!(buf.row_text(0), "  hell    ");
    }

    #[test]
    fn put_str_out_of_bounds_is_noop() {
        let mut buf = Buffer::new(4, 1);
        assert_eq!(buf.put_str(0, 3, "x", &Style::new(), 4), 0);
        assert_eq!(buf.row_text(0), "    ");
    }

    #[test]
    fn border_draws_corners() {
        let mut buf = Buffer::new(4, 3);
        buf.draw_border(buf.area(), &Style::new().border(Border::Single));
        assert_eq!(buf.row_text(0), "┌──┐");
        assert_eq!(buf.row_text(1), "│  │");
        assert_eq!(buf.row_text(2), "└──┘");
    }

    #[test]
    fn dim_stays_inside_rect() {
        let grey = Rgb::new(200, 200, 200);
        let mut buf = Buffer::new(6, 4);
        buf.fill(buf.area(), grey);

        buf.dim(Rect::new(0, 0, 6, 2), 0.5);
        assert!(buf.get(0, 1).map(|c| c.bg.r < 200).unwrap_or(false));
        assert_eq!(buf.get(0, 2).map(|c| c.bg), Some(grey));
        assert_eq!(buf.get(5, 3).map(|c| c.bg), Some(grey));
    }

    #[test]
    fn find_row_locates_text() {
        let mut buf = Buffer::new(12, 3);
        buf.put_str(1, 2, "notice", &Style::new(), 12);
        assert_eq!(buf.find_row("notice"), Some(2));
        assert_eq!(buf.find_row("missing"), None);
    }
}
