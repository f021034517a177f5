use palette::{IntoColor, Oklch, Srgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale OKLCH lightness and chroma down by `amount` (0.0 - 1.0), keeping hue.
    pub fn darken(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        if amount == 0.0 {
            return self;
        }

        let srgb = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );
        let mut oklch: Oklch = srgb.into_color();
        oklch.l *= 1.0 - amount;
        oklch.chroma *= 1.0 - amount;
        oklch_to_rgb(oklch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h } => oklch_to_rgb(Oklch::new(*l, *c, *h)),
        }
    }
}

fn oklch_to_rgb(oklch: Oklch) -> Rgb {
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    Rgb::new(r, g, b)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    None,
    Single,
    #[default]
    Rounded,
}

impl Border {
    /// Corner and edge glyphs: top-left, top-right, bottom-left, bottom-right, horizontal, vertical.
    pub(crate) fn glyphs(self) -> Option<(char, char, char, char, char, char)> {
        match self {
            Border::None => None,
            Border::Single => Some(('┌', '┐', '└', '┘', '─', '│')),
            Border::Rounded => Some(('╭', '╮', '╰', '╯', '─', '│')),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Border,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    pub(crate) fn fg_rgb(&self) -> Rgb {
        self.foreground.map(|c| c.to_rgb()).unwrap_or(Rgb::WHITE)
    }

    pub(crate) fn bg_rgb(&self) -> Option<Rgb> {
        self.background.map(|c| c.to_rgb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darken_zero_is_identity() {
        let c = Rgb::new(120, 200, 40);
        assert_eq!(c.darken(0.0), c);
    }

    #[test]
    fn darken_full_is_black() {
        let c = Rgb::new(120, 200, 40).darken(1.0);
        assert!(c.r <= 1 && c.g <= 1 && c.b <= 1, "got {c:?}");
    }

    #[test]
    fn darken_reduces_brightness() {
        let c = Rgb::new(200, 200, 200);
        let d = c.darken(0.5);
        assert!(d.r < c.r && d.g < c.g && d.b < c.b);
    }
}
