//! Render capability used for dialog content and decorations.

use crate::buffer::Buffer;
use crate::event::{Event, EventOutcome, MouseButton};
use crate::layout::Rect;
use crate::style::Style;
use crate::text::{display_width, truncate_to_width, wrap_words};

/// Something that can draw itself into a region of the buffer.
pub trait Layer {
    /// Rows needed when laid out at `width` columns.
    fn height(&self, width: u16) -> u16;

    fn render(&self, buf: &mut Buffer, area: Rect);

    /// Offer an event to the layer laid out at `area`.
    fn handle_event(&self, _event: &Event, _area: Rect) -> EventOutcome {
        EventOutcome::Ignored
    }
}

impl<L: Layer + ?Sized> Layer for Box<L> {
    fn height(&self, width: u16) -> u16 {
        (**self).height(width)
    }

    fn render(&self, buf: &mut Buffer, area: Rect) {
        (**self).render(buf, area)
    }

    fn handle_event(&self, event: &Event, area: Rect) -> EventOutcome {
        (**self).handle_event(event, area)
    }
}

/// Clamp a count to the cell grid's coordinate range.
fn clamp_count(count: usize) -> u16 {
    u16::try_from(count).unwrap_or(u16::MAX)
}

/// Word-wrapped text.
#[derive(Debug, Clone)]
pub struct TextBlock {
    text: String,
    style: Style,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::new(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Layer for TextBlock {
    fn height(&self, width: u16) -> u16 {
        clamp_count(wrap_words(&self.text, width as usize).len())
    }

    fn render(&self, buf: &mut Buffer, area: Rect) {
        let lines = wrap_words(&self.text, area.width as usize);
        for (line, y) in lines.iter().zip(area.y..area.bottom()) {
            buf.put_str(area.x, y, line, &self.style, area.right());
        }
    }
}

/// Fixed lines of art, truncated rather than wrapped.
#[derive(Debug, Clone)]
pub struct Illustration {
    lines: Vec<String>,
    style: Style,
}

impl Illustration {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            style: Style::new(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Layer for Illustration {
    fn height(&self, _width: u16) -> u16 {
        clamp_count(self.lines.len())
    }

    fn render(&self, buf: &mut Buffer, area: Rect) {
        for (line, y) in self.lines.iter().zip(area.y..area.bottom()) {
            let line = truncate_to_width(line, area.width as usize);
            buf.put_str(area.x, y, &line, &self.style, area.right());
        }
    }
}

/// Adapter for ad-hoc content drawn by a closure.
pub struct FnLayer<F> {
    height: u16,
    render: F,
}

impl<F> FnLayer<F>
where
    F: Fn(&mut Buffer, Rect),
{
    pub fn new(height: u16, render: F) -> Self {
        Self { height, render }
    }
}

impl<F> Layer for FnLayer<F>
where
    F: Fn(&mut Buffer, Rect),
{
    fn height(&self, _width: u16) -> u16 {
        self.height
    }

    fn render(&self, buf: &mut Buffer, area: Rect) {
        (self.render)(buf, area)
    }
}

/// Children stacked top to bottom with an optional gap.
#[derive(Default)]
pub struct Column {
    children: Vec<Box<dyn Layer>>,
    gap: u16,
}

impl Column {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn child(mut self, layer: impl Layer + 'static) -> Self {
        self.children.push(Box::new(layer));
        self
    }

    /// Area of each child when the column is rendered into `area`.
    pub fn child_areas(&self, area: Rect) -> Vec<Rect> {
        let mut rest = area;
        let mut areas = Vec::with_capacity(self.children.len());
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                rest = rest.split_top(self.gap).1;
            }
            let (taken, remaining) = rest.split_top(child.height(area.width));
            areas.push(taken);
            rest = remaining;
        }
        areas
    }
}

impl Layer for Column {
    fn height(&self, width: u16) -> u16 {
        let gaps = clamp_count(self.children.len().saturating_sub(1)).saturating_mul(self.gap);
        self.children
            .iter()
            .map(|c| c.height(width))
            .fold(gaps, u16::saturating_add)
    }

    fn render(&self, buf: &mut Buffer, area: Rect) {
        for (child, rect) in self.children.iter().zip(self.child_areas(area)) {
            if !rect.is_empty() {
                child.render(buf, rect);
            }
        }
    }

    fn handle_event(&self, event: &Event, area: Rect) -> EventOutcome {
        let Event::Click { x, y, .. } = event else {
            return EventOutcome::Ignored;
        };

        self.children
            .iter()
            .zip(self.child_areas(area))
            .find(|(_, rect)| rect.contains(*x, *y))
            .map(|(child, rect)| child.handle_event(event, rect))
            .unwrap_or(EventOutcome::Ignored)
    }
}

/// Single-row pressable label, drawn as `[ label ]`.
pub struct Button {
    label: String,
    style: Style,
    on_press: Box<dyn Fn()>,
}

impl Button {
    pub fn new(label: impl Into<String>, on_press: impl Fn() + 'static) -> Self {
        Self {
            label: label.into(),
            style: Style::new().bold(),
            on_press: Box::new(on_press),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Columns covered by the rendered button.
    pub fn width(&self) -> u16 {
        clamp_count(display_width(&self.label)).saturating_add(4)
    }

    pub fn press(&self) {
        (self.on_press)()
    }
}

impl Layer for Button {
    fn height(&self, _width: u16) -> u16 {
        1
    }

    fn render(&self, buf: &mut Buffer, area: Rect) {
        let text = format!("[ {} ]", self.label);
        let text = truncate_to_width(&text, area.width as usize);
        buf.put_str(area.x, area.y, &text, &self.style, area.right());
    }

    fn handle_event(&self, event: &Event, area: Rect) -> EventOutcome {
        match event {
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } if *y == area.y && *x >= area.x && *x < area.x + self.width().min(area.width) => {
                self.press();
                EventOutcome::Consumed
            }
            _ => EventOutcome::Ignored,
        }
    }
}
