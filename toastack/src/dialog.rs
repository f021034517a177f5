//! Modal dialog with its own nested toast host.
//!
//! While a dialog is open it owns a [`ToastHost`], so toast commands issued
//! from inside the dialog land on the dialog's surface instead of the page
//! behind it. Closing the dialog drops that host, which hands the stack back
//! to whatever was mounted before.
//!
//! The dialog renders as a bottom sheet:
//!
//! ```text
//! ░░░░░░░░░░░░░░░░░░░░░░░░░░░░  <- dimmed backdrop
//! ╭──────────────────────────╮
//! │                       ✕  │
//! │                          │
//! │  illustrator             │
//! │  Title                   │
//! │                          │
//! │  Description             │
//! │                          │
//! │  content                 │
//! ╰──────────────────────────╯
//! ```

use std::cell::RefCell;

use crate::buffer::Buffer;
use crate::config::DialogConfig;
use crate::event::{Event, EventOutcome, Key, MouseButton};
use crate::handle::{DialogHandle, HandleId};
use crate::layer::Layer;
use crate::layout::Rect;
use crate::registry::Registry;
use crate::text::wrap_words;
use crate::toast::ToastHost;

const CLOSE_GLYPH: &str = "✕";

/// Screen regions of an open dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialogLayout {
    pub panel: Rect,
    pub close: Rect,
    pub illustrator: Rect,
    pub title: Rect,
    pub description: Rect,
    pub content: Rect,
}

pub struct Dialog {
    registry: Registry,
    config: DialogConfig,
    content: Box<dyn Layer>,
    host: RefCell<Option<ToastHost>>,
}

impl Dialog {
    pub fn new(registry: &Registry, config: DialogConfig, content: impl Layer + 'static) -> Self {
        Self {
            registry: registry.clone(),
            config,
            content: Box::new(content),
            host: RefCell::new(None),
        }
    }

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    /// Registry id of the nested toast host, while open.
    pub fn nested_host(&self) -> Option<HandleId> {
        self.host.borrow().as_ref().map(ToastHost::id)
    }

    fn title_lines(&self, width: u16) -> Vec<String> {
        self.config
            .title
            .as_deref()
            .map(|t| wrap_words(t, width as usize))
            .unwrap_or_default()
    }

    fn description_lines(&self, width: u16) -> Vec<String> {
        self.config
            .description
            .as_deref()
            .map(|d| wrap_words(d, width as usize))
            .unwrap_or_default()
    }

    /// Lay the panel out against `screen`. Sections that don't fit are empty.
    pub fn layout(&self, screen: Rect) -> DialogLayout {
        // Border plus two columns of padding on each side.
        let inner_width = screen.width.saturating_sub(6);

        let illustrator_rows = self
            .config
            .illustrator
            .as_ref()
            .map_or(0, |l| l.height(inner_width));
        let title_rows = section_rows(self.title_lines(inner_width).len());
        let description_rows = section_rows(self.description_lines(inner_width).len());
        let content_rows = self.content.height(inner_width);

        // Close row and the gap under it come first.
        let inner_height = [illustrator_rows, title_rows, description_rows, content_rows]
            .into_iter()
            .fold(2u16, u16::saturating_add);
        let panel = screen.bottom_rows(inner_height.saturating_add(2));
        let inner = panel.shrink(1, 3, 1, 3);

        let (close_row, rest) = inner.split_top(2);
        let close = if close_row.is_empty() {
            Rect::default()
        } else {
            Rect::new(close_row.right().saturating_sub(1), close_row.y, 1, 1)
        };
        let (illustrator, rest) = rest.split_top(illustrator_rows);
        let (title, rest) = rest.split_top(title_rows);
        let (description, rest) = rest.split_top(description_rows);
        let (content, _) = rest.split_top(content_rows);

        DialogLayout {
            panel,
            close,
            illustrator,
            title: title.top_rows(title_rows.saturating_sub(1)),
            description: description.top_rows(description_rows.saturating_sub(1)),
            content,
        }
    }

    pub fn panel_area(&self, screen: Rect) -> Rect {
        self.layout(screen).panel
    }

    pub fn render(&self, buf: &mut Buffer, screen: Rect) {
        if !self.is_open() {
            return;
        }

        let outer = &self.config.outer;
        if outer.dim > 0.0 {
            buf.dim(screen, outer.dim);
        }
        if let Some(bg) = outer.style.bg_rgb() {
            for y in screen.y..screen.bottom() {
                for x in screen.x..screen.right() {
                    if let Some(cell) = buf.get_mut(x, y) {
                        cell.bg = bg;
                    }
                }
            }
        }

        let layout = self.layout(screen);
        let style = &self.config.content.style;
        if let Some(bg) = style.bg_rgb() {
            buf.fill(layout.panel, bg);
        }
        buf.draw_border(layout.panel, style);

        if !layout.close.is_empty() {
            buf.put_str(
                layout.close.x,
                layout.close.y,
                CLOSE_GLYPH,
                &style.dim(),
                layout.close.right(),
            );
        }

        if let Some(illustrator) = &self.config.illustrator {
            if !layout.illustrator.is_empty() {
                illustrator.render(buf, layout.illustrator);
            }
        }

        let title_style = self.config.title_style.unwrap_or_else(|| style.bold());
        let title_lines = self.title_lines(layout.title.width);
        for (line, y) in title_lines.iter().zip(layout.title.y..layout.title.bottom()) {
            buf.put_str(layout.title.x, y, line, &title_style, layout.title.right());
        }

        let description_style = self.config.description_style.unwrap_or(*style);
        let description_lines = self.description_lines(layout.description.width);
        for (line, y) in description_lines
            .iter()
            .zip(layout.description.y..layout.description.bottom())
        {
            buf.put_str(
                layout.description.x,
                y,
                line,
                &description_style,
                layout.description.right(),
            );
        }

        if !layout.content.is_empty() {
            self.content.render(buf, layout.content);
        }

        if let Some(host) = self.host.borrow().as_ref() {
            host.render(buf, screen);
        }
    }

    /// Route an event through the open dialog.
    ///
    /// The nested toast sees it first, then the close affordances, then the
    /// content. Every click is swallowed while open; keys other than Escape
    /// pass through.
    pub fn handle_event(&self, event: &Event, screen: Rect) -> EventOutcome {
        if !self.is_open() {
            return EventOutcome::Ignored;
        }

        let toast_outcome = self
            .host
            .borrow()
            .as_ref()
            .map_or(EventOutcome::Ignored, |host| host.handle_event(event, screen));
        if toast_outcome.is_consumed() {
            return EventOutcome::Consumed;
        }

        let layout = self.layout(screen);
        match event {
            Event::Key {
                key: Key::Escape, ..
            } => {
                self.close();
                EventOutcome::Consumed
            }
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } if layout.close.contains(*x, *y) => {
                self.close();
                EventOutcome::Consumed
            }
            Event::Click { x, y, .. } if layout.content.contains(*x, *y) => {
                self.content.handle_event(event, layout.content);
                EventOutcome::Consumed
            }
            Event::Click { x, y, .. } if layout.panel.contains(*x, *y) => EventOutcome::Consumed,
            Event::Click { .. } => {
                if self.config.close_on_outside {
                    log::debug!("dialog closed by click outside");
                    self.close();
                }
                EventOutcome::Consumed
            }
            _ => EventOutcome::Ignored,
        }
    }
}

/// Rows for a wrapped text section plus the gap below it.
fn section_rows(lines: usize) -> u16 {
    match u16::try_from(lines).unwrap_or(u16::MAX) {
        0 => 0,
        n => n.saturating_add(1),
    }
}

impl DialogHandle for Dialog {
    fn open(&self) {
        if self.is_open() {
            return;
        }
        let host = ToastHost::mount(&self.registry, self.config.toast.clone());
        log::debug!(
            "dialog {:?} opened (depth {})",
            self.config.title.as_deref().unwrap_or(""),
            self.registry.depth()
        );
        *self.host.borrow_mut() = Some(host);
    }

    fn close(&self) {
        let host = self.host.borrow_mut().take();
        if let Some(host) = host {
            drop(host);
            log::debug!(
                "dialog {:?} closed (depth {})",
                self.config.title.as_deref().unwrap_or(""),
                self.registry.depth()
            );
        }
    }

    fn is_open(&self) -> bool {
        self.host.borrow().is_some()
    }
}

impl std::fmt::Debug for Dialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dialog")
            .field("config", &self.config)
            .field("open", &self.is_open())
            .field("nested_host", &self.nested_host())
            .finish()
    }
}
