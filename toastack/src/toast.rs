//! Toast overlay instance and its mount guard.

use std::cell::Cell;
use std::rc::Rc;

use crate::buffer::Buffer;
use crate::config::{Placement, ToastConfig};
use crate::event::{Event, EventOutcome, MouseButton};
use crate::handle::{HandleId, OverlayHandle};
use crate::layout::Rect;
use crate::registry::{Registration, Registry};
use crate::text::wrap_words;

const CLOSE_GLYPH: &str = "✕";

/// One toast surface: a notice box whose visibility only it controls.
#[derive(Debug)]
pub struct ToastSurface {
    config: ToastConfig,
    visible: Cell<bool>,
}

impl ToastSurface {
    pub fn new(config: ToastConfig) -> Self {
        Self {
            config,
            visible: Cell::new(false),
        }
    }

    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    fn message_lines(&self, box_width: u16) -> Vec<String> {
        wrap_words(&self.config.message, box_width.saturating_sub(4) as usize)
    }

    /// Where the notice box goes inside `area`, whether or not it is visible.
    pub fn notice_area(&self, area: Rect) -> Rect {
        let margin = self.config.margin.min(area.width / 2);
        let width = area.width - margin * 2;
        // Border, close row, then one row per wrapped line.
        let lines = u16::try_from(self.message_lines(width).len()).unwrap_or(u16::MAX);
        let height = lines.saturating_add(3).min(area.height);

        let rows = match self.config.placement {
            Placement::Top => area.top_rows(height),
            Placement::Bottom => area.bottom_rows(height),
        };

        Rect::new(area.x + margin, rows.y, width, rows.height)
    }

    /// Cell occupied by the close affordance.
    pub fn close_area(&self, area: Rect) -> Rect {
        let notice = self.notice_area(area);
        Rect::new(notice.right().saturating_sub(3), notice.y + 1, 1, 1)
    }

    pub fn render(&self, buf: &mut Buffer, area: Rect) {
        if !self.visible.get() {
            return;
        }

        let notice = self.notice_area(area);
        if notice.width < 5 || notice.height < 3 {
            return;
        }

        let style = &self.config.style;
        if let Some(bg) = style.bg_rgb() {
            buf.fill(notice, bg);
        }
        buf.draw_border(notice, style);

        let close = self.close_area(area);
        buf.put_str(close.x, close.y, CLOSE_GLYPH, &style.dim(), close.right());

        let inner = notice.shrink(2, 2, 1, 2);
        for (line, y) in self
            .message_lines(notice.width)
            .iter()
            .zip(inner.y..inner.bottom())
        {
            buf.put_str(inner.x, y, line, style, inner.right());
        }
    }

    /// Clicks on the close affordance hide the notice; other clicks on a
    /// visible notice are swallowed.
    pub fn handle_event(&self, event: &Event, area: Rect) -> EventOutcome {
        if !self.visible.get() {
            return EventOutcome::Ignored;
        }

        match event {
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } if self.close_area(area).contains(*x, *y) => {
                self.hide();
                EventOutcome::Consumed
            }
            Event::Click { x, y, .. } if self.notice_area(area).contains(*x, *y) => {
                EventOutcome::Consumed
            }
            _ => EventOutcome::Ignored,
        }
    }
}

impl OverlayHandle for ToastSurface {
    fn show(&self) {
        if !self.visible.replace(true) {
            log::debug!("toast '{}' shown", self.config.label);
        }
    }

    fn hide(&self) {
        if self.visible.replace(false) {
            log::debug!("toast '{}' hidden", self.config.label);
        }
    }

    fn is_visible(&self) -> bool {
        self.visible.get()
    }

    fn label(&self) -> &str {
        &self.config.label
    }
}

/// A mounted toast surface.
///
/// Construction pushes the surface onto the registry; dropping the host pops
/// it. Render it once per layer (application root, each dialog). Rendering
/// and event handling borrow the host immutably and never touch the
/// registry, so redraws cannot change the stack.
#[derive(Debug)]
pub struct ToastHost {
    surface: Rc<ToastSurface>,
    registration: Registration,
}

impl ToastHost {
    pub fn mount(registry: &Registry, config: ToastConfig) -> Self {
        let surface = Rc::new(ToastSurface::new(config));
        let registration = registry.register(surface.clone());
        log::debug!(
            "toast host '{}' mounted as {} (depth {})",
            surface.config.label,
            registration.id(),
            registry.depth()
        );
        Self {
            surface,
            registration,
        }
    }

    pub fn id(&self) -> HandleId {
        self.registration.id()
    }

    /// The registered handle. Identity is stable for the host's lifetime.
    pub fn surface(&self) -> &Rc<ToastSurface> {
        &self.surface
    }

    pub fn is_visible(&self) -> bool {
        self.surface.is_visible()
    }

    pub fn render(&self, buf: &mut Buffer, area: Rect) {
        self.surface.render(buf, area);
    }

    pub fn handle_event(&self, event: &Event, area: Rect) -> EventOutcome {
        self.surface.handle_event(event, area)
    }
}

impl Drop for ToastHost {
    fn drop(&mut self) {
        log::debug!(
            "toast host '{}' ({}) unmounting",
            self.surface.config.label,
            self.registration.id()
        );
    }
}
