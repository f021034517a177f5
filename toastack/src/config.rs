//! Toast and dialog configuration.

use crate::layer::Layer;
use crate::style::{Border, Color, Style};

/// Message shown by a toast host unless configured otherwise.
pub const DEFAULT_TOAST_MESSAGE: &str =
    "Username or password is invalid, or your account is not authorized for access.";

/// Where a toast host places its notice within its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Pinned to the top edge (default).
    #[default]
    Top,
    /// Pinned to the bottom edge.
    Bottom,
}

/// Per-host toast configuration.
#[derive(Debug, Clone)]
pub struct ToastConfig {
    /// Diagnostic name reported by `Toaster::show_refs`.
    pub label: String,

    /// Text displayed inside the notice.
    pub message: String,

    pub placement: Placement,

    /// Horizontal margin between the notice and its area's edges.
    pub margin: u16,

    /// Notice box style (background, border, text color).
    pub style: Style,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            label: "toast".to_string(),
            message: DEFAULT_TOAST_MESSAGE.to_string(),
            placement: Placement::Top,
            margin: 2,
            style: Style::new()
                .background(Color::oklch(0.97, 0.03, 150.0))
                .foreground(Color::oklch(0.45, 0.0, 0.0))
                .border(Border::Rounded),
        }
    }
}

impl ToastConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn margin(mut self, margin: u16) -> Self {
        self.margin = margin;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// Style of a dialog region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionStyle {
    /// Base style of the region.
    pub style: Style,

    /// How much to darken whatever is behind the region (0.0 - 1.0).
    pub dim: f32,
}

impl RegionStyle {
    pub fn new(style: Style) -> Self {
        Self { style, dim: 0.0 }
    }

    pub fn dim(mut self, amount: f32) -> Self {
        self.dim = amount;
        self
    }
}

/// Dialog configuration.
///
/// Everything except the nested content, which is passed separately to
/// `Dialog::new`.
pub struct DialogConfig {
    /// Heading rendered bold at the top of the panel.
    pub title: Option<String>,

    /// Wrapped text below the title.
    pub description: Option<String>,

    /// Decoration rendered above the title.
    pub illustrator: Option<Box<dyn Layer>>,

    /// If true, clicking outside the panel closes the dialog.
    pub close_on_outside: bool,

    /// Backdrop covering the whole screen behind the panel.
    pub outer: RegionStyle,

    /// The panel itself.
    pub content: RegionStyle,

    /// Title text style. Falls back to the panel style in bold.
    pub title_style: Option<Style>,

    /// Description text style. Falls back to the panel style.
    pub description_style: Option<Style>,

    /// Configuration for the toast host nested inside the dialog.
    pub toast: ToastConfig,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            illustrator: None,
            close_on_outside: false,
            outer: RegionStyle::new(Style::new()).dim(0.5),
            content: RegionStyle::new(
                Style::new()
                    .background(Color::oklch(0.99, 0.0, 0.0))
                    .foreground(Color::oklch(0.25, 0.0, 0.0))
                    .border(Border::Rounded),
            ),
            title_style: None,
            description_style: None,
            toast: ToastConfig::new("dialog toast"),
        }
    }
}

impl std::fmt::Debug for DialogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogConfig")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("illustrator", &self.illustrator.is_some())
            .field("close_on_outside", &self.close_on_outside)
            .field("outer", &self.outer)
            .field("content", &self.content)
            .field("title_style", &self.title_style)
            .field("description_style", &self.description_style)
            .field("toast", &self.toast)
            .finish()
    }
}

impl DialogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn illustrator(mut self, layer: impl Layer + 'static) -> Self {
        self.illustrator = Some(Box::new(layer));
        self
    }

    /// Let clicks outside the panel close the dialog.
    pub fn close_on_outside(mut self, enabled: bool) -> Self {
        self.close_on_outside = enabled;
        self
    }

    pub fn outer(mut self, outer: RegionStyle) -> Self {
        self.outer = outer;
        self
    }

    pub fn content(mut self, content: RegionStyle) -> Self {
        self.content = content;
        self
    }

    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = Some(style);
        self
    }

    pub fn description_style(mut self, style: Style) -> Self {
        self.description_style = Some(style);
        self
    }

    pub fn toast(mut self, toast: ToastConfig) -> Self {
        self.toast = toast;
        self
    }
}
