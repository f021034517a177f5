pub mod buffer;
pub mod config;
pub mod dialog;
pub mod error;
pub mod event;
pub mod facade;
pub mod handle;
pub mod layer;
pub mod layout;
pub mod registry;
pub mod style;
pub mod text;
pub mod toast;

pub use buffer::Buffer;
pub use config::{DialogConfig, Placement, RegionStyle, ToastConfig};
pub use dialog::{Dialog, DialogLayout};
pub use error::AuditError;
pub use event::{Event, EventOutcome, Key, Modifiers, MouseButton};
pub use facade::Toaster;
pub use handle::{DialogHandle, HandleId, OverlayHandle};
pub use layer::{Button, Column, FnLayer, Illustration, Layer, TextBlock};
pub use layout::Rect;
pub use registry::{RefInfo, Registration, Registry, RegistryStats};
pub use style::{Border, Color, Rgb, Style};
pub use toast::{ToastHost, ToastSurface};
