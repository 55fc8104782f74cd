pub mod surface;

pub use surface::{ConsoleSurface, Panel, RenderSurface, RenderTarget, REQUIRED_TARGETS};
