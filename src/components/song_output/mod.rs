//! Song output panel: render model, scan action stub and the Dioxus component.

mod model;
mod panel;
mod scan;

pub use model::*;
pub use panel::*;
pub use scan::*;
