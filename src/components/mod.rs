//! The components module contains all shared components for our app.

mod icons;
mod section_panel;
mod song_output;
mod toast;
pub mod views;

pub use icons::*;
pub use section_panel::*;
pub use song_output::*;
pub use toast::*;
// Views are accessed via views::ViewName
