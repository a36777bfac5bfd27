//! La Musique: presentation panels for generated lyrics, melody and feedback.

pub mod components;
#[cfg(not(target_arch = "wasm32"))]
pub mod diagnostics;
pub mod models;
pub mod settings;
pub mod utils;
