//! Dashboard rendering.

pub mod layout;
mod render;

pub use render::render;
