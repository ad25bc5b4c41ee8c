//! Rendering module - gizmo drawing for the overworld and battles.

mod battle;
mod overworld;
pub mod palette;
mod plugin;
pub mod shapes;

pub use plugin::{MainCamera, RenderingPlugin};
