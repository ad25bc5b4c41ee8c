//! UI module - bevy_ui screens layered over the drawn scene.

mod battle;
mod hud;
mod menus;
mod overlay;
mod plugin;
mod touch;
mod widgets;

pub use plugin::UiPlugin;
