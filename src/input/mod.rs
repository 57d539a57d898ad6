pub mod handler;

pub use handler::{Hitbox, InputHandler, KeyAction, UiTarget};
