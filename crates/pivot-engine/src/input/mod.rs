//! Keyboard input.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The runtime translates platform key presses into `Key`s.

mod frame;
mod types;

pub use frame::InputFrame;
pub use types::Key;
