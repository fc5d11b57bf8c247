//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands recorded by the canvas
//! - preserve paint order (insertion order, back-to-front)

mod cmd;
mod list;

pub use cmd::{ClearCmd, DrawCmd, FillRectCmd};
pub use list::DrawList;
