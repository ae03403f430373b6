//! Full-screen terminal frontend
//!
//! A ratatui implementation of `InteractionPort`.

mod app;
mod rendering;

pub use app::{InputMode, KeyAction, TuiPort, View};
pub use rendering::gallows_stage;
