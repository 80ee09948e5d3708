//! State Management
//!
//! Global toast state and the memory pattern game controller.

pub mod game;
pub mod global;

pub use game::GameController;
pub use global::{provide_global_state, GlobalState, ToastEntry};
