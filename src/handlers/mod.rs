//! Event Handlers
//!
//! - keyboard: User keyboard input
//!
//! Handlers take &mut App and translate events into model changes and
//! App actions (navigation, logging water, reloading workouts).

pub mod keyboard;

pub use keyboard::handle_key;
