//! Static lookup tables
//!
//! Read-only data compiled into the binary. Nothing mutates it at runtime.

pub mod activity;
pub mod foods;

pub use activity::ActivityLevel;
pub use foods::{Food, FoodCategory};
