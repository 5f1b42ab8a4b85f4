//! Request handlers

mod advice;

pub use advice::{get_health, get_strategies, post_advice};
