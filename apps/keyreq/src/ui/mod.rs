//! Terminal presentation: input handling, alert rendering and the session loop.

pub mod app;
pub mod input;
pub mod render;

pub use app::{Flow, KeyRequestApp};
