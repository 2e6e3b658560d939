pub mod app;
pub mod player_view;
pub mod shortcuts;

#[cfg(test)]
mod app_test;

pub use app::*;
