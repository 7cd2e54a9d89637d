//! Incremental clicker: an economy model driven by clicks and a fixed-tick
//! scheduler, drawn as a terminal UI in the browser.

pub mod actions;
pub mod app;
pub mod config;
pub mod economy;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod render;
pub mod scheduler;
pub mod view;
pub mod widgets;

pub use error::{ClickerError, ClickerResult};
