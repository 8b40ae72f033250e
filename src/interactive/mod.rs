//! Interactive full-screen interface
//!
//! Presentation layer over [`crate::game::Game`]: shows the root word, score
//! and accepted words, and turns rejections into dismissable alerts.

mod app;
mod rendering;

pub use app::{Alert, App, InputMode, Message, MessageStyle, Statistics, run_tui};
