//! Console Module
//!
//! The interactive menu loop.
//!
//! ## Architecture
//! - One session per run, reading from any `BufRead`, writing to any `Write`
//! - Input is parsed and pre-checked here; the shop only sees typed commands
//! - Every outcome, success or failure, is rendered as a `Response`

mod menu;
mod session;

pub use menu::{render_menu, SEPARATOR};
pub use session::Session;
