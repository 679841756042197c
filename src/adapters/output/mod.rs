//! Results container adapters. Implement ResultsPort.
//!
//! HTML page on disk, terminal, in-memory recorder, and a fan-out over several of them.

pub mod html;
pub mod html_file;
pub mod memory;
pub mod tee;
pub mod terminal;

pub use html_file::HtmlFileResults;
pub use memory::MemoryResults;
pub use tee::TeeResults;
pub use terminal::{TerminalResults, render_text};
