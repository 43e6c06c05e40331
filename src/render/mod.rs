//! HTML output for the finished cloud.

pub mod html;

pub use html::{escape_text, write_page};
