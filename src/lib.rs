//! Word-frequency tag clouds for plain-text documents.
//!
//! A document is read line by line, split into words, and counted
//! case-insensitively; the most frequent words come out as an HTML page
//! of spans whose font sizes scale with their counts. [`cloud`] holds the
//! counting and scaling pipeline, [`app`] the command-line wiring around
//! it.

pub mod app;
pub mod cloud;
pub mod error;
pub mod input;
pub mod prompt;
pub mod render;
