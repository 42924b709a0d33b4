//! Data-dictionary document rendering.
//!
//! Turns a parsed form plus its settings metadata into one self-contained
//! HTML document: header, group sidebar, one block per question, inline
//! styling and a small inline script. No external assets.

mod html;

pub use html::{render, write_report};
