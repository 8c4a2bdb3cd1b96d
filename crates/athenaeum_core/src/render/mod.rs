//! HTML rendering
//!
//! Structured render functions that turn catalog records into the page's
//! Bootstrap markup fragments. All server-provided text is escaped before it
//! is interpolated.
pub mod components;
mod html;
