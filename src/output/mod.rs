// src/output/mod.rs
//! Delivery of the viewer URL, with planning separated from execution.
//!
//! The plan is plain data built from the configuration; `deliver` is the
//! only place that touches stdout, the clipboard or the browser.

mod browser;
mod clipboard;
mod types;
mod writer;

// Re-export the public interface
pub use browser::open_in_browser;
pub use clipboard::copy_to_clipboard;
pub use types::{CompletedOperation, DeliveryTarget, FailedOperation, OutputPlan, OutputReport};
pub use writer::deliver;
