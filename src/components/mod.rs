//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read `ClientConfig` from context, keep their own state in
//! signals, and report back to the page only through callbacks.

pub mod item_list;
pub mod listing;
