//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser APIs (alerts, file inputs) are isolated here so `state` and
//! `components` stay free of `web_sys` plumbing.

pub mod browser;
