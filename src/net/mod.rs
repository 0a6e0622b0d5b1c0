//! Networking modules for the marketplace REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the backend contract and its `gloo-net` implementation;
//! `types` holds the wire schema shared with the components.

pub mod api;
pub mod types;
