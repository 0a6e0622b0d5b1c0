//! Component state and the flows that drive it.
//!
//! DESIGN
//! ======
//! Each component owns one state model (`items` for the grid, `listing` for
//! the form). The models are plain Rust and generic over the API client, so
//! fetch/submit behavior is tested here without a browser.

pub mod items;
pub mod listing;

#[cfg(test)]
pub(crate) mod test_helpers;
