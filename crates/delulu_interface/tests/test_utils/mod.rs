//! Test utilities for delulu_interface tests.

pub mod mock_text;

#[allow(unused_imports)]
pub use mock_text::{MockBehavior, MockTextGenerator};
