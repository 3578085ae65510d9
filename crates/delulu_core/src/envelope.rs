//! Response envelope shared by every generation endpoint.

use serde::{Deserialize, Serialize};

/// `{"response": T | null}`.
///
/// A `null` response is the caller's signal to try again; it is not an error.
///
/// # Examples
///
/// ```
/// use delulu_core::{CharacterProfile, Payload};
///
/// let empty: Payload<CharacterProfile> = Payload::empty();
/// assert_eq!(serde_json::to_string(&empty).unwrap(), r#"{"response":null}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload<T> {
    /// The generated value, or `None` when generation produced nothing usable
    pub response: Option<T>,
}

impl<T> Payload<T> {
    /// Payload carrying a value.
    pub fn new(value: T) -> Self {
        Self {
            response: Some(value),
        }
    }

    /// Payload carrying `null`.
    pub fn empty() -> Self {
        Self { response: None }
    }
}

impl<T> From<Option<T>> for Payload<T> {
    fn from(response: Option<T>) -> Self {
        Self { response }
    }
}
