use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Separator token of the reference backend's nested-field selector
/// notation.
pub const FIELD_SEPARATOR: char = '.';

/// An ordered, non-empty sequence of string segments addressing a nested
/// field inside an owner document.
///
/// Segments are opaque strings. A segment that itself contains the field
/// separator cannot be disambiguated from nesting once encoded; callers
/// must keep `.` out of segments. That constraint is documented, not
/// validated. Non-emptiness IS validated: a zero-length path is a caller
/// contract violation and fails fast at construction.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Build a path from an ordered sequence of segments.
    ///
    /// Fails with [`ConfigError::EmptyPath`] when the sequence is empty.
    pub fn new<I, S>(segments: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(ConfigError::EmptyPath);
        }
        Ok(Self { segments })
    }

    /// Encode into the backend's native selector notation.
    pub fn encode(&self) -> String {
        self.segments.join(".")
    }

    /// Decode a selector back into a path.
    ///
    /// Inverse of [`encode`](Self::encode) as long as no segment contains
    /// the separator. The driver never needs this -- reads project a field
    /// and the backend returns the sub-structure directly -- but the
    /// notation stays reversible.
    pub fn decode(selector: &str) -> ConfigResult<Self> {
        if selector.is_empty() {
            return Err(ConfigError::EmptyPath);
        }
        Self::new(selector.split(FIELD_SEPARATOR))
    }

    /// The ordered segments of this path.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments; always at least one.
    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl fmt::Debug for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldPath({})", self.encode())
    }
}
