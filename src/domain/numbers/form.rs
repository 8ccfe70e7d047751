//! Raw form state as submitted by the user.

use serde::{Deserialize, Serialize};

/// Names of the five input fields, in vector order.
pub const FIELD_NAMES: [&str; 5] = ["a", "b", "c", "d", "e"];

/// The unvalidated text of the five number fields.
///
/// Kept verbatim so the form can be re-populated after a failed
/// submission. A field the client never sent is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberForm {
    #[serde(default)]
    pub a: Option<String>,
    #[serde(default)]
    pub b: Option<String>,
    #[serde(default)]
    pub c: Option<String>,
    #[serde(default)]
    pub d: Option<String>,
    #[serde(default)]
    pub e: Option<String>,
}

impl NumberForm {
    /// An empty, unbound form.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a fully populated form from five text values.
    pub fn from_values<S: Into<String>>(values: [S; 5]) -> Self {
        let [a, b, c, d, e] = values.map(|v| Some(v.into()));
        Self { a, b, c, d, e }
    }

    /// Raw text of a field by name, if it was submitted.
    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "a" => &self.a,
            "b" => &self.b,
            "c" => &self.c,
            "d" => &self.d,
            "e" => &self.e,
            _ => return None,
        };
        value.as_deref()
    }

    /// Field names paired with their raw text, in vector order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        FIELD_NAMES.iter().map(move |name| (*name, self.field(name)))
    }

    /// True when no field carries any text.
    pub fn is_empty(&self) -> bool {
        self.fields().all(|(_, v)| v.map_or(true, str::is_empty))
    }
}
