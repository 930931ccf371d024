use serde::{Deserialize, Serialize};

/// A row of the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique and stable across edits.
    pub id: u32,
    pub name: String,
    pub email: String,
    /// Role label, e.g. `admin`.
    #[serde(rename = "type")]
    pub user_type: String,
}

impl User {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        user_type: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            user_type: user_type.into(),
        }
    }

    /// Role label with its first letter upper-cased.
    pub fn display_type(&self) -> String {
        let mut chars = self.user_type.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
