use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::User;

/// Sortable columns of the user table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserField {
    Id,
    Name,
    Email,
    Type,
}

impl UserField {
    /// Columns the table header lets the user sort by.
    pub const SORTABLE: [Self; 3] = [Self::Name, Self::Email, Self::Type];

    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Type => "Type",
        }
    }

    /// Case-sensitive comparison of this field.
    pub fn compare(self, a: &User, b: &User) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Name => a.name.cmp(&b.name),
            Self::Email => a.email.cmp(&b.email),
            Self::Type => a.user_type.cmp(&b.user_type),
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: UserField,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn ascending(key: UserField) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Configuration after the user clicks the `key` column.
    ///
    /// Only an active ascending sort on the same key flips to descending;
    /// everything else starts ascending on `key`.
    pub fn request(current: Option<Self>, key: UserField) -> Self {
        match current {
            Some(Self {
                key: active,
                direction: SortDirection::Ascending,
            }) if active == key => Self {
                key,
                direction: SortDirection::Descending,
            },
            _ => Self::ascending(key),
        }
    }

    pub fn compare(&self, a: &User, b: &User) -> Ordering {
        self.direction.apply(self.key.compare(a, b))
    }
}

/// Stable in-place sort; equal keys keep their relative order.
pub fn sort_users(users: &mut [&User], config: Option<SortConfig>) {
    if let Some(config) = config {
        users.sort_by(|a, b| config.compare(a, b));
    }
}

/// Name ordering used by the list service: case-insensitive first, then by
/// the exact bytes so the order is total.
///
/// Not locale-aware: accented initials sort after `z` ("Élise" > "Fabien").
pub fn collate_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
