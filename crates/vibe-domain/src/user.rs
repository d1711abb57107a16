//! Catalog users (authors)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a catalog user
///
/// Serialized as the upper-case literal (`"ADMIN"`, `"ENGINEER"`, `"VIEWER"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Catalog administrator
    Admin,
    /// Regular contributor
    Engineer,
    /// Read-only user
    Viewer,
}

impl UserRole {
    /// String literal used in the persisted format
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Engineer => "ENGINEER",
            UserRole::Viewer => "VIEWER",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog user
///
/// Entries hold a copy of their author taken at creation time, so later
/// profile edits never reach historical entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: String,

    /// Display name (searchable)
    pub name: String,

    /// Avatar reference (usually an image URL)
    pub avatar: String,

    /// Role
    pub role: UserRole,
}

impl User {
    /// Create a new user
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        avatar: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: avatar.into(),
            role,
        }
    }
}
