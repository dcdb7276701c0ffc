//! Todo Models
//!
//! Data structures matching the remote todo resource.

use serde::{Deserialize, Serialize};

/// Server-assigned todo identifier
pub type TodoId = u32;

/// Id reserved for the unconfirmed placeholder shown while a create is in flight
pub const PLACEHOLDER_ID: TodoId = 0;

/// Todo record (matches the remote resource)
///
/// Records are value types: updates produce a new record via the `with_*`
/// helpers and replace the stored one by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Unconfirmed record rendered while `create` is in flight
    pub fn placeholder(user_id: u32, title: impl Into<String>) -> Self {
        Self {
            id: PLACEHOLDER_ID,
            user_id,
            title: title.into(),
            completed: false,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == PLACEHOLDER_ID
    }

    pub fn with_completed(&self, completed: bool) -> Self {
        Self {
            completed,
            ..self.clone()
        }
    }

    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }

    /// Same record with `completed` flipped
    pub fn toggled(&self) -> Self {
        self.with_completed(!self.completed)
    }
}

/// Body of a create request; the server assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    pub user_id: u32,
    pub completed: bool,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, user_id: u32) -> Self {
        Self {
            title: title.into(),
            user_id,
            completed: false,
        }
    }
}

/// Status filter applied to the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Active, StatusFilter::Completed];

    /// Footer link label
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Completed => "Completed",
        }
    }

    /// Location hash for this filter (`#/`, `#/active`, `#/completed`)
    pub fn href(&self) -> &'static str {
        match self {
            StatusFilter::All => "#/",
            StatusFilter::Active => "#/active",
            StatusFilter::Completed => "#/completed",
        }
    }

    /// Parse a location hash; anything unrecognised falls back to `All`
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#').trim_start_matches('/') {
            "active" => StatusFilter::Active,
            "completed" => StatusFilter::Completed,
            _ => StatusFilter::All,
        }
    }
}
