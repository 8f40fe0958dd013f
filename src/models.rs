//! Frontend Models
//!
//! Todo records and the list's view filter.

use serde::Deserialize;

/// Todo data structure (matches the remote JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// A locally created, not yet completed todo
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }

    /// DOM id shared by the checkbox and its label
    pub fn dom_id(&self) -> String {
        format!("todo-{}", self.id)
    }
}

/// Class hiding completed items on the list root
pub const HIDE_COMPLETED_CLASS: &str = "hide-completed";
/// Class hiding not yet completed items on the list root
pub const HIDE_TODO_CLASS: &str = "hide-todo";

/// Visibility mode of the rendered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Parse a button's `data-filter` value. Unknown or missing values mean `All`.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("todo") => Filter::Active,
            Some("done") => Filter::Completed,
            _ => Filter::All,
        }
    }

    /// Marker classes as `(to_add, to_remove)` for the list root
    pub fn classes(self) -> (Option<&'static str>, &'static [&'static str]) {
        match self {
            Filter::All => (None, &[HIDE_TODO_CLASS, HIDE_COMPLETED_CLASS]),
            Filter::Active => (Some(HIDE_COMPLETED_CLASS), &[HIDE_TODO_CLASS]),
            Filter::Completed => (Some(HIDE_TODO_CLASS), &[HIDE_COMPLETED_CLASS]),
        }
    }
}

/// Hands out ids for todos created from the form.
///
/// Starts right after the initial batch size and only ever increases, so
/// deleting items never leads to a reused id.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next_id: u32,
}

impl IdGenerator {
    pub fn after(count: usize) -> Self {
        Self {
            next_id: u32::try_from(count).unwrap_or(u32::MAX).saturating_add(1),
        }
    }

    pub fn next(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }
}
