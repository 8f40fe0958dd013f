//! Application Settings
//!
//! Fixed endpoint and host document ids. There is no runtime configuration surface.

/// Remote todo source
pub const TODOS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/todos";

/// Number of todos requested on startup
pub const TODOS_LIMIT: u32 = 5;

/// Id of the element the list is mounted into
pub const MOUNT_ID: &str = "todolist";

/// Id of the `<template>` cloned by the list
pub const TEMPLATE_ID: &str = "todolist-template";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub endpoint: String,
    pub limit: u32,
    pub mount_id: String,
    pub template_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: TODOS_ENDPOINT.to_string(),
            limit: TODOS_LIMIT,
            mount_id: MOUNT_ID.to_string(),
            template_id: TEMPLATE_ID.to_string(),
        }
    }
}

impl AppConfig {
    /// Full request URL, e.g. `.../todos?_limit=5`
    pub fn todos_url(&self) -> String {
        format!("{}?_limit={}", self.endpoint, self.limit)
    }
}
