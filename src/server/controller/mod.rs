//! HTTP request handlers.
//!
//! Each handler authorizes the request through `AuthGuard`, converts the DTO into
//! service parameters, calls one service and converts the result back into a DTO.

pub mod admin;
pub mod attendance;
pub mod attendance_status;
pub mod auth;
pub mod class_type;
pub mod course;
pub mod group;
pub mod schedule;
pub mod student;
pub mod teacher;

use serde::Deserialize;

/// `?page=<0-based>&entries=<n>` query parameters shared by paged listings.
#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

impl PaginationParams {
    /// Page size, never zero.
    pub fn per_page(&self) -> u64 {
        self.entries.max(1)
    }
}

fn default_entries() -> u64 {
    10
}
