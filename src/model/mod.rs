//! JSON data transfer objects exchanged over the HTTP API.

pub mod api;
pub mod attendance;
pub mod attendance_status;
pub mod class_type;
pub mod course;
pub mod group;
pub mod schedule;
pub mod student;
pub mod teacher;
pub mod user;
