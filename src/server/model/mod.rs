//! Domain models and operation parameter types.
//!
//! Repositories convert entity models into these types at the data boundary, services
//! work with them exclusively, and controllers turn them into DTOs with `into_dto`.

pub mod attendance;
pub mod attendance_status;
pub mod class_type;
pub mod course;
pub mod group;
pub mod page;
pub mod schedule;
pub mod student;
pub mod teacher;
pub mod user;
