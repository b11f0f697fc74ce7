//! SeaORM entities for the attendance schema.
//!
//! One module per table. Server code converts these models into domain models at the
//! repository boundary and never exposes them over HTTP.

pub mod prelude;

pub mod attendance;
pub mod attendance_status;
pub mod class_type;
pub mod course;
pub mod schedule;
pub mod student;
pub mod student_group;
pub mod teacher;
pub mod user;
