//! Service layer for business logic and orchestration.
//!
//! Services sit between controllers and repositories. They enforce business rules,
//! own transaction boundaries and work with domain models only. Every operation that
//! checks state and then writes based on it opens one transaction, passes it to each
//! repository involved and commits at the end; returning early with an error drops
//! the transaction and rolls it back.

pub mod attendance;
pub mod attendance_status;
pub mod auth;
pub mod class_type;
pub mod course;
pub mod group;
pub mod schedule;
pub mod student;
pub mod teacher;
pub mod user;

#[cfg(test)]
mod test;
