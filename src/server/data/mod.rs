//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM queries for one table each and return domain models from
//! `server::model`. They are generic over `ConnectionTrait` so services can hand them
//! either the pooled connection or an open transaction.

pub mod attendance;
pub mod attendance_status;
pub mod class_type;
pub mod course;
pub mod group;
pub mod schedule;
pub mod student;
pub mod teacher;
pub mod user;

#[cfg(test)]
mod test;
