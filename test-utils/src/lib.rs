//! Test harness for the attendance backend.
//!
//! `TestBuilder` collects the tables a test needs and creates them in a fresh in-memory
//! SQLite database. The resulting `TestContext` also hands out a session stored in that
//! database, which is what the auth guard tests log users into. Row factories live in
//! [`factory`].
//!
//! ```rust,ignore
//! let test = TestBuilder::new().with_schedule_tables().build().await?;
//! let db = test.db.as_ref().unwrap();
//!
//! let (teacher, group, course, class_type, schedule) =
//!     factory::helpers::create_schedule_with_dependencies(db).await?;
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
