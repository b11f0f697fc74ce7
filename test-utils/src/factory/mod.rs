//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization
//! and a `create_*` convenience function for quick default creation. Factories insert
//! rows directly and never go through the service layer, so derived state such as a
//! group's occupancy counter is only what the caller sets.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let teacher = factory::create_teacher(&db).await?;
//!     let group = factory::create_group(&db).await?;
//!
//!     let (teacher, group, course, class_type, schedule) =
//!         factory::helpers::create_schedule_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let group = factory::student_group::GroupFactory::new(&db)
//!     .name("CS-101")
//!     .max_occupancy(2)
//!     .build()
//!     .await?;
//! ```

pub mod attendance;
pub mod attendance_status;
pub mod class_type;
pub mod course;
pub mod helpers;
pub mod schedule;
pub mod student;
pub mod student_group;
pub mod teacher;
pub mod user;

pub use attendance::create_attendance;
pub use attendance_status::{create_default_statuses, create_status};
pub use class_type::create_class_type;
pub use course::create_course;
pub use schedule::create_schedule;
pub use student::create_student;
pub use student_group::create_group;
pub use teacher::create_teacher;
pub use user::{create_admin, create_student_user, create_teacher_user, create_user};
