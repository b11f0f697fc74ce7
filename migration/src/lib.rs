pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_teacher_table;
mod m20250601_000002_create_group_table;
mod m20250601_000003_create_student_table;
mod m20250601_000004_create_course_table;
mod m20250601_000005_create_class_type_table;
mod m20250601_000006_create_schedule_table;
mod m20250601_000007_create_attendance_status_table;
mod m20250601_000008_create_attendance_table;
mod m20250601_000009_create_user_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_teacher_table::Migration),
            Box::new(m20250601_000002_create_group_table::Migration),
            Box::new(m20250601_000003_create_student_table::Migration),
            Box::new(m20250601_000004_create_course_table::Migration),
            Box::new(m20250601_000005_create_class_type_table::Migration),
            Box::new(m20250601_000006_create_schedule_table::Migration),
            Box::new(m20250601_000007_create_attendance_status_table::Migration),
            Box::new(m20250601_000008_create_attendance_table::Migration),
            Box::new(m20250601_000009_create_user_table::Migration),
        ]
    }
}
