pub use super::attendance::Entity as Attendance;
pub use super::attendance_status::Entity as AttendanceStatus;
pub use super::class_type::Entity as ClassType;
pub use super::course::Entity as Course;
pub use super::schedule::Entity as Schedule;
pub use super::student::Entity as Student;
pub use super::student_group::Entity as StudentGroup;
pub use super::teacher::Entity as Teacher;
pub use super::user::Entity as User;
