use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model,
    server::{
        controller::{
            admin, attendance, attendance_status, auth, class_type, course, group, schedule,
            student, teacher,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Attendance API", description = "University attendance management"),
    paths(
        auth::login,
        auth::logout,
        auth::get_user,
        admin::get_users,
        admin::create_user,
        admin::get_user_by_id,
        admin::update_user,
        admin::delete_user,
        teacher::get_teachers,
        teacher::create_teacher,
        teacher::get_teacher_by_id,
        teacher::get_teacher_by_email,
        teacher::update_teacher,
        teacher::delete_teacher,
        group::get_groups,
        group::create_group,
        group::get_group_by_id,
        group::get_group_by_name,
        group::update_group,
        group::delete_group,
        student::get_students,
        student::create_student,
        student::get_student_by_id,
        student::get_students_by_group,
        student::update_student,
        student::delete_student,
        course::get_courses,
        course::create_course,
        course::get_course_by_id,
        course::get_course_by_name,
        course::update_course,
        course::delete_course,
        class_type::get_class_types,
        class_type::create_class_type,
        class_type::get_class_type_by_id,
        class_type::update_class_type,
        class_type::delete_class_type,
        schedule::get_schedules,
        schedule::create_schedule,
        schedule::get_schedule_by_id,
        schedule::update_schedule,
        schedule::delete_schedule,
        schedule::get_schedules_by_group,
        schedule::get_schedules_by_group_paginated,
        schedule::get_schedule_info_by_group,
        schedule::get_schedules_by_teacher,
        schedule::get_schedules_by_teacher_paginated,
        schedule::get_schedule_info_by_teacher,
        schedule::get_schedules_by_date,
        schedule::get_schedule_info_by_group_name,
        schedule::get_schedule_info_by_teacher_email,
        attendance_status::get_attendance_statuses,
        attendance_status::create_attendance_status,
        attendance_status::get_attendance_status_by_id,
        attendance_status::delete_attendance_status,
        attendance::get_attendances,
        attendance::create_attendance,
        attendance::get_attendance_by_id,
        attendance::update_attendance,
        attendance::delete_attendance,
        attendance::mark_attendance,
        attendance::mark_group_attendance,
        attendance::get_attendances_by_schedule,
        attendance::get_attendances_by_schedule_paginated,
        attendance::get_attendance_info_by_schedule,
        attendance::get_attendances_by_student,
        attendance::get_attendances_by_student_paginated,
        attendance::get_attendance_info_by_student,
        attendance::get_attendances_by_status,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::user::Role,
        model::user::UserDto,
        model::user::LoginDto,
        model::user::CreateUserDto,
        model::user::UpdateUserDto,
        model::teacher::TeacherDto,
        model::teacher::CreateTeacherDto,
        model::group::GroupDto,
        model::group::CreateGroupDto,
        model::student::StudentDto,
        model::student::CreateStudentDto,
        model::course::CourseDto,
        model::course::CreateCourseDto,
        model::class_type::ClassTypeDto,
        model::class_type::CreateClassTypeDto,
        model::schedule::ScheduleDto,
        model::schedule::CreateScheduleDto,
        model::schedule::ScheduleInfoDto,
        model::attendance_status::AttendanceStatusDto,
        model::attendance_status::CreateAttendanceStatusDto,
        model::attendance::AttendanceDto,
        model::attendance::CreateAttendanceDto,
        model::attendance::MarkAttendanceDto,
        model::attendance::MarkGroupAttendanceDto,
        model::attendance::AttendanceInfoDto,
    )),
    tags(
        (name = "auth", description = "Login, logout and the current account"),
        (name = "admin", description = "Account management"),
        (name = "teacher", description = "Teachers"),
        (name = "group", description = "Student groups and their capacity"),
        (name = "student", description = "Students and enrollment"),
        (name = "course", description = "Courses"),
        (name = "class_type", description = "Class types"),
        (name = "schedule", description = "Timetable with conflict checking"),
        (name = "attendance_status", description = "Attendance statuses"),
        (name = "attendance", description = "Attendance records"),
    ),
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route(
            "/api/admin/users",
            get(admin::get_users).post(admin::create_user),
        )
        .route(
            "/api/admin/users/{id}",
            get(admin::get_user_by_id)
                .put(admin::update_user)
                .delete(admin::delete_user),
        )
        .route(
            "/api/teachers",
            get(teacher::get_teachers).post(teacher::create_teacher),
        )
        .route(
            "/api/teachers/{id}",
            get(teacher::get_teacher_by_id)
                .put(teacher::update_teacher)
                .delete(teacher::delete_teacher),
        )
        .route(
            "/api/teachers/email/{email}",
            get(teacher::get_teacher_by_email),
        )
        .route(
            "/api/groups",
            get(group::get_groups).post(group::create_group),
        )
        .route(
            "/api/groups/{id}",
            get(group::get_group_by_id)
                .put(group::update_group)
                .delete(group::delete_group),
        )
        .route("/api/groups/name/{name}", get(group::get_group_by_name))
        .route(
            "/api/students",
            get(student::get_students).post(student::create_student),
        )
        .route(
            "/api/students/{id}",
            get(student::get_student_by_id)
                .put(student::update_student)
                .delete(student::delete_student),
        )
        .route(
            "/api/students/group/{group_id}",
            get(student::get_students_by_group),
        )
        .route(
            "/api/courses",
            get(course::get_courses).post(course::create_course),
        )
        .route(
            "/api/courses/{id}",
            get(course::get_course_by_id)
                .put(course::update_course)
                .delete(course::delete_course),
        )
        .route("/api/courses/name/{name}", get(course::get_course_by_name))
        .route(
            "/api/class-types",
            get(class_type::get_class_types).post(class_type::create_class_type),
        )
        .route(
            "/api/class-types/{id}",
            get(class_type::get_class_type_by_id)
                .put(class_type::update_class_type)
                .delete(class_type::delete_class_type),
        )
        .route(
            "/api/schedules",
            get(schedule::get_schedules).post(schedule::create_schedule),
        )
        .route(
            "/api/schedules/{id}",
            get(schedule::get_schedule_by_id)
                .put(schedule::update_schedule)
                .delete(schedule::delete_schedule),
        )
        .route(
            "/api/schedules/group/{id}",
            get(schedule::get_schedules_by_group),
        )
        .route(
            "/api/schedules/group/{id}/page",
            get(schedule::get_schedules_by_group_paginated),
        )
        .route(
            "/api/schedules/group/{id}/info",
            get(schedule::get_schedule_info_by_group),
        )
        .route(
            "/api/schedules/group/name/{name}/info",
            get(schedule::get_schedule_info_by_group_name),
        )
        .route(
            "/api/schedules/teacher/{id}",
            get(schedule::get_schedules_by_teacher),
        )
        .route(
            "/api/schedules/teacher/{id}/page",
            get(schedule::get_schedules_by_teacher_paginated),
        )
        .route(
            "/api/schedules/teacher/{id}/info",
            get(schedule::get_schedule_info_by_teacher),
        )
        .route(
            "/api/schedules/teacher/email/{email}/info",
            get(schedule::get_schedule_info_by_teacher_email),
        )
        .route(
            "/api/schedules/date/{date}",
            get(schedule::get_schedules_by_date),
        )
        .route(
            "/api/attendance-statuses",
            get(attendance_status::get_attendance_statuses)
                .post(attendance_status::create_attendance_status),
        )
        .route(
            "/api/attendance-statuses/{id}",
            get(attendance_status::get_attendance_status_by_id)
                .delete(attendance_status::delete_attendance_status),
        )
        .route(
            "/api/attendances",
            get(attendance::get_attendances).post(attendance::create_attendance),
        )
        .route(
            "/api/attendances/{id}",
            get(attendance::get_attendance_by_id)
                .put(attendance::update_attendance)
                .delete(attendance::delete_attendance),
        )
        .route("/api/attendances/mark", post(attendance::mark_attendance))
        .route(
            "/api/attendances/mark-group",
            post(attendance::mark_group_attendance),
        )
        .route(
            "/api/attendances/schedule/{id}",
            get(attendance::get_attendances_by_schedule),
        )
        .route(
            "/api/attendances/schedule/{id}/page",
            get(attendance::get_attendances_by_schedule_paginated),
        )
        .route(
            "/api/attendances/schedule/{id}/info",
            get(attendance::get_attendance_info_by_schedule),
        )
        .route(
            "/api/attendances/student/{id}",
            get(attendance::get_attendances_by_student),
        )
        .route(
            "/api/attendances/student/{id}/page",
            get(attendance::get_attendances_by_student_paginated),
        )
        .route(
            "/api/attendances/student/{id}/info",
            get(attendance::get_attendance_info_by_student),
        )
        .route(
            "/api/attendances/status/{id}",
            get(attendance::get_attendances_by_status),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
