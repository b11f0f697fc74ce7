use crate::server::{
    data::attendance::AttendanceRepository,
    model::attendance::AttendanceFilter,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod filtered;
mod with_names;
