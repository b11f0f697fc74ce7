use crate::server::{
    data::schedule::ScheduleRepository,
    model::schedule::ScheduleSubject,
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, schedule::time},
};

mod find_by_subject_on_date;
mod listing;
mod with_names;
