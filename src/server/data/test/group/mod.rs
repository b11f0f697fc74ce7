use crate::server::{data::group::GroupRepository, model::group::GroupParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod occupancy;
mod update;

fn params(name: &str, max_occupancy: i32) -> GroupParams {
    GroupParams {
        name: name.to_string(),
        year_created: 2024,
        max_occupancy,
    }
}
