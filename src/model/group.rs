use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GroupDto {
    pub id: i32,
    pub name: String,
    pub year_created: i32,
    pub current_occupancy: i32,
    pub max_occupancy: i32,
}

/// Payload for creating or replacing a group. Occupancy is derived from enrolments
/// and cannot be set by clients.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateGroupDto {
    pub name: String,
    pub year_created: i32,
    pub max_occupancy: i32,
}
