//! Study group domain model and parameters.

use crate::model::group::{CreateGroupDto, GroupDto};

/// Study group with its seat counter.
///
/// `current_occupancy` mirrors the number of students enrolled and is only changed
/// through the capacity ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i32,
    pub name: String,
    pub year_created: i32,
    pub current_occupancy: i32,
    pub max_occupancy: i32,
}

impl Group {
    pub fn from_entity(entity: entity::student_group::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            year_created: entity.year_created,
            current_occupancy: entity.current_occupancy,
            max_occupancy: entity.max_occupancy,
        }
    }

    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            name: self.name,
            year_created: self.year_created,
            current_occupancy: self.current_occupancy,
            max_occupancy: self.max_occupancy,
        }
    }

    /// Whether another student can be enrolled.
    pub fn has_free_seat(&self) -> bool {
        self.current_occupancy < self.max_occupancy
    }
}

/// Parameters for creating or replacing a group. There is no occupancy field:
/// new groups start empty and updates keep the stored counter.
#[derive(Debug, Clone)]
pub struct GroupParams {
    pub name: String,
    pub year_created: i32,
    pub max_occupancy: i32,
}

impl GroupParams {
    pub fn from_dto(dto: CreateGroupDto) -> Self {
        Self {
            name: dto.name,
            year_created: dto.year_created,
            max_occupancy: dto.max_occupancy,
        }
    }
}
