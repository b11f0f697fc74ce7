//! Teacher domain model and parameters.

use crate::{
    model::teacher::{CreateTeacherDto, TeacherDto},
    server::util::name::full_name,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Teacher {
    pub id: i32,
    pub last_name: String,
    pub name: String,
    pub middle_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
}

impl Teacher {
    pub fn from_entity(entity: entity::teacher::Model) -> Self {
        Self {
            id: entity.id,
            last_name: entity.last_name,
            name: entity.name,
            middle_name: entity.middle_name,
            email: entity.email,
            phone: entity.phone,
        }
    }

    pub fn into_dto(self) -> TeacherDto {
        TeacherDto {
            id: self.id,
            last_name: self.last_name,
            name: self.name,
            middle_name: self.middle_name,
            email: self.email,
            phone: self.phone,
        }
    }

    /// "Last First Middle" display name.
    pub fn full_name(&self) -> String {
        full_name(&self.last_name, &self.name, self.middle_name.as_deref())
    }
}

/// Parameters for creating or replacing a teacher.
#[derive(Debug, Clone)]
pub struct TeacherParams {
    pub last_name: String,
    pub name: String,
    pub middle_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
}

impl TeacherParams {
    pub fn from_dto(dto: CreateTeacherDto) -> Self {
        Self {
            last_name: dto.last_name,
            name: dto.name,
            middle_name: dto.middle_name,
            email: dto.email,
            phone: dto.phone,
        }
    }
}
