//! Student domain model and parameters.

use crate::{
    model::student::{CreateStudentDto, StudentDto},
    server::util::name::full_name,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub last_name: String,
    pub name: String,
    pub middle_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub group_id: i32,
}

impl Student {
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            last_name: entity.last_name,
            name: entity.name,
            middle_name: entity.middle_name,
            email: entity.email,
            phone: entity.phone,
            group_id: entity.group_id,
        }
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            last_name: self.last_name,
            name: self.name,
            middle_name: self.middle_name,
            email: self.email,
            phone: self.phone,
            group_id: self.group_id,
        }
    }

    pub fn full_name(&self) -> String {
        full_name(&self.last_name, &self.name, self.middle_name.as_deref())
    }
}

/// Parameters for creating or replacing a student.
#[derive(Debug, Clone)]
pub struct StudentParams {
    pub last_name: String,
    pub name: String,
    pub middle_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub group_id: i32,
}

impl StudentParams {
    pub fn from_dto(dto: CreateStudentDto) -> Self {
        Self {
            last_name: dto.last_name,
            name: dto.name,
            middle_name: dto.middle_name,
            email: dto.email,
            phone: dto.phone,
            group_id: dto.group_id,
        }
    }
}
