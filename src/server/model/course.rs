use crate::model::course::{CourseDto, CreateCourseDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub lecture_count: i32,
    pub seminar_count: i32,
    pub lab_count: i32,
}

impl Course {
    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            lecture_count: entity.lecture_count,
            seminar_count: entity.seminar_count,
            lab_count: entity.lab_count,
        }
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            name: self.name,
            lecture_count: self.lecture_count,
            seminar_count: self.seminar_count,
            lab_count: self.lab_count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CourseParams {
    pub name: String,
    pub lecture_count: i32,
    pub seminar_count: i32,
    pub lab_count: i32,
}

impl CourseParams {
    pub fn from_dto(dto: CreateCourseDto) -> Self {
        Self {
            name: dto.name,
            lecture_count: dto.lecture_count,
            seminar_count: dto.seminar_count,
            lab_count: dto.lab_count,
        }
    }
}
