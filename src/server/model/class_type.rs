use crate::model::class_type::ClassTypeDto;

/// Kind of class, e.g. lecture, seminar or lab.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassType {
    pub id: i32,
    pub name: String,
}

impl ClassType {
    pub fn from_entity(entity: entity::class_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> ClassTypeDto {
        ClassTypeDto {
            id: self.id,
            name: self.name,
        }
    }
}
