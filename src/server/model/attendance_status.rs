use crate::model::attendance_status::AttendanceStatusDto;

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceStatus {
    pub id: i32,
    pub name: String,
}

impl AttendanceStatus {
    pub fn from_entity(entity: entity::attendance_status::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> AttendanceStatusDto {
        AttendanceStatusDto {
            id: self.id,
            name: self.name,
        }
    }
}
