//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    lecture_count: i32,
    seminar_count: i32,
    lab_count: i32,
}

impl<'a> CourseFactory<'a> {
    /// Defaults: name `"Course {id}"`, 16 lectures, 8 seminars, 4 labs.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Course {}", id),
            lecture_count: 16,
            seminar_count: 8,
            lab_count: 4,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn counts(mut self, lectures: i32, seminars: i32, labs: i32) -> Self {
        self.lecture_count = lectures;
        self.seminar_count = seminars;
        self.lab_count = labs;
        self
    }

    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            name: ActiveValue::Set(self.name),
            lecture_count: ActiveValue::Set(self.lecture_count),
            seminar_count: ActiveValue::Set(self.seminar_count),
            lab_count: ActiveValue::Set(self.lab_count),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_course(db: &DatabaseConnection) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db).build().await
}
