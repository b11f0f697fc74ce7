use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::attendance_status::AttendanceStatusRepository,
    error::{domain::DomainError, AppError},
    model::attendance_status::AttendanceStatus,
    service::class_type::required_name,
};

pub struct AttendanceStatusService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceStatusService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String) -> Result<AttendanceStatus, AppError> {
        let name = required_name(name)?;

        let txn = self.db.begin().await?;
        let repo = AttendanceStatusRepository::new(&txn);

        if repo.find_by_name(&name).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Attendance status '{}' already exists",
                name
            )));
        }

        let status = repo.create(name).await?;
        txn.commit().await?;

        Ok(status)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<AttendanceStatus>, AppError> {
        Ok(AttendanceStatusRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<AttendanceStatus>, AppError> {
        Ok(AttendanceStatusRepository::new(self.db).get_all().await?)
    }

    /// Deletes a status. Attendance records using it are removed by the cascade.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !AttendanceStatusRepository::new(self.db).delete(id).await? {
            return Err(DomainError::not_found("Attendance status", id).into());
        }

        Ok(())
    }
}
