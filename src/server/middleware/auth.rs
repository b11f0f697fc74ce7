use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::{
            policy::{grant, Action, Grant, Resource},
            session::AuthSession,
        },
        model::{attendance::AttendanceFilter, user::User},
    },
};

/// Rows an authorized request may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    /// Rows whose teacher is this teacher id.
    Teacher(i32),
    /// Rows whose student is this student id.
    Student(i32),
}

/// Result of a successful authorization.
#[derive(Debug, Clone)]
pub struct Access {
    pub user: User,
    pub scope: Scope,
}

impl Access {
    /// Checks a row against the access scope.
    ///
    /// # Arguments
    /// - `teacher_id` - Teacher the row belongs to, if it has one
    /// - `student_id` - Student the row belongs to, if it has one
    ///
    /// # Returns
    /// - `Ok(())` - Scope is `All`, or the row belongs to the caller
    /// - `Err(AuthError::AccessDenied)` - Row belongs to someone else
    pub fn ensure_owner(
        &self,
        teacher_id: Option<i32>,
        student_id: Option<i32>,
    ) -> Result<(), AppError> {
        let owned = match self.scope {
            Scope::All => true,
            Scope::Teacher(own) => teacher_id == Some(own),
            Scope::Student(own) => student_id == Some(own),
        };

        if !owned {
            return Err(AuthError::AccessDenied(
                self.user.id,
                format!("row is outside the caller's scope {:?}", self.scope),
            )
            .into());
        }

        Ok(())
    }

    /// Narrows an attendance filter to the caller's own records.
    ///
    /// Asking explicitly for another teacher's or student's records is denied
    /// rather than silently returning an empty list.
    pub fn restrict(&self, mut filter: AttendanceFilter) -> Result<AttendanceFilter, AppError> {
        match self.scope {
            Scope::All => {}
            Scope::Teacher(own) => {
                self.ensure_owner(filter.teacher_id.or(Some(own)), None)?;
                filter.teacher_id = Some(own);
            }
            Scope::Student(own) => {
                self.ensure_owner(None, filter.student_id.or(Some(own)))?;
                filter.student_id = Some(own);
            }
        }

        Ok(filter)
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged-in account.
    ///
    /// # Returns
    /// - `Ok(User)` - Account stored in the session
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Account was deleted since login
    pub async fn current_user(&self) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        User::from_entity(user)
    }

    /// Authenticates the caller and applies the access policy.
    ///
    /// An `Own` grant is turned into a teacher or student scope. Accounts with an
    /// `Own` grant but no linked record are denied, since they own nothing.
    ///
    /// # Returns
    /// - `Ok(Access)` - Caller and the scope they may act in
    /// - `Err(AuthError::UserNotInSession | UserNotInDatabase)` - Not authenticated (401)
    /// - `Err(AuthError::AccessDenied)` - Policy denies the operation (403)
    pub async fn authorize(&self, resource: Resource, action: Action) -> Result<Access, AppError> {
        let user = self.current_user().await?;

        let scope = match grant(user.role, resource, action) {
            Grant::All => Some(Scope::All),
            Grant::Own => match user.role {
                Role::Admin => Some(Scope::All),
                Role::Teacher => user.teacher_id.map(Scope::Teacher),
                Role::Student => user.student_id.map(Scope::Student),
            },
            Grant::Denied => None,
        };

        let Some(scope) = scope else {
            return Err(AuthError::AccessDenied(
                user.id,
                format!(
                    "{} may not {:?} {}",
                    user.role.as_str(),
                    action,
                    resource
                ),
            )
            .into());
        };

        Ok(Access { user, scope })
    }
}
