use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{AuthGuard, Scope},
            policy::{Action, Resource},
            session::AuthSession,
        },
    },
};
use test_utils::{builder::TestBuilder, factory};

mod authorize;
mod current_user;
mod scope;
