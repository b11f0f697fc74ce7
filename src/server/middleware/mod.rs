//! Request authentication and authorization.
//!
//! - `session` - Typed access to the values stored in the user's session
//! - `policy` - The role/resource/action grant table
//! - `auth` - `AuthGuard`, which resolves the session user and applies the policy

pub mod auth;
pub mod policy;
pub mod session;

#[cfg(test)]
mod test;
