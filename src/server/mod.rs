//! HTTP backend for university attendance management.
//!
//! Requests pass through four layers:
//!
//! - `controller` authorizes the caller with `middleware::auth::AuthGuard` and maps DTOs
//! - `service` enforces the business rules: schedule conflicts, group capacity, accounts
//! - `data` holds one repository per table, generic over connection or transaction
//! - `model` holds the domain types passed between them
//!
//! `error` maps every failure to a status code and an `ErrorDto` body. `startup`, `config`,
//! `state` and `router` wire the pieces together in `main`.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
