//! HTTP controller endpoints for the Praxis web API.
//!
//! Axum handlers for authentication, curriculum progression, artifacts,
//! teams, the task board, and the tool catalog. Controllers resolve the
//! caller from their session, delegate to services, and map models to DTOs.
//! Every endpoint carries a utoipa annotation for the OpenAPI document.

pub mod artifact;
pub mod auth;
pub mod course;
pub mod progress;
pub mod task;
pub mod team;
pub mod tool;
pub mod util;
