//! Server application core modules.
//!
//! This module contains all server-side functionality for the Praxis
//! platform: HTTP routing, session-backed identity resolution, database
//! repositories, and the domain services that enforce curriculum
//! progression, artifact lifecycle, team membership, and tool catalog
//! review invariants.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
