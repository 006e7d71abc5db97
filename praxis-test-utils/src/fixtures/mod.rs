//! Test fixture modules for database record creation.
//!
//! Each submodule provides fixtures for one slice of the domain:
//!
//! - `user` - accounts with a given role
//! - `course` - courses and ordered curriculum nodes
//! - `team` - teams and memberships
//! - `artifact` - artifacts with optional node links
//! - `tool` - catalog tools and review submissions

pub mod artifact;
pub mod course;
pub mod team;
pub mod tool;
pub mod user;
