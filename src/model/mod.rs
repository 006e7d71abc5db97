pub mod api;
pub mod artifact;
pub mod course;
pub mod progress;
pub mod task;
pub mod team;
pub mod tool;
pub mod user;
