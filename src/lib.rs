//! Praxis backend library.
//!
//! Praxis is a cohort learning platform: students progress through a linear
//! curriculum of course nodes, produce project artifacts, form teams with a
//! shared task board, browse a curated tool catalog, and receive mentor
//! review. This crate contains the shared API models and the full server
//! implementation.

pub mod model;
pub mod server;
