//! Entities, payload schemas and connection setup.

pub mod errors;
pub mod db;
pub mod schema;
pub mod member;
pub mod workout_session;
