//! Persistence layer: per-entity record operations on top of `models`.
//! - Every operation takes the connection handle explicitly.
//! - Write operations validate their JSON payload against the entity schema first.
//! - Missing records surface as [`errors::ServiceError::NotFound`].

pub mod errors;
pub mod members;
pub mod workout_sessions;
#[cfg(test)]
pub mod test_support;
