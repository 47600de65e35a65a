//! Pieces shared by the server crate and the binary: tracing setup and the
//! small response bodies every route family uses.

pub mod types;
pub mod utils;
