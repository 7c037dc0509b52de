//! Authentication primitives.
//!
//! - [`jwt`] -- JWT access-token validation (and generation for tests/tooling).

pub mod jwt;
