//! Domain types and pure logic for the mood notes backend.
//!
//! Nothing in this crate touches the database or the network; the `db` and
//! `api` crates build on it.

pub mod error;
pub mod mood_note;
pub mod patch;
pub mod types;
