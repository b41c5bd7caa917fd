//! In-memory filesystem for testing readers without a real `/proc`.
//!
//! `MockFs` and its pre-built scenarios are public so downstream crates can
//! feed their own tests with canned `/proc` contents.

mod filesystem;
mod scenarios;

pub use filesystem::MockFs;
