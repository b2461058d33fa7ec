//! Core library: data model, GPA engine, document repair and file formats

pub mod config;
pub mod errors;
pub mod gpa;
pub mod ids;
pub mod ingest;
pub mod models;
pub mod normalizer;
pub mod report;
pub mod session;
pub mod storage;

/// Returns the current version of the `gpa-jotter` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
