//! Synthetic retail store dataset generator.
//!
//! Loads adjective/noun lookup columns from a spreadsheet workbook, combines
//! them into store names and pairs them with fake address and metadata
//! fields, then serializes a fixed number of rows as CSV.

pub mod error;
pub mod store;
pub mod tracing;
