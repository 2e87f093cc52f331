//! conjugo - French conjugation puzzle tooling
//!
//! Two batch tools over the same dataset document:
//!
//! - a rule validator ([`lint`]) that reports structural and linguistic
//!   problems in every puzzle, wrapped into a JSON [`report`];
//! - a table exporter ([`export`]) that flattens the dataset into CSV files
//!   ready for bulk loading.

pub mod app;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod lint;
pub mod report;
pub mod test_utils;

pub use error::{ConjugoError, Result};
