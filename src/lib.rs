//! Production report engine for a furniture workshop.
//!
//! This crate builds read-only reports over projects, their operations, the
//! employees assigned to them and the working shifts they attend: a deadline
//! cross-reference along three axes, shift participation totals, and a project
//! overview for a registration period.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod ports;
pub mod reports;
pub mod store;
