//! os-explorer - Cloud resource graph explorer
//!
//! Turns a flat snapshot of cloud resources (servers, volumes, ports,
//! security groups, floating IPs, ...) into a bounded neighborhood view for
//! visualization and a categorized relation bundle for a detail panel.

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod models;
pub mod output;
pub mod services;
pub mod snapshot;
