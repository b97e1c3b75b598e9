//! Common types and utilities shared across the index layer.
//!
//! This module contains:
//! - Configuration (order parameters)
//! - Error types
//! - Identifiers (NodeId)

pub mod config;
pub mod error;
mod node_id;

pub use config::TreeConfig;
pub use error::{Error, Result};
pub use node_id::NodeId;
