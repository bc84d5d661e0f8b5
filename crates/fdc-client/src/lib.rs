//! Typed client for a fuel-delivery-controller (FDC) HTTP service.
//!
//! This crate is intended to be used by:
//! - `fdc-mcp` (the MCP server surface)
//! - anything else that needs typed access to the FDC wire contract
//!
//! It intentionally contains **no** MCP-specific logic and **no** sentinel
//! collapsing: every failure mode stays distinct here (transport, HTTP
//! status, schema) so callers can decide how much of the taxonomy to expose.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::FdcClient;
pub use config::FdcConfig;
pub use error::{FdcError, Result};
