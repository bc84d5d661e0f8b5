//! MCP server exposing a fuel delivery controller (FDC).
//!
//! `service` holds the sentinel-collapsing boundary over the typed client;
//! `server` registers that service as MCP tools, resources, and a prompt.

pub mod server;
pub mod service;
