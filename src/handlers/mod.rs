//! MCP tool handlers for the habit server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod add;
pub mod check_in;
pub mod delete;
pub mod edit;
pub mod list;
pub mod sort;
pub mod transfer;
