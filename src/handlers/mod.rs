//! MCP tool handlers for checklist server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod add;
pub mod clear;
pub mod delete;
pub mod list;
pub mod open;
pub mod save;
pub mod toggle;
