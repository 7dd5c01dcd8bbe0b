//! Nutrition & Health Assistant Library
//!
//! Food nutrient lookup, daily energy targets, sample meal plans, and
//! condition-aware advice, served over MCP.

pub mod build_info;
pub mod config;
pub mod data;
pub mod error;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod session;
pub mod tools;
