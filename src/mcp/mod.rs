//! MCP server module
//!
//! Model Context Protocol server over stdio.

mod server;

pub use server::NutriService;
