//! Tools module
//!
//! Tool implementations behind the MCP server. Each validates its inputs and
//! calls into the pure calculators.

pub mod advice;
pub mod catalog;
pub mod input;
pub mod lookup;
pub mod plan;
pub mod status;
