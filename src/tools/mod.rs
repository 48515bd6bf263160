//! Macrolog Tools module
//!
//! MCP tool implementations. Each tool takes the database (and the clock's
//! reading where relevant) and returns a serializable response or an error message.

pub mod analytics;
pub mod food_library;
pub mod goals;
pub mod insights;
pub mod meals;
pub mod status;
