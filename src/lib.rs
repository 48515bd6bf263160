//! Macrolog Library
//!
//! Local meal and macro tracking: storage, nutrition analytics, Gemini-backed
//! insights and the MCP tools built on them.

pub mod analytics;
pub mod build_info;
pub mod config;
pub mod db;
pub mod insights;
pub mod mcp;
pub mod models;
pub mod tools;
pub mod validation;
