//! Project conversation dashboard.
//!
//! Codemind turns logged AI-assisted development conversations into
//! display-ready summaries: each raw record is classified into a summary type,
//! tagged from its upstream label, code diff and description, mined for
//! feature and bug-fix sentences, and given an impact line.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from TOML files and environment variables
//! - [`summary`]: Record classification into display-ready summaries
//! - [`source`]: Chat-log directory loader producing the projects payload
//! - [`server`]: HTTP endpoint serving the payload
//! - [`repository`]: Fetching, filtering, and selecting summaries
//! - [`export`]: Markdown, text, and JSON export of a single summary

pub mod config;
pub mod export;
pub mod repository;
pub mod server;
pub mod source;
pub mod summary;
