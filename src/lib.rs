//! folio - content engine for a portfolio site.
//!
//! Typed access to a tree of MDX files (work, pages, now entries), the work
//! aggregator behind listing pages, the password gate for locked case
//! studies, and the pure resolvers that turn slugs into labels and routes.

pub mod logger;

pub mod auth;
pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
pub mod resolve;
pub mod serve;
pub mod work;
