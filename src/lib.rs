//! PokeFetch Library
//!
//! An interactive PokeAPI shell built on a cache-or-fetch client. The
//! modules are exposed for use in integration tests.

pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod data;
pub mod logging;
pub mod repl;
