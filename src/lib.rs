//! shrt - a command-line client for Shlink
//!
//! Lists the short URLs of a Shlink instance and creates new ones through its
//! REST API, authenticating with an API key.
//!
//! # Features
//! - **clipboard**: copy a single shortened URL to the system clipboard (default)
//!
//! # Architecture
//! - `client`: HTTP transport, payload decoding, listing and shortening
//! - `config`: layered configuration (defaults, file, `SHRT_*` env)
//! - `cli`: clap command definitions
//! - `interfaces`: command implementations, table rendering, clipboard
//! - `system`: logging
//! - `errors`: error taxonomy shared by every layer

pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod system;
pub mod utils;
