//! Configuration modules for the Alumnet API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables.
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL database connection pool initialization
//! - [`jwt`]: JWT authentication configuration
//! - [`server`]: HTTP server bind configuration
//! - [`upload`]: Upload storage directory configuration

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;
pub mod upload;
