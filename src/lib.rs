// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Env Registry
//!
//! `env_registry` is a small library that maps named deployment environments to the values of
//! two process environment variables, `APP_ENV` and `NODE_ENV`, detects which environment the
//! process runs in and keeps both variables in agreement.
//!
//! ## Features
//!
//! - Built-in environments (dev, local, prod, stage, test, testProd, testDev)
//! - Custom environments registered at runtime
//! - Detection of the current environment from `APP_ENV`, falling back to `NODE_ENV`
//! - Consolidation of both variables from the detected environment
//! - Typed errors for missing names, unknown environments and read-only accessors
//!
//! ## Example
//!
//! ```rust,no_run
//! use env_registry::{EnvironmentRecord, EnvironmentRegistry};
//!
//! fn setup_env() -> Result<(), env_registry::errors::EnvironmentError> {
//!     let mut registry = EnvironmentRegistry::new()
//!         .with_environment("ci", EnvironmentRecord::new("ci", "test"));
//!
//!     registry.consolidate()?;
//!
//!     if registry.is("prod") {
//!         // production-only setup
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod env_keys;
mod environment;
pub mod errors;
mod registry;

pub use environment::EnvironmentRecord;
pub use registry::EnvironmentRegistry;
