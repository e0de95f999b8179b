// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Errors
//!
//! Error types for the env_registry crate.
//!
//! Every failing registry operation returns one of these variants so that callers can
//! branch on the kind of failure instead of matching on messages.

use thiserror::Error;

/// Errors that can occur while looking up or resolving environments.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EnvironmentError {
    /// An environment name was required but none was given.
    ///
    /// Returned by `get` with an empty name and by every accessor that reads the
    /// current environment before it was resolved.
    #[error("environment name is required")]
    InvalidArgument,

    /// The environment name is not defined in the registry.
    ///
    /// # Arguments
    ///
    /// * `0` - The name that was looked up (may be empty when resolution found nothing)
    #[error("environment not found - `{0}`")]
    NotFound(String),

    /// A derived accessor was written to.
    ///
    /// # Arguments
    ///
    /// * `0` - The name of the read-only accessor
    #[error("`{0}` is read-only")]
    ReadOnly(&'static str),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, EnvironmentError>;
