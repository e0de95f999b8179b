// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Environment Keys
//!
//! This module contains constant definitions for the process environment variables the
//! registry reads and writes, along with the names and runtime modes of the built-in
//! environments.
//!
//! The registry resolves the current environment from `APP_ENV` first and falls back to
//! `NODE_ENV`. Consolidation writes both keys back so they always agree.

/// Environment variable holding the logical environment name (primary signal)
pub const APP_ENV_KEY: &str = "APP_ENV";
/// Environment variable holding the coarse runtime mode (secondary signal)
pub const NODE_ENV_KEY: &str = "NODE_ENV";

/// Built-in environment names
pub const DEV: &str = "dev";
pub const LOCAL: &str = "local";
pub const PROD: &str = "prod";
pub const STAGE: &str = "stage";
pub const TEST: &str = "test";
pub const TEST_PROD: &str = "testProd";
pub const TEST_DEV: &str = "testDev";

/// Coarse runtime modes stored as the secondary value
pub const DEVELOPMENT_MODE: &str = "development";
pub const PRODUCTION_MODE: &str = "production";
pub const TEST_MODE: &str = "test";
