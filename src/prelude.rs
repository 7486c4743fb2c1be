// SPDX-License-Identifier: MIT

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use deploy_hooks::prelude::*;
//! ```

// Core types
pub use crate::config::Config;
pub use crate::error::{AppError, Result};

// HTTP API
pub use crate::api::{AppState, create_router};

// Lifecycle types
pub use crate::lifecycle::{
    HttpStatusReporter, LifecycleEvent, LifecycleStatus, LogStatusReporter, StatusReporter,
};
