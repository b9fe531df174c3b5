//! # API Shared
//!
//! Shared definitions for Nexus APIs.
//!
//! Contains:
//! - Request/response types (`dto` module) with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest`.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
