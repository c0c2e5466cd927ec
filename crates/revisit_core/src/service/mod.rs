//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate generator, projector and repository calls into
//!   use-case level APIs.
//! - Keep callers decoupled from storage details.

pub mod revision_service;
