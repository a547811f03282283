//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the UI layer decoupled from storage details.

pub mod task_service;
