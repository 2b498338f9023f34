//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the command surface decoupled from storage details.

pub mod chicken_service;
pub mod egg_record_service;
