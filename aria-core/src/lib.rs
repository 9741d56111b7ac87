//! Aria Core
//!
//! Core types for the Aria media download client.
//!
//! This crate contains:
//! - Domain types: Core business entities (Job, LogEntry, etc.)
//! - DTOs: Request and response bodies for the backend HTTP API

pub mod domain;
pub mod dto;
