//! Data Transfer Objects for the backend HTTP API
//!
//! This module contains the request and response bodies exchanged with the
//! backend. DTOs match the backend's JSON shapes exactly; anything derived
//! for display lives in the CLI instead.

pub mod auth;
pub mod job;
pub mod search;
