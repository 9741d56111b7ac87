//! Core domain types
//!
//! This module contains the core domain structures shared between the
//! backend client and the CLI. These types mirror the entities the backend
//! owns; the client only ever holds snapshots of them.

pub mod job;
pub mod log;
