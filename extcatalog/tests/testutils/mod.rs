//! Test utilities for extcatalog integration tests
//!
//! - `fixtures`: builders wired with the built-in providers, minimal valid
//!   property sets per catalog type, and a manager over an in-memory journal
//! - `hooks`: providers and access-controller factories that record or
//!   sabotage the construction pipeline

#![allow(dead_code)]

pub mod fixtures;
pub mod hooks;
