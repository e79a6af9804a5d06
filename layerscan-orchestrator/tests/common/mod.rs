//! Shared test doubles and fixtures for orchestrator tests

#![allow(dead_code)]

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
