//! Shared test helpers for `helpdesk-core` integration tests.
//!
//! Provides a small in-memory store implementing every port plus fixture
//! builders, so service tests can focus on behaviour instead of wiring.

#![allow(dead_code)]

pub mod fixtures;
pub mod repositories;
