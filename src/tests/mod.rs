//! Test modules for the prefix tree crate.
//!
//! This module contains the crate-internal test suites:
//! - Property-based tests for the prefix tree using proptest
//! - Configuration loading and validation tests
//! - Error conversion and display tests
//! - Shared strategies and fixtures


pub use test_utils::{prefixes_of, word_list_strategy, word_strategy, TestFixture};
