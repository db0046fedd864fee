//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead to a single link step.
//!
//! Structure:
//! - helpers: Builders and pointer shorthands shared by every test
//! - integration: Multi-component pointer workflow tests
//! - unit: Single-component unit tests

mod unit;
