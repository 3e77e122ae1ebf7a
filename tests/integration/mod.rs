//! Integration test target
//!
//! Declared as a named test target in Cargo.toml; the actual tests live in
//! the submodules below.
