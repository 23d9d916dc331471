//! Integration tests for the domdiff document comparison system

mod blake3_verification;
mod config_integration;
mod diff_behavior;
mod report_output;
mod test_utils;
mod tree_determinism;
