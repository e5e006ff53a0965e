//! Integration tests for the scan pipeline, driven through on-disk CSV
//! fixtures.

mod end_to_end;
mod error_handling;
