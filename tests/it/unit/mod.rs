//! Unit tests for Spooky Notes.

mod board_tests;
mod hit_testing_tests;
mod snapshot_tests;
