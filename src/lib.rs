//! Geodle Library
//!
//! A daily geography guessing puzzle that can run headless from the console.

pub mod puzzle;
