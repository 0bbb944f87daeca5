//! Test suite for FixIt
//!
//! This module organizes all tests

pub mod common;
pub mod integration;
