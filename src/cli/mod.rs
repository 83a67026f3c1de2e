//! CLI infrastructure for the queens demo harness
//!
//! This module provides the command-line interface for enumerating
//! placements, grouping them by symmetry and demonstrating the transforms.

pub mod commands;
pub mod output;
