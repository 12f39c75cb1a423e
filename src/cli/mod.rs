//! CLI infrastructure for the oxo solver
//!
//! This module provides the command-line interface for analyzing positions,
//! playing interactive games, and running batch self-play verification.

pub mod commands;
pub mod output;
