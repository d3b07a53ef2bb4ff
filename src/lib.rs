//! # Gravity Four
//!
//! A four-in-a-row engine for gravity grids from 4x4 up to 8x8, with a
//! fixed-depth minimax opponent. Console input and rendering are left to the
//! caller; this crate owns the rules, scoring, and move selection.
//!
//! ## Modules
//!
//! - [`game`] — Grid, line scanning, score tally, match state machine
//! - [`ai`] — Agent trait, heuristic evaluator, minimax search, random agent
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
