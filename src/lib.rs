//! # Minimax Connect Four
//!
//! The game-state and decision core of Connect Four on the fixed 7x6 grid:
//! history-backed positions, kernel-based win detection, a window-count
//! heuristic and a fixed-depth alpha-beta minimax engine with a per-game
//! evaluation cache.
//!
//! ## Modules
//!
//! - [`game`] — Immutable game state, occupancy matrices, win detection
//! - [`ai`] — Heuristic, evaluation cache, minimax search, agents
//! - [`session`] — One game against the engine, owning its cache
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
