//! # Connect Four
//!
//! A two-player gravity-drop Connect Four engine. The engine owns the board,
//! resolves where a dropped piece lands, detects four in a row through the
//! last placed piece, and runs turn order and the game lifecycle. Rendering
//! and input are left to the caller, which drives the engine through
//! [`game::GameEngine`].
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, engine state machine
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
