//! Oddball - Terminal Balance Puzzle Library
//!
//! This module exposes the puzzle engine for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod balance;
pub mod balance_logic;
pub mod build_info;
pub mod constants;
pub mod input;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;
