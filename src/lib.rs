#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod bitboard;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod controller;
mod game;
mod history;
#[cfg(feature = "std")]
mod logging;
mod sim;
mod ui;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
#[cfg(feature = "std")]
pub use cli::{run_cli, CliDisplay};
pub use common::*;
pub use config::*;
pub use controller::*;
pub use game::*;
pub use history::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use sim::*;
pub use ui::*;
