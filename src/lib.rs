//! Hangman Client
//!
//! A client for the line-oriented hangman protocol: ask the server for a
//! word, submit one letter at a time, and replay until the player is done.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hangman_client::interaction::TextConsole;
//! use hangman_client::protocol::TcpLineChannel;
//! use hangman_client::session::{RoundController, SessionConfig};
//!
//! let config = SessionConfig::default().with_host("localhost");
//! let channel = TcpLineChannel::connect(&config.address()).unwrap();
//! let console = TextConsole::stdio(config.guess_budget);
//!
//! let stats = RoundController::new(channel, console, config).run().unwrap();
//! println!("won {} of {}", stats.rounds_won, stats.rounds_played);
//! ```

// Core domain types
pub mod core;

// Wire protocol and transport
pub mod protocol;

// Round state machine and replay loop
pub mod session;

// Frontend contract and text/scripted frontends
pub mod interaction;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
