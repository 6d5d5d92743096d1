// ABOUTME: Main library entry point for the FitVoice voice command core
// ABOUTME: Maps speech transcripts to typed workout commands for the mobile app
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitVoice

#![deny(unsafe_code)]

//! # FitVoice Voice Command Core
//!
//! Intent classification for the FitVoice mobile fitness app. The speech
//! recognition layer hands this crate an already-transcribed utterance; the
//! classifier maps it onto a small closed set of workout commands that the
//! app screens dispatch on.
//!
//! ## Architecture
//!
//! - **Commands**: closed tagged union of recognized intents plus an
//!   `Unknown` fallback carrying the original transcript
//! - **Matchers**: single-capability phrase matching abstraction with
//!   regex and keyword implementations
//! - **Rules**: ordered, immutable (pattern, command) table evaluated
//!   first-match-wins
//! - **Classifier**: the transcript -> command entry points consumed by
//!   the app screens
//!
//! ## Example
//!
//! ```rust
//! use fitvoice::{classify, VoiceCommand};
//!
//! let command = classify("start a workout");
//! assert_eq!(command, VoiceCommand::StartWorkout);
//! assert_eq!(command.describe(), "Starting workout");
//!
//! let command = classify("I like turtles");
//! assert!(!command.is_recognized());
//! ```

pub mod classifier;
pub mod command;
pub mod errors;
pub mod matcher;
pub mod rules;

pub use classifier::{classify, describe};
pub use command::VoiceCommand;
pub use errors::{VoiceError, VoiceResult};
pub use matcher::{KeywordMatcher, PhraseMatcher, PhrasePattern};
pub use rules::{command_examples, CommandExample, Rule, RuleSet};
