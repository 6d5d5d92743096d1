// ABOUTME: Error types for voice command rule construction
// ABOUTME: Classification itself is infallible; only custom rule tables can fail to build
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitVoice

//! # Error Handling
//!
//! Classification never fails: unrecognized input is modeled as the
//! `Unknown` command, not an error. The only fallible operation in this
//! crate is building a custom rule table from user-supplied pattern
//! strings, which can reject a malformed pattern.

use thiserror::Error;

/// Result alias used by fallible rule-table constructors
pub type VoiceResult<T> = Result<T, VoiceError>;

/// Errors produced while building classification rules
#[derive(Debug, Error)]
pub enum VoiceError {
    /// A rule pattern string failed to compile
    #[error("invalid command pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern string that was rejected
        pattern: String,
        /// The underlying regex compilation error
        #[source]
        source: regex::Error,
    },

    /// A rule table was built with no rules in it
    #[error("rule table contains no rules")]
    EmptyRuleTable,
}
