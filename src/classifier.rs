// ABOUTME: Public classification entry points over the default rule table
// ABOUTME: Pure transcript-to-command mapping consumed by the app screens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitVoice

//! # Intent Classifier
//!
//! The two operations the app screens consume: `classify` a transcript
//! into a command, and `describe` a command for user-facing confirmation
//! text. Both are pure and safe to call concurrently; the rule table is
//! read-only process-wide state.

use crate::command::VoiceCommand;
use crate::rules::RuleSet;

/// Classify a raw speech transcript against the default grammar
///
/// Never fails: unmatched input yields [`VoiceCommand::Unknown`] with
/// the trimmed transcript. Repeated calls with identical input return
/// identical commands.
#[must_use]
pub fn classify(transcript: &str) -> VoiceCommand {
    RuleSet::default_rules().classify(transcript)
}

/// Confirmation text for a classified command
///
/// Equivalent to [`VoiceCommand::describe`]; provided as a free function
/// to mirror the classify entry point.
#[must_use]
pub fn describe(command: &VoiceCommand) -> String {
    command.describe()
}
