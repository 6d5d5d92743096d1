// ABOUTME: Closed set of voice commands recognized by the FitVoice app
// ABOUTME: Includes the Unknown fallback and the per-command description strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitVoice

//! # Voice Commands
//!
//! The command vocabulary is closed and known at compile time. Screens
//! dispatch on the variant (navigate, mark a set complete, save the
//! workout); this module owns only the command values themselves and the
//! confirmation text shown to the user after classification.
//!
//! The serde representation matches the mobile bridge wire shape:
//! `{"type":"START_WORKOUT"}`, with `Unknown` carrying the transcript as
//! `{"type":"UNKNOWN","text":"..."}`.

use serde::{Deserialize, Serialize};

/// A recognized user intent, or the unrecognized fallback
///
/// Recognized variants carry no payload; the domain actions are
/// parameterless. `Unknown` carries the normalized transcript so the UI
/// can show the user what was misheard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoiceCommand {
    /// Begin a new workout session
    StartWorkout,
    /// Open the body-weight log entry
    LogWeight,
    /// Show the workout scheduled for today
    ShowTodayWorkout,
    /// Mark the next set complete in the active workout
    AddSet,
    /// Complete and save the active workout
    FinishWorkout,
    /// Navigate to the body tracker screen
    OpenBodyTracker,
    /// Start the rest timer
    StartRestTimer,
    /// Open the AI coach to generate a workout plan
    GenerateWorkoutPlan,
    /// Transcript matched no rule
    Unknown {
        /// The normalized transcript, verbatim
        text: String,
    },
}

impl VoiceCommand {
    /// Stable tag string, matching the serde wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::StartWorkout => "START_WORKOUT",
            Self::LogWeight => "LOG_WEIGHT",
            Self::ShowTodayWorkout => "SHOW_TODAY_WORKOUT",
            Self::AddSet => "ADD_SET",
            Self::FinishWorkout => "FINISH_WORKOUT",
            Self::OpenBodyTracker => "OPEN_BODY_TRACKER",
            Self::StartRestTimer => "START_REST_TIMER",
            Self::GenerateWorkoutPlan => "GENERATE_WORKOUT_PLAN",
            Self::Unknown { .. } => "UNKNOWN",
        }
    }

    /// Human-readable confirmation text shown after classification
    ///
    /// Pure function of the command value. For `Unknown` the returned
    /// string embeds the carried transcript verbatim.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::StartWorkout => "Starting workout".into(),
            Self::LogWeight => "Opening weight log".into(),
            Self::ShowTodayWorkout => "Showing today's workout".into(),
            Self::AddSet => "Adding set".into(),
            Self::FinishWorkout => "Finishing workout".into(),
            Self::OpenBodyTracker => "Opening body tracker".into(),
            Self::StartRestTimer => "Starting rest timer".into(),
            Self::GenerateWorkoutPlan => "Opening AI Coach".into(),
            Self::Unknown { text } => format!("Command not recognized: \"{text}\""),
        }
    }

    /// Whether classification produced a recognized intent
    ///
    /// The app only pops a confirmation alert for recognized commands;
    /// `Unknown` surfaces as a "not recognized" notice instead.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unknown { .. })
    }
}
