// ABOUTME: Unit tests for the voice command model and description generator
// ABOUTME: Covers descriptions, tag strings, serde wire shape, and the example catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitVoice

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

use fitvoice::{classify, command_examples, describe, VoiceCommand};

fn all_variants() -> Vec<VoiceCommand> {
    vec![
        VoiceCommand::StartWorkout,
        VoiceCommand::LogWeight,
        VoiceCommand::ShowTodayWorkout,
        VoiceCommand::AddSet,
        VoiceCommand::FinishWorkout,
        VoiceCommand::OpenBodyTracker,
        VoiceCommand::StartRestTimer,
        VoiceCommand::GenerateWorkoutPlan,
        VoiceCommand::Unknown {
            text: "do a backflip".to_string(),
        },
    ]
}

#[test]
fn test_describe_is_non_empty_for_every_variant() {
    for command in all_variants() {
        assert!(
            !command.describe().is_empty(),
            "empty description for {}",
            command.as_str()
        );
    }
}

#[test]
fn test_describe_fixed_strings() {
    assert_eq!(VoiceCommand::StartWorkout.describe(), "Starting workout");
    assert_eq!(VoiceCommand::LogWeight.describe(), "Opening weight log");
    assert_eq!(
        VoiceCommand::ShowTodayWorkout.describe(),
        "Showing today's workout"
    );
    assert_eq!(VoiceCommand::AddSet.describe(), "Adding set");
    assert_eq!(VoiceCommand::FinishWorkout.describe(), "Finishing workout");
    assert_eq!(
        VoiceCommand::OpenBodyTracker.describe(),
        "Opening body tracker"
    );
    assert_eq!(
        VoiceCommand::StartRestTimer.describe(),
        "Starting rest timer"
    );
    assert_eq!(
        VoiceCommand::GenerateWorkoutPlan.describe(),
        "Opening AI Coach"
    );
}

#[test]
fn test_describe_mentions_body_tracker() {
    let command = classify("Open body tracker");
    assert_eq!(command, VoiceCommand::OpenBodyTracker);
    assert!(command.describe().contains("body tracker"));
}

#[test]
fn test_unknown_description_embeds_transcript_verbatim() {
    let command = classify("I like turtles");
    assert_eq!(
        command,
        VoiceCommand::Unknown {
            text: "I like turtles".to_string()
        }
    );
    assert!(command.describe().contains("I like turtles"));
}

#[test]
fn test_describe_free_function_matches_method() {
    for command in all_variants() {
        assert_eq!(describe(&command), command.describe());
    }
}

#[test]
fn test_tag_strings_match_wire_names() {
    assert_eq!(VoiceCommand::StartWorkout.as_str(), "START_WORKOUT");
    assert_eq!(VoiceCommand::LogWeight.as_str(), "LOG_WEIGHT");
    assert_eq!(
        VoiceCommand::ShowTodayWorkout.as_str(),
        "SHOW_TODAY_WORKOUT"
    );
    assert_eq!(VoiceCommand::AddSet.as_str(), "ADD_SET");
    assert_eq!(VoiceCommand::FinishWorkout.as_str(), "FINISH_WORKOUT");
    assert_eq!(VoiceCommand::OpenBodyTracker.as_str(), "OPEN_BODY_TRACKER");
    assert_eq!(VoiceCommand::StartRestTimer.as_str(), "START_REST_TIMER");
    assert_eq!(
        VoiceCommand::GenerateWorkoutPlan.as_str(),
        "GENERATE_WORKOUT_PLAN"
    );
    assert_eq!(
        VoiceCommand::Unknown {
            text: String::new()
        }
        .as_str(),
        "UNKNOWN"
    );
}

#[test]
fn test_serde_wire_shape() {
    let json = serde_json::to_value(VoiceCommand::StartWorkout).unwrap();
    assert_eq!(json, serde_json::json!({ "type": "START_WORKOUT" }));

    let json = serde_json::to_value(VoiceCommand::Unknown {
        text: "turn off the lights".to_string(),
    })
    .unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "type": "UNKNOWN", "text": "turn off the lights" })
    );
}

#[test]
fn test_serde_round_trip_preserves_tags() {
    for command in all_variants() {
        let json = serde_json::to_string(&command).unwrap();
        assert!(json.contains(command.as_str()));
        let decoded: VoiceCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, command);
    }
}

#[test]
fn test_is_recognized() {
    for command in all_variants() {
        let expected = !matches!(command, VoiceCommand::Unknown { .. });
        assert_eq!(command.is_recognized(), expected);
    }
}

#[test]
fn test_example_catalog_covers_every_recognized_command() {
    let examples = command_examples();
    assert_eq!(examples.len(), 8);

    for example in examples {
        assert!(example.command.is_recognized());
        assert!(!example.phrase.is_empty());
        assert!(!example.action.is_empty());
        assert!(!example.screens.is_empty());
        assert_eq!(classify(example.phrase), example.command);
    }

    // One catalog entry per recognized variant, no duplicates.
    let mut tags: Vec<&str> = examples.iter().map(|e| e.command.as_str()).collect();
    tags.sort_unstable();
    tags.dedup();
    assert_eq!(tags.len(), 8);
}
