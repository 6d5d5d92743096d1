// ABOUTME: Ordered rule table mapping transcript phrasings to voice commands
// ABOUTME: Holds the default process-wide grammar and the command example catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitVoice

//! # Classification Rules
//!
//! A rule pairs a phrase matcher with the command it produces. Rules are
//! evaluated in table order and the first match wins; order is the only
//! tie-break, so narrower phrasings are listed before broader ones that
//! could match the same transcript ("start rest timer" before "rest
//! timer").
//!
//! The default table is built once at first use and is read-only for the
//! life of the process. Multiple phrasings collapse to one intent:
//! "begin workout" and "start workout" are separate rows producing the
//! same command.

use std::fmt;
use std::sync::LazyLock;

use tracing::debug;

use crate::command::VoiceCommand;
use crate::errors::{VoiceError, VoiceResult};
use crate::matcher::{PhraseMatcher, PhrasePattern};

/// One ordered classification rule
pub struct Rule {
    matcher: Box<dyn PhraseMatcher>,
    command: VoiceCommand,
}

impl Rule {
    /// Pair an arbitrary matcher with the command it produces
    #[must_use]
    pub fn new(matcher: impl PhraseMatcher + 'static, command: VoiceCommand) -> Self {
        Self {
            matcher: Box::new(matcher),
            command,
        }
    }

    /// Build a rule from a regex pattern string
    ///
    /// # Errors
    ///
    /// Returns [`VoiceError::InvalidPattern`] when the pattern fails to
    /// compile.
    pub fn from_pattern(pattern: &str, command: VoiceCommand) -> VoiceResult<Self> {
        Ok(Self::new(PhrasePattern::new(pattern)?, command))
    }

    /// The command this rule produces on a match
    #[must_use]
    pub const fn command(&self) -> &VoiceCommand {
        &self.command
    }

    /// Whether the normalized transcript matches this rule
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.matcher.matches(text)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("command", &self.command.as_str())
            .finish_non_exhaustive()
    }
}

/// Ordered, immutable rule table
///
/// First matching rule in table order wins; later matches are never
/// considered.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a table from rules in evaluation order
    #[must_use]
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Compile a table from (pattern, command) pairs in evaluation order
    ///
    /// # Errors
    ///
    /// Returns [`VoiceError::InvalidPattern`] for a malformed pattern and
    /// [`VoiceError::EmptyRuleTable`] when no pairs are given.
    pub fn from_pairs(pairs: &[(&str, VoiceCommand)]) -> VoiceResult<Self> {
        if pairs.is_empty() {
            return Err(VoiceError::EmptyRuleTable);
        }
        let rules = pairs
            .iter()
            .map(|(pattern, command)| Rule::from_pattern(pattern, command.clone()))
            .collect::<VoiceResult<Vec<_>>>()?;
        Ok(Self::from_rules(rules))
    }

    /// Number of rules in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table holds no rules
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Classify a transcript against this table
    ///
    /// Trims surrounding whitespace, walks the rules in order, and
    /// returns the first match. Unmatched input yields
    /// [`VoiceCommand::Unknown`] carrying the trimmed text; empty and
    /// whitespace-only input carry empty text. Never fails.
    #[must_use]
    pub fn classify(&self, transcript: &str) -> VoiceCommand {
        let normalized = transcript.trim();
        for rule in &self.rules {
            if rule.matches(normalized) {
                debug!(command = rule.command().as_str(), "voice transcript matched");
                return rule.command().clone();
            }
        }
        debug!(text = normalized, "voice transcript not recognized");
        VoiceCommand::Unknown {
            text: normalized.to_string(),
        }
    }

    /// The default FitVoice grammar, built once per process
    #[must_use]
    pub fn default_rules() -> &'static Self {
        &DEFAULT_RULES
    }
}

/// Default grammar in evaluation order
///
/// Pattern literals are validated by the rule-table test; a pattern that
/// fails to compile is skipped rather than poisoning the table.
static DEFAULT_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    let pairs: &[(&str, VoiceCommand)] = &[
        (r"start\s+(?:a\s+)?workout", VoiceCommand::StartWorkout),
        (r"begin\s+(?:a\s+)?workout", VoiceCommand::StartWorkout),
        (r"log\s+(?:my\s+)?weight", VoiceCommand::LogWeight),
        (r"record\s+(?:my\s+)?weight", VoiceCommand::LogWeight),
        (r"enter\s+(?:my\s+)?weight", VoiceCommand::LogWeight),
        (
            r"show\s+(?:today'?s?|todays)\s+workout",
            VoiceCommand::ShowTodayWorkout,
        ),
        (r"today'?s?\s+workout", VoiceCommand::ShowTodayWorkout),
        (r"add\s+(?:a\s+)?set", VoiceCommand::AddSet),
        (r"next\s+set", VoiceCommand::AddSet),
        (r"complete\s+set", VoiceCommand::AddSet),
        (r"finish\s+(?:the\s+)?workout", VoiceCommand::FinishWorkout),
        (r"complete\s+(?:the\s+)?workout", VoiceCommand::FinishWorkout),
        (r"end\s+(?:the\s+)?workout", VoiceCommand::FinishWorkout),
        (r"open\s+body\s+tracker", VoiceCommand::OpenBodyTracker),
        (r"go\s+to\s+body\s+tracker", VoiceCommand::OpenBodyTracker),
        (r"start\s+rest\s+timer", VoiceCommand::StartRestTimer),
        (r"rest\s+timer", VoiceCommand::StartRestTimer),
        (r"take\s+(?:a\s+)?rest", VoiceCommand::StartRestTimer),
        (
            r"generate\s+(?:a\s+)?workout\s+plan",
            VoiceCommand::GenerateWorkoutPlan,
        ),
        (
            r"create\s+(?:a\s+)?workout\s+plan",
            VoiceCommand::GenerateWorkoutPlan,
        ),
        (r"ai\s+(?:workout\s+)?coach", VoiceCommand::GenerateWorkoutPlan),
        (r"open\s+ai\s+coach", VoiceCommand::GenerateWorkoutPlan),
    ];
    let rules = pairs
        .iter()
        .filter_map(|(pattern, command)| Rule::from_pattern(pattern, command.clone()).ok())
        .collect();
    RuleSet::from_rules(rules)
});

/// Expected size of the default table, checked by the table test
const DEFAULT_RULE_COUNT: usize = 22;

/// A canonical phrasing for one recognized command
///
/// Drives the "Available Commands" listing on the voice preview screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandExample {
    /// Canonical spoken phrase
    pub phrase: &'static str,
    /// Command the phrase classifies to
    pub command: VoiceCommand,
    /// What the app does when the command fires
    pub action: &'static str,
    /// Screens where the action is available
    pub screens: &'static str,
}

static COMMAND_EXAMPLES: [CommandExample; 8] = [
    CommandExample {
        phrase: "Start workout",
        command: VoiceCommand::StartWorkout,
        action: "Navigate to workout selection",
        screens: "Home & Any",
    },
    CommandExample {
        phrase: "Log my weight",
        command: VoiceCommand::LogWeight,
        action: "Focus weight input field",
        screens: "Body Tracker",
    },
    CommandExample {
        phrase: "Show today's workout",
        command: VoiceCommand::ShowTodayWorkout,
        action: "Open calendar view",
        screens: "Home & Any",
    },
    CommandExample {
        phrase: "Add set",
        command: VoiceCommand::AddSet,
        action: "Mark next exercise complete",
        screens: "Workout Checklist",
    },
    CommandExample {
        phrase: "Finish workout",
        command: VoiceCommand::FinishWorkout,
        action: "Complete and save workout",
        screens: "Workout Checklist",
    },
    CommandExample {
        phrase: "Open body tracker",
        command: VoiceCommand::OpenBodyTracker,
        action: "Navigate to body tracker",
        screens: "Home & Any",
    },
    CommandExample {
        phrase: "Start rest timer",
        command: VoiceCommand::StartRestTimer,
        action: "Open rest timer",
        screens: "Home, Workout",
    },
    CommandExample {
        phrase: "Generate workout plan",
        command: VoiceCommand::GenerateWorkoutPlan,
        action: "Open AI Coach",
        screens: "Home, AI Coach",
    },
];

/// Canonical phrase catalog, one entry per recognized command
#[must_use]
pub fn command_examples() -> &'static [CommandExample] {
    &COMMAND_EXAMPLES
}
