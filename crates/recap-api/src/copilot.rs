//! Copilot command router.
//!
//! Classifies a free-text command into an intent and produces the
//! conversational response for it. Classification is keyword-based over
//! the lowercased command, with a fixed priority order so that a command
//! matching several intents always resolves the same way:
//!
//! 1. `pdf`       — "pdf", "summarize", "upload", "document"
//! 2. `schedule`  — "remind", "reminder", "schedule"
//! 3. `note`      — "note"
//! 4. `summaries` — "summaries", "show"
//! 5. `help`      — "help", "what can you"
//! 6. `unknown`   — anything else
//!
//! Document intent outranks generic "show" queries, so "Summarize this
//! PDF document" routes to `pdf` even though "show" matches nothing and
//! "summarize" could be read as a summaries query. Routing never fails:
//! unrecognized input is an answer (`unknown` with a help listing), not
//! an error.

use serde::Serialize;

use recap_core::CommandIntent;

/// Commands shown in help and unknown-command responses.
pub const SAMPLE_COMMANDS: &[&str] = &[
    "Summarize this PDF document",
    "Create a note about my meeting",
    "Set a reminder for tomorrow at 9 AM",
    "Show me all my summaries",
    "What can you help me with?",
];

/// Keyword table in priority order. First intent with a matching
/// keyword wins.
const INTENT_KEYWORDS: &[(CommandIntent, &[&str])] = &[
    (CommandIntent::Pdf, &["pdf", "summarize", "upload", "document"]),
    (CommandIntent::Schedule, &["remind", "reminder", "schedule"]),
    (CommandIntent::Note, &["note"]),
    (CommandIntent::Summaries, &["summaries", "show"]),
    (CommandIntent::Help, &["help", "what can you"]),
];

/// A classified command and its conversational response.
#[derive(Debug, Clone, Serialize)]
pub struct RoutedCommand {
    pub intent: CommandIntent,
    pub response: String,
}

/// Build the canned listing of supported commands.
fn command_listing() -> String {
    let mut listing = String::from("Here are some things you can ask me:\n");
    for cmd in SAMPLE_COMMANDS {
        listing.push_str("  - ");
        listing.push_str(cmd);
        listing.push('\n');
    }
    listing
}

/// Classify the command without building a response.
pub fn classify(command: &str) -> CommandIntent {
    let cmd = command.trim().to_lowercase();
    if cmd.is_empty() {
        return CommandIntent::Unknown;
    }

    for (intent, keywords) in INTENT_KEYWORDS {
        if keywords.iter().any(|kw| cmd.contains(kw)) {
            return *intent;
        }
    }
    CommandIntent::Unknown
}

/// Route a command to an intent and its response.
pub fn route(command: &str) -> RoutedCommand {
    let intent = classify(command);
    let response = match intent {
        CommandIntent::Pdf => "Upload the PDF you'd like summarized.".to_string(),
        CommandIntent::Schedule => "When should I schedule your reminder?".to_string(),
        CommandIntent::Note => {
            "I can create a note for you. What is the title and content?".to_string()
        }
        CommandIntent::Summaries => "Here are your summaries.".to_string(),
        CommandIntent::Help => command_listing(),
        CommandIntent::Unknown => {
            format!(
                "Command not recognized: {}\n{}",
                command.trim(),
                command_listing()
            )
        }
    };

    RoutedCommand { intent, response }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_commands() {
        assert_eq!(classify("Summarize this PDF document"), CommandIntent::Pdf);
        assert_eq!(classify("upload my report"), CommandIntent::Pdf);
        assert_eq!(classify("summarize the quarterly results"), CommandIntent::Pdf);
    }

    #[test]
    fn test_schedule_commands() {
        assert_eq!(
            classify("Set a reminder for tomorrow at 9 AM"),
            CommandIntent::Schedule
        );
        assert_eq!(classify("schedule a meeting"), CommandIntent::Schedule);
        assert_eq!(classify("Remind me to call the bank"), CommandIntent::Schedule);
    }

    #[test]
    fn test_note_commands() {
        assert_eq!(
            classify("Create a note about my meeting"),
            CommandIntent::Note
        );
        assert_eq!(classify("NOTE: buy milk"), CommandIntent::Note);
    }

    #[test]
    fn test_summaries_commands() {
        assert_eq!(classify("Show me all my summaries"), CommandIntent::Summaries);
        assert_eq!(classify("show me what you have"), CommandIntent::Summaries);
    }

    #[test]
    fn test_help_commands() {
        assert_eq!(classify("help"), CommandIntent::Help);
        assert_eq!(classify("What can you help me with?"), CommandIntent::Help);
    }

    #[test]
    fn test_unknown_command_gets_help_listing() {
        let routed = route("asdkjalksd");
        assert_eq!(routed.intent, CommandIntent::Unknown);
        assert!(routed.response.contains("Command not recognized: asdkjalksd"));
        assert!(routed.response.contains("Summarize this PDF document"));
    }

    #[test]
    fn test_empty_command_is_unknown() {
        assert_eq!(classify(""), CommandIntent::Unknown);
        assert_eq!(classify("   \t "), CommandIntent::Unknown);
    }

    #[test]
    fn test_priority_pdf_over_note() {
        // "note" also matches, but document intent wins
        assert_eq!(
            classify("summarize my note about the project"),
            CommandIntent::Pdf
        );
        assert_eq!(classify("upload a note document"), CommandIntent::Pdf);
    }

    #[test]
    fn test_priority_schedule_over_note() {
        assert_eq!(
            classify("remind me about the note I wrote"),
            CommandIntent::Schedule
        );
    }

    #[test]
    fn test_priority_note_over_summaries() {
        assert_eq!(classify("show me the note"), CommandIntent::Note);
    }

    #[test]
    fn test_routing_is_deterministic() {
        let first = route("Summarize this PDF document");
        for _ in 0..10 {
            let again = route("Summarize this PDF document");
            assert_eq!(again.intent, first.intent);
            assert_eq!(again.response, first.response);
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("SUMMARIZE THIS PDF"), CommandIntent::Pdf);
        assert_eq!(classify("ScHeDuLe something"), CommandIntent::Schedule);
    }

    #[test]
    fn test_routed_command_serializes_lowercase_intent() {
        let routed = route("help");
        let json = serde_json::to_value(&routed).unwrap();
        assert_eq!(json["intent"], "help");
    }
}
