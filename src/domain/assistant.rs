//! Local assistant responder.
//!
//! There is no backend in this build: chat turns are answered by a small
//! deterministic responder so the conversation surface stays exercisable.

/// Produce an assistant reply for a user message.
pub fn reply(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return "I didn't catch that, sir. Could you repeat?".to_string();
    }

    let lowered = trimmed.to_lowercase();
    if lowered.contains("hello") || lowered.contains("hi") {
        return "Good day. All systems are operational.".to_string();
    }
    if lowered.contains("status") {
        return "Diagnostics nominal. Power at 100%, no anomalies detected.".to_string();
    }
    if lowered.contains("thank") {
        return "At your service, as always.".to_string();
    }

    format!("Acknowledged: \"{trimmed}\". I've logged the request for review.")
}
