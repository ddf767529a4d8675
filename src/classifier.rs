//! Reply-Text Classification — derive presentation cues from reply text.
//!
//! Uses ordered keyword heuristics (fast, deterministic, no LLM call) to
//! map a reply to a facial expression, gesture, intensity and tempo. The
//! rule order is a hand-tuned priority chain: an apologetic-but-excited
//! sentence reads as sad rather than delighted, and an explicit negative
//! correction always wins over an apology in the same reply. Reordering
//! the rules changes observable output.

use tracing::debug;

use crate::signal::{clamp01, Signal};

// ── Keyword tables ─────────────────────────────────────────
// These lists are matched verbatim by downstream consumers; the
// apostrophe variants stay exactly as-is (curly "can’t" alongside
// "cant"/"cannot", no plain-apostrophe form).

const POSITIVE_KW: &[&str] = &[
    "great",
    "awesome",
    "love",
    "excellent",
    "fantastic",
    "nice",
    "glad",
    "cool",
    "amazing",
];

const APOLOGY_KW: &[&str] = &["sorry", "apologies", "unfortunately", "can’t", "cant", "cannot"];

const NEGATIVE_KW: &[&str] = &[
    "no ",
    " don’t",
    " dont",
    "not correct",
    "incorrect",
    "wrong",
    "hate",
];

const POINT_KW: &[&str] = &["click", "look", "see", "this", "that", "here", "there"];

const COUNT_KW: &[&str] = &["first", "second", "third", "1.", "2.", "3."];

const THINKING_KW: &[&str] = &[
    "i think",
    "let’s consider",
    "lets consider",
    "i guess",
    "i wonder",
];

fn contains_any(haystack: &str, words: &[&str]) -> bool {
    words.iter().any(|w| haystack.contains(w))
}

/// Classify a reply into presentation cues.
///
/// Total and deterministic: never panics, and identical input yields
/// identical output. Callers holding optional text pass the empty string;
/// empty or whitespace-only input returns [`Signal::empty_input`].
pub fn classify(text: &str) -> Signal {
    let reply = text.trim();
    if reply.is_empty() {
        return Signal::empty_input();
    }

    let lower = reply.to_lowercase();
    let has_exclaim = reply.contains('!');
    let exclaim_count = reply.matches('!').count();
    let has_question = reply.contains('?');

    // Base defaults
    let mut facial_expression = "neutral";
    let mut gesture = "idle";
    let mut intensity: f32 = 0.45;
    let mut tempo: f32 = 0.5;

    // Intent-specific overrides
    if contains_any(&lower, POINT_KW) {
        gesture = "point";
    }
    if contains_any(&lower, COUNT_KW) {
        gesture = "count";
    }
    if contains_any(&lower, THINKING_KW) {
        facial_expression = "thinking";
        if gesture == "idle" {
            gesture = "explain";
        }
        intensity = 0.45;
        tempo = 0.55;
    }

    // Sentiment / tone
    if contains_any(&lower, POSITIVE_KW) || has_exclaim {
        facial_expression = "smile";
        if gesture == "idle" {
            gesture = "delight";
        }
        intensity = 0.65;
        tempo = 0.55;
    }
    if has_question {
        // distinguish surprised vs thinking
        if lower.contains("what?!") || lower.contains("no way") || has_exclaim {
            facial_expression = "surprised";
            if gesture == "idle" {
                gesture = "explain";
            }
            intensity = 0.6;
            tempo = 0.6;
        } else {
            if facial_expression != "smile" {
                facial_expression = "thinking";
            }
            if gesture == "idle" {
                gesture = "explain";
            }
            intensity = intensity.max(0.45);
            tempo = tempo.max(0.55);
        }
    }
    if contains_any(&lower, APOLOGY_KW) {
        facial_expression = "sad";
        gesture = "shrug";
        intensity = 0.35 + if has_exclaim { 0.1 } else { 0.0 };
        tempo = 0.45;
    }
    if contains_any(&lower, NEGATIVE_KW) {
        facial_expression = "angry";
        gesture = "disagree";
        intensity = 0.6;
        tempo = 0.6;
    }

    // Modulators
    intensity += (exclaim_count as f32 * 0.05).min(0.2);
    if has_question {
        tempo += 0.05;
    }

    // Length modulation: longer replies read slightly slower, up to -0.15
    let char_count = reply.chars().count();
    tempo -= (char_count as f32 / 500.0).min(0.15);

    let signal = Signal {
        facial_expression: facial_expression.to_string(),
        gesture: gesture.to_string(),
        intensity: clamp01(intensity),
        tempo: clamp01(tempo),
    };
    debug!(
        expression = %signal.facial_expression,
        gesture = %signal.gesture,
        intensity = signal.intensity,
        tempo = signal.tempo,
        chars = char_count,
        "classified reply"
    );
    signal
}
