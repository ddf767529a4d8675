//! Signal Sanitation — normalize untrusted Signal-shaped values.
//!
//! Producers of a Signal-shaped value are not always the classifier: an
//! LLM asked to emit its own facialExpression field may omit fields, use
//! wrong types, or emit out-of-range numbers. This module is the single
//! choke point that turns any such value into a valid [`Signal`] before
//! it reaches a rendering layer.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::signal::{clamp01, Signal};

/// A possibly-partial, possibly-malformed Signal: every field optional,
/// every field any JSON type. Deserializes leniently from any JSON
/// object; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSignal {
    pub facial_expression: Option<Value>,
    pub gesture: Option<Value>,
    pub intensity: Option<Value>,
    pub tempo: Option<Value>,
}

impl RawSignal {
    /// Build from any JSON value. Non-object input yields an all-absent
    /// RawSignal, which sanitizes to the fallback Signal.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

impl From<&Signal> for RawSignal {
    fn from(signal: &Signal) -> Self {
        Self {
            facial_expression: Some(Value::String(signal.facial_expression.clone())),
            gesture: Some(Value::String(signal.gesture.clone())),
            intensity: serde_json::Number::from_f64(f64::from(signal.intensity)).map(Value::Number),
            tempo: serde_json::Number::from_f64(f64::from(signal.tempo)).map(Value::Number),
        }
    }
}

/// Normalize a Signal-shaped value into a guaranteed-valid [`Signal`].
///
/// Total: every field of every input maps to something. Labels pass
/// through when present and a non-empty string, otherwise they fall back
/// to the defaults (no enumeration check: the matched value set is owned
/// by the producer). Scalars substitute the default when absent or null,
/// otherwise coerce to a number and clamp into [0,1] (non-numeric → 0).
pub fn sanitize(raw: &RawSignal) -> Signal {
    let signal = Signal {
        facial_expression: label_or(raw.facial_expression.as_ref(), "neutral"),
        gesture: label_or(raw.gesture.as_ref(), "idle"),
        intensity: scalar_or(raw.intensity.as_ref(), 0.45),
        tempo: scalar_or(raw.tempo.as_ref(), 0.5),
    };
    debug!(
        expression = %signal.facial_expression,
        gesture = %signal.gesture,
        "sanitized signal"
    );
    signal
}

/// Convenience for callers holding raw (possibly absent) JSON.
pub fn sanitize_value(value: Option<&Value>) -> Signal {
    match value {
        Some(v) => sanitize(&RawSignal::from_value(v)),
        None => sanitize(&RawSignal::default()),
    }
}

fn label_or(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => default.to_string(),
    }
}

fn scalar_or(value: Option<&Value>, default: f32) -> f32 {
    let raw = match value {
        // Default substitution happens before clamping
        None | Some(Value::Null) => default,
        Some(Value::Number(n)) => n.as_f64().map_or(f32::NAN, |f| f as f32),
        Some(Value::String(s)) => s.trim().parse::<f32>().unwrap_or(f32::NAN),
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Some(_) => f32::NAN,
    };
    clamp01(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn absent_input_yields_fallback() {
        assert_eq!(sanitize_value(None), Signal::fallback());
    }

    #[test]
    fn empty_object_yields_fallback() {
        assert_eq!(sanitize_value(Some(&json!({}))), Signal::fallback());
    }

    #[test]
    fn non_object_input_yields_fallback() {
        for v in [json!("smile"), json!(42), json!([1, 2]), json!(null)] {
            assert_eq!(sanitize_value(Some(&v)), Signal::fallback(), "for {}", v);
        }
    }

    #[test]
    fn non_empty_labels_pass_through_unvalidated() {
        let s = sanitize_value(Some(&json!({
            "facialExpression": "funnyFace",
            "gesture": "rumba",
        })));
        assert_eq!(s.facial_expression, "funnyFace");
        assert_eq!(s.gesture, "rumba");
    }

    #[test]
    fn empty_or_mistyped_labels_fall_back() {
        let s = sanitize_value(Some(&json!({
            "facialExpression": "",
            "gesture": 7,
        })));
        assert_eq!(s.facial_expression, "neutral");
        assert_eq!(s.gesture, "idle");
    }

    #[test]
    fn non_numeric_intensity_clamps_to_zero_and_high_tempo_to_one() {
        let s = sanitize_value(Some(&json!({ "intensity": "abc", "tempo": 2.5 })));
        assert_eq!(s.intensity, 0.0);
        assert_eq!(s.tempo, 1.0);
    }

    #[test]
    fn null_scalar_substitutes_default_before_clamping() {
        let s = sanitize_value(Some(&json!({ "intensity": null, "tempo": null })));
        assert!((s.intensity - 0.45).abs() < 1e-6, "got {}", s.intensity);
        assert!((s.tempo - 0.5).abs() < 1e-6, "got {}", s.tempo);
    }

    #[test]
    fn numeric_strings_coerce() {
        let s = sanitize_value(Some(&json!({ "intensity": "0.7", "tempo": "-3" })));
        assert!((s.intensity - 0.7).abs() < 1e-6, "got {}", s.intensity);
        assert_eq!(s.tempo, 0.0);
    }

    #[test]
    fn negative_number_clamps_to_zero() {
        let s = sanitize_value(Some(&json!({ "intensity": -0.2 })));
        assert_eq!(s.intensity, 0.0);
    }

    #[test]
    fn classifier_output_passes_unchanged() {
        let cls = crate::classifier::classify("Awesome work!");
        let s = sanitize(&RawSignal::from(&cls));
        assert_eq!(s, cls);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let s = sanitize_value(Some(&json!({
            "text": "hello",
            "animation": "Talking_1",
            "gesture": "point",
        })));
        assert_eq!(s.gesture, "point");
        assert_eq!(s.facial_expression, "neutral");
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(
            expr in proptest::option::of(".{0,12}"),
            gest in proptest::option::of(".{0,12}"),
            intensity in proptest::option::of(-10.0f32..10.0),
            tempo in proptest::option::of(-10.0f32..10.0),
        ) {
            let raw = RawSignal {
                facial_expression: expr.map(Value::String),
                gesture: gest.map(Value::String),
                intensity: intensity
                    .and_then(|v| serde_json::Number::from_f64(f64::from(v)))
                    .map(Value::Number),
                tempo: tempo
                    .and_then(|v| serde_json::Number::from_f64(f64::from(v)))
                    .map(Value::Number),
            };
            let once = sanitize(&raw);
            let twice = sanitize(&RawSignal::from(&once));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn sanitized_scalars_always_in_range(
            intensity in proptest::option::of(-1e6f32..1e6),
            tempo in proptest::option::of(-1e6f32..1e6),
        ) {
            let raw = RawSignal {
                intensity: intensity
                    .and_then(|v| serde_json::Number::from_f64(f64::from(v)))
                    .map(Value::Number),
                tempo: tempo
                    .and_then(|v| serde_json::Number::from_f64(f64::from(v)))
                    .map(Value::Number),
                ..RawSignal::default()
            };
            let s = sanitize(&raw);
            prop_assert!((0.0..=1.0).contains(&s.intensity));
            prop_assert!((0.0..=1.0).contains(&s.tempo));
        }
    }
}
