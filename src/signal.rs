//! The `Signal` record — the four presentation cues attached to a reply.
//!
//! A Signal has no identity and no lifecycle: it is built fresh per
//! classification call and owned by whoever attaches it to a message.

use serde::{Deserialize, Serialize};

/// Presentation cues derived from one reply text.
///
/// Serialized with camelCase names (`facialExpression`, `gesture`,
/// `intensity`, `tempo`) to match the frontend message shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    /// Expression category. The classifier emits one of:
    /// neutral, smile, sad, angry, surprised, thinking.
    pub facial_expression: String,
    /// Gesture category. The classifier emits one of:
    /// idle, point, count, explain, delight, shrug, disagree.
    pub gesture: String,
    /// Expression strength, always in [0.0, 1.0].
    pub intensity: f32,
    /// Playback pace modifier, always in [0.0, 1.0].
    pub tempo: f32,
}

impl Signal {
    /// Safe fallback when nothing is known about the reply.
    pub fn fallback() -> Self {
        Self {
            facial_expression: "neutral".to_string(),
            gesture: "idle".to_string(),
            intensity: 0.45,
            tempo: 0.5,
        }
    }

    /// Returned for empty or whitespace-only input. Intensity 0.3
    /// distinguishes "no input" from the generic fallback's 0.45.
    pub fn empty_input() -> Self {
        Self {
            intensity: 0.3,
            ..Self::fallback()
        }
    }
}

impl Default for Signal {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Clamp a scalar into [0.0, 1.0]. NaN maps to 0.
pub fn clamp01(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp01_bounds_and_nan() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(2.5), 1.0);
        assert_eq!(clamp01(0.42), 0.42);
        assert_eq!(clamp01(f32::NAN), 0.0);
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let json = serde_json::to_value(Signal::fallback()).unwrap();
        assert_eq!(json["facialExpression"], "neutral");
        assert_eq!(json["gesture"], "idle");
        assert!((json["intensity"].as_f64().unwrap() - 0.45).abs() < 1e-6);
        assert!((json["tempo"].as_f64().unwrap() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn empty_input_has_lower_intensity_than_fallback() {
        assert!(Signal::empty_input().intensity < Signal::fallback().intensity);
        assert_eq!(Signal::empty_input().tempo, Signal::fallback().tempo);
    }
}
