//! Outgoing message payload — where cues meet collaborator-owned fields.
//!
//! The surrounding application builds messages carrying text plus media
//! fields (audio, lipsync, animation) produced elsewhere. This module
//! only owns the merge rule for the four cue fields.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::classifier::classify;
use crate::sanitize::{sanitize, RawSignal};

/// One outgoing chat message. All fields serialize camelCase; media
/// fields are produced and consumed by external collaborators and pass
/// through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Message {
    pub text: String,
    /// Base64-encoded audio, if synthesis ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    /// Lip-sync transcript, shape owned by the extraction tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lipsync: Option<Value>,
    /// Animation clip name, usually chosen upstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facial_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gesture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo: Option<f32>,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Classify this message's text and merge the sanitized cues in.
    ///
    /// A facial expression already chosen upstream (e.g. by an LLM that
    /// emits its own facialExpression field) is kept; gesture, intensity
    /// and tempo always come from the classifier. After the call all
    /// four cue fields are present and valid.
    pub fn attach_cues(&mut self) {
        let cues = sanitize(&RawSignal::from(&classify(&self.text)));
        let upstream_expression = self
            .facial_expression
            .as_deref()
            .is_some_and(|e| !e.is_empty());
        if !upstream_expression {
            self.facial_expression = Some(cues.facial_expression);
        }
        self.gesture = Some(cues.gesture);
        self.intensity = Some(cues.intensity);
        self.tempo = Some(cues.tempo);
    }
}
