use serde::{Deserialize, Serialize};

/// Result handed back by the melody generation step.
///
/// Field names follow the generator's JSON (`lyricFeedback`), so payloads can
/// be deserialized without a mapping layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MelodyResult {
    /// Human-readable melody and singing instructions.
    pub description: String,
    /// Structural (MusicXML) representation of the composed melody.
    pub melody: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyric_feedback: Option<String>,
}

impl MelodyResult {
    /// Feedback text, if any. An empty string counts as no feedback.
    pub fn feedback(&self) -> Option<&str> {
        self.lyric_feedback
            .as_deref()
            .filter(|feedback| !feedback.is_empty())
    }
}

/// Lyrics count as present once they contain something other than whitespace.
pub fn lyrics_present(lyrics: &str) -> bool {
    !lyrics.trim().is_empty()
}
