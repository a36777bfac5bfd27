// Render model for the song output panel: which sections appear, in what
// order, and whether each shows real content or a placeholder.

use crate::components::song_output::ScanLyricsAction;
use crate::models::{lyrics_present, MelodyResult};
use crate::utils::section_dom_id;

pub const LYRICS_PLACEHOLDER: &str = "Your generated lyrics will appear here once crafted.";
pub const MELODY_PLACEHOLDER: &str =
    "Melody details and singing instructions will appear here once composed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Lyrics,
    Melody,
    Feedback,
}

impl SectionKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Lyrics => "Generated Lyrics",
            Self::Melody => "Generated Melody",
            Self::Feedback => "AI Lyric Feedback",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Lyrics => "file-text",
            Self::Melody => "list-music",
            Self::Feedback => "message-quote",
        }
    }

    pub fn description(self) -> Option<&'static str> {
        match self {
            Self::Lyrics => None,
            Self::Melody => Some("Details about the composed melody, including how to sing it."),
            Self::Feedback => {
                Some("Suggestions and analysis for the lyrics used to generate the melody.")
            }
        }
    }

    pub fn dom_id(self) -> String {
        section_dom_id(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Placeholder(&'static str),
    /// Raw lyrics, untrimmed.
    Lyrics(String),
    Melody {
        description: String,
        structure: String,
    },
    Feedback(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSection {
    pub kind: SectionKind,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongOutputModel {
    pub sections: Vec<OutputSection>,
    pub scan_enabled: bool,
}

impl SongOutputModel {
    pub fn build(lyrics: &str, melody: Option<&MelodyResult>) -> Self {
        let scan_enabled = lyrics_present(lyrics);

        let lyrics_body = if scan_enabled {
            SectionBody::Lyrics(lyrics.to_string())
        } else {
            SectionBody::Placeholder(LYRICS_PLACEHOLDER)
        };

        let melody_body = match melody {
            Some(melody) => SectionBody::Melody {
                description: melody.description.clone(),
                structure: melody.melody.clone(),
            },
            None => SectionBody::Placeholder(MELODY_PLACEHOLDER),
        };

        let mut sections = vec![
            OutputSection {
                kind: SectionKind::Lyrics,
                body: lyrics_body,
            },
            OutputSection {
                kind: SectionKind::Melody,
                body: melody_body,
            },
        ];

        if let Some(feedback) = melody.and_then(MelodyResult::feedback) {
            sections.push(OutputSection {
                kind: SectionKind::Feedback,
                body: SectionBody::Feedback(feedback.to_string()),
            });
        }

        Self {
            sections,
            scan_enabled,
        }
    }

    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.sections.iter().any(|section| section.kind == kind)
    }

    pub fn section(&self, kind: SectionKind) -> Option<&OutputSection> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    pub fn scan_action(&self) -> ScanLyricsAction {
        ScanLyricsAction::new(self.scan_enabled)
    }
}
