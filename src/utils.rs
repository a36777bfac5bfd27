/// Utility helpers for La Musique

/// Stable DOM id for a section, derived from its title.
///
/// Runs of non-alphanumeric characters collapse into a single hyphen, so
/// "AI Lyric Feedback" becomes `section-ai-lyric-feedback`.
pub fn section_dom_id(title: &str) -> String {
    let slug = title
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    format!("section-{slug}")
}
