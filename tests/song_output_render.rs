use dioxus::prelude::*;
use la_musique::components::{
    SectionPanel, SongOutputPanel, LYRICS_PLACEHOLDER, MELODY_PLACEHOLDER, SCAN_BUTTON_LABEL,
};
use la_musique::models::MelodyResult;
use la_musique::settings::PanelSettings;

fn melody(feedback: Option<&str>) -> MelodyResult {
    MelodyResult {
        description: "Start low and rise on the chorus".to_string(),
        melody: "<score-partwise>\n  <part id=\"P1\"/>\n</score-partwise>".to_string(),
        lyric_feedback: feedback.map(str::to_string),
    }
}

fn render(lyrics: &str, melody: Option<MelodyResult>) -> String {
    let lyrics = lyrics.to_string();
    dioxus_ssr::render_element(rsx! {
        SongOutputPanel { lyrics: lyrics, melody: melody }
    })
}

fn section_count(html: &str) -> usize {
    html.matches("<section").count()
}

fn text_inside<'a>(html: &'a str, opening: &str, closing: &str) -> Option<&'a str> {
    let start = html.find(opening)? + opening.len();
    let len = html[start..].find(closing)?;
    Some(&html[start..start + len])
}

fn scan_button_tag(html: &str) -> &str {
    let start = html.find("<button class=\"scan-button\"").expect("scan button rendered");
    let len = html[start..].find('>').expect("scan button tag closes");
    &html[start..=start + len]
}

#[test]
fn blank_lyrics_render_placeholder() {
    for lyrics in ["", "    ", "\n \t\n"] {
        let html = render(lyrics, None);
        assert!(html.contains(LYRICS_PLACEHOLDER), "missing placeholder for {lyrics:?}");
        assert!(!html.contains("lyrics-text"));
        assert!(html.contains(SCAN_BUTTON_LABEL));
        assert!(
            scan_button_tag(&html).contains("disabled"),
            "scan button should be disabled for {lyrics:?}"
        );
    }
}

#[test]
fn lyrics_keep_line_breaks_and_indentation() {
    let lyrics = "Verse one\n    indented second line\n\nChorus here";
    let html = render(lyrics, None);
    assert_eq!(
        text_inside(&html, "<pre class=\"lyrics-text\">", "</pre>"),
        Some(lyrics)
    );
    assert!(!html.contains(LYRICS_PLACEHOLDER));
    assert!(!scan_button_tag(&html).contains("disabled"));
}

#[test]
fn absent_melody_renders_only_placeholder() {
    let html = render("la la", None);
    assert!(html.contains(MELODY_PLACEHOLDER));
    assert!(!html.contains("melody-details"));
    assert!(!html.contains("structure-text"));
    assert!(!html.contains("visualization-placeholder"));
    assert_eq!(section_count(&html), 2);
}

#[test]
fn melody_without_feedback_renders_two_sections() {
    let html = render("la la", Some(melody(None)));
    assert_eq!(section_count(&html), 2);
    assert!(html.contains("Start low and rise on the chorus"));
    assert_eq!(
        text_inside(&html, "<pre class=\"structure-text\">", "</pre>"),
        Some("&#60;score-partwise&#62;\n  &#60;part id=&#34;P1&#34;/&#62;\n&#60;/score-partwise&#62;")
    );
    assert!(html.contains("visualization-placeholder"));
    assert!(!html.contains("AI Lyric Feedback"));
    assert!(!html.contains(MELODY_PLACEHOLDER));
}

#[test]
fn feedback_renders_as_third_section() {
    let html = render("la la", Some(melody(Some("Great rhyme scheme!"))));
    assert_eq!(section_count(&html), 3);
    assert!(html.contains("id=\"section-ai-lyric-feedback\""));
    assert_eq!(
        text_inside(&html, "<p class=\"feedback-text\">", "</p>"),
        Some("Great rhyme scheme!")
    );

    let lyrics_at = html.find("section-generated-lyrics").unwrap();
    let melody_at = html.find("section-generated-melody").unwrap();
    let feedback_at = html.find("section-ai-lyric-feedback").unwrap();
    assert!(lyrics_at < melody_at && melody_at < feedback_at);
}

#[test]
fn empty_feedback_string_is_not_rendered() {
    let html = render("la la", Some(melody(Some(""))));
    assert_eq!(section_count(&html), 2);
}

#[test]
fn rendering_is_idempotent() {
    let first = render("same words\nsame lines", Some(melody(Some("ok"))));
    let second = render("same words\nsame lines", Some(melody(Some("ok"))));
    assert_eq!(first, second);
}

#[component]
fn WithSettings(settings: PanelSettings, melody: MelodyResult) -> Element {
    use_context_provider(|| settings.clone());
    rsx! {
        SongOutputPanel { lyrics: "la la".to_string(), melody: Some(melody) }
    }
}

#[test]
fn settings_control_structure_height_and_visualization() {
    let settings = PanelSettings {
        melody_structure_max_height_px: 240,
        show_visualization_placeholder: false,
        ..PanelSettings::default()
    };
    let melody = melody(None);
    let html = dioxus_ssr::render_element(rsx! {
        WithSettings { settings: settings, melody: melody }
    });
    assert!(html.contains("max-height: 240px;"));
    assert!(!html.contains("visualization-placeholder"));
}

#[test]
fn section_panel_omits_optional_parts() {
    let html = dioxus_ssr::render_element(rsx! {
        SectionPanel { title: "Plain Card".to_string(), icon: "info".to_string(),
            p { "body text" }
        }
    });
    assert!(html.contains("id=\"section-plain-card\""));
    assert!(html.contains("body text"));
    assert!(!html.contains("section-panel-description"));
    assert!(!html.contains("section-panel-footer"));
}

#[test]
fn section_panel_renders_description_and_footer() {
    let html = dioxus_ssr::render_element(rsx! {
        SectionPanel {
            title: "Full Card".to_string(),
            icon: "info".to_string(),
            description: "Extra context".to_string(),
            content_class: "tall".to_string(),
            footer: Some(rsx! {
                button { "Footer action" }
            }),
            p { "body text" }
        }
    });
    assert!(html.contains("Extra context"));
    assert!(html.contains("section-panel-content tall"));
    assert!(html.contains("section-panel-footer"));
    assert!(html.contains("Footer action"));
}
