use crate::components::song_output::{
    request_scan, ScanLyricsAction, SectionBody, SectionKind, SongOutputModel, SCAN_BUTTON_LABEL,
};
use crate::components::{Icon, SectionPanel};
use crate::models::MelodyResult;
use crate::settings::PanelSettings;
use dioxus::prelude::*;

/// Lyrics, melody and (when available) feedback for the current song.
///
/// Pure function of its props; the only side effect is the toast raised by the
/// scan button.
#[component]
pub fn SongOutputPanel(lyrics: String, #[props(!optional)] melody: Option<MelodyResult>) -> Element {
    let settings = try_use_context::<PanelSettings>().unwrap_or_default();
    let model = SongOutputModel::build(&lyrics, melody.as_ref());
    let scan_action = model.scan_action();

    let sections = model.sections.into_iter().map(|section| {
        let kind = section.kind;
        let key = kind.dom_id();
        let footer = (kind == SectionKind::Lyrics).then(|| {
            rsx! {
                ScanLyricsButton { action: scan_action }
            }
        });
        let body = section_body(section.body, &settings);

        rsx! {
            SectionPanel {
                key: "{key}",
                title: kind.title().to_string(),
                icon: kind.icon().to_string(),
                description: kind.description().map(str::to_string),
                content_class: "section-panel-content-fill".to_string(),
                footer: footer,
                {body}
            }
        }
    });

    rsx! {
        div { class: "song-output", {sections} }
    }
}

fn section_body(body: SectionBody, settings: &PanelSettings) -> Element {
    let inner = match body {
        SectionBody::Placeholder(text) => rsx! {
            p { class: "placeholder", "{text}" }
        },
        SectionBody::Lyrics(text) => rsx! {
            pre { class: "lyrics-text", "{text}" }
        },
        SectionBody::Melody {
            description,
            structure,
        } => {
            let max_height = settings.melody_structure_max_height_px;
            let show_visualization = settings.show_visualization_placeholder;
            rsx! {
                div { class: "melody-details",
                    div { class: "melody-instructions",
                        h4 { class: "detail-heading",
                            Icon {
                                name: "user-check".to_string(),
                                class: "detail-icon".to_string(),
                            }
                            "Melody & Singing Instructions:"
                        }
                        p { class: "melody-description", "{description}" }
                    }
                    div { class: "melody-structure",
                        h4 { class: "detail-heading", "Melody Structure (MusicXML Representation):" }
                        p { class: "detail-note",
                            "(MusicXML data is generated for structural representation. Actual playback/visualization is a future feature.)"
                        }
                        div {
                            class: "structure-scroll",
                            style: "max-height: {max_height}px;",
                            pre { class: "structure-text", "{structure}" }
                        }
                    }
                    if show_visualization {
                        div { class: "visualization-placeholder",
                            Icon {
                                name: "disc".to_string(),
                                class: "visualization-icon".to_string(),
                            }
                            p { "Melody visualization & playback coming soon!" }
                        }
                    }
                }
            }
        }
        SectionBody::Feedback(text) => rsx! {
            p { class: "feedback-text", "{text}" }
        },
    };

    rsx! {
        div { class: "inset-scroll", {inner} }
    }
}

#[component]
fn ScanLyricsButton(action: ScanLyricsAction) -> Element {
    let on_scan = move |_| {
        request_scan(action);
    };

    rsx! {
        div { class: "scan-footer",
            button {
                class: "scan-button",
                r#type: "button",
                disabled: !action.is_enabled(),
                onclick: on_scan,
                Icon {
                    name: "shield-alert".to_string(),
                    class: "scan-button-icon".to_string(),
                }
                "{SCAN_BUTTON_LABEL}"
            }
        }
    }
}
