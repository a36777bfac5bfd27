use crate::components::SongOutputPanel;
use crate::models::MelodyResult;
use dioxus::prelude::*;

const SAMPLE_MELODY_JSON: &str = include_str!("sample_melody.json");

/// Bundled melody result used to preview the output panel.
pub fn sample_melody() -> Result<MelodyResult, serde_json::Error> {
    serde_json::from_str(SAMPLE_MELODY_JSON)
}

#[component]
pub fn StudioView() -> Element {
    let mut lyrics = use_signal(String::new);
    let mut melody = use_signal(|| None::<MelodyResult>);
    let mut include_feedback = use_signal(|| true);

    let on_load_sample = move |_| match sample_melody() {
        Ok(mut sample) => {
            if !include_feedback() {
                sample.lyric_feedback = None;
            }
            tracing::debug!(
                with_feedback = sample.lyric_feedback.is_some(),
                "loaded sample melody"
            );
            melody.set(Some(sample));
        }
        Err(e) => tracing::warn!("bundled sample melody is invalid: {e}"),
    };

    let on_clear = move |_| {
        lyrics.set(String::new());
        melody.set(None);
    };

    rsx! {
        div { class: "studio",
            header { class: "page-header",
                h1 { class: "page-title", "La Musique" }
                p { class: "page-subtitle", "Write lyrics, compose a melody, review the result" }
            }

            div { class: "studio-grid",
                section { class: "studio-inputs",
                    label { class: "field-label", r#for: "lyrics-input", "Lyrics" }
                    textarea {
                        id: "lyrics-input",
                        class: "lyrics-input",
                        rows: "14",
                        placeholder: "Write or paste your lyrics here...",
                        value: lyrics,
                        oninput: move |e| lyrics.set(e.value()),
                    }

                    label { class: "checkbox-row",
                        input {
                            r#type: "checkbox",
                            checked: include_feedback(),
                            onchange: move |e| include_feedback.set(e.checked()),
                        }
                        "Include lyric feedback"
                    }

                    div { class: "studio-actions",
                        button {
                            class: "primary-button",
                            r#type: "button",
                            onclick: on_load_sample,
                            "Load sample melody"
                        }
                        button {
                            class: "secondary-button",
                            r#type: "button",
                            onclick: on_clear,
                            "Clear"
                        }
                    }
                }

                SongOutputPanel { lyrics: lyrics(), melody: melody() }
            }
        }
    }
}
