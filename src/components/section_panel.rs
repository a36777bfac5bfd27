use crate::components::Icon;
use crate::utils::section_dom_id;
use dioxus::prelude::*;

/// Titled, icon-labeled card with a scrollable body and an optional footer.
///
/// The body keeps its content at intrinsic width (`min-width: max-content`), so
/// wide content scrolls horizontally instead of wrapping.
#[component]
pub fn SectionPanel(
    title: String,
    icon: String,
    description: Option<String>,
    content_class: Option<String>,
    footer: Option<Element>,
    children: Element,
) -> Element {
    let dom_id = section_dom_id(&title);
    let content_class = match content_class {
        Some(extra) if !extra.trim().is_empty() => format!("section-panel-content {extra}"),
        _ => "section-panel-content".to_string(),
    };

    rsx! {
        section { id: "{dom_id}", class: "section-panel",
            header { class: "section-panel-header",
                h2 { class: "section-panel-title",
                    Icon { name: icon, class: "section-panel-icon".to_string() }
                    "{title}"
                }
                if let Some(description) = description {
                    p { class: "section-panel-description", "{description}" }
                }
            }

            div { class: "section-panel-body",
                div { class: "{content_class}", {children} }
            }

            if let Some(footer_content) = footer {
                div { class: "section-panel-footer", {footer_content} }
            }
        }
    }
}
