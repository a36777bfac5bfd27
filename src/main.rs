use dioxus::prelude::*;

use la_musique::components::views::StudioView;
use la_musique::components::{use_toast_provider, ToastFrame};
use la_musique::settings;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logger: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let panel_settings = use_hook(settings::load_or_default);
    use_context_provider(|| panel_settings.clone());
    use_toast_provider(&panel_settings);

    rsx! {
        document::Title { "La Musique" }
        document::Meta { name: "theme-color", content: "#7c3aed" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Stylesheet { href: APP_CSS }

        main { class: "app-shell",
            StudioView {}
        }
        ToastFrame {}
    }
}
