use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use ui::NavBar;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Stand-in for a real session; the bar only reads the flag.
    let mut logged_in = use_signal(|| false);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        NavBar {
            is_logged_in: logged_in(),
            show_locale_switcher: true,
            on_login_click: move |_| {
                info!("login requested");
                logged_in.set(true);
            },
            on_get_started: move |_| {
                if logged_in() {
                    info!("dashboard requested");
                } else {
                    info!("sign-up requested");
                }
            },
        }

        main { class: "landing",
            section { class: "landing__hero",
                h1 { "Sitenav" }
                p { "Scroll down, or use the links above to jump between sections." }
                button {
                    r#type: "button",
                    class: "landing__toggle",
                    onclick: move |_| logged_in.set(!logged_in()),
                    if logged_in() { "Sign out (demo)" } else { "Sign in (demo)" }
                }
            }
            section { id: "features", class: "landing__section",
                h2 { "Features" }
                p { "Everything the product does, one card at a time." }
            }
            section { id: "pricing", class: "landing__section",
                h2 { "Pricing" }
                p { "Plans for individuals and teams." }
            }
            section { id: "sample", class: "landing__section",
                h2 { "Sample" }
                p { "A finished example to explore." }
            }
        }
    }
}
