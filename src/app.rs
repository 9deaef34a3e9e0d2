use dioxus::prelude::*;

use crate::{
    components::{entry_panel::EntryPanel, failure_panel::FailurePanel, success_panel::SuccessPanel},
    game::{CodeEntry, GameConfig, Phase},
};

pub(crate) mod actions;
pub(crate) mod hooks;
pub(crate) mod utils;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, PartialEq, Routable)]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/treasure-hunt")]
    TreasureHunt {},
}

#[component]
pub fn App() -> Element {
    trace!("kicking off app");
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// static welcome screen, its only action leads to the game
#[component]
fn Landing() -> Element {
    let nav = use_navigator();
    let config = GameConfig::from_build_env();

    rsx! {
        div { class: "landing-screen",
            div { class: "landing-content",
                h1 { class: "landing-title", "St. Mary's Church Karuvannur" }
                p { class: "landing-subtitle", "Welcome to our {config.event_title}!" }
                button {
                    class: "action-button landing-button",
                    cursor: "pointer",
                    onclick: move |_| {
                        nav.push(Route::TreasureHunt {});
                    },
                    "Start Treasure Hunt 🌺"
                }
            }
        }
    }
}

/// the game view: all interactive state lives here and exactly one of the
/// three panels is shown, keyed on the current phase
#[component]
fn TreasureHunt() -> Element {
    trace!("mounting game view");
    let game = use_signal(|| CodeEntry::new(GameConfig::from_build_env()));
    // index of the most recently entered digit, highlighted briefly
    let active = use_signal(|| None::<usize>);
    hooks::use_indicator_decay(active);

    let phase = game.read().phase().clone();

    rsx! {
        div { class: "hunt-screen",
            div { class: "hunt-card",
                div {
                    h1 { class: "hunt-title", "പാതാളാവേട്ട" }
                    p { class: "hunt-tagline", "Break the code to find the hidden treasure" }
                    p { class: "hunt-organizer", "Organized by Karuvannur CLC" }
                }
                div { class: "emoji-line", "🌺" }

                match phase {
                    Phase::Input => rsx! {
                        EntryPanel { game, active }
                    },
                    Phase::Success(team) => rsx! {
                        SuccessPanel { game, active, team }
                    },
                    Phase::Failure => rsx! {
                        FailurePanel { game, active }
                    },
                }

                div { class: "hunt-footer",
                    p { "✨ Happy Onam! May the harvest festival bring you abundance ✨" }
                }
            }
        }
    }
}
