use dioxus::prelude::*;

use crate::components::card::{Card, CardContent, CardFooter, CardHeader};
use crate::components::page::{PageContainer, PageTitle};
use crate::styles::combinations::{CARD_GRID, CARD_SUBTITLE, CARD_TITLE, SECTION_LABEL};
use crate::styles::styles::*;

#[component]
pub fn Showcase() -> Element {
    let mut clicks = use_signal(|| 0usize);

    rsx! {
        PageContainer {
            PageTitle {
                title: "Card Showcase".to_string(),
                subtitle: Some("Static, hoverable and clickable glass cards".to_string()),
                icon: Some(&icondata::AiAppstoreOutlined),
            }

            // Header / content / footer composition
            div {
                div { class: SECTION_LABEL, "Composition" }
                Card {
                    CardHeader {
                        h3 { class: CARD_TITLE, "Release notes" }
                        p { class: CARD_SUBTITLE, "v0.1.0" }
                    }
                    CardContent {
                        p {
                            class: TEXT_BODY,
                            "Header and footer draw their own separators; the body is free-form."
                        }
                    }
                    CardFooter {
                        div {
                            class: FLEX_BETWEEN,
                            span { class: TEXT_FOOTNOTE, "Updated just now" }
                            span { class: TEXT_FOOTNOTE, "3 sections" }
                        }
                    }
                }
            }

            // Hover animation
            div {
                div { class: SECTION_LABEL, "Hoverable" }
                div {
                    class: CARD_GRID,
                    for (title, blurb) in [
                        ("Latency", "p99 stays flat under load."),
                        ("Throughput", "Batched renders, zero copies."),
                        ("Memory", "Stateless leaves, nothing retained."),
                    ] {
                        Card {
                            hover: true,
                            CardContent {
                                h3 { class: CARD_TITLE, "{title}" }
                                p { class: "mt-1 {TEXT_MUTED}", "{blurb}" }
                            }
                        }
                    }
                }
            }

            // Click forwarding
            div {
                div { class: SECTION_LABEL, "Clickable" }
                Card {
                    hover: true,
                    onclick: move |_| *clicks.write() += 1,
                    CardContent {
                        p { class: TEXT_BODY, "Clicked {clicks} times" }
                    }
                }
            }

            // Caller class overrides
            div {
                div { class: SECTION_LABEL, "Overrides" }
                Card {
                    class: Some("rounded-none border-dashed".to_string()),
                    CardContent {
                        p {
                            class: TEXT_BODY,
                            "A caller class merges after the base, so rounded-none wins here."
                        }
                    }
                }
            }
        }
    }
}
