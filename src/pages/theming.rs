use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardContent, CardHeader};
use crate::components::page::{PageContainer, PageTitle};
use crate::hooks::use_persisted;
use crate::styles::combinations::{CARD_GRID, CARD_TITLE, SECTION_LABEL};
use crate::styles::styles::{FLEX_BETWEEN, TEXT_BODY};

pub const THEME_STORAGE_KEY: &str = "slate-ui.theme";

/// Accent palettes the demo can re-skin cards with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Slate,
    Blue,
    Emerald,
    Violet,
}

impl Accent {
    pub const ALL: [Accent; 4] = [Accent::Slate, Accent::Blue, Accent::Emerald, Accent::Violet];

    pub fn label(&self) -> &'static str {
        match self {
            Accent::Slate => "Slate",
            Accent::Blue => "Blue",
            Accent::Emerald => "Emerald",
            Accent::Violet => "Violet",
        }
    }

    /// Card class overrides; merged after the base so the accent wins.
    pub fn card_class(&self) -> &'static str {
        match self {
            Accent::Slate => "",
            Accent::Blue => "from-blue-900/40 to-slate-900/60 border-blue-500/40",
            Accent::Emerald => "from-emerald-900/40 to-slate-900/60 border-emerald-500/40",
            Accent::Violet => "from-violet-900/40 to-slate-900/60 border-violet-500/40",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemePrefs {
    pub accent: Accent,
}

#[component]
pub fn Theming() -> Element {
    let prefs = use_persisted::<ThemePrefs>(THEME_STORAGE_KEY);
    let selected = prefs.get().accent;

    rsx! {
        PageContainer {
            PageTitle {
                title: "Theming".to_string(),
                subtitle: Some("Accent overrides ride on the class prop and survive reloads".to_string()),
                icon: Some(&icondata::AiBgColorsOutlined),
            }

            div {
                div { class: SECTION_LABEL, "Accent" }
                div {
                    class: CARD_GRID,
                    for accent in Accent::ALL {
                        Card {
                            hover: true,
                            class: Some(accent.card_class().to_string()),
                            onclick: {
                                let mut prefs = prefs.clone();
                                move |_| prefs.set(ThemePrefs { accent })
                            },
                            CardContent {
                                div {
                                    class: FLEX_BETWEEN,
                                    h3 { class: CARD_TITLE, "{accent.label()}" }
                                    if accent == selected {
                                        span { class: "text-blue-400 font-semibold", "✓" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div {
                div { class: SECTION_LABEL, "Preview" }
                Card {
                    class: Some(selected.card_class().to_string()),
                    CardHeader {
                        h3 { class: CARD_TITLE, "{selected.label()} accent" }
                    }
                    CardContent {
                        p {
                            class: TEXT_BODY,
                            "The picker stores its choice in local storage; reload to see it stick."
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tailwind_fuse::tw_merge;

    use super::*;
    use crate::styles::combinations::CARD_BASE;

    #[test]
    fn test_theme_prefs_round_trip() {
        let prefs = ThemePrefs {
            accent: Accent::Emerald,
        };
        let text = serde_json::to_string(&prefs).unwrap();
        assert_eq!(text, r#"{"accent":"emerald"}"#);

        let back: ThemePrefs = serde_json::from_str(&text).unwrap();
        assert_eq!(prefs, back);
    }

    #[test]
    fn test_unknown_accent_fails_decode() {
        let parsed: std::result::Result<ThemePrefs, _> = serde_json::from_str(r#"{"accent":"neon"}"#);
        assert!(parsed.is_err());
        assert_eq!(ThemePrefs::default().accent, Accent::Slate);
    }

    #[test]
    fn test_accent_overrides_base_gradient() {
        for accent in Accent::ALL {
            let merged = tw_merge!(CARD_BASE, accent.card_class());
            assert!(merged.contains("backdrop-blur-sm"), "{accent:?}");
            if accent != Accent::Slate {
                assert!(
                    !merged.contains("from-slate-800/50"),
                    "{accent:?} should replace the base gradient start"
                );
            }
        }
    }
}
