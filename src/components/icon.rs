use dioxus::prelude::*;
use icondata::Icon as IconData;

/// Inline SVG renderer over `icondata` glyph data.
#[component]
pub fn Icon(
    icon: &'static IconData,
    #[props(default = "w-4 h-4")] class: &'static str,
    #[props(optional)] label: Option<&'static str>,
) -> Element {
    let view_box = icon.view_box.unwrap_or("0 0 24 24");

    rsx! {
        svg {
            class: "{class}",
            view_box: "{view_box}",
            fill: "currentColor",
            "aria-label": label,
            dangerous_inner_html: "{icon.data}"
        }
    }
}
