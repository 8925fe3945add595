use dioxus::prelude::*;
use tailwind_fuse::tw_merge;

use crate::styles::combinations::{
    CARD_BASE, CARD_FOOTER_DIVIDER, CARD_HEADER_DIVIDER, CARD_HOVER, CARD_SECTION,
};

/// Glass card container.
///
/// `hover` selects the animated, click-affordant variant; the caller's
/// `class` is merged last so its utilities win over the base.
#[component]
pub fn Card(
    #[props(default)] hover: bool,
    class: Option<String>,
    #[props(optional)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    // 两种渲染形态：普通块 / 悬停动画块；点击转发与 hover 无关
    if hover {
        rsx! {
            div {
                class: tw_merge!(CARD_BASE, CARD_HOVER, class),
                onclick: move |evt| {
                    if let Some(cb) = &onclick {
                        cb.call(evt);
                    }
                },
                {children}
            }
        }
    } else {
        rsx! {
            div {
                class: tw_merge!(CARD_BASE, class),
                onclick: move |evt| {
                    if let Some(cb) = &onclick {
                        cb.call(evt);
                    }
                },
                {children}
            }
        }
    }
}

/// Top card section, separated from the body by a bottom border.
#[component]
pub fn CardHeader(class: Option<String>, children: Element) -> Element {
    rsx! {
        div { class: tw_merge!(CARD_SECTION, CARD_HEADER_DIVIDER, class), {children} }
    }
}

#[component]
pub fn CardContent(class: Option<String>, children: Element) -> Element {
    rsx! {
        div { class: tw_merge!(CARD_SECTION, class), {children} }
    }
}

/// Bottom card section, separated from the body by a top border.
#[component]
pub fn CardFooter(class: Option<String>, children: Element) -> Element {
    rsx! {
        div { class: tw_merge!(CARD_SECTION, CARD_FOOTER_DIVIDER, class), {children} }
    }
}
