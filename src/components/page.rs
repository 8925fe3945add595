use dioxus::prelude::*;
use icondata::Icon as IconData;

use crate::components::icon::Icon;
use crate::styles::combinations::{PAGE_CONTAINER, PAGE_SUBTITLE, PAGE_TITLE};

/// 页面标题组件 - 统一设计
#[component]
pub fn PageTitle(
    title: String,
    subtitle: Option<String>,
    #[props(optional)] icon: Option<&'static IconData>,
) -> Element {
    rsx! {
        div {
            class: "mb-6",
            div {
                class: "flex items-center gap-3 mb-2",
                if let Some(icon_data) = icon {
                    Icon { icon: icon_data, class: "w-6 h-6 text-blue-400" }
                }
                h1 {
                    class: PAGE_TITLE,
                    "{title}"
                }
            }
            if let Some(subtitle) = subtitle {
                p {
                    class: "{PAGE_SUBTITLE} ml-9",
                    "{subtitle}"
                }
            }
        }
    }
}

/// 页面容器 - 统一间距系统
#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        div {
            class: PAGE_CONTAINER,
            {children}
        }
    }
}
