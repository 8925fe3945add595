use dioxus::prelude::*;
use dioxus_router::{use_route, Link};
use icondata::Icon as IconData;

use crate::app::Route;
use crate::components::icon::Icon;

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            class: "sticky top-0 z-40 bg-slate-900/80 backdrop-blur border-b border-slate-700/50",
            div {
                class: "px-6 py-4",
                div {
                    class: "flex items-center justify-between",
                    // Logo and Brand
                    div {
                        class: "flex items-center space-x-4",
                        Link {
                            to: Route::ShowcasePage {},
                            class: "flex items-center space-x-3",
                            Icon {
                                icon: &icondata::AiCreditCardOutlined,
                                class: "w-6 h-6 text-blue-400"
                            }
                            div {
                                class: "flex flex-col",
                                span {
                                    class: "text-lg font-bold text-slate-100",
                                    "Slate UI"
                                }
                                span {
                                    class: "text-xs text-slate-400",
                                    "Glass Card Kit"
                                }
                            }
                        }
                    }

                    // Top Navigation Tabs
                    nav {
                        class: "flex items-center space-x-1",
                        NavTab {
                            to: Route::ShowcasePage {},
                            icon: &icondata::AiAppstoreOutlined,
                            label: "Showcase"
                        }
                        NavTab {
                            to: Route::ThemingPage {},
                            icon: &icondata::AiBgColorsOutlined,
                            label: "Theming"
                        }
                    }

                    // Right side controls
                    div {
                        class: "flex items-center space-x-4",
                        a {
                            href: "https://github.com/reiase/slate-ui",
                            target: "_blank",
                            class: "flex items-center space-x-2 text-sm text-slate-400 hover:text-blue-400 transition-colors",
                            Icon { icon: &icondata::AiGithubOutlined, class: "w-4 h-4" }
                            span { class: "hidden lg:inline", "GitHub" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavTab(to: Route, icon: &'static IconData, label: &'static str) -> Element {
    let route = use_route::<Route>();
    let is_active = route == to;

    let class_str = if is_active {
        "flex items-center space-x-2 px-3 py-2 rounded-lg text-sm font-medium transition-colors bg-blue-600/30 text-blue-100"
    } else {
        "flex items-center space-x-2 px-3 py-2 rounded-lg text-sm font-medium transition-colors text-slate-300 hover:bg-slate-800/50 hover:text-blue-100"
    };

    rsx! {
        Link {
            to: to,
            class: class_str,
            Icon { icon, class: "w-4 h-4" }
            span {
                class: "hidden lg:inline",
                "{label}"
            }
        }
    }
}
