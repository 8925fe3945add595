use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use crate::components::layout::AppLayout;
use crate::pages::{showcase::Showcase, theming::Theming};

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    ShowcasePage {},
    #[route("/theming")]
    ThemingPage {},
}

#[component]
pub fn ShowcasePage() -> Element {
    rsx! { AppLayout { Showcase {} } }
}

#[component]
pub fn ThemingPage() -> Element {
    rsx! { AppLayout { Theming {} } }
}

#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
