use dioxus::prelude::*;

use crate::components::header::Header;

#[component]
pub fn AppLayout(children: Element) -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-slate-950 text-slate-200",
            Header {}
            main {
                class: "p-6 max-w-6xl mx-auto",
                {children}
            }
        }
    }
}
