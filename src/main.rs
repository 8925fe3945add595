use dioxus::prelude::*;

use slate_ui::app::App;

fn main() {
    launch(App);
}
