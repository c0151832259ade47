//! Todo-List Demo Entry Point

mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    todolist_ui::logging::init(log::LevelFilter::Debug);
    mount_to_body(App);
}
