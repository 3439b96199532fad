#![allow(warnings)]
//! Shopping List Frontend Entry Point

mod app;
mod components;
mod context;
mod dialog;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // Only fails when a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(App);
}
