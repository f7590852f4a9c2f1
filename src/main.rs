//! Inventory Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dispatcher;
mod download;
mod error;
mod logger;
mod modal;
mod models;
mod store;
mod table;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}
