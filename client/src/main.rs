//! Browser entry point for the pain-diagram annotation tool.
//!
//! Compiled to WebAssembly and mounted client-side; there is no server
//! component. Panics are routed to the console, logging goes through the
//! `log` facade, and the application tree takes over `<body>`.

mod app;
mod components;
mod config;
mod pages;
mod state;
mod util;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(App);
}
