#![allow(warnings)]
//! Problem Board Frontend Entry Point

mod models;
mod commands;
mod actions;
mod filter;
mod forms;
mod polling;
mod routes;
mod logging;
mod config;
mod dialogs;
mod notify;
mod context;
mod store;
mod controller;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
