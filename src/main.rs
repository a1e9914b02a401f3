#![allow(warnings)]
//! Backpack Builder Frontend Entry Point

mod app;
mod builder;
mod catalog;
mod components;
mod context;
mod models;
mod print;
mod saved;
mod share;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
