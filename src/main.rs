mod api;
mod app;
mod components;
mod config;
mod error;
mod hooks;
mod logging;
mod models;
mod pages;
mod pricing;
mod routes;
mod store;

fn main() {
    console_error_panic_hook::set_once();
    let cfg = config::config();
    gloo::console::log!(format!(
        "Video portal starting against {} ({} clips per page)",
        cfg.api_base_url, cfg.per_page
    ));
    yew::Renderer::<app::App>::new().render();
}
