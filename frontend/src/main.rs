use frontend::config::SITE_TITLE;
use frontend::App;

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Starting {} landing page", SITE_TITLE);
    yew::Renderer::<App>::new().render();
}
