//! WASM entry point. Hydrates the server-rendered page so the header's
//! observers, theme listener and click handler come alive.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Installs browser logging and the panic hook, then hydrates
/// `app::component` over the server-rendered body.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::debug!("hydrating site header");

    leptos::mount::hydrate_body(component);
}
