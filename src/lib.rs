pub mod card;
pub mod config;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod drag;
pub mod input;
pub mod mouse;
pub mod page;
pub mod ping_form;
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use config::PageConfig;

fn init_logger() {
    // A failed init means a logger is already installed, so it can report it.
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            if let Err(err) = console_log::init_with_level(log::Level::Debug) {
                log::warn!("keeping existing logger: {err}");
            }
        } else {
            if let Err(err) = env_logger::try_init() {
                log::warn!("keeping existing logger: {err}");
            }
        }
    }
}

/// Mounts the page into the browser document. Off the web there is nothing to
/// mount into, so the prerendered page is written to stdout instead.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub fn run() {
    init_logger();
    let config = PageConfig::default();

    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            match page::mount(&config) {
                // Lives as long as the tab does.
                Ok(mounted) => std::mem::forget(mounted),
                Err(err) => log::error!("failed to mount page: {err:#}"),
            }
        } else {
            log::debug!("prerendering page for #{}", config.mount_id);
            println!("{}", page::render_html(&config));
        }
    }
}
