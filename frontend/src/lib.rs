pub mod api;
pub mod app;
pub mod components;
pub mod dom;
pub mod error;
pub mod form;
pub mod format;
pub mod logging;
pub mod model;
pub mod render;
pub mod settings;
pub mod state;
pub mod storage;
pub mod theme;

pub use app::App;
pub use error::{ApiError, FormError};
pub use settings::Settings;

use tracing::info;

/// Installs logging, applies the stored theme and mounts the app.
pub fn start() {
    console_error_panic_hook::set_once();
    let settings = Settings::load(&storage::LocalStorage);
    logging::init(&settings.log_level);

    let theme = app::theme_store().init();
    info!("starting expense tracker with {theme} theme");

    match dom::mount_root() {
        Some(root) => {
            yew::Renderer::<App>::with_root(root).render();
        }
        None => {
            yew::Renderer::<App>::new().render();
        }
    }
}
