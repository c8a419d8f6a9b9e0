use chrono::{Local, NaiveDate};
use tracing::error;

pub const MOUNT_ID: &str = "app";

/// Blocking notification.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        error!("no window, dropping alert: {message}");
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        error!("alert failed: {err:?}");
    }
}

/// Blocking yes/no prompt. Anything but an explicit yes counts as no.
pub fn confirm(message: &str) -> bool {
    let Some(window) = web_sys::window() else {
        error!("no window, cannot confirm: {message}");
        return false;
    };
    window.confirm_with_message(message).unwrap_or_else(|err| {
        error!("confirm failed: {err:?}");
        false
    })
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The element the app renders into, or `<body>` when the page lacks it.
pub fn mount_root() -> Option<web_sys::Element> {
    let document = web_sys::window().and_then(|window| window.document())?;
    match document.get_element_by_id(MOUNT_ID) {
        Some(element) => Some(element),
        None => {
            error!("#{MOUNT_ID} not found, mounting on body");
            document.body().map(Into::into)
        }
    }
}
