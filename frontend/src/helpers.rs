//! Diagnostics and transient user feedback shared by the catalog views.

use common::error::ApiError;

/// Displays a temporary notification at the bottom of the screen.
///
/// The toast is a `div.toast` appended to `<body>` that removes itself after
/// three seconds; its look comes from `styles.css`. Text is set with
/// `set_text_content`, so server-provided names never reach the DOM as markup.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    toast.set_class_name("toast");

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            toast.remove();
        });
    }
}

/// Writes a failed API call to the console.
pub fn log_failure(action: &str, error: &ApiError) {
    gloo_console::error!(format!("Error {}: {}", action, error));
}

/// Logs the failure and tells the user the action did not go through.
pub fn report_failure(action: &str, error: &ApiError, message: &str) {
    log_failure(action, error);
    show_toast(message);
}
