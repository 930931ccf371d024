//! Runtime-agnostic sleep for commands.
//!
//! - On **native**: Tokio's timer.
//! - On **WASM**: a `setTimeout` promise awaited through `wasm_bindgen_futures`.

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    use wasm_bindgen::JsValue;

    if duration.is_zero() {
        return;
    }

    let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().is_some_and(|window| {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
                .is_ok()
        });
        if !scheduled {
            // No window (e.g. a worker): resolve immediately.
            if let Err(err) = resolve.call0(&JsValue::NULL) {
                log::warn!("Failed to resolve timer promise: {err:?}");
            }
        }
    });

    if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
        log::warn!("Timer promise rejected: {err:?}");
    }
}
