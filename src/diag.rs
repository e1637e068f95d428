//! Console diagnostics for both wasm and native test builds.
//!
//! Rejected inputs (out-of-range slide, unknown case-study key, unmatched
//! CTA label) are logged and absorbed, never surfaced as UI errors. The
//! analytics events ride the same channel.

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(msg: &str) {
    eprintln!("warn: {msg}");
}

#[cfg(target_arch = "wasm32")]
pub fn info(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn info(msg: &str) {
    eprintln!("{msg}");
}
