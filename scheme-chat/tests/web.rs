//! Browser-side checks for the DOM and storage helpers.
//!
//! Run with `wasm-pack test --headless --firefox scheme-chat`.

#![cfg(target_arch = "wasm32")]

use scheme_chat::api::ENDPOINT_STORAGE_KEY;
use scheme_chat::interop::{local_storage_item, scroll_to_bottom};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn scroll_on_missing_element_is_a_no_op() {
    scroll_to_bottom("no-such-element");
}

#[wasm_bindgen_test]
fn stored_endpoint_is_read_back() {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .expect("localStorage available");

    storage.remove_item(ENDPOINT_STORAGE_KEY).unwrap();
    assert_eq!(local_storage_item(ENDPOINT_STORAGE_KEY), None);

    storage
        .set_item(ENDPOINT_STORAGE_KEY, "https://schemes.example.in/ask")
        .unwrap();
    assert_eq!(
        local_storage_item(ENDPOINT_STORAGE_KEY).as_deref(),
        Some("https://schemes.example.in/ask")
    );
    storage.remove_item(ENDPOINT_STORAGE_KEY).unwrap();
}
