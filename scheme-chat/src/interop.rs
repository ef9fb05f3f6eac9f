use web_sys::window;

/// Scroll an overflowing container so its last line is visible.
pub fn scroll_to_bottom(element_id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
    else {
        return;
    };
    element.set_scroll_top(element.scroll_height());
}

/// Read a value from `localStorage`, if storage is available.
pub fn local_storage_item(key: &str) -> Option<String> {
    let storage = window()?.local_storage().ok().flatten()?;
    storage.get_item(key).ok().flatten()
}
