//! Scroll today's forecast table to the current hour.
//!
//! Past hours carry `cell_past`; the first header cell without it is the
//! current hour. Its `.table-container` scrolls so that cell starts at the
//! container's horizontal center.

#[cfg(test)]
#[path = "hour_scroll_test.rs"]
mod hour_scroll_test;

/// First header cell that is not in the past.
pub const CURRENT_HOUR_SELECTOR: &str = "th.cell_past ~ th:not(.cell_past)";

/// Horizontally scrollable wrapper around the forecast table.
pub const CONTAINER_SELECTOR: &str = ".table-container";

/// Scroll offset that puts a cell's left edge at the container center.
pub fn centered_scroll_left(cell_offset_left: f64, container_width: f64) -> f64 {
    cell_offset_left - container_width / 2.0
}

/// Smooth-scroll the forecast table, if the page has one.
pub fn install() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(cell) = document
            .query_selector(CURRENT_HOUR_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let Some(container) = cell
            .closest(CONTAINER_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };

        let left = centered_scroll_left(
            f64::from(cell.offset_left()),
            f64::from(container.offset_width()),
        );
        let options = web_sys::ScrollToOptions::new();
        options.set_left(left);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        container.scroll_with_scroll_to_options(&options);
    }
}
