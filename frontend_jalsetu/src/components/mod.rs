// frontend_jalsetu/src/components/mod.rs

pub mod awareness;
pub mod hero;
pub mod layout;
pub mod loading;
pub mod navbar;
pub mod potential_form;
pub mod report_summary;

pub const AWARENESS_ID: &str = "awareness";

/// Smoothly scroll to the element with `id`. Returns false when it is not on the page.
pub fn scroll_to_section(id: &str) -> bool {
    match gloo::utils::document().get_element_by_id(id) {
        Some(element) => {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}
