//! Smooth scrolling to page sections.
//!
//! Navigation buttons never change the URL; they ask a [`Viewport`] to bring
//! the element with a given id into view. A missing id is a silent no-op.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Something that can scroll a section into view.
pub trait Viewport {
    /// Fire-and-forget scroll to the element with id `section_id`.
    fn scroll_to(&self, section_id: &str);
}

/// The browser window, scrolling with `behavior: "smooth"`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentViewport;

impl Viewport for DocumentViewport {
    fn scroll_to(&self, section_id: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(section_id))
            else {
                return;
            };
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = section_id;
        }
    }
}

/// Scroll the browser window to `section_id`.
pub fn scroll_to_section(section_id: &str) {
    DocumentViewport.scroll_to(section_id);
}
