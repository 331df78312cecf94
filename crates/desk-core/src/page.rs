//! Page chrome rules around the canvas: loader timing and navigation state.

pub const LOADER_HIDE_DELAY_MS: i32 = 2500;
pub const SECTION_ACTIVATION_OFFSET: f64 = 300.0; // a section counts as current this far before its top
pub const NAV_SCROLLED_THRESHOLD: f64 = 100.0;

/// Id of the section the reader is in: the last one (in document order)
/// whose top, minus the activation offset, has scrolled past.
pub fn active_section<'a, I>(scroll_y: f64, sections: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    sections
        .into_iter()
        .filter(|(_, top)| scroll_y >= top - SECTION_ACTIVATION_OFFSET)
        .last()
        .map(|(id, _)| id)
}

#[inline]
pub fn nav_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_THRESHOLD
}

/// Section id an in-page link such as `#about` points to.
#[inline]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
