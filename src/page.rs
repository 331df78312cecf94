use crate::constants::{LOADER_ID, NAV_ID};
use crate::dom;
use desk_core::page::{active_section, anchor_target, nav_is_scrolled, LOADER_HIDE_DELAY_MS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_page_chrome(window: &web::Window, document: &web::Document) {
    wire_loader(window, document);
    wire_anchor_scroll(document);
    wire_nav_state(window, document);
}

/// Hide the loading overlay a fixed delay after the page has loaded.
fn wire_loader(window: &web::Window, document: &web::Document) {
    let schedule_hide = {
        let window = window.clone();
        move || {
            let hide = Closure::once(|| {
                if let Some(el) = dom::window_document().and_then(|d| d.get_element_by_id(LOADER_ID)) {
                    dom::set_class(&el, "hidden", true);
                    log::info!("[page] loader hidden");
                }
            });
            _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                hide.as_ref().unchecked_ref(),
                LOADER_HIDE_DELAY_MS,
            );
            hide.forget();
        }
    };

    if document.ready_state() == "complete" {
        schedule_hide();
        return;
    }
    let on_load = Closure::once(schedule_hide);
    _ = window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
    on_load.forget();
}

/// In-page links scroll smoothly instead of jumping.
fn wire_anchor_scroll(document: &web::Document) {
    for anchor in dom::query_all::<web::Element>(document, "a[href^=\"#\"]") {
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            let target = anchor_target(&href)
                .and_then(|id| dom::window_document().and_then(|d| d.get_element_by_id(id)));
            if let Some(target) = target {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        }) as Box<dyn FnMut(_)>);
        _ = anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Highlight the nav link of the section in view and mark the nav once
/// the page has scrolled.
fn wire_nav_state(window: &web::Window, document: &web::Document) {
    let sections = dom::query_all::<web::HtmlElement>(document, "section");
    let links = dom::query_all::<web::Element>(document, ".nav-link");
    let nav = document.get_element_by_id(NAV_ID);
    if nav.is_none() {
        log::warn!("[page] missing #{}", NAV_ID);
    }

    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        let tops: Vec<(String, f64)> = sections
            .iter()
            .map(|s| (s.id(), s.offset_top() as f64))
            .collect();
        let current = active_section(scroll_y, tops.iter().map(|(id, top)| (id.as_str(), *top)));
        for link in &links {
            let is_current = match (current, link.get_attribute("href")) {
                (Some(id), Some(href)) => anchor_target(&href) == Some(id),
                _ => false,
            };
            dom::set_class(link, "active", is_current);
        }
        if let Some(nav) = &nav {
            dom::set_class(nav, "scrolled", nav_is_scrolled(scroll_y));
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}
