//! Input-event bindings: the dispatch surface between DOM triggers and the
//! transport/renderer. No ordering dependency between resize and toggle other
//! than "most recent play state wins".

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::stations;
use crate::transport::Transport;
use crate::visualizer::Visualizer;

/// Click on the visualizer canvas toggles playback.
pub fn wire_canvas_toggle(
    canvas: &web::HtmlCanvasElement,
    transport: Rc<Transport>,
    viz: Rc<RefCell<Visualizer>>,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        transport.toggle(&viz);
    }) as Box<dyn FnMut()>);
    let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Window resize keeps the surface and spectrum geometry in line with the
/// viewport, whatever the play state.
pub fn wire_viewport_resize(transport: Rc<Transport>, viz: Rc<RefCell<Visualizer>>) {
    dom::add_resize_listener(move || {
        transport.on_resize(&viz);
    });
}

/// Sidebar controls: header collapses the list, scan button rescans.
pub fn wire_sidebar(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, "station-list-header", move || {
        stations::toggle_sidebar(&doc);
    });
    let doc = document.clone();
    dom::add_click_listener(document, "scan-button", move || {
        stations::scan_stations(&doc);
    });
}
