#![cfg(target_arch = "wasm32")]

mod dom;
mod events;
mod stations;
mod surface;
mod transport;
mod visualizer;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::surface::Surface;
use crate::transport::Transport;
use crate::visualizer::Visualizer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("radio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("audio-visualizer")
        .ok_or_else(|| anyhow!("missing #audio-visualizer"))?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;
    let audio: web::HtmlAudioElement = document
        .get_element_by_id("audio")
        .ok_or_else(|| anyhow!("missing #audio"))?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;

    // Initial idle frame before any interaction.
    let surface = Surface::attach(canvas.clone())?;
    surface.sync_backing_size();
    surface.paint_idle();

    let viz = Rc::new(RefCell::new(Visualizer::new(surface)));
    let transport = Rc::new(Transport::new(audio));

    events::wire_canvas_toggle(&canvas, transport.clone(), viz.clone());
    events::wire_viewport_resize(transport, viz);
    events::wire_sidebar(&document);

    stations::load_stations(&document);
    Ok(())
}
