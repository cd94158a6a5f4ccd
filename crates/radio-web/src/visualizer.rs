//! Spectrum renderer: owns the analysis graph, the magnitude buffer, and the
//! requestAnimationFrame loop.
//!
//! Loop lifecycle rules live in `radio_core::lifecycle`; this module only
//! maps its decisions onto real browser callbacks. The analysis graph is
//! built once, on the first user-gesture start (AutoPlay policy would cancel
//! an eagerly created AudioContext), and is never torn down afterward.

use std::cell::RefCell;
use std::rc::Rc;

use radio_core::{RenderLoop, ANALYSIS_SAMPLE_RATE, FADE_DELAY_MS, FFT_SIZE};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::surface::Surface;

/// Lazily constructed WebAudio graph: media source -> analyser -> destination.
/// The analyser tap is non-destructive; playback stays audible and undelayed.
struct AnalysisGraph {
    analyser: web::AnalyserNode,
}

impl AnalysisGraph {
    fn build(audio: &web::HtmlMediaElement) -> Result<Self, ()> {
        let opts = web::AudioContextOptions::new();
        opts.set_sample_rate(ANALYSIS_SAMPLE_RATE);
        let audio_ctx = web::AudioContext::new_with_context_options(&opts).map_err(|e| {
            log::error!("AudioContext error: {:?}", e);
        })?;
        let analyser = audio_ctx.create_analyser().map_err(|e| {
            log::error!("AnalyserNode error: {:?}", e);
        })?;
        let source = audio_ctx.create_media_element_source(audio).map_err(|e| {
            log::error!("media element source error: {:?}", e);
        })?;
        source.connect_with_audio_node(&analyser).map_err(|e| {
            log::error!("connect error: {:?}", e);
        })?;
        analyser
            .connect_with_audio_node(&audio_ctx.destination())
            .map_err(|e| {
                log::error!("connect error: {:?}", e);
            })?;
        Ok(Self { analyser })
    }
}

pub struct Visualizer {
    surface: Surface,
    graph: Option<AnalysisGraph>,
    levels: Vec<u8>,
    lifecycle: RenderLoop,
    raf_handle: Option<i32>,
}

impl Visualizer {
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            graph: None,
            levels: Vec::new(),
            lifecycle: RenderLoop::new(),
            raf_handle: None,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    fn cancel_scheduled_frame(&mut self) {
        if let Some(handle) = self.raf_handle.take() {
            if let Some(window) = web::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
    }

    fn paint_live_frame(&mut self) {
        let Some(graph) = self.graph.as_ref() else {
            return;
        };
        graph.analyser.get_byte_frequency_data(&mut self.levels);
        self.surface.paint_spectrum(&self.levels);
    }

    /// Start (or restart) the per-frame loop. Any previously scheduled frame
    /// is cancelled first, so at most one callback is ever outstanding.
    pub fn start(viz: &Rc<RefCell<Visualizer>>, audio: &web::HtmlMediaElement) {
        let gen = {
            let mut v = viz.borrow_mut();
            if v.graph.is_none() {
                let graph = match AnalysisGraph::build(audio) {
                    Ok(graph) => graph,
                    // leave the idle frame in place; playback may still be audible
                    Err(()) => return,
                };
                graph.analyser.set_fft_size(FFT_SIZE);
                v.graph = Some(graph);
            }
            let bins = match v.graph.as_ref() {
                Some(graph) => graph.analyser.frequency_bin_count() as usize,
                None => return,
            };
            if v.levels.len() != bins {
                v.levels.resize(bins, 0);
            }
            v.cancel_scheduled_frame();
            let gen = v.lifecycle.begin();
            v.surface.clear();
            gen
        };

        // The closure captures its own slot so it can reschedule itself; the
        // resulting Rc cycle keeps one closure alive per started loop for the
        // page lifetime. Superseded loops fail the generation check on their
        // next tick and never run again.
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let viz_tick = viz.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let mut v = viz_tick.borrow_mut();
            if !v.lifecycle.is_live(gen) {
                return;
            }
            // reschedule before painting so the loop survives a slow frame
            if let Some(window) = web::window() {
                if let Ok(handle) = window.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                ) {
                    v.raf_handle = Some(handle);
                }
            }
            v.paint_live_frame();
        }) as Box<dyn FnMut()>));
        if let Some(window) = web::window() {
            if let Ok(handle) = window.request_animation_frame(
                tick.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            ) {
                viz.borrow_mut().raf_handle = Some(handle);
            }
        }
    }

    /// Schedule the fade-to-idle. The delayed action captures the current
    /// generation; if a restart supersedes it before the timeout fires, the
    /// action is a no-op.
    pub fn stop(viz: &Rc<RefCell<Visualizer>>) {
        let gen = viz.borrow().lifecycle.current();
        let viz_fade = viz.clone();
        dom::set_timeout(
            move || {
                let mut v = viz_fade.borrow_mut();
                if v.lifecycle.fade_fired(gen) {
                    v.cancel_scheduled_frame();
                    v.surface.paint_idle();
                }
            },
            FADE_DELAY_MS,
        );
    }
}
