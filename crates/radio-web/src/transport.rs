//! Playback transport controller: owns the play/pause flag, commands the
//! host `<audio>` element, and is the only trigger for starting or stopping
//! the renderer's loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use radio_core::audio_stream_url;
use web_sys as web;

use crate::visualizer::Visualizer;

pub struct Transport {
    audio: web::HtmlAudioElement,
    playing: Cell<bool>,
}

impl Transport {
    pub fn new(audio: web::HtmlAudioElement) -> Self {
        Self {
            audio,
            playing: Cell::new(false),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing.get()
    }

    /// Point the element at the device stream and begin playback. Safe to
    /// call only when not already streaming (the element contract).
    fn begin_stream(&self) {
        if let Some(window) = web::window() {
            let location = window.location();
            if let (Ok(protocol), Ok(hostname)) = (location.protocol(), location.hostname()) {
                self.audio.set_preload("none");
                self.audio.set_src(&audio_stream_url(&protocol, &hostname));
                self.audio.load();
                if let Err(e) = self.audio.play() {
                    // surfaces as silence; the visualizer stays on zeroed bins
                    log::error!("audio play error: {:?}", e);
                }
            }
        }
    }

    /// Discard the stream rather than pausing it, so the device connection
    /// closes and no bandwidth is wasted while idle.
    fn end_stream(&self) {
        let src = self.audio.src();
        self.audio.set_src(&src);
        let _ = self.audio.pause();
    }

    /// User gesture: flip between streaming+rendering and idle.
    pub fn toggle(&self, viz: &Rc<RefCell<Visualizer>>) {
        if self.playing.get() {
            self.end_stream();
            Visualizer::stop(viz);
        } else {
            self.begin_stream();
            Visualizer::start(viz, &self.audio);
        }
        self.playing.set(!self.playing.get());
    }

    /// Viewport change: resize the surface unconditionally, then either
    /// restart the loop against the new geometry or repaint the idle frame so
    /// the paused view is never stale.
    pub fn on_resize(&self, viz: &Rc<RefCell<Visualizer>>) {
        viz.borrow().surface().sync_backing_size();
        if self.playing.get() {
            Visualizer::start(viz, &self.audio);
        } else {
            viz.borrow().surface().paint_idle();
        }
    }
}
