use crate::constants::STATS_INTERVAL_SECS;
use crate::core::{ParticleField, Viewport};
use crate::render::CanvasPainter;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Rolling frame-rate counter, reported to the log every few seconds.
pub struct FrameStats {
    window_start: Instant,
    frames: u32,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
        }
    }

    pub fn record(&mut self, field: &ParticleField) {
        self.frames += 1;
        let elapsed = self.window_start.elapsed().as_secs_f32();
        if elapsed >= STATS_INTERVAL_SECS {
            log::debug!(
                "[frame] {:.1} fps over {:.1}s, {} particles, hue={:.1}",
                self.frames as f32 / elapsed,
                elapsed,
                field.particles().len(),
                field.global_hue()
            );
            self.window_start = Instant::now();
            self.frames = 0;
        }
    }
}

pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField>>,
    pub canvas: web::HtmlCanvasElement,
    pub painter: CanvasPainter,
    pub stats: FrameStats,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // Canvas size follows the window, so read it every frame
        let viewport = Viewport::new(self.canvas.width() as f32, self.canvas.height() as f32);
        let mut field = self.field.borrow_mut();
        field.render_frame(&mut self.painter, viewport);
        self.stats.record(&field);
    }
}

/// Drive `frame()` from `requestAnimationFrame`, requesting the next frame
/// only after the current one has been drawn.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
