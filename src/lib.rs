#![cfg(target_arch = "wasm32")]
use crate::constants::CANVAS_ID;
use crate::core::ParticleField;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod controls;
mod core;
mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-tree starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Backing store tracks window.innerWidth/innerHeight
    dom::wire_canvas_resize(&canvas);
    let painter = render::CanvasPainter::new(&canvas)?;

    let config = controls::initial_config(&document);
    let seed: u64 = rand::thread_rng().gen();
    log::info!(
        "[field] speed={} size={} hue={} count={} seed={}",
        config.speed,
        config.size,
        config.base_hue,
        config.particle_count,
        seed
    );
    let field = Rc::new(RefCell::new(ParticleField::new(config, seed)));

    controls::wire_controls(&document, field.clone());
    events::wire_global_keydown(document.clone(), field.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        field: field.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        canvas,
        painter,
        stats: frame::FrameStats::new(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
