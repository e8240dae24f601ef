use crate::controls;
use crate::core::ParticleField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleControls,
    Reseed,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "h" | "H" => Some(KeyAction::ToggleControls),
        "r" | "R" => Some(KeyAction::Reseed),
        _ => None,
    }
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    document: &web::Document,
    field: &Rc<RefCell<ParticleField>>,
) {
    // Leave typing into the number inputs alone
    if ev
        .target()
        .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        .is_some()
    {
        return;
    }
    match action_for_key(&ev.key()) {
        Some(KeyAction::ToggleControls) => {
            controls::toggle(document);
            log::info!("[keys] controls hidden={}", controls::is_hidden(document));
            ev.prevent_default();
        }
        Some(KeyAction::Reseed) => {
            let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
            field.borrow_mut().reseed(seed);
            log::info!("[keys] reseeded layout with seed {}", seed);
        }
        None => {}
    }
}

pub fn wire_global_keydown(document: web::Document, field: Rc<RefCell<ParticleField>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &document, &field);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
