use crate::core::ParticleField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub field: Rc<RefCell<ParticleField>>,
}

/// Drags start on the canvas but move/release are tracked on the window so a
/// drag that leaves the canvas still ends cleanly.
pub fn wire_input_handlers(w: InputWiring) {
    wire_mouse(&w);
    wire_touch(&w);
}

#[inline]
fn first_touch_x(ev: &web::TouchEvent) -> Option<f32> {
    ev.touches().get(0).map(|t| t.client_x() as f32)
}

fn on_mouse(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::MouseEvent)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn on_touch(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::TouchEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::TouchEvent)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mouse(w: &InputWiring) {
    let Some(wnd) = web::window() else {
        return;
    };
    let field = w.field.clone();
    on_mouse(&w.canvas, "mousedown", move |ev: web::MouseEvent| {
        field.borrow_mut().pointer_down(ev.client_x() as f32);
        log::debug!("[mouse] begin drag at x={}", ev.client_x());
    });

    let field = w.field.clone();
    on_mouse(&wnd, "mousemove", move |ev: web::MouseEvent| {
        field.borrow_mut().pointer_move(ev.client_x() as f32);
    });

    let field = w.field.clone();
    on_mouse(&wnd, "mouseup", move |_ev: web::MouseEvent| {
        let mut f = field.borrow_mut();
        if f.is_dragging() {
            log::debug!("[mouse] end drag at rotation={:.3}", f.rotation());
        }
        f.pointer_up();
    });
}

fn wire_touch(w: &InputWiring) {
    let Some(wnd) = web::window() else {
        return;
    };
    let field = w.field.clone();
    on_touch(&w.canvas, "touchstart", move |ev: web::TouchEvent| {
        if let Some(x) = first_touch_x(&ev) {
            field.borrow_mut().pointer_down(x);
            log::debug!("[touch] begin drag at x={}", x);
        }
    });

    let field = w.field.clone();
    on_touch(&wnd, "touchmove", move |ev: web::TouchEvent| {
        if let Some(x) = first_touch_x(&ev) {
            field.borrow_mut().pointer_move(x);
        }
    });

    let field = w.field.clone();
    on_touch(&wnd, "touchend", move |_ev: web::TouchEvent| {
        let mut f = field.borrow_mut();
        if f.is_dragging() {
            log::debug!("[touch] end drag at rotation={:.3}", f.rotation());
        }
        f.pointer_up();
    });
}
