use crate::constants::*;
use crate::core::{parse_count_input, parse_float_input, FieldConfig, ParticleField};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(CONTROLS_PANEL_ID)
        .map(|el| el.class_list().contains(HIDDEN_CLASS))
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(CONTROLS_PANEL_ID) {
        _ = el.class_list().toggle(HIDDEN_CLASS);
    }
}

fn read_float(document: &web::Document, element_id: &str) -> Option<f32> {
    dom::input_by_id(document, element_id).and_then(|i| parse_float_input(&i.value()))
}

/// Start from the defaults and take whatever the page's inputs currently say.
pub fn initial_config(document: &web::Document) -> FieldConfig {
    let defaults = FieldConfig::default();
    FieldConfig {
        speed: read_float(document, SPEED_INPUT_ID).unwrap_or(defaults.speed),
        size: read_float(document, SIZE_INPUT_ID).unwrap_or(defaults.size),
        base_hue: read_float(document, COLOR_INPUT_ID).unwrap_or(defaults.base_hue),
        particle_count: dom::input_by_id(document, COUNT_INPUT_ID)
            .and_then(|i| parse_count_input(&i.value()))
            .unwrap_or(defaults.particle_count),
    }
}

fn wire_float_input(
    document: &web::Document,
    element_id: &'static str,
    field: &Rc<RefCell<ParticleField>>,
    apply: fn(&mut ParticleField, f32),
) {
    let field = field.clone();
    dom::add_input_listener(document, element_id, move |value| {
        match parse_float_input(&value) {
            Some(v) => {
                apply(&mut field.borrow_mut(), v);
                log::debug!("[controls] {}={}", element_id, v);
            }
            None => log::warn!("[controls] ignoring {}={:?}", element_id, value),
        }
    });
}

pub fn wire_controls(document: &web::Document, field: Rc<RefCell<ParticleField>>) {
    let doc = document.clone();
    dom::add_click_listener(document, TOGGLE_CONTROLS_ID, move || toggle(&doc));

    wire_float_input(document, SPEED_INPUT_ID, &field, ParticleField::set_speed);
    wire_float_input(document, SIZE_INPUT_ID, &field, ParticleField::set_size);
    wire_float_input(document, COLOR_INPUT_ID, &field, ParticleField::set_base_hue);

    dom::add_input_listener(document, COUNT_INPUT_ID, move |value| {
        match parse_count_input(&value) {
            Some(count) => field.borrow_mut().set_particle_count(count),
            None => log::warn!("[controls] ignoring count={:?}", value),
        }
    });
}
