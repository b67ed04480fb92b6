//! Discovering number inputs and wrapping them with affixes.

use std::rc::Rc;

use stepper_core::{
    AffixPair, Direction, PressTiming, AFFIX_BINDINGS, INPUT_CLASS, WRAPPER_CLASS,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlInputElement};

use crate::config::StepperConfig;
use crate::dom::{DomField, DomPressEvent, WindowScheduler};
use crate::error::EnhanceError;

type DomAffixPair = AffixPair<DomField, WindowScheduler>;

/// Enhance every matching number input in the current document.
///
/// Returns how many inputs were newly enhanced. Inputs that fail to enhance are
/// logged and skipped.
pub fn enhance_document(config: &StepperConfig) -> Result<usize, EnhanceError> {
    config.validate()?;

    let window = web_sys::window().ok_or(EnhanceError::MissingWindow)?;
    let document = window.document().ok_or(EnhanceError::MissingDocument)?;
    let scheduler = Rc::new(WindowScheduler::new(window));
    let timing = config.timing();

    let mut enhanced = 0;
    for input in find_number_inputs(&document, &config.selector)? {
        match wrap_input(&document, input, scheduler.clone(), timing) {
            Ok(true) => enhanced += 1,
            Ok(false) => {}
            Err(e) => log::warn!("Skipping number input: {}", e),
        }
    }

    log::debug!("Enhanced {} number inputs", enhanced);
    Ok(enhanced)
}

/// All elements matching `selector` that really are number inputs
fn find_number_inputs(
    document: &Document,
    selector: &str,
) -> Result<Vec<HtmlInputElement>, EnhanceError> {
    let nodes = document.query_selector_all(selector)?;

    let mut inputs = Vec::new();
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else {
            continue;
        };
        if let Ok(input) = node.dyn_into::<HtmlInputElement>() {
            if input.type_() == "number" {
                inputs.push(input);
            }
        }
    }
    Ok(inputs)
}

/// Wrap `input` in a span next to its two affixes and wire them up.
///
/// Returns `Ok(false)` when the input was left alone: already enhanced, or
/// detached from the document.
fn wrap_input(
    document: &Document,
    input: HtmlInputElement,
    scheduler: Rc<WindowScheduler>,
    timing: PressTiming,
) -> Result<bool, EnhanceError> {
    if input.class_list().contains(INPUT_CLASS) {
        return Ok(false);
    }
    let Some(parent) = input.parent_element() else {
        log::debug!("Number input has no parent, not enhancing");
        return Ok(false);
    };

    let wrapper = document.create_element("span")?;
    parent.replace_child(&wrapper, &input)?;

    input.class_list().add_1(INPUT_CLASS)?;
    wrapper.class_list().add_1(WRAPPER_CLASS)?;
    wrapper.append_child(&input)?;

    let affixes = Rc::new(AffixPair::new(
        Rc::new(DomField::new(input)),
        scheduler,
        timing,
    ));

    for direction in Direction::ALL {
        let affix = document.create_element("span")?;
        affix.class_list().add_1(direction.affix_class())?;
        wrapper.append_child(&affix)?;
        bind_affix(&affix, &affixes, direction)?;
    }

    Ok(true)
}

/// Listen for mouse and touch gestures on one affix
fn bind_affix(
    affix: &Element,
    affixes: &Rc<DomAffixPair>,
    direction: Direction,
) -> Result<(), EnhanceError> {
    for (event_type, action) in AFFIX_BINDINGS {
        let affixes = affixes.clone();
        let listener = Closure::wrap(Box::new(move |event: Event| {
            affixes.handle(direction, action, &DomPressEvent(event));
        }) as Box<dyn FnMut(Event)>);

        affix.add_event_listener_with_callback(event_type, listener.as_ref().unchecked_ref())?;
        listener.forget(); // Listeners live as long as the affix
    }
    Ok(())
}
