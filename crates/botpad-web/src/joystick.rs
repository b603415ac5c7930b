//! Joystick elements and event wiring
//!
//! A [`Joystick`] owns the base/stick pair, the coordinate engine and the
//! listeners that feed it. The engine lives in the handle rather than on the
//! stick node, one per joystick.
//!
//! ## Events
//!
//! - `dragstart`: hide the drag ghost image, then move
//! - `drag`: move
//! - `touchmove`: move using the first touch on the stick or inside the base
//! - `dragend` / `touchend`: release

use std::cell::RefCell;
use std::rc::Rc;

use botpad_core::{select_touch, JoystickConfig, JoystickEngine, StickPosition, Vec2};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, HtmlElement, HtmlImageElement, Node, Touch, TouchEvent};

use crate::dom;
use crate::error::WebError;
use crate::util::log;

/// Position callback, called with base-relative (x, y)
type PositionHandler = Box<dyn FnMut(f64, f64)>;

/// State shared by every listener of one joystick
#[derive(Clone)]
struct StickDriver {
    base: HtmlElement,
    stick: HtmlElement,
    engine: Rc<RefCell<JoystickEngine>>,
    on_change: Rc<RefCell<PositionHandler>>,
}

impl StickDriver {
    /// Feed a pointer position through the engine and move the stick
    fn move_to(&self, client_x: f64, client_y: f64) -> Result<(), WebError> {
        let base = dom::bounds(&self.base);
        let stick = dom::bounds(&self.stick);
        let update = self
            .engine
            .borrow_mut()
            .move_to(Vec2::new(client_x, client_y), base, stick);

        let style = self.stick.style();
        style.set_property("top", &format!("{}px", update.offset.y))?;
        style.set_property("left", &format!("{}px", update.offset.x))?;

        self.report(update.report);
        Ok(())
    }

    /// Drop the offsets so the base's flex centering takes over again
    fn release(&self) -> Result<(), WebError> {
        let style = self.stick.style();
        style.remove_property("top")?;
        style.remove_property("left")?;

        let rest = self.engine.borrow_mut().release(dom::bounds(&self.base));
        self.report(rest);
        Ok(())
    }

    /// Call the position handler.
    ///
    /// A handler that synchronously triggers another joystick event would
    /// re-enter here; that nested report is dropped.
    fn report(&self, position: Vec2) {
        match self.on_change.try_borrow_mut() {
            Ok(mut handler) => (*handler)(position.x, position.y),
            Err(_) => log(&format!(
                "[botpad] position {} {} dropped: handler is still running",
                position.x, position.y
            )),
        }
    }

    /// Whether a touch landed on the stick or anywhere inside the base
    fn owns_touch(&self, touch: &Touch) -> bool {
        let Some(target) = touch.target() else {
            return false;
        };
        let Some(node) = target.dyn_ref::<Node>() else {
            return false;
        };
        let stick: &Node = self.stick.as_ref();
        node.is_same_node(Some(stick)) || self.base.contains(Some(node))
    }
}

/// Listener closures; must be stored to keep them alive
struct Listeners {
    on_drag_start: Closure<dyn FnMut(DragEvent)>,
    on_drag: Closure<dyn FnMut(DragEvent)>,
    on_touch_move: Closure<dyn FnMut(TouchEvent)>,
    on_release: Closure<dyn FnMut(Event)>,
}

impl Listeners {
    fn attach(driver: &StickDriver) -> Result<Self, WebError> {
        // Empty image used as the drag ghost so nothing follows the cursor
        let ghost: HtmlImageElement = dom::create_element("img")?;

        let d = driver.clone();
        let on_drag_start = Closure::wrap(Box::new(move |event: DragEvent| {
            if let Some(transfer) = event.data_transfer() {
                transfer.set_drag_image(&ghost, 0, 0);
            }
            let pointer = dom::client_point(&event);
            if let Err(e) = d.move_to(pointer.x, pointer.y) {
                log(&format!("[botpad] dragstart failed: {}", e));
            }
        }) as Box<dyn FnMut(DragEvent)>);

        let d = driver.clone();
        let on_drag = Closure::wrap(Box::new(move |event: DragEvent| {
            let pointer = dom::client_point(&event);
            if let Err(e) = d.move_to(pointer.x, pointer.y) {
                log(&format!("[botpad] drag failed: {}", e));
            }
        }) as Box<dyn FnMut(DragEvent)>);

        let d = driver.clone();
        let on_touch_move = Closure::wrap(Box::new(move |event: TouchEvent| {
            let touches = event.touches();
            let active = (0..touches.length()).filter_map(|i| touches.item(i));
            if let Some(touch) = select_touch(active, |t| d.owns_touch(t)) {
                let pointer = dom::client_point(&touch);
                if let Err(e) = d.move_to(pointer.x, pointer.y) {
                    log(&format!("[botpad] touchmove failed: {}", e));
                }
            }
        }) as Box<dyn FnMut(TouchEvent)>);

        let d = driver.clone();
        let on_release = Closure::wrap(Box::new(move |_event: Event| {
            if let Err(e) = d.release() {
                log(&format!("[botpad] release failed: {}", e));
            }
        }) as Box<dyn FnMut(Event)>);

        let stick = &driver.stick;
        stick.add_event_listener_with_callback("dragstart", on_drag_start.as_ref().unchecked_ref())?;
        stick.add_event_listener_with_callback("drag", on_drag.as_ref().unchecked_ref())?;
        stick.add_event_listener_with_callback("dragend", on_release.as_ref().unchecked_ref())?;
        stick.add_event_listener_with_callback("touchmove", on_touch_move.as_ref().unchecked_ref())?;
        stick.add_event_listener_with_callback("touchend", on_release.as_ref().unchecked_ref())?;

        Ok(Self {
            on_drag_start,
            on_drag,
            on_touch_move,
            on_release,
        })
    }

    /// Hand the closures to the JS garbage collector for good
    fn forget(self) {
        self.on_drag_start.forget();
        self.on_drag.forget();
        self.on_touch_move.forget();
        self.on_release.forget();
    }
}

/// A virtual joystick: a base element with a draggable stick inside.
///
/// The elements are not attached anywhere; put `base` into the page
/// yourself. Listeners built with [`Joystick::new`] stay active for as long
/// as this handle lives; after [`Joystick::release_listeners`] they live
/// as long as the elements.
#[wasm_bindgen]
pub struct Joystick {
    driver: StickDriver,
    listeners: Option<Listeners>,
}

impl Joystick {
    /// Build a joystick and wire its listeners.
    ///
    /// Fails before creating any element if a required size is missing.
    pub fn new(
        config: &JoystickConfig,
        on_change: impl FnMut(f64, f64) + 'static,
    ) -> Result<Self, WebError> {
        config.validate()?;

        let base: HtmlElement = dom::create_element("div")?;
        dom::apply_styles(&base, &config.base_styles())?;

        let stick: HtmlElement = dom::create_element("div")?;
        stick.set_draggable(true);
        dom::apply_styles(&stick, &config.stick_styles())?;

        base.append_child(&stick)?;

        let driver = StickDriver {
            base,
            stick,
            engine: Rc::new(RefCell::new(JoystickEngine::new())),
            on_change: Rc::new(RefCell::new(Box::new(on_change))),
        };
        let listeners = Listeners::attach(&driver)?;

        Ok(Self {
            driver,
            listeners: Some(listeners),
        })
    }

    /// Stored stick position, `None` before the first move
    pub fn stick_position(&self) -> Option<StickPosition> {
        self.driver.engine.borrow().position()
    }

    /// Feed a pointer position as if a drag event had fired
    pub fn move_to(&self, client_x: f64, client_y: f64) -> Result<(), WebError> {
        self.driver.move_to(client_x, client_y)
    }

    /// End the gesture as if a drag-end event had fired
    pub fn release(&self) -> Result<(), WebError> {
        self.driver.release()
    }

    /// Give up the handle, keeping the listeners alive with the elements.
    ///
    /// Returns `(base, stick)`.
    pub fn into_elements(mut self) -> (HtmlElement, HtmlElement) {
        self.release_listeners();
        (self.driver.base, self.driver.stick)
    }

    /// Tie the listeners' lifetime to the elements instead of this handle.
    ///
    /// Dropping (or `free()`ing) the handle afterwards leaves the joystick
    /// working. Calling it again does nothing.
    pub fn release_listeners(&mut self) {
        if let Some(listeners) = self.listeners.take() {
            listeners.forget();
        }
    }

    /// Whether this handle still owns its listeners
    pub fn owns_listeners(&self) -> bool {
        self.listeners.is_some()
    }
}

#[wasm_bindgen]
impl Joystick {
    /// Base element (bounds of the stick's range of motion)
    #[wasm_bindgen(getter)]
    pub fn base(&self) -> HtmlElement {
        self.driver.base.clone()
    }

    /// Stick element (the draggable knob)
    #[wasm_bindgen(getter)]
    pub fn stick(&self) -> HtmlElement {
        self.driver.stick.clone()
    }

    /// Stored position as `{"x","y","centerOffset"}` JSON, or undefined
    #[wasm_bindgen(js_name = positionJson)]
    pub fn position_json(&self) -> Option<String> {
        self.stick_position()
            .and_then(|p| serde_json::to_string(&p).ok())
    }
}
