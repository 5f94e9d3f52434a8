//! DOM event wiring: pointer input on the canvas and window resizes.
//!
//! Closures are leaked with `forget`; they live as long as the page.

use std::cell::RefCell;
use std::rc::Rc;

use lightcast::engine::Engine;
use lightcast::geom::Point;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlCanvasElement, PointerEvent, Window};

use crate::dom;

pub fn install(window: &Window, canvas: &HtmlCanvasElement, engine: &Rc<RefCell<Engine>>) -> Result<(), JsValue> {
    let on_move = {
        let engine = Rc::clone(engine);
        Closure::wrap(Box::new(move |ev: PointerEvent| {
            engine.borrow_mut().on_pointer_move(pointer_point(&ev));
        }) as Box<dyn FnMut(PointerEvent)>)
    };
    canvas.add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    let on_down = {
        let engine = Rc::clone(engine);
        Closure::wrap(Box::new(move |ev: PointerEvent| {
            let mut engine = engine.borrow_mut();
            // Touch has no hover, so move the light to the tap before switching shape.
            engine.on_pointer_move(pointer_point(&ev));
            engine.on_click();
        }) as Box<dyn FnMut(PointerEvent)>)
    };
    canvas.add_event_listener_with_callback("pointerdown", on_down.as_ref().unchecked_ref())?;
    on_down.forget();

    let on_resize = {
        let engine = Rc::clone(engine);
        let window = window.clone();
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || match dom::fit_to_window(&window, &canvas) {
            Ok(vp) => engine.borrow_mut().set_viewport(vp.width, vp.height, vp.dpr),
            Err(err) => log::warn!("resize ignored: {err:?}"),
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    Ok(())
}

fn pointer_point(ev: &PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}
