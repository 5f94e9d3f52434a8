//! The frame clock: one engine frame per `requestAnimationFrame` callback.

use std::cell::RefCell;
use std::rc::Rc;

use lightcast::engine::Engine;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Start the animation loop. It runs until a frame fails to draw.
///
/// The callback holds a handle to its own slot so it can reschedule itself;
/// the resulting cycle is what keeps the loop alive.
pub fn start(engine: Rc<RefCell<Engine>>) -> Result<(), JsValue> {
    let holder: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);

    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        if let Err(err) = engine.borrow_mut().frame() {
            log::error!("frame failed, stopping animation: {err:?}");
            return;
        }
        if let Some(cb) = holder_for_cb.borrow().as_ref() {
            if let Err(err) = request_frame(cb) {
                log::error!("could not schedule next frame: {err:?}");
            }
        }
    }) as Box<dyn FnMut(f64)>);

    *holder.borrow_mut() = Some(cb);
    if let Some(cb) = holder.borrow().as_ref() {
        request_frame(cb)?;
    }
    Ok(())
}

fn request_frame(cb: &FrameCallback) -> Result<i32, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    window.request_animation_frame(cb.as_ref().unchecked_ref())
}
