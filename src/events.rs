use crate::input::{self, HostClock};
use mosaic_core::{ReleaseTicket, Session, SPEED_RELEASE_GRACE_MS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub session: Rc<RefCell<Session>>,
    pub clock: HostClock,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_click(&w);
}

fn add_window_listener(event: &str, closure: Closure<dyn FnMut(web::PointerEvent)>) {
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(wnd) = web::window() else {
            return;
        };
        let (Some(p), Some(vp)) = (input::pointer_client(&ev), input::viewport_size(&wnd)) else {
            return;
        };
        if w.session.borrow_mut().pointer_down(p.x, p.y, vp.x, vp.y) {
            log::debug!("[pointer] speed drag from x={:.0}", p.x);
        }
    }) as Box<dyn FnMut(_)>);
    add_window_listener("pointerdown", closure);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(wnd) = web::window() else {
            return;
        };
        let (Some(p), Some(vp)) = (input::pointer_client(&ev), input::viewport_size(&wnd)) else {
            return;
        };
        w.session.borrow_mut().pointer_move(p.x, vp.x);
    }) as Box<dyn FnMut(_)>);
    add_window_listener("pointermove", closure);
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let ticket = w.session.borrow_mut().pointer_up(w.clock.now_ms());
        if let Some(ticket) = ticket {
            schedule_release(w.session.clone(), ticket);
        }
    }) as Box<dyn FnMut(_)>);
    add_window_listener("pointerup", closure);
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        w.session.borrow_mut().click();
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// End the drag after the grace window. A drag that starts again before the
/// timer fires makes `ticket` stale, so the callback is then a no-op. The frame
/// loop polls the same ticket in case timers are throttled.
fn schedule_release(session: Rc<RefCell<Session>>, ticket: ReleaseTicket) {
    let Some(wnd) = web::window() else {
        return;
    };
    let callback: js_sys::Function = Closure::once_into_js(move || {
        session.borrow_mut().release(ticket);
    })
    .unchecked_into();
    if let Err(e) = wnd.set_timeout_with_callback_and_timeout_and_arguments_0(
        &callback,
        SPEED_RELEASE_GRACE_MS as i32,
    ) {
        log::warn!("[pointer] setTimeout failed, relying on frame poll: {:?}", e);
    }
}
