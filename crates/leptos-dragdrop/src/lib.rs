//! Leptos DragDrop Utilities
//!
//! Pointer plumbing for drag-and-drop on mouse and touch devices.
//! Mouse and touch events are unified into [`PointerSample`]s; the caller
//! decides what a pointer-down, move, up or cancel means.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Pointer position in client coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub fn from_mouse(ev: &web_sys::MouseEvent) -> Self {
        Self {
            x: ev.client_x() as f64,
            y: ev.client_y() as f64,
        }
    }

    /// First active touch point; `None` once all fingers are lifted
    pub fn from_touch(ev: &web_sys::TouchEvent) -> Option<Self> {
        ev.touches().get(0).map(|t| Self {
            x: t.client_x() as f64,
            y: t.client_y() as f64,
        })
    }
}

/// Whether a move handler took over the gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResponse {
    Ignore,
    /// Suppress default behaviour (page scroll, text selection)
    Capture,
}

/// Pointer-downs on controls inside a row must not start a drag
fn is_control(target: Option<web_sys::EventTarget>) -> bool {
    match target {
        Some(target) => {
            target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
        }
        None => false,
    }
}

/// Create mousedown handler for draggable rows (primary button only)
pub fn make_on_mousedown<F>(on_down: F) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    F: Fn(PointerSample) + Clone + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || is_control(ev.target()) {
            return;
        }
        on_down(PointerSample::from_mouse(&ev));
    }
}

/// Create touchstart handler for draggable rows
pub fn make_on_touchstart<F>(on_down: F) -> impl Fn(web_sys::TouchEvent) + Clone + 'static
where
    F: Fn(PointerSample) + Clone + 'static,
{
    move |ev: web_sys::TouchEvent| {
        if is_control(ev.target()) {
            return;
        }
        if let Some(sample) = PointerSample::from_touch(&ev) {
            on_down(sample);
        }
    }
}

fn listen<F>(doc: &web_sys::Document, event: &str, passive: bool, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(passive);
    if let Err(err) = doc.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &options,
    ) {
        log::error!("[DND] failed to bind {}: {:?}", event, err);
    }
    // Listeners live as long as the page
    cb.forget();
}

/// Bind document-level move/up/cancel handlers for mouse and touch.
///
/// Moves are bound non-passive so a captured drag can stop the page from
/// scrolling and the browser from starting a text selection.
pub fn bind_global_pointer<M, U, C>(on_move: M, on_up: U, on_cancel: C)
where
    M: Fn(PointerSample) -> MoveResponse + Clone + 'static,
    U: Fn() + Clone + 'static,
    C: Fn() + Clone + 'static,
{
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("[DND] no document, pointer handlers not bound");
        return;
    };

    let mouse_move = on_move.clone();
    listen(&doc, "mousemove", false, move |ev: web_sys::Event| {
        if let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() {
            if mouse_move(PointerSample::from_mouse(ev)) == MoveResponse::Capture {
                ev.prevent_default();
            }
        }
    });

    let touch_move = on_move;
    listen(&doc, "touchmove", false, move |ev: web_sys::Event| {
        let Some(ev) = ev.dyn_ref::<web_sys::TouchEvent>() else {
            return;
        };
        if let Some(sample) = PointerSample::from_touch(ev) {
            if touch_move(sample) == MoveResponse::Capture {
                ev.prevent_default();
            }
        }
    });

    let mouse_up = on_up.clone();
    listen(&doc, "mouseup", true, move |_| mouse_up());
    listen(&doc, "touchend", true, move |_| on_up());
    listen(&doc, "touchcancel", true, move |_| on_cancel());
}

/// Run `release` after `delay_ms`, used to expire the post-drop click guard
pub fn schedule_guard_release<F>(delay_ms: u32, release: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(delay_ms, release).forget();
}

/// Floating copy of a row that follows the pointer while dragging
#[component]
pub fn DragProxy(
    /// Top-left corner in client coordinates; hidden when `None`
    #[prop(into)]
    position: Signal<Option<(f64, f64)>>,
    /// Width of the source row, so the copy wraps the same way
    #[prop(into)]
    width: Signal<f64>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || position.get().is_some()>
            <div
                class="drag-proxy"
                style=move || {
                    let (x, y) = position.get().unwrap_or_default();
                    format!(
                        "position: fixed; left: {}px; top: {}px; width: {}px; pointer-events: none;",
                        x, y, width.get()
                    )
                }
            >
                {children()}
            </div>
        </Show>
    }
}

/// Layout-only gap marking where the dragged row will land
#[component]
pub fn DropPlaceholder(height: f64) -> impl IntoView {
    view! { <div class="drop-placeholder" style=format!("height: {}px;", height) /> }
}
