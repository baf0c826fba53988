// Browser driver for the ash field: sizes the canvas to the viewport, feeds
// mouse and resize events into the field, and runs it once per animation frame
// until stopped.

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::Timer;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running animation.
///
/// Owns every closure handed to the browser, so keep it alive for as long as
/// the animation should run. Dropping it (or calling `free()` from JS) stops
/// the loop and detaches the listeners.
#[wasm_bindgen]
pub struct FrameLoop {
    window: Window,
    field: Rc<RefCell<ParticleField>>,
    running: Rc<Cell<bool>>,
    frame_id: Rc<Cell<Option<i32>>>,
    frame: FrameCallback,
    ctx: CanvasRenderingContext2d,
    profile: bool,
    on_mouse_move: Closure<dyn FnMut(MouseEvent)>,
    on_resize: Closure<dyn FnMut()>,
}

#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<FrameLoop, JsValue> {
    start_with_config(canvas_id, &FieldConfig::default())
}

#[wasm_bindgen]
pub fn start_with_config(canvas_id: &str, config: &FieldConfig) -> Result<FrameLoop, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id `{}`", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("element `{}` is not a canvas", canvas_id)))?;

    let (width, height) = viewport_size(&window)?;
    fit_canvas(&canvas, width, height);

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("context is not a CanvasRenderingContext2d"))?;

    let field = Rc::new(RefCell::new(ParticleField::new(width, height, config)));
    console::log_1(
        &format!(
            "ash field: {} particles on {}x{}",
            field.borrow().particle_count(),
            width,
            height
        )
        .into(),
    );

    let on_mouse_move = {
        let field = field.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            field
                .borrow_mut()
                .set_pointer(event.client_x() as f64, event.client_y() as f64);
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    window.add_event_listener_with_callback("mousemove", listener(&on_mouse_move))?;

    let on_resize = {
        let field = field.clone();
        let window = window.clone();
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || match viewport_size(&window) {
            Ok((width, height)) => {
                fit_canvas(&canvas, width, height);
                field.borrow_mut().resize(width, height);
            }
            Err(err) => console::error_1(&err),
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", listener(&on_resize))?;

    let running = Rc::new(Cell::new(true));
    let frame_id = Rc::new(Cell::new(None));
    let frame: FrameCallback = Rc::new(RefCell::new(None));
    {
        let next = frame.clone();
        let field = field.clone();
        let running = running.clone();
        let frame_id = frame_id.clone();
        let window = window.clone();
        let profile = config.profile;
        let mut ctx = ctx.clone();
        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !running.get() {
                return;
            }
            draw_frame(&field, &mut ctx, profile);
            match schedule(&window, &next) {
                Ok(id) => frame_id.set(Some(id)),
                Err(err) => {
                    console::error_1(&err);
                    running.set(false);
                }
            }
        }) as Box<dyn FnMut()>));
    }
    frame_id.set(Some(schedule(&window, &frame)?));

    Ok(FrameLoop {
        window,
        field,
        running,
        frame_id,
        frame,
        ctx,
        profile: config.profile,
        on_mouse_move,
        on_resize,
    })
}

#[wasm_bindgen]
impl FrameLoop {
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn particle_count(&self) -> usize {
        self.field.borrow().particle_count()
    }

    pub fn width(&self) -> f64 {
        self.field.borrow().width()
    }

    pub fn height(&self) -> f64 {
        self.field.borrow().height()
    }

    pub fn pointer_x(&self) -> Option<f64> {
        self.field.borrow().pointer().pos.map(|pos| pos[0])
    }

    pub fn pointer_y(&self) -> Option<f64> {
        self.field.borrow().pointer().pos.map(|pos| pos[1])
    }

    /// Runs one frame right away, outside the animation schedule.
    pub fn frame_now(&mut self) {
        draw_frame(&self.field, &mut self.ctx, self.profile);
    }

    /// Cancels the pending frame and removes the event listeners. Safe to call twice.
    pub fn stop(&mut self) {
        self.running.set(false);
        // the frame closure holds a reference to its own cell; taking it breaks the cycle
        let frame = self.frame.borrow_mut().take();
        if frame.is_none() {
            return;
        }
        if let Some(id) = self.frame_id.take() {
            report(self.window.cancel_animation_frame(id));
        }
        report(
            self.window
                .remove_event_listener_with_callback("mousemove", listener(&self.on_mouse_move)),
        );
        report(
            self.window
                .remove_event_listener_with_callback("resize", listener(&self.on_resize)),
        );
        drop(frame);
        console::log_1(&"ash field stopped".into());
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn draw_frame(field: &RefCell<ParticleField>, ctx: &mut CanvasRenderingContext2d, profile: bool) {
    let _timer = if profile {
        Some(Timer::new("ash field frame"))
    } else {
        None
    };
    if let Err(err) = field.borrow_mut().tick(ctx) {
        console::error_1(&err);
    }
}

fn listener<T: ?Sized>(closure: &Closure<T>) -> &js_sys::Function {
    closure.as_ref().unchecked_ref::<js_sys::Function>()
}

fn schedule(window: &Window, frame: &FrameCallback) -> Result<i32, JsValue> {
    let frame = frame.borrow();
    let callback = frame
        .as_ref()
        .ok_or_else(|| JsValue::from_str("frame callback already dropped"))?;
    window.request_animation_frame(listener(callback))
}

fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
    Ok((width, height))
}

fn fit_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

fn report(result: Result<(), JsValue>) {
    if let Err(err) = result {
        console::error_1(&err);
    }
}
