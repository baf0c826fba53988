//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use ash_particles::{start, start_with_config, Color, FieldConfig, Particle, ParticleField};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn canvas(id: &str) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    canvas.set_width(300);
    canvas.set_height(150);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn context(canvas: &HtmlCanvasElement) -> CanvasRenderingContext2d {
    canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<CanvasRenderingContext2d>()
        .unwrap()
}

fn alpha_at(ctx: &CanvasRenderingContext2d, x: f64, y: f64) -> u8 {
    ctx.get_image_data(x, y, 1.0, 1.0).unwrap().data()[3]
}

#[wasm_bindgen_test]
fn render_draws_and_clears() {
    let canvas = canvas("render-target");
    let ctx = context(&canvas);
    let flake = Particle::new(10.0, 10.0, 100.0, 0.0, 3.0, Color::gray(150, 0.7));
    let mut field =
        ParticleField::from_particles(vec![flake], 300.0, 150.0, FieldConfig::default());

    field.render(&ctx).unwrap();
    assert!(alpha_at(&ctx, 10.0, 10.0) > 0);

    field.step();
    field.render(&ctx).unwrap();
    assert_eq!(alpha_at(&ctx, 10.0, 10.0), 0);
    assert!(alpha_at(&ctx, 110.0, 10.0) > 0);
}

#[wasm_bindgen_test]
fn start_fails_without_canvas() {
    assert!(start("no-such-canvas").is_err());
}

#[wasm_bindgen_test]
fn start_runs_until_stopped() {
    canvas("ash-background");
    let mut frames = start("ash-background").unwrap();
    assert!(frames.is_running());
    assert_eq!(frames.particle_count(), 150);

    frames.stop();
    assert!(!frames.is_running());
    frames.stop();
    assert!(!frames.is_running());
}

#[wasm_bindgen_test]
fn mouse_move_sets_the_pointer() {
    canvas("ash-pointer");
    let frames = start("ash-pointer").unwrap();
    assert_eq!(frames.pointer_x(), None);
    assert_eq!(frames.pointer_y(), None);

    let init = MouseEventInit::new();
    init.set_client_x(40);
    init.set_client_y(25);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();

    assert_eq!(frames.pointer_x(), Some(40.0));
    assert_eq!(frames.pointer_y(), Some(25.0));
}

#[wasm_bindgen_test]
fn resize_follows_the_viewport() {
    let canvas = canvas("ash-resize");
    let mut frames = start("ash-resize").unwrap();
    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap();
    let height = window.inner_height().unwrap().as_f64().unwrap();

    canvas.set_width(1);
    canvas.set_height(1);
    window.dispatch_event(&Event::new("resize").unwrap()).unwrap();

    assert_eq!(canvas.width(), width as u32);
    assert_eq!(canvas.height(), height as u32);
    assert_eq!((frames.width(), frames.height()), (width, height));

    // listeners are gone once stopped
    frames.stop();
    canvas.set_width(1);
    window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
    assert_eq!(canvas.width(), 1);
}

#[wasm_bindgen_test]
fn profiled_frames_run_and_keep_the_config() {
    canvas("ash-profile");
    let mut config = FieldConfig::new();
    config.profile = true;
    config.particle_count = 20;
    let mut frames = start_with_config("ash-profile", &config).unwrap();
    frames.frame_now();
    frames.frame_now();

    assert!(frames.is_running());
    assert_eq!(frames.particle_count(), 20);
    assert!(config.profile);
    assert_eq!(config.particle_count, 20);
}
