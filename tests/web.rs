#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

use mesh_backdrop::{Backdrop, BackdropSettings, PointerState};

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_canvas() -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn mount_fills_window_behind_content() {
    let window = web_sys::window().unwrap();
    let canvas = fresh_canvas();
    let backdrop = Backdrop::mount(canvas.clone(), BackdropSettings::default())
        .unwrap()
        .expect("2d context");

    assert!(backdrop.is_running());
    let w = window.inner_width().unwrap().as_f64().unwrap();
    let h = window.inner_height().unwrap().as_f64().unwrap();
    assert_eq!(canvas.width(), w as u32);
    assert_eq!(canvas.height(), h as u32);

    let style = canvas.style();
    assert_eq!(style.get_property_value("pointer-events").unwrap(), "none");
    assert_eq!(style.get_property_value("z-index").unwrap(), "-1");

    backdrop.with_scene(|scene| {
        assert_eq!(scene.particles().len(), 100);
        assert_eq!(scene.shapes().len(), 12);
    });
    backdrop.unmount();
}

#[wasm_bindgen_test(async)]
async fn frames_advance_the_scene() {
    let backdrop = Backdrop::mount(fresh_canvas(), BackdropSettings::default())
        .unwrap()
        .expect("2d context");
    sleep(200).await;
    backdrop.with_scene(|scene| assert!(scene.shapes().clock() > 0.0));
    backdrop.unmount();
}

#[wasm_bindgen_test(async)]
async fn unmount_stops_frames_and_releases_the_scene() {
    let backdrop = Backdrop::mount(fresh_canvas(), BackdropSettings::default())
        .unwrap()
        .expect("2d context");
    let scene = backdrop.scene();
    sleep(100).await;
    backdrop.unmount();

    let clock = scene.borrow().shapes().clock();
    assert!(clock > 0.0);
    // Resize and pointer listeners must be gone as well: a resize would
    // regenerate the shapes, a pointer move would set the pointer.
    let window = web_sys::window().unwrap();
    window
        .dispatch_event(&web_sys::Event::new("resize").unwrap())
        .unwrap();
    let init = web_sys::MouseEventInit::new();
    init.set_client_x(10);
    init.set_client_y(20);
    let moved = web_sys::MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
    window.dispatch_event(&moved).unwrap();
    sleep(200).await;

    assert_eq!(scene.borrow().shapes().clock(), clock);
    assert_eq!(scene.borrow().pointer(), PointerState::Inactive);
    // Frame, resize and pointer closures all dropped their clones.
    assert_eq!(Rc::strong_count(&scene), 1);
}

#[wasm_bindgen_test]
fn canvas_without_2d_context_mounts_nothing() {
    let canvas = fresh_canvas();
    // Once a canvas hands out another context type, `getContext("2d")` is null.
    let taken = ["bitmaprenderer", "webgl2", "webgl"]
        .iter()
        .any(|kind| matches!(canvas.get_context(kind), Ok(Some(_))));
    assert!(taken, "no alternative context available");
    let width = canvas.width();

    let mounted = Backdrop::mount(canvas.clone(), BackdropSettings::default()).unwrap();
    assert!(mounted.is_none());
    assert_eq!(canvas.width(), width);
    assert_eq!(canvas.style().get_property_value("pointer-events").unwrap(), "");
}

#[wasm_bindgen_test(async)]
async fn page_teardown_stops_the_mounted_backdrop() {
    let canvas = fresh_canvas();
    canvas.set_id("backdrop");

    assert!(mesh_backdrop::mount());
    assert!(mesh_backdrop::is_mounted());
    let scene = mesh_backdrop::mounted_scene().expect("mounted scene");
    sleep(100).await;

    mesh_backdrop::teardown();
    assert!(!mesh_backdrop::is_mounted());
    assert!(mesh_backdrop::mounted_scene().is_none());
    let clock = scene.borrow().shapes().clock();
    sleep(200).await;
    assert_eq!(scene.borrow().shapes().clock(), clock);
    assert_eq!(Rc::strong_count(&scene), 1);

    // Tearing down twice is harmless.
    mesh_backdrop::teardown();
    canvas.remove();
}
