use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::canvas::CanvasSurface;
use crate::frame::draw_frame;
use crate::pointer::PointerState;
use crate::scene::Scene;
use crate::settings::BackdropSettings;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running backdrop on one canvas.
///
/// Dropping it (or calling [`Backdrop::unmount`]) removes both window
/// listeners, cancels the pending animation frame and releases the frame
/// callback in one go.
pub struct Backdrop {
    window: Window,
    scene: Rc<RefCell<Scene>>,
    frame: FrameSlot,
    frame_id: Rc<Cell<Option<i32>>>,
    on_resize: Closure<dyn FnMut()>,
    on_pointer: Closure<dyn FnMut(MouseEvent)>,
}

impl Backdrop {
    /// Subscribes to resize and pointer events, sizes the canvas to the
    /// window and starts the frame loop.
    ///
    /// Returns `Ok(None)` when the canvas has no 2D context; the page keeps
    /// working, there is just no backdrop.
    pub fn mount(
        canvas: HtmlCanvasElement,
        settings: BackdropSettings,
    ) -> Result<Option<Self>, JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
            Ok(Some(ctx)) => ctx.dyn_into()?,
            Ok(None) | Err(_) => {
                log::warn!("2d context unavailable, backdrop disabled");
                return Ok(None);
            }
        };
        pin_behind(&canvas)?;

        let scene = Rc::new(RefCell::new(Scene::new(settings, random_seed())));

        let on_resize = {
            let window = window.clone();
            let canvas = canvas.clone();
            let scene = scene.clone();
            Closure::wrap(Box::new(move || {
                if let Err(e) = fit_to_window(&window, &canvas, &scene) {
                    log::warn!("resize failed: {:?}", e);
                }
            }) as Box<dyn FnMut()>)
        };

        let on_pointer = {
            let scene = scene.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let pointer = PointerState::at(event.client_x() as f64, event.client_y() as f64);
                scene.borrow_mut().set_pointer(pointer);
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        // Built before anything is registered so that an early `?` drops it
        // and unregisters whatever did get through.
        let backdrop = Backdrop {
            window: window.clone(),
            scene: scene.clone(),
            frame: Rc::new(RefCell::new(None)),
            frame_id: Rc::new(Cell::new(None)),
            on_resize,
            on_pointer,
        };

        window.add_event_listener_with_callback(
            "resize",
            backdrop.on_resize.as_ref().unchecked_ref(),
        )?;
        window.add_event_listener_with_callback(
            "mousemove",
            backdrop.on_pointer.as_ref().unchecked_ref(),
        )?;

        fit_to_window(&window, &canvas, &scene)?;
        backdrop.start(CanvasSurface::new(ctx))?;

        log::info!(
            "backdrop mounted at {}x{}",
            canvas.width(),
            canvas.height()
        );
        Ok(Some(backdrop))
    }

    /// Starts the animation loop.
    ///
    /// `frame` holds the animation-frame closure so that it can keep calling
    /// `request_animation_frame` on itself. The closure captures a clone of
    /// the slot, which is the reference cycle `Drop` breaks.
    fn start(&self, mut surface: CanvasSurface) -> Result<(), JsValue> {
        let f = self.frame.clone();
        let window = self.window.clone();
        let scene = self.scene.clone();
        let frame_id = self.frame_id.clone();

        *self.frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            {
                let mut scene = scene.borrow_mut();
                scene.tick();
                draw_frame(&*scene, &mut surface);
            }

            // schedule next
            let next = f
                .borrow()
                .as_ref()
                .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()));
            match next {
                Some(Ok(id)) => frame_id.set(Some(id)),
                Some(Err(e)) => {
                    log::error!("could not schedule frame: {:?}", e);
                    frame_id.set(None);
                }
                None => frame_id.set(None),
            }
        }) as Box<dyn FnMut()>));

        let id = match self.frame.borrow().as_ref() {
            Some(cb) => self
                .window
                .request_animation_frame(cb.as_ref().unchecked_ref())?,
            None => return Ok(()),
        };
        self.frame_id.set(Some(id));
        Ok(())
    }

    /// True while a frame is scheduled.
    pub fn is_running(&self) -> bool {
        self.frame_id.get().is_some()
    }

    pub fn with_scene<T>(&self, f: impl FnOnce(&Scene) -> T) -> T {
        f(&self.scene.borrow())
    }

    /// Shared handle to the scene; outlives the backdrop if kept.
    pub fn scene(&self) -> Rc<RefCell<Scene>> {
        self.scene.clone()
    }

    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        if let Some(id) = self.frame_id.take() {
            self.window.cancel_animation_frame(id).ok();
        }
        self.window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
            .ok();
        self.window
            .remove_event_listener_with_callback(
                "mousemove",
                self.on_pointer.as_ref().unchecked_ref(),
            )
            .ok();
        let frame = self.frame.borrow_mut().take();
        drop(frame);
        log::info!("backdrop unmounted");
    }
}

/// Resize canvas to fit window, then regenerate the scene for the new size.
fn fit_to_window(
    window: &Window,
    canvas: &HtmlCanvasElement,
    scene: &RefCell<Scene>,
) -> Result<(), JsValue> {
    let w = window.inner_width()?.as_f64().unwrap_or(0.0).max(0.0);
    let h = window.inner_height()?.as_f64().unwrap_or(0.0).max(0.0);
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    scene.borrow_mut().resize(w, h);
    Ok(())
}

/// Full-viewport layer under everything else that never takes pointer input.
fn pin_behind(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let style = canvas.style();
    style.set_property("position", "fixed")?;
    style.set_property("top", "0")?;
    style.set_property("left", "0")?;
    style.set_property("width", "100%")?;
    style.set_property("height", "100%")?;
    style.set_property("z-index", "-1")?;
    style.set_property("pointer-events", "none")?;
    Ok(())
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}
