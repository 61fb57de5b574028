//! Animated canvas backdrop: drifting particles linked by proximity, slowly
//! spinning translucent shapes, a faint grid and a pointer attraction field.
//!
//! The simulation modules are platform independent; the browser glue lives in
//! `wasm` and is only compiled for `wasm32`.

use rand::Rng;

pub mod color;
pub mod frame;
pub mod grid;
pub mod mesh;
pub mod particles;
pub mod pointer;
pub mod scene;
pub mod settings;
pub mod shapes;
pub mod viewport;

pub use frame::{draw_frame, Surface};
pub use pointer::PointerState;
pub use scene::Scene;
pub use settings::BackdropSettings;
pub use viewport::{Point, Viewport};

/// Uniform sample from `[low, high)`; collapses to `low` for an empty range.
pub(crate) fn spread<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    low + rng.gen::<f64>() * (high - low).max(0.0)
}

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::scene::Scene;
    use crate::settings::BackdropSettings;

    mod canvas;
    mod render;

    pub use render::Backdrop;

    const CANVAS_ID: &str = "backdrop";
    const SETTINGS_ID: &str = "backdrop-settings";

    thread_local! {
        static MOUNTED: RefCell<Option<Backdrop>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        mount();
        Ok(())
    }

    /// Mounts a backdrop on `#backdrop`, replacing any running one. Returns
    /// whether a backdrop is running afterwards.
    ///
    /// A missing canvas or 2D context means no backdrop, never a failed page.
    #[wasm_bindgen]
    pub fn mount() -> bool {
        teardown();
        match mount_default() {
            Ok(mounted) => mounted,
            Err(e) => {
                log::warn!("backdrop not mounted: {:?}", e);
                false
            }
        }
    }

    fn mount_default() -> Result<bool, JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id(CANVAS_ID)
            .ok_or("canvas not found")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;

        let settings = document
            .get_element_by_id(SETTINGS_ID)
            .and_then(|el| el.text_content())
            .map(|text| {
                BackdropSettings::from_toml(&text).unwrap_or_else(|e| {
                    log::warn!("ignoring malformed backdrop settings: {e}");
                    BackdropSettings::default()
                })
            })
            .unwrap_or_default();

        match Backdrop::mount(canvas, settings)? {
            Some(backdrop) => {
                MOUNTED.with(|slot| *slot.borrow_mut() = Some(backdrop));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Stops the auto-mounted backdrop: listeners removed, pending frame
    /// cancelled.
    #[wasm_bindgen]
    pub fn teardown() {
        let backdrop = MOUNTED.with(|slot| slot.borrow_mut().take());
        drop(backdrop);
    }

    #[wasm_bindgen]
    pub fn is_mounted() -> bool {
        MOUNTED.with(|slot| slot.borrow().is_some())
    }

    /// Scene of the page-level backdrop, if one is mounted.
    pub fn mounted_scene() -> Option<Rc<RefCell<Scene>>> {
        MOUNTED.with(|slot| slot.borrow().as_ref().map(Backdrop::scene))
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{is_mounted, mount, mounted_scene, teardown, Backdrop};
