//! `requestAnimationFrame` scheduler

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::carousel::{FrameHandle, FrameScheduler};

pub struct AnimationFrames {
    window: Window,
}

impl AnimationFrames {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for AnimationFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Option<FrameHandle> {
        let js_callback = Closure::once_into_js(move |now: f64| callback(now));
        match self.window.request_animation_frame(js_callback.unchecked_ref()) {
            Ok(handle) => Some(handle),
            Err(err) => {
                log::warn!("requestAnimationFrame failed: {:?}", err);
                None
            }
        }
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame failed: {:?}", err);
        }
    }
}
