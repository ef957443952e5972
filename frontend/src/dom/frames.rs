use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Performance, Window};

use crate::error::DomError;
use crate::motion::sensor::{Clock, FrameScheduler, Subscription};

/// `performance.now()` in seconds, the time base of frame timestamps.
/// Falls back to `Date.now()` where there is no `Performance`; readings never
/// go backwards either way.
pub struct PerformanceClock {
    performance: Option<Performance>,
    latest: Cell<f64>,
}

impl PerformanceClock {
    pub fn new() -> Self {
        Self {
            performance: web_sys::window().and_then(|window| window.performance()),
            latest: Cell::new(f64::NEG_INFINITY),
        }
    }
}

impl Clock for PerformanceClock {
    fn now(&self) -> f64 {
        let millis = match &self.performance {
            Some(performance) => performance.now(),
            None => js_sys::Date::now(),
        };
        monotonic(&self.latest, millis / 1000.0)
    }
}

fn monotonic(latest: &Cell<f64>, reading: f64) -> f64 {
    let now = reading.max(latest.get());
    latest.set(now);
    now
}

/// `requestAnimationFrame` loop.
pub struct AnimationFrames;

struct FrameLoop {
    window: Window,
    request_id: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoop {
    fn schedule(&self) -> Result<(), DomError> {
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return Ok(());
        };
        let id = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(DomError::js)?;
        self.request_id.set(Some(id));
        Ok(())
    }

    fn cancel(&self) {
        if let Some(id) = self.request_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

struct FrameSubscription {
    frame_loop: Rc<FrameLoop>,
}

impl Subscription for FrameSubscription {
    fn cancel(&mut self) {
        self.frame_loop.cancel();
    }
}

impl Drop for FrameSubscription {
    fn drop(&mut self) {
        self.frame_loop.cancel();
    }
}

impl FrameScheduler for AnimationFrames {
    fn request_frames(
        &self,
        mut on_frame: Box<dyn FnMut() -> bool>,
    ) -> Result<Box<dyn Subscription>, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let frame_loop = Rc::new(FrameLoop {
            window,
            request_id: Cell::new(None),
            callback: RefCell::new(None),
        });

        let weak = Rc::downgrade(&frame_loop);
        let callback = Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
            let Some(frame_loop) = weak.upgrade() else {
                return;
            };
            frame_loop.request_id.set(None);
            if on_frame() {
                if let Err(err) = frame_loop.schedule() {
                    warn!("could not request the next animation frame: {err}");
                }
            }
        });
        *frame_loop.callback.borrow_mut() = Some(callback);
        frame_loop.schedule()?;

        Ok(Box::new(FrameSubscription { frame_loop }))
    }
}
