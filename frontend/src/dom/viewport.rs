use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::DomError;
use crate::motion::sensor::{IntersectionSensor, Subscription};

/// Ratio handed to the motion layer for one observer entry. An element that
/// only touches the viewport edge intersects at ratio 0 and the observer stays
/// silent while it sits there, so it is reported as just visible.
fn visible_ratio(is_intersecting: bool, ratio: f64) -> f64 {
    if is_intersecting {
        ratio.max(f64::MIN_POSITIVE)
    } else {
        0.0
    }
}

/// `IntersectionObserver` per observed element.
pub struct DomIntersectionSensor;

struct ObserverSubscription {
    observer: Option<IntersectionObserver>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Subscription for ObserverSubscription {
    fn cancel(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

impl Drop for ObserverSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl IntersectionSensor<Element> for DomIntersectionSensor {
    fn observe(
        &self,
        target: &Element,
        threshold: f64,
        mut on_change: Box<dyn FnMut(f64)>,
    ) -> Result<Box<dyn Subscription>, DomError> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    on_change(visible_ratio(entry.is_intersecting(), entry.intersection_ratio()));
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(DomError::js)?;
        observer.observe(target);

        Ok(Box::new(ObserverSubscription {
            observer: Some(observer),
            _callback: callback,
        }))
    }
}
