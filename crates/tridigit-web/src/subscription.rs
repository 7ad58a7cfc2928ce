//! Browser display subscription.
//!
//! While a number is displayed the widget needs a repeating timer and two
//! `window` listeners. [`BrowserSubscription`] owns all three; dropping it
//! clears the interval and removes both listeners, however the display was
//! left.

use std::time::Duration;

use tridigit_app::{AppEvent, EnvChange, EnvSample, SessionId, Viewport};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::Window;
use yew::html::Scope;

use crate::TriDigit;

const ORIENTATION_EVENT: &str = "orientationchange";
const RESIZE_EVENT: &str = "resize";

/// Read orientation angle and viewport from `window`.
///
/// Missing values read as zero; the widget then shows an unrotated number.
fn sample_window(window: &Window) -> EnvSample {
    let angle = window
        .screen()
        .ok()
        .and_then(|screen| screen.orientation().angle().ok())
        .map_or(0, i32::from);
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or_default();
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or_default();
    EnvSample::new(angle, Viewport::new(width, height))
}

/// Sample the environment of the current page. `None` outside a browser
/// window.
pub fn sample_environment() -> Option<EnvSample> {
    web_sys::window().map(|window| sample_window(&window))
}

fn environment_listener(
    link: &Scope<TriDigit>,
    window: &Window,
    change: EnvChange,
) -> Closure<dyn FnMut()> {
    let link = link.clone();
    let window = window.clone();
    Closure::new(move || {
        link.send_message(AppEvent::Environment { change, sample: sample_window(&window) });
    })
}

/// Mirror timer and environment listeners for one display session.
pub struct BrowserSubscription {
    window: Window,
    interval: i32,
    _on_tick: Closure<dyn FnMut()>,
    on_orientation: Closure<dyn FnMut()>,
    on_resize: Closure<dyn FnMut()>,
}

impl BrowserSubscription {
    /// Start the mirror timer for `session` and listen for orientation and
    /// resize changes, delivering everything to `link`.
    ///
    /// # Errors
    ///
    /// Returns the browser's error if there is no window or the timer or a
    /// listener cannot be installed. Anything installed before the failure
    /// is released again.
    pub fn acquire(
        link: &Scope<TriDigit>,
        session: SessionId,
        period: Duration,
    ) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;

        let tick_link = link.clone();
        let on_tick = Closure::<dyn FnMut()>::new(move || {
            tick_link.send_message(AppEvent::MirrorTick { session });
        });
        let millis = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);
        let interval = window.set_interval_with_callback_and_timeout_and_arguments_0(
            on_tick.as_ref().unchecked_ref(),
            millis,
        )?;

        let subscription = Self {
            on_orientation: environment_listener(link, &window, EnvChange::Orientation),
            on_resize: environment_listener(link, &window, EnvChange::Resize),
            window,
            interval,
            _on_tick: on_tick,
        };

        // From here on, an early return drops the subscription and undoes
        // whatever was installed.
        subscription.window.add_event_listener_with_callback(
            ORIENTATION_EVENT,
            subscription.on_orientation.as_ref().unchecked_ref(),
        )?;
        subscription.window.add_event_listener_with_callback(
            RESIZE_EVENT,
            subscription.on_resize.as_ref().unchecked_ref(),
        )?;

        tracing::debug!(%session, ?period, "browser subscription acquired");
        Ok(subscription)
    }
}

impl Drop for BrowserSubscription {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.interval);
        let _ = self.window.remove_event_listener_with_callback(
            ORIENTATION_EVENT,
            self.on_orientation.as_ref().unchecked_ref(),
        );
        let _ = self
            .window
            .remove_event_listener_with_callback(RESIZE_EVENT, self.on_resize.as_ref().unchecked_ref());
        tracing::debug!(handle = self.interval, "browser subscription released");
    }
}
