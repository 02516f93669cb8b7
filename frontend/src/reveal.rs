use std::fmt::Display;

use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Stop observing after the first time the section enters the viewport.
    pub trigger_once: bool,
    /// Fraction of the section that has to be on screen, `0.0..=1.0`.
    pub threshold: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            trigger_once: true,
            threshold: config::REVEAL_THRESHOLD,
        }
    }
}

/// Browser-independent half of the reveal sensor. Fed with the intersection
/// reports of one section and decides when that section is revealed.
///
/// The state only ever moves from `Hidden` to `Visible`.
#[derive(Clone, Debug)]
pub struct RevealDriver {
    options: RevealOptions,
    state: RevealState,
    attached: bool,
}

impl RevealDriver {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            state: RevealState::Hidden,
            attached: true,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Feeds one intersection report. Returns `true` when this report is the
    /// one that revealed the section.
    pub fn observe(&mut self, ratio: f64, intersecting: bool) -> bool {
        if !self.attached || !intersecting || ratio < self.options.threshold {
            return false;
        }
        let entered = self.reveal();
        if self.options.trigger_once {
            self.attached = false;
        }
        entered
    }

    /// Marks the section visible. Returns `false` when it already was.
    pub fn reveal(&mut self) -> bool {
        if self.state == RevealState::Visible {
            return false;
        }
        self.state = RevealState::Visible;
        true
    }
}

struct Sensor {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Sensor {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn attach(
    node: &NodeRef,
    options: RevealOptions,
    set_visible: UseStateSetter<bool>,
) -> Result<Sensor, &'static str> {
    let window = web_sys::window().ok_or("no window")?;
    let supported = Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
    if !supported {
        return Err("IntersectionObserver is not available");
    }
    let element = node.cast::<Element>().ok_or("section is not mounted")?;

    let mut driver = RevealDriver::new(options);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if driver.observe(entry.intersection_ratio(), entry.is_intersecting()) {
                    set_visible.set(true);
                }
                if !driver.is_attached() {
                    observer.disconnect();
                    break;
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|_| "IntersectionObserver could not be created")?;
    observer.observe(&element);

    Ok(Sensor {
        observer,
        _callback: callback,
    })
}

/// Keeps the sensor if one could be attached. Without one the section is
/// revealed straight away, so the flag asks the caller to show it now.
fn sensor_or_reveal<S, E: Display>(attached: Result<S, E>) -> (Option<S>, bool) {
    match attached {
        Ok(sensor) => (Some(sensor), false),
        Err(reason) => {
            debug!("Revealing section without a sensor: {}", reason);
            (None, true)
        }
    }
}

/// Attach a viewport sensor to the returned node. The flag flips to `true`
/// once the node has been on screen and stays there.
#[hook]
pub fn use_reveal(options: RevealOptions) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let set_visible = visible.setter();
        use_effect_with_deps(
            move |_| {
                let (sensor, reveal_now) =
                    sensor_or_reveal(attach(&node, options, set_visible.clone()));
                if reveal_now {
                    set_visible.set(true);
                }
                move || drop(sensor)
            },
            (),
        );
    }

    (node, *visible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn once() -> RevealOptions {
        RevealOptions {
            trigger_once: true,
            threshold: 0.1,
        }
    }

    #[test]
    fn starts_hidden() {
        let driver = RevealDriver::new(once());
        assert_eq!(driver.state(), RevealState::Hidden);
        assert!(driver.is_attached());
    }

    #[test]
    fn below_threshold_does_nothing() {
        let mut driver = RevealDriver::new(once());
        assert!(!driver.observe(0.05, true));
        assert!(!driver.observe(0.5, false));
        assert!(driver.is_attached());
        assert_eq!(driver.state(), RevealState::Hidden);
    }

    #[test]
    fn second_entry_is_ignored_when_triggering_once() {
        let mut driver = RevealDriver::new(once());

        assert!(driver.observe(0.1, true));
        assert!(!driver.is_attached());

        driver.observe(0.0, false);
        assert!(!driver.observe(0.8, true));
        assert_eq!(driver.state(), RevealState::Visible);
        assert!(!driver.is_attached());
    }

    #[test]
    fn staying_attached_never_hides_again() {
        let mut driver = RevealDriver::new(RevealOptions {
            trigger_once: false,
            threshold: 0.1,
        });

        assert!(driver.observe(0.3, true));
        assert!(!driver.observe(0.0, false));
        assert_eq!(driver.state(), RevealState::Visible);

        assert!(!driver.observe(0.4, true));
        assert!(driver.is_attached());
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut driver = RevealDriver::new(once());
        assert!(driver.reveal());
        assert!(!driver.reveal());
        assert_eq!(driver.state(), RevealState::Visible);
    }

    #[test]
    fn missing_sensor_reveals_at_once() {
        let (sensor, reveal_now) = sensor_or_reveal::<(), _>(Err("IntersectionObserver is not available"));
        assert!(sensor.is_none());
        assert!(reveal_now);
    }

    #[test]
    fn attached_sensor_waits_for_the_viewport() {
        let (sensor, reveal_now) = sensor_or_reveal::<_, &str>(Ok(7));
        assert_eq!(sensor, Some(7));
        assert!(!reveal_now);
    }
}
