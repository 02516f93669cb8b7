use std::rc::Rc;

use log::debug;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::config;

/// Index into a fixed list of images, advanced on every tick and wrapping
/// back to the first image after the last one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotator {
    index: usize,
    len: usize,
}

pub enum RotatorAction {
    Tick,
}

impl Rotator {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }
}

impl Reducible for Rotator {
    type Action = RotatorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RotatorAction::Tick => {
                let mut next = *self;
                next.advance();
                next.into()
            }
        }
    }
}

/// Current image index for a list of `len` images, advanced every
/// `period_ms`. The interval is cancelled when the component unmounts.
#[hook]
pub fn use_rotator(len: usize, period_ms: u32) -> usize {
    let rotator = use_reducer_eq(|| Rotator::new(len));

    {
        let rotator = rotator.clone();
        // A zero period pauses the interval.
        let millis = if len > 1 { period_ms } else { 0 };
        use_interval(
            move || {
                rotator.dispatch(RotatorAction::Tick);
            },
            millis,
        );
    }

    rotator.index()
}

#[derive(Properties, PartialEq)]
pub struct HeroRotatorProps {
    pub images: &'static [&'static str],
    #[prop_or_default]
    pub alt: AttrValue,
}

/// Full-bleed background that crossfades through `images`.
///
/// Every image stays mounted so the outgoing one can fade out while the
/// incoming one fades in; the timer never waits for the transition.
#[function_component(HeroRotator)]
pub fn hero_rotator(props: &HeroRotatorProps) -> Html {
    let current = use_rotator(props.images.len(), config::ROTATION_PERIOD_MS);

    use_effect_with_deps(
        |current| {
            debug!("Hero banner {}", current);
            || ()
        },
        current,
    );

    html! {
        <div class="hero-rotator">
            {
                props.images.iter().enumerate().map(|(i, src)| {
                    let opacity = if i == current { 1 } else { 0 };
                    html! {
                        <img
                            key={*src}
                            src={*src}
                            alt={props.alt.clone()}
                            class="hero-rotator-image"
                            style={format!(
                                "opacity: {}; transition: opacity {}ms ease-in-out;",
                                opacity,
                                config::CROSSFADE_MS,
                            )}
                        />
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tick(rotator: Rc<Rotator>, times: usize) -> Rc<Rotator> {
        (0..times).fold(rotator, |r, _| r.reduce(RotatorAction::Tick))
    }

    #[test]
    fn four_images_wrap_after_four_ticks() {
        let start = Rc::new(Rotator::new(4));
        assert_eq!(start.index(), 0);
        assert_eq!(tick(start.clone(), 3).index(), 3);
        assert_eq!(tick(start.clone(), 4).index(), 0);
        assert_eq!(tick(start, 9).index(), 1);
    }

    #[test]
    fn index_stays_in_range() {
        let mut rotator = Rotator::new(3);
        for _ in 0..50 {
            rotator.advance();
            assert!(rotator.index() < 3);
        }
    }

    #[test]
    fn empty_and_single_lists_hold_still() {
        let mut empty = Rotator::new(0);
        empty.advance();
        assert_eq!(empty.index(), 0);

        let mut single = Rotator::new(1);
        single.advance();
        assert_eq!(single.index(), 0);
    }
}
