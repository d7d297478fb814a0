use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Window};
use yew::prelude::*;

/// Hero wrapper moves at half the page scroll speed.
pub const PARALLAX_FACTOR: f64 = 0.5;

/// How far through the first viewport height the page has scrolled, in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollProgress {
    pub scroll_y: f64,
    pub progress: f64,
}

impl ScrollProgress {
    pub fn new(scroll_y: f64, viewport_height: f64) -> Self {
        let scroll_y = scroll_y.max(0.0);
        let progress = if viewport_height > 0.0 {
            (scroll_y / viewport_height).min(1.0)
        } else {
            1.0
        };
        Self { scroll_y, progress }
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Presentation of the hero section for one scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroStyle {
    pub translate_y: f64,
    pub opacity: f64,
    pub video_hidden: bool,
}

impl HeroStyle {
    pub fn at(scroll: ScrollProgress) -> Self {
        if scroll.is_complete() {
            return Self {
                translate_y: 0.0,
                opacity: 1.0,
                video_hidden: true,
            };
        }
        Self {
            translate_y: scroll.scroll_y * PARALLAX_FACTOR,
            opacity: 1.0 - scroll.progress,
            video_hidden: false,
        }
    }

    pub fn wrapper_css(&self) -> String {
        if self.translate_y == 0.0 {
            format!("opacity: {};", self.opacity)
        } else {
            format!(
                "transform: translate3d(0, {}px, 0); opacity: {};",
                self.translate_y, self.opacity
            )
        }
    }

    /// Applies to the container holding both videos and the overlay.
    pub fn media_css(&self) -> &'static str {
        if self.video_hidden {
            "display: none;"
        } else {
            ""
        }
    }
}

impl Default for HeroStyle {
    fn default() -> Self {
        Self::at(ScrollProgress::default())
    }
}

fn read_scroll() -> Option<ScrollProgress> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some(ScrollProgress::new(scroll_y, viewport_height))
}

/// A passive window scroll listener, removed again when dropped.
pub struct ScrollSubscription {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    pub fn passive(on_scroll: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);

        let mut options = AddEventListenerOptions::new();
        options.passive(true);

        let registered = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        );
        match registered {
            Ok(()) => Some(Self { window, callback }),
            Err(e) => {
                warn!("Could not listen for scroll: {:?}", e);
                None
            }
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            warn!("Could not stop listening for scroll: {:?}", e);
        }
    }
}

/// Tracks window scroll while `enabled`. The listener goes away on unmount.
#[hook]
pub fn use_scroll_progress(enabled: bool) -> ScrollProgress {
    let progress = use_state(ScrollProgress::default);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |enabled: &bool| {
                let subscription = if *enabled {
                    if let Some(initial) = read_scroll() {
                        progress.set(initial);
                    }
                    ScrollSubscription::passive(move || {
                        if let Some(current) = read_scroll() {
                            progress.set(current);
                        }
                    })
                } else {
                    None
                };

                move || drop(subscription)
            },
            enabled,
        );
    }

    *progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(ScrollProgress::new(0.0, 800.0).progress, 0.0);
        assert_eq!(ScrollProgress::new(400.0, 800.0).progress, 0.5);
        assert_eq!(ScrollProgress::new(2400.0, 800.0).progress, 1.0);
        assert_eq!(ScrollProgress::new(-30.0, 800.0).progress, 0.0);
    }

    #[test]
    fn degenerate_viewport_counts_as_scrolled_past() {
        assert!(ScrollProgress::new(0.0, 0.0).is_complete());
    }

    #[test]
    fn top_of_page_is_untouched() {
        let style = HeroStyle::at(ScrollProgress::new(0.0, 800.0));
        assert_eq!(style, HeroStyle { translate_y: 0.0, opacity: 1.0, video_hidden: false });
        assert_eq!(style.wrapper_css(), "opacity: 1;");
        assert_eq!(style.media_css(), "");
    }

    #[test]
    fn fades_and_drifts_proportionally() {
        let style = HeroStyle::at(ScrollProgress::new(200.0, 800.0));
        assert_eq!(style.translate_y, 100.0);
        assert_eq!(style.opacity, 0.75);
        assert!(!style.video_hidden);
        assert_eq!(style.wrapper_css(), "transform: translate3d(0, 100px, 0); opacity: 0.75;");
    }

    #[test]
    fn past_one_viewport_pins_and_hides_video() {
        for scroll_y in [800.0, 1200.0] {
            let style = HeroStyle::at(ScrollProgress::new(scroll_y, 800.0));
            assert_eq!(style, HeroStyle { translate_y: 0.0, opacity: 1.0, video_hidden: true });
            assert_eq!(style.wrapper_css(), "opacity: 1;");
            // overlay shares the media container, so it disappears with the videos
            assert_eq!(style.media_css(), "display: none;");
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    fn fire_scroll() {
        let window = web_sys::window().unwrap();
        let event = Event::new("scroll").unwrap();
        window.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn listener_is_removed_on_drop() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = calls.clone();

        let subscription = ScrollSubscription::passive(move || counter.set(counter.get() + 1)).unwrap();
        fire_scroll();
        assert_eq!(calls.get(), 1);

        drop(subscription);
        fire_scroll();
        assert_eq!(calls.get(), 1);
    }
}
