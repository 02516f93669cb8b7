use yew::prelude::*;

pub mod about;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod services;

/// Start every page at the top instead of wherever the previous one was
/// scrolled to.
#[hook]
pub fn use_scroll_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}
