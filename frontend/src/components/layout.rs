use chrono::{Datelike, Local};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{self, CONTACT, SOCIAL_LINKS};
use crate::Route;

const NAV_LINKS: [(Route, &str); 4] = [
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::Services, "Services"),
    (Route::Contact, "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.clone().map(|window| {
                    let scroll_window = window.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        let offset = scroll_window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(offset > 80.0);
                    }) as Box<dyn FnMut()>);
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    callback
                });

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "mobile-menu open"
    } else {
        "mobile-menu"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/dinstack.png" alt="Din" width="75" height="75" />
                </Link<Route>>

                <div class="nav-links">
                    {
                        NAV_LINKS.iter().map(|(route, label)| html! {
                            <Link<Route> to={route.clone()} classes="nav-link">
                                { *label }
                            </Link<Route>>
                        }).collect::<Html>()
                    }
                </div>

                <Link<Route> to={Route::Contact} classes="nav-cta">
                    {"Get Started"}
                </Link<Route>>

                <button class="burger-menu" aria-label="Open menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div class={menu_class}>
                {
                    NAV_LINKS.iter().map(|(route, label)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route.clone()} classes="mobile-link">
                                { *label }
                            </Link<Route>>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </nav>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3>{ format!("About {}", content::COMPANY) }</h3>
                    <p>{"Empowering businesses with cutting-edge web solutions and unparalleled expertise."}</p>
                </div>
                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        {
                            NAV_LINKS.iter().map(|(route, label)| html! {
                                <li>
                                    <Link<Route> to={route.clone()} classes="footer-link">
                                        { *label }
                                    </Link<Route>>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
                <div>
                    <h3>{"Contact Us"}</h3>
                    <p>{ format!("Email: {}", CONTACT.email) }</p>
                    <p>{ format!("Phone: {}", CONTACT.phone) }</p>
                </div>
                <div>
                    <h3>{"Follow Us"}</h3>
                    <div class="social-links">
                        {
                            SOCIAL_LINKS.iter().map(|link| html! {
                                <a href={link.href} class="social-link" aria-label={link.label} title={link.label}>
                                    { link.icon }
                                </a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                { format!("© {} {}. All rights reserved.", year, content::COMPANY) }
            </div>
        </footer>
    }
}
