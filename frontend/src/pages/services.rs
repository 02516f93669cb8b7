use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::section::{Reveal, RevealSection};
use crate::content::OFFERINGS;
use crate::pages::use_scroll_top;
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    use_scroll_top();

    html! {
        <div class="services-page">
            <RevealSection class="hero hero-banner">
                <img class="hero-banner-image" src="/services-bg.jpg" alt="Services Background" />
                <div class="hero-content">
                    <Reveal index={0}>
                        <h1>{"Our Services"}</h1>
                    </Reveal>
                    <Reveal index={1}>
                        <p class="hero-subtitle">
                            {"Comprehensive web solutions to help your business thrive in the digital world."}
                        </p>
                    </Reveal>
                </div>
            </RevealSection>

            <RevealSection class="page-section container">
                <div class="card-grid">
                    {
                        OFFERINGS.iter().enumerate().map(|(i, offering)| html! {
                            <Reveal index={i} class="card offering">
                                <h3 class="card-title">
                                    <span class="card-icon">{ offering.icon }</span>
                                    { offering.title }
                                </h3>
                                <p class="card-description">{ offering.description }</p>
                                <ul class="offering-features">
                                    {
                                        offering.features.iter().map(|feature| html! {
                                            <li>{ *feature }</li>
                                        }).collect::<Html>()
                                    }
                                </ul>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </RevealSection>

            <RevealSection class="page-section plain centered">
                <Reveal index={0}>
                    <h2 class="section-title">{"Ready to Elevate Your Online Presence?"}</h2>
                </Reveal>
                <Reveal index={1}>
                    <p class="lead">
                        {"Let's discuss how our services can help your business grow and succeed in the digital landscape."}
                    </p>
                </Reveal>
                <Reveal index={2}>
                    <Link<Route> to={Route::Contact} classes="btn btn-primary btn-lg">
                        {"Get in Touch →"}
                    </Link<Route>>
                </Reveal>
            </RevealSection>

            <style>
                {r#"
                    .offering {
                        height: 100%;
                    }
                    .offering-features {
                        list-style: disc inside;
                        font-size: 0.875rem;
                        color: #4b5563;
                    }
                "#}
            </style>
        </div>
    }
}
