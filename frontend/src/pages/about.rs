use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::section::{Reveal, RevealSection};
use crate::content::{self, TEAM};
use crate::pages::use_scroll_top;
use crate::Route;

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_top();

    html! {
        <div class="about-page">
            <RevealSection class="hero hero-banner">
                <img class="hero-banner-image" src="/about-bg.jpg" alt="About Us Background" />
                <div class="hero-content">
                    <Reveal index={0}>
                        <h1>{ format!("About {}", content::COMPANY) }</h1>
                    </Reveal>
                    <Reveal index={1}>
                        <p class="hero-subtitle">
                            {"We are a team of passionate developers and designers dedicated to creating exceptional web solutions for businesses of all sizes."}
                        </p>
                    </Reveal>
                </div>
            </RevealSection>

            <RevealSection class="page-section container centered">
                <Reveal index={0}>
                    <h2 class="section-title">{"Our Mission"}</h2>
                </Reveal>
                <Reveal index={1}>
                    <p class="lead">
                        { format!("At {}, we strive to empower businesses with cutting-edge web solutions that drive growth, enhance user experiences, and stay ahead in the digital landscape.", content::COMPANY) }
                    </p>
                </Reveal>
                <Reveal index={2}>
                    <Link<Route> to={Route::Contact} classes="btn btn-primary btn-lg">
                        {"Work With Us →"}
                    </Link<Route>>
                </Reveal>
            </RevealSection>

            <RevealSection class="page-section plain">
                <div class="container">
                    <Reveal index={0}>
                        <h2 class="section-title">{"Meet Our Team"}</h2>
                    </Reveal>
                    <div class="card-grid wide">
                        {
                            TEAM.iter().enumerate().map(|(i, member)| html! {
                                <Reveal index={i + 1} class="card team-card">
                                    <img src={member.image} alt={member.name} loading="lazy" />
                                    <div class="team-body">
                                        <h3>{ member.name }</h3>
                                        <p class="team-role">{ member.role }</p>
                                        <p class="team-bio">{ member.bio }</p>
                                    </div>
                                </Reveal>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </RevealSection>

            <style>
                {r#"
                    .team-card {
                        padding: 0;
                        overflow: hidden;
                    }
                    .team-card img {
                        width: 100%;
                        height: 16rem;
                        object-fit: cover;
                    }
                    .team-body {
                        padding: 1.5rem;
                    }
                    .team-role {
                        color: #4b5563;
                        margin-bottom: 1rem;
                    }
                    .team-bio {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                "#}
            </style>
        </div>
    }
}
