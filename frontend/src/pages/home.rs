use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::Variant;
use crate::components::section::{Reveal, RevealSection};
use crate::content::{
    self, BANNER_IMAGES, DEVELOPERS, FEATURED_SERVICES, HIGHLIGHTS, MAX_RATING, PROJECTS,
    TESTIMONIALS,
};
use crate::pages::use_scroll_top;
use crate::rotator::HeroRotator;
use crate::Route;

/// Filled/empty flags for a row of `MAX_RATING` stars.
pub fn star_row(rating: u8) -> impl Iterator<Item = bool> {
    (0..MAX_RATING).map(move |i| i < rating)
}

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_top();

    html! {
        <div class="home-page">
            <RevealSection class="hero hero-full">
                <HeroRotator images={BANNER_IMAGES} alt="Banner background" />
                <div class="hero-content">
                    <Reveal index={0} variant={Variant::RotateIn}>
                        <h1>{ format!("Elevate Your Business with {}", content::COMPANY) }</h1>
                    </Reveal>
                    <Reveal index={1}>
                        <p class="hero-subtitle">
                            {"Unleash the power of professional web solutions and stunning designs. Your success story starts here."}
                        </p>
                    </Reveal>
                    <Reveal index={2}>
                        <Link<Route> to={Route::Contact} classes="btn btn-primary btn-lg">
                            {"Get Started →"}
                        </Link<Route>>
                    </Reveal>
                </div>
            </RevealSection>

            <RevealSection class="page-section container">
                <Reveal index={0}>
                    <h2 class="section-title">{"Our Premium Services"}</h2>
                </Reveal>
                <div class="card-grid">
                    {
                        FEATURED_SERVICES.iter().enumerate().map(|(i, service)| html! {
                            <Reveal index={i + 1}>
                                <div class="card">
                                    <h3 class="card-title">
                                        <span class="card-icon">{ service.icon }</span>
                                        { service.name }
                                    </h3>
                                    <p class="card-description">{ service.description }</p>
                                    <Link<Route> to={Route::Services} classes="btn btn-outline">
                                        {"Learn More"}
                                    </Link<Route>>
                                </div>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </RevealSection>

            <RevealSection class="page-section tinted">
                <div class="container">
                    <Reveal index={0}>
                        <h2 class="section-title">{"Our Latest Projects"}</h2>
                    </Reveal>
                    <div class="card-grid">
                        {
                            PROJECTS.iter().enumerate().map(|(i, project)| html! {
                                <Reveal index={i + 1} class="project-card">
                                    <img src={project.image} alt={project.name} loading="lazy" />
                                    <div class="project-body">
                                        <h3>{ project.name }</h3>
                                        <p>{ project.description }</p>
                                    </div>
                                </Reveal>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </RevealSection>

            <RevealSection class="page-section container">
                <Reveal index={0}>
                    <h2 class="section-title">{"What Our Customers Say"}</h2>
                </Reveal>
                <div class="card-grid">
                    {
                        TESTIMONIALS.iter().enumerate().map(|(i, testimonial)| html! {
                            <Reveal index={i + 1} class="testimonial">
                                <div class="testimonial-header">
                                    <img src={testimonial.image} alt={testimonial.name} width="60" height="60" />
                                    <div>
                                        <div class="testimonial-name">{ testimonial.name }</div>
                                        <div class="testimonial-company">{ testimonial.company }</div>
                                    </div>
                                </div>
                                <div class="stars" aria-label={format!("{} out of {} stars", testimonial.rating, MAX_RATING)}>
                                    {
                                        star_row(testimonial.rating).map(|filled| html! {
                                            <span class={classes!("star", filled.then(|| "filled"))}>{"★"}</span>
                                        }).collect::<Html>()
                                    }
                                </div>
                                <p class="testimonial-comment">{ format!("\"{}\"", testimonial.comment) }</p>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </RevealSection>

            <RevealSection class="page-section highlighted">
                <div class="container">
                    <Reveal index={0}>
                        <h2 class="section-title">{ format!("Why Choose {}?", content::COMPANY) }</h2>
                    </Reveal>
                    <div class="card-grid">
                        {
                            HIGHLIGHTS.iter().enumerate().map(|(i, highlight)| html! {
                                <Reveal index={i + 1} variant={Variant::RotateIn} class="highlight">
                                    <div class="highlight-icon">{ highlight.icon }</div>
                                    <h3>{ highlight.title }</h3>
                                    <p>{ highlight.description }</p>
                                </Reveal>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </RevealSection>

            <RevealSection class="page-section container">
                <Reveal index={0}>
                    <h2 class="section-title">{"Meet Our Developers"}</h2>
                </Reveal>
                <div class="card-grid">
                    {
                        DEVELOPERS.iter().enumerate().map(|(i, developer)| html! {
                            <Reveal index={i + 1} class="developer">
                                <img src={developer.image} alt={developer.name} width="150" height="150" />
                                <h3>{ developer.name }</h3>
                                <p class="developer-role">{ developer.role }</p>
                                <p class="developer-skills">{ developer.skills }</p>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </RevealSection>

            <RevealSection class="page-section container centered">
                <Reveal index={0}>
                    <h2 class="section-title">{"Ready to Take Your Business to the Next Level?"}</h2>
                </Reveal>
                <Reveal index={1}>
                    <p class="lead">
                        { format!("Join the ranks of satisfied clients who have transformed their online presence with {}.", content::COMPANY) }
                    </p>
                </Reveal>
                <Reveal index={2}>
                    <Link<Route> to={Route::Contact} classes="btn btn-primary btn-lg">
                        {"Start Your Journey →"}
                    </Link<Route>>
                </Reveal>
            </RevealSection>

            <style>
                {r#"
                    .hero-full {
                        position: relative;
                        height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-rotator {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }
                    .hero-rotator-image {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        filter: brightness(0.5);
                    }
                    .hero-full .hero-content {
                        position: relative;
                        z-index: 1;
                        text-align: center;
                        color: #ffffff;
                    }
                    .hero-full h1 {
                        font-size: 3rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .project-card {
                        background: #ffffff;
                        border-radius: 0.5rem;
                        overflow: hidden;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .project-card img {
                        width: 100%;
                        height: 12rem;
                        object-fit: cover;
                    }
                    .project-body {
                        padding: 1.5rem;
                    }
                    .testimonial {
                        background: #ffffff;
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        border: 1px solid #bae6fd;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .testimonial-header {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }
                    .testimonial-header img {
                        border-radius: 50%;
                    }
                    .testimonial-name {
                        font-weight: 600;
                        color: #0369a1;
                    }
                    .testimonial-company {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .stars {
                        margin-bottom: 1rem;
                    }
                    .star {
                        color: #d1d5db;
                        font-size: 1.25rem;
                    }
                    .star.filled {
                        color: #facc15;
                    }
                    .highlight {
                        text-align: center;
                    }
                    .highlight-icon {
                        display: inline-block;
                        background: #0ea5e9;
                        border-radius: 50%;
                        padding: 1rem;
                        font-size: 2rem;
                        margin-bottom: 1rem;
                    }
                    .developer {
                        text-align: center;
                    }
                    .developer img {
                        border-radius: 50%;
                        margin: 0 auto 1rem;
                    }
                    .developer-skills {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_row_fills_from_the_left() {
        let row: Vec<bool> = star_row(4).collect();
        assert_eq!(row, vec![true, true, true, true, false]);
        assert_eq!(star_row(0).filter(|f| *f).count(), 0);
        assert_eq!(star_row(MAX_RATING).filter(|f| *f).count(), MAX_RATING as usize);
    }
}
