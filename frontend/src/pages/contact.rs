use log::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::use_is_mounted;

use crate::components::section::{Reveal, RevealSection};
use crate::components::toast::use_toast;
use crate::config;
use crate::contact::delivery_from_config;
use crate::contact::workflow::{self, ContactAction, ContactForm, Field, SubmissionStatus};
use crate::content::CONTACT;
use crate::pages::use_scroll_top;

#[function_component(Contact)]
pub fn contact() -> Html {
    use_scroll_top();

    html! {
        <div class="contact-page">
            <section class="hero hero-banner">
                <img class="hero-banner-image" src="/contact-bg.jpg" alt="Contact Us Background" />
                <div class="hero-content">
                    <h1>{"Contact Us"}</h1>
                    <p class="hero-subtitle">
                        {"We'd love to hear from you. Get in touch with us for any inquiries or collaborations."}
                    </p>
                </div>
            </section>

            <section class="page-section container">
                <div class="contact-grid">
                    <ContactFormCard />
                    <ContactInfo />
                </div>
            </section>

            <style>
                {r#"
                    .contact-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 3rem;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .contact-form label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #374151;
                        margin-bottom: 0.25rem;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        width: 100%;
                        padding: 0.5rem 0.75rem;
                        border: 1px solid #d1d5db;
                        border-radius: 0.375rem;
                        font: inherit;
                    }
                    .contact-form textarea {
                        height: 8rem;
                        resize: vertical;
                    }
                    .contact-form button {
                        width: 100%;
                    }
                    .contact-form button:disabled {
                        opacity: 0.6;
                        cursor: not-allowed;
                    }
                    .info-row {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                    }
                    .info-icon {
                        font-size: 1.5rem;
                    }
                    .info-row h3 {
                        font-weight: 600;
                        color: #075985;
                    }
                    .btn-whatsapp {
                        background: #22c55e;
                        color: #ffffff;
                        margin-top: 1rem;
                    }
                    .btn-whatsapp:hover {
                        background: #16a34a;
                    }
                "#}
            </style>
        </div>
    }
}

#[function_component(ContactFormCard)]
fn contact_form_card() -> Html {
    let form = use_reducer(ContactForm::default);
    let delivery = use_state(delivery_from_config);
    let toaster = use_toast();
    let is_mounted = use_is_mounted();

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                Field::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                Field::Name | Field::Email => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            form.dispatch(ContactAction::Edit(field, value));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let delivery = (*delivery).clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let message = match form.prepare(config::DESTINATION_ADDRESS) {
                Ok(message) => message,
                Err(reason) => {
                    warn!("Contact form not sent: {}", reason);
                    return;
                }
            };
            form.dispatch(ContactAction::Begin);

            let form = form.clone();
            let delivery = delivery.clone();
            let toaster = toaster.clone();
            let is_mounted = is_mounted.clone();
            spawn_local(async move {
                let outcome = workflow::send(delivery.as_ref(), &message).await;
                if let Some((notice, settle)) = workflow::conclude(outcome, is_mounted()) {
                    toaster.notify(notice);
                    form.dispatch(settle);
                }
            });
        })
    };

    let submitting = form.status == SubmissionStatus::Submitting;

    html! {
        <RevealSection>
            <div class="card">
                <form class="contact-form" onsubmit={onsubmit}>
                    <Reveal index={0}>
                        <label for="name">{ Field::Name.label() }</label>
                        <input
                            type="text"
                            id="name"
                            name="name"
                            required=true
                            value={form.draft.name.clone()}
                            oninput={on_input(Field::Name)}
                        />
                    </Reveal>
                    <Reveal index={1}>
                        <label for="email">{ Field::Email.label() }</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            required=true
                            value={form.draft.email.clone()}
                            oninput={on_input(Field::Email)}
                        />
                    </Reveal>
                    <Reveal index={2}>
                        <label for="message">{ Field::Message.label() }</label>
                        <textarea
                            id="message"
                            name="message"
                            required=true
                            value={form.draft.message.clone()}
                            oninput={on_input(Field::Message)}
                        />
                    </Reveal>
                    <Reveal index={3}>
                        <button type="submit" class="btn btn-primary" disabled={!form.can_submit()}>
                            { if submitting { "Sending..." } else { "Send Message" } }
                        </button>
                    </Reveal>
                </form>
            </div>
        </RevealSection>
    }
}

#[function_component(ContactInfo)]
fn contact_info() -> Html {
    let rows = [
        ("📍", "Address", CONTACT.address),
        ("📞", "Phone", CONTACT.phone),
        ("✉️", "Email", CONTACT.email),
    ];

    html! {
        <RevealSection class="contact-info">
            <Reveal index={0}>
                <h2 class="section-title left">{"Contact Information"}</h2>
                <p>{"Feel free to reach out to us using any of the following methods. We're here to help!"}</p>
            </Reveal>
            {
                rows.iter().enumerate().map(|(i, (icon, title, value))| html! {
                    <Reveal index={i + 1} class="info-row">
                        <span class="info-icon">{ *icon }</span>
                        <div>
                            <h3>{ *title }</h3>
                            <p>{ *value }</p>
                        </div>
                    </Reveal>
                }).collect::<Html>()
            }
            <Reveal index={rows.len() + 1}>
                <a
                    href={CONTACT.whatsapp_url}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="btn btn-whatsapp"
                >
                    {"Contact Us via WhatsApp"}
                </a>
            </Reveal>
        </RevealSection>
    }
}
