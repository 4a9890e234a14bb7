use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::a11y::aria::set_validation_attributes;
use crate::components::faq::FaqList;
use crate::components::motion::{Animation, MotionArticle, MotionButton, MotionCard, MotionSection};
use crate::components::toast::{Toaster, ToastVariant};
use crate::config::{CONTACT_EMAIL, CONTACT_PHONE, SUPPORT_EMAIL};
use crate::contact::{join_errors, submit_contact_request, ContactForm, InquiryType, ValidationError};

const CONTACT_FAQ: &[(&str, &str)] = &[
    (
        "Comment puis-je signaler un problème avec une borne de recharge ?",
        "Vous pouvez signaler un problème directement dans l'application en cliquant sur \"Signaler un problème\" dans les détails de la borne, ou nous contacter via ce formulaire.",
    ),
    (
        "Quels sont les délais de réponse pour le support ?",
        "Nous nous engageons à répondre à toutes les demandes dans les 24h pour les questions générales, et dans les 4h pour les utilisateurs Pro.",
    ),
    (
        "Puis-je devenir partenaire de ReVOLT ?",
        "Oui ! Nous sommes toujours à la recherche de nouveaux partenaires. Contactez-nous via le formulaire en sélectionnant \"Partenariat\" comme type de demande.",
    ),
    (
        "Comment puis-je proposer une nouvelle fonctionnalité ?",
        "Nous adorons recevoir vos suggestions ! Utilisez le type de demande \"Retour d'expérience\" pour nous faire part de vos idées d'amélioration.",
    ),
];

fn contact_cards() -> [(&'static str, &'static str, &'static str, &'static str); 4] {
    [
        ("✉️", "Email", CONTACT_EMAIL, "Réponse sous 24h"),
        ("📞", "Téléphone", CONTACT_PHONE, "Lun-Ven 9h-18h"),
        ("📍", "Adresse", "123 Avenue des Champs-Élysées", "75008 Paris, France"),
        ("🕐", "Support", SUPPORT_EMAIL, "24/7 pour les utilisateurs Pro"),
    ]
}

fn error_id(field: &str) -> String {
    format!("{}-error", field)
}

/// First message reported for `field`, if any.
fn field_error(errors: &[ValidationError], field: &str) -> Option<&'static str> {
    errors.iter().find(|e| e.field() == field).map(ValidationError::message)
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let errors = use_state(Vec::<ValidationError>::new);
    let submitting = use_state(|| false);
    let toaster = use_context::<Toaster>();

    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let inquiry_ref = use_node_ref();
    let message_ref = use_node_ref();

    let text_input = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ContactForm {
                message: area.value(),
                ..(*form).clone()
            });
        })
    };

    let on_inquiry = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(ContactForm {
                inquiry_type: InquiryType::from_value(&select.value()),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let fields = [
            ("name", name_ref.clone()),
            ("email", email_ref.clone()),
            ("inquiryType", inquiry_ref.clone()),
            ("message", message_ref.clone()),
        ];
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let result = form.to_request();
            let found = result.as_ref().err().cloned().unwrap_or_default();
            for (field, node) in fields.iter() {
                if let Some(element) = node.cast::<Element>() {
                    let invalid = found.iter().any(|err| err.field() == *field);
                    let description = error_id(field);
                    set_validation_attributes(&element, !invalid, invalid.then(|| description.as_str()));
                }
            }
            errors.set(found.clone());

            let request = match result {
                Ok(request) => request,
                Err(_) => {
                    if let Some((_, node)) = fields.iter().find(|(f, _)| found.first().map(|e| e.field()) == Some(*f)) {
                        if let Some(el) = node.cast::<HtmlElement>() {
                            let _ = el.focus();
                        }
                    }
                    if let Some(toaster) = &toaster {
                        toaster.show("Erreur de validation", &join_errors(&found), ToastVariant::Destructive);
                    }
                    return;
                }
            };

            submitting.set(true);
            let form = form.clone();
            let submitting = submitting.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                let result = submit_contact_request(&request).await;
                submitting.set(false);
                match result {
                    Ok(()) => {
                        form.set(ContactForm::default());
                        if let Some(toaster) = &toaster {
                            toaster.show(
                                "Message envoyé avec succès !",
                                "Nous vous répondrons dans les plus brefs délais.",
                                ToastVariant::Success,
                            );
                        }
                    }
                    Err(e) => {
                        log::error!("Contact submission failed: {}", e);
                        gloo_console::error!("Contact submission failed:", e.to_string());
                        if let Some(toaster) = &toaster {
                            toaster.show(
                                "Erreur",
                                "Une erreur est survenue. Veuillez réessayer.",
                                ToastVariant::Destructive,
                            );
                        }
                    }
                }
            });
        })
    };

    let error_text = |field: &str| match field_error(&errors, field) {
        Some(message) => html! { <p id={error_id(field)} class="field-error">{message}</p> },
        None => html! {},
    };
    let selected_inquiry = form.inquiry_type.map(InquiryType::value).unwrap_or("");

    html! {
        <main class="page contact-page">
            <MotionSection class="page-header" animation={Animation::Page} aria_labelledby="contact-title">
                <div class="container">
                    <span class="badge badge-secondary">{"📞 Contact"}</span>
                    <h1 id="contact-title">
                        {"Nous sommes là pour vous "}
                        <span class="text-gradient">{"aider"}</span>
                    </h1>
                    <p class="section-subtitle">
                        {"Une question, un problème, ou simplement envie de nous faire part de votre expérience ? Notre équipe est à votre écoute."}
                    </p>
                </div>
            </MotionSection>

            <section class="section" aria-label="Coordonnées">
                <div class="container contact-cards">
                    { for contact_cards().iter().enumerate().map(|(i, (icon, title, description, details))| html! {
                        <MotionArticle animation={Animation::StaggerItem} index={i}>
                            <MotionCard class="contact-card">
                                <div class="contact-icon" aria-hidden="true">{*icon}</div>
                                <h3>{*title}</h3>
                                <p class="contact-description">{*description}</p>
                                <p class="card-description">{*details}</p>
                            </MotionCard>
                        </MotionArticle>
                    }) }
                </div>
            </section>

            <MotionSection class="section section-muted" animation={Animation::ScrollReveal} aria_labelledby="contact-form-title">
                <div class="container narrow">
                    <MotionCard hoverable={false}>
                        <div class="card-header">
                            <span class="badge badge-outline">{"Contactez-nous"}</span>
                            <h2 id="contact-form-title">{"Envoyez-nous un message"}</h2>
                            <p class="card-description">
                                {"Remplissez le formulaire ci-dessous et nous vous répondrons dans les plus brefs délais."}
                            </p>
                        </div>
                        <form class="card-content form" onsubmit={on_submit} novalidate=true>
                            <div class="form-row">
                                <div class="form-field">
                                    <label for="name">{"Nom complet *"}</label>
                                    <input
                                        id="name"
                                        ref={name_ref}
                                        placeholder="Votre nom complet"
                                        required=true
                                        value={form.name.clone()}
                                        oninput={text_input(|f, v| f.name = v)}
                                    />
                                    { error_text("name") }
                                </div>
                                <div class="form-field">
                                    <label for="email">{"Email *"}</label>
                                    <input
                                        id="email"
                                        ref={email_ref}
                                        type="email"
                                        placeholder="votre@email.com"
                                        required=true
                                        value={form.email.clone()}
                                        oninput={text_input(|f, v| f.email = v)}
                                    />
                                    { error_text("email") }
                                </div>
                            </div>
                            <div class="form-field">
                                <label for="company">{"Entreprise"}</label>
                                <input
                                    id="company"
                                    placeholder="Nom de votre entreprise"
                                    value={form.company.clone()}
                                    oninput={text_input(|f, v| f.company = v)}
                                />
                            </div>
                            <div class="form-field">
                                <label for="inquiryType">{"Type de demande *"}</label>
                                <select id="inquiryType" ref={inquiry_ref} required=true onchange={on_inquiry}>
                                    <option value="" selected={selected_inquiry.is_empty()} disabled=true>
                                        {"Sélectionnez le type de demande"}
                                    </option>
                                    { for InquiryType::ALL.into_iter().map(|t| html! {
                                        <option value={t.value()} selected={selected_inquiry == t.value()}>
                                            {format!("{} {}", t.icon(), t.label())}
                                        </option>
                                    }) }
                                </select>
                                { error_text("inquiryType") }
                            </div>
                            <div class="form-field">
                                <label for="subject">{"Sujet"}</label>
                                <input
                                    id="subject"
                                    placeholder="Sujet de votre message"
                                    value={form.subject.clone()}
                                    oninput={text_input(|f, v| f.subject = v)}
                                />
                            </div>
                            <div class="form-field">
                                <label for="message">{"Message *"}</label>
                                <textarea
                                    id="message"
                                    ref={message_ref}
                                    rows="6"
                                    placeholder="Décrivez votre demande en détail..."
                                    required=true
                                    value={form.message.clone()}
                                    oninput={on_message}
                                />
                                { error_text("message") }
                            </div>
                            <MotionButton class="btn-default btn-lg btn-block" button_type="submit" disabled={*submitting}>
                                { if *submitting { "Envoi en cours..." } else { "Envoyer le message" } }
                            </MotionButton>
                        </form>
                    </MotionCard>
                </div>
            </MotionSection>

            <MotionSection class="section faq-section" animation={Animation::FadeIn} aria_labelledby="contact-faq-title">
                <div class="container narrow">
                    <h2 id="contact-faq-title" class="section-title">{"Questions fréquentes"}</h2>
                    <FaqList items={CONTACT_FAQ} />
                </div>
            </MotionSection>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_pick_the_first_message_for_a_field() {
        let errors = vec![ValidationError::EmailRequired, ValidationError::EmailInvalid];
        assert_eq!(field_error(&errors, "email"), Some("L'email est requis"));
        assert_eq!(field_error(&errors, "name"), None);
        assert_eq!(error_id("email"), "email-error");
    }
}
