use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::motion::{Animation, MotionArticle, MotionButton, MotionCard, MotionSection};
use crate::components::toast::{Toaster, ToastVariant};
use crate::contact::{join_errors, submit_contact_request, HostApplication};
use crate::estimator::StationType;

const BENEFITS: [(&str, &str, &str); 3] = [
    ("🔧", "Installation simple", "Audit rapide, devis transparent, pose réalisée par un électricien certifié IRVE."),
    ("💶", "Modèle rentable", "Tarif conseillé : 2,10€/h standard, 6,60€/h superchargeur. Frais ReVOLT : 1€ + 12%/session."),
    ("🛡️", "Assistance & assurance", "Support 24/7, gestion des paiements et couverture en cas d'incident."),
];

const STEPS: [&str; 4] = [
    "Validation technique et devis",
    "Installation et mise en service",
    "Publication de votre borne sur ReVOLT",
    "Suivi des revenus et support continu",
];

#[function_component(BecomeHost)]
pub fn become_host() -> Html {
    let form = use_state(HostApplication::default);
    let submitting = use_state(|| false);
    let toaster = use_context::<Toaster>();

    let text_field = |apply: fn(&mut HostApplication, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_station_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(station_type) = StationType::from_value(&select.value()) {
                form.set(HostApplication {
                    station_type,
                    ..(*form).clone()
                });
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let request = match form.to_request() {
                Ok(request) => request,
                Err(errors) => {
                    if let Some(toaster) = &toaster {
                        toaster.show("Erreur de validation", &join_errors(&errors), ToastVariant::Destructive);
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
                        form.set(HostApplication::default());
                        if let Some(toaster) = &toaster {
                            toaster.show(
                                "Inscription envoyée !",
                                "Notre équipe vous recontacte sous 48h.",
                                ToastVariant::Success,
                            );
                        }
                    }
                    Err(e) => {
                        log::error!("Host application failed: {}", e);
                        if let Some(toaster) = &toaster {
                            toaster.show(
                                "Erreur",
                                "Une erreur est survenue lors de l'envoi. Veuillez réessayer.",
                                ToastVariant::Destructive,
                            );
                        }
                    }
                }
            });
        })
    };

    html! {
        <main class="page become-host-page">
            <MotionSection class="page-header" animation={Animation::Page} aria_labelledby="host-title">
                <div class="container">
                    <span class="badge badge-outline">{"Hébergez une borne"}</span>
                    <h1 id="host-title">{"Devenez hôte ReVOLT"}</h1>
                    <p class="section-subtitle">
                        {"Installez une borne chez vous ou sur votre site et générez des revenus tout en accélérant la transition électrique."}
                    </p>
                </div>
            </MotionSection>

            <section class="section section-muted" aria-label="Avantages">
                <div class="container benefits-grid benefits-grid-3">
                    { for BENEFITS.iter().enumerate().map(|(i, (icon, title, description))| html! {
                        <MotionArticle animation={Animation::StaggerItem} index={i}>
                            <MotionCard class="benefit-card">
                                <div class="benefit-icon" aria-hidden="true">{*icon}</div>
                                <h3>{*title}</h3>
                                <p class="card-description">{*description}</p>
                            </MotionCard>
                        </MotionArticle>
                    }) }
                </div>
            </section>

            <MotionSection class="section" animation={Animation::ScrollReveal}>
                <div class="container two-columns">
                    <MotionCard hoverable={false}>
                        <div class="card-header">
                            <div class="benefit-icon" aria-hidden="true">{"🔌"}</div>
                            <h2 id="steps-title">{"Comment ça se passe ?"}</h2>
                            <p class="card-description">{"Du premier contact à la première recharge, en 4 étapes claires."}</p>
                        </div>
                        <ol class="card-content steps-list" aria-labelledby="steps-title">
                            { for STEPS.iter().map(|step| html! {
                                <li><span class="check" aria-hidden="true">{"✓"}</span>{*step}</li>
                            }) }
                        </ol>
                    </MotionCard>

                    <MotionCard hoverable={false}>
                        <div class="card-header">
                            <h2 id="host-form-title">{"S'inscrire pour devenir hôte"}</h2>
                            <p class="card-description">{"Remplissez le formulaire, notre équipe vous recontacte sous 48h."}</p>
                        </div>
                        <form class="card-content form" onsubmit={on_submit} aria-labelledby="host-form-title" novalidate=true>
                            <div class="form-field">
                                <label for="host-name">{"Nom complet"}</label>
                                <input
                                    id="host-name"
                                    placeholder="Jane Doe"
                                    required=true
                                    value={form.name.clone()}
                                    oninput={text_field(|f, v| f.name = v)}
                                />
                            </div>
                            <div class="form-row">
                                <div class="form-field">
                                    <label for="host-email">{"Email"}</label>
                                    <input
                                        id="host-email"
                                        type="email"
                                        placeholder="jane@exemple.com"
                                        required=true
                                        value={form.email.clone()}
                                        oninput={text_field(|f, v| f.email = v)}
                                    />
                                </div>
                                <div class="form-field">
                                    <label for="host-phone">{"Téléphone"}</label>
                                    <input
                                        id="host-phone"
                                        type="tel"
                                        placeholder="+33…"
                                        value={form.phone.clone()}
                                        oninput={text_field(|f, v| f.phone = v)}
                                    />
                                </div>
                            </div>
                            <div class="form-field">
                                <label for="host-address">{"Adresse d'installation"}</label>
                                <input
                                    id="host-address"
                                    placeholder="Rue, ville"
                                    value={form.address.clone()}
                                    oninput={text_field(|f, v| f.address = v)}
                                />
                            </div>
                            <div class="form-field">
                                <label for="host-station-type">{"Type de borne envisagé"}</label>
                                <select id="host-station-type" onchange={on_station_change}>
                                    { for [StationType::Standard, StationType::Supercharger].into_iter().map(|t| html! {
                                        <option value={t.value()} selected={form.station_type == t}>{t.label()}</option>
                                    }) }
                                </select>
                            </div>
                            <MotionButton class="btn-default btn-block" button_type="submit" disabled={*submitting}>
                                { if *submitting { "Envoi en cours..." } else { "Je m'inscris" } }
                            </MotionButton>
                        </form>
                    </MotionCard>
                </div>
            </MotionSection>
        </main>
    }
}
