use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::motion::{Animation, MotionArticle, MotionCard, MotionSection};
use crate::Route;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const PRIMARY_FEATURES: [Feature; 6] = [
    Feature {
        icon: "🗺️",
        title: "Carte interactive",
        description: "Visualisez toutes les bornes disponibles en temps réel, filtrez par puissance, type de prise et prix.",
    },
    Feature {
        icon: "📅",
        title: "Réservation instantanée",
        description: "Réservez un créneau en quelques secondes et recevez une confirmation immédiate de l'hôte.",
    },
    Feature {
        icon: "💳",
        title: "Paiement sécurisé",
        description: "Carte bancaire, Apple Pay ou Google Pay : chaque transaction est chiffrée et protégée.",
    },
    Feature {
        icon: "🔔",
        title: "Notifications intelligentes",
        description: "Soyez prévenu lorsque votre recharge est terminée ou qu'une borne se libère près de vous.",
    },
    Feature {
        icon: "📊",
        title: "Suivi de consommation",
        description: "Consultez l'historique de vos recharges, l'énergie consommée et vos dépenses mensuelles.",
    },
    Feature {
        icon: "⭐",
        title: "Avis vérifiés",
        description: "Choisissez vos bornes grâce aux évaluations laissées par la communauté après chaque session.",
    },
];

const SECONDARY_FEATURES: [Feature; 6] = [
    Feature {
        icon: "🌍",
        title: "Itinéraires optimisés",
        description: "Planifiez vos trajets longue distance avec des arrêts de recharge adaptés à votre véhicule.",
    },
    Feature {
        icon: "🔌",
        title: "Compatibilité universelle",
        description: "Type 2, CCS, CHAdeMO : trouvez la prise qui correspond à votre voiture.",
    },
    Feature {
        icon: "🏠",
        title: "Gestion des hôtes",
        description: "Fixez vos disponibilités, vos tarifs et suivez vos revenus depuis un tableau de bord dédié.",
    },
    Feature {
        icon: "🛡️",
        title: "Assurance incluse",
        description: "Chaque session est couverte pour protéger hôtes et conducteurs.",
    },
    Feature {
        icon: "💬",
        title: "Messagerie intégrée",
        description: "Échangez directement avec l'hôte pour préciser l'accès ou l'emplacement de la borne.",
    },
    Feature {
        icon: "♻️",
        title: "Bilan carbone",
        description: "Mesurez les émissions évitées grâce à vos trajets électriques.",
    },
];

fn feature_card(index: usize, feature: &Feature, class: &'static str) -> Html {
    html! {
        <MotionArticle class={class} animation={Animation::StaggerItem} index={index}>
            <MotionCard>
                <div class="feature-icon" aria-hidden="true">{feature.icon}</div>
                <h3>{feature.title}</h3>
                <p>{feature.description}</p>
            </MotionCard>
        </MotionArticle>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <main class="page features-page">
            <MotionSection class="page-header" animation={Animation::Page} aria_labelledby="features-page-title">
                <div class="container">
                    <h1 id="features-page-title">{"Fonctionnalités"}</h1>
                    <p class="section-subtitle">
                        {"Tout ce dont vous avez besoin pour recharger sereinement, ou rentabiliser votre borne."}
                    </p>
                </div>
            </MotionSection>

            <MotionSection class="section" animation={Animation::FadeIn} aria_labelledby="primary-features-title">
                <div class="container">
                    <h2 id="primary-features-title" class="section-title">{"L'essentiel"}</h2>
                    <div class="feature-grid">
                        { for PRIMARY_FEATURES.iter().enumerate().map(|(i, f)| feature_card(i, f, "feature-item")) }
                    </div>
                </div>
            </MotionSection>

            <MotionSection class="section section-muted" animation={Animation::ScrollReveal} aria_labelledby="secondary-features-title">
                <div class="container">
                    <h2 id="secondary-features-title" class="section-title">{"Et bien plus encore"}</h2>
                    <div class="feature-grid feature-grid-compact">
                        { for SECONDARY_FEATURES.iter().enumerate().map(|(i, f)| feature_card(i, f, "feature-item feature-item-compact")) }
                    </div>
                </div>
            </MotionSection>

            <MotionSection class="section cta-section" animation={Animation::SlideUp}>
                <div class="container cta-content">
                    <h2>{"Envie d'essayer ?"}</h2>
                    <div class="hero-actions">
                        <Link<Route> to={Route::Pricing} classes="btn btn-default btn-lg">{"Voir les tarifs"}</Link<Route>>
                        <Link<Route> to={Route::BecomeHost} classes="btn btn-outline btn-lg">{"Devenir hôte"}</Link<Route>>
                    </div>
                </div>
            </MotionSection>
        </main>
    }
}
