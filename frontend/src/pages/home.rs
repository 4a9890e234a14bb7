use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_number::AnimatedNumber;
use crate::components::motion::{Animation, MotionArticle, MotionCard, MotionDiv, MotionSection};
use crate::components::revenue_estimator::RevenueEstimator;
use crate::components::screen_reader_text::ScreenReaderText;
use crate::config::BRAND_NAME;
use crate::Route;

const FEATURES: [(&str, &str, &str); 6] = [
    ("📍", "Trouvez une borne", "Localisez en un instant les bornes disponibles autour de vous, chez des particuliers comme chez des professionnels."),
    ("⚡", "Réservez en avance", "Bloquez votre créneau de recharge avant de partir et arrivez sans attendre."),
    ("💳", "Paiement intégré", "Payez directement dans l'application, sans badge ni abonnement caché."),
    ("🔒", "Sécurité garantie", "Hôtes vérifiés, transactions sécurisées et assistance à chaque étape."),
    ("🌱", "Énergie responsable", "Favorisez les bornes alimentées par des énergies renouvelables."),
    ("🤝", "Communauté", "Partagez votre borne et rejoignez un réseau de conducteurs engagés."),
];

struct Stat {
    value: u64,
    suffix: &'static str,
    label: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { value: 10_000, suffix: "+", label: "Bornes partagées" },
    Stat { value: 50_000, suffix: "+", label: "Conducteurs actifs" },
    Stat { value: 95, suffix: "%", label: "Clients satisfaits" },
    Stat { value: 24, suffix: "/7", label: "Support disponible" },
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="page home-page">
            <MotionSection class="hero" animation={Animation::Page} aria_labelledby="hero-title">
                <div class="container hero-content">
                    <h1 id="hero-title" class="hero-title">
                        {"La recharge électrique, "}
                        <span class="text-gradient">{"partagée"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {format!("{} connecte les conducteurs de véhicules électriques aux bornes de recharge des particuliers et des entreprises.", BRAND_NAME)}
                    </p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::BecomeHost} classes="btn btn-default btn-lg">
                            {"Devenir hôte"}
                        </Link<Route>>
                        <Link<Route> to={Route::Features} classes="btn btn-outline btn-lg">
                            {"Découvrir les fonctionnalités"}
                        </Link<Route>>
                    </div>
                </div>
            </MotionSection>

            <MotionSection class="section features-preview" animation={Animation::FadeIn} aria_labelledby="features-title">
                <div class="container">
                    <h2 id="features-title" class="section-title">{"Pourquoi choisir "}{BRAND_NAME}{" ?"}</h2>
                    <div class="feature-grid">
                        { for FEATURES.iter().enumerate().map(|(i, (icon, title, description))| html! {
                            <MotionArticle class="feature-item" animation={Animation::StaggerItem} index={i}>
                                <MotionCard>
                                    <div class="feature-icon" aria-hidden="true">{*icon}</div>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </MotionCard>
                            </MotionArticle>
                        }) }
                    </div>
                </div>
            </MotionSection>

            <MotionSection class="section estimator-section" animation={Animation::ScrollReveal} aria_labelledby="estimator-title">
                <div class="container">
                    <h2 id="estimator-title" class="section-title">{"Combien pouvez-vous gagner ?"}</h2>
                    <p class="section-subtitle">
                        {"Estimez les revenus que vos bornes peuvent générer chaque mois."}
                    </p>
                    <RevenueEstimator />
                </div>
            </MotionSection>

            <MotionSection class="section stats-section" animation={Animation::FadeIn} aria_labelledby="stats-title">
                <div class="container">
                    <h2 id="stats-title"><ScreenReaderText>{"En chiffres"}</ScreenReaderText></h2>
                    <div class="stats-grid">
                        { for STATS.iter().enumerate().map(|(i, stat)| html! {
                            <MotionDiv class="stat-item" animation={Animation::ScaleIn} index={i}>
                                <AnimatedNumber
                                    class="stat-value"
                                    to={stat.value}
                                    suffix={stat.suffix}
                                />
                                <p class="stat-label">{stat.label}</p>
                            </MotionDiv>
                        }) }
                    </div>
                </div>
            </MotionSection>

            <MotionSection class="section cta-section" animation={Animation::SlideUp} aria_labelledby="cta-title">
                <div class="container cta-content">
                    <h2 id="cta-title">{"Prêt à rejoindre la révolution ?"}</h2>
                    <p>{"Inscrivez-vous gratuitement et commencez à recharger ou à partager dès aujourd'hui."}</p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::Pricing} classes="btn btn-default btn-lg">
                            {"Voir les tarifs"}
                        </Link<Route>>
                        <Link<Route> to={Route::Contact} classes="btn btn-outline btn-lg">
                            {"Nous contacter"}
                        </Link<Route>>
                    </div>
                </div>
            </MotionSection>
        </main>
    }
}
