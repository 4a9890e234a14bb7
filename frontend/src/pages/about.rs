use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_number::AnimatedNumber;
use crate::components::motion::{Animation, MotionArticle, MotionCard, MotionDiv, MotionSection};
use crate::components::screen_reader_text::ScreenReaderText;
use crate::config::BRAND_NAME;
use crate::Route;

const VALUES: [(&str, &str, &str); 4] = [
    ("❤️", "Passion", "Nous sommes passionnés par la mobilité durable et l'innovation technologique."),
    ("🎯", "Mission", "Faciliter la transition vers la mobilité électrique pour tous."),
    ("👥", "Communauté", "Construire une communauté engagée autour de la mobilité verte."),
    ("🏆", "Excellence", "Offrir une expérience utilisateur exceptionnelle et des services de qualité."),
];

const MILESTONES: [(&str, &str, &str); 5] = [
    ("2020", "Fondation de ReVOLT", "Création de l'entreprise avec la vision de révolutionner la mobilité électrique."),
    ("2021", "Première version de l'app", "Lancement de notre application mobile avec 1 000 bornes de recharge."),
    ("2022", "Expansion nationale", "Couverture de toute la France avec 5 000 bornes et 10 000 utilisateurs."),
    ("2023", "Innovation technologique", "Intégration de l'IA pour l'optimisation des trajets et la prédiction de disponibilité."),
    ("2024", "Leader du marché", "Plus de 50 000 utilisateurs actifs et 10 000 bornes de recharge partenaires."),
];

struct TeamMember {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
}

impl TeamMember {
    fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

const TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Marie Dubois",
        role: "CEO & Co-fondatrice",
        bio: "Ingénieure en énergie avec 15 ans d'expérience dans les technologies vertes.",
    },
    TeamMember {
        name: "Thomas Martin",
        role: "CTO & Co-fondateur",
        bio: "Expert en développement mobile et architecture cloud, ancien de Google.",
    },
    TeamMember {
        name: "Sophie Chen",
        role: "Directrice Produit",
        bio: "Spécialiste UX/UI avec une passion pour l'innovation dans la mobilité.",
    },
    TeamMember {
        name: "Alexandre Rousseau",
        role: "Directeur Commercial",
        bio: "Expert en développement B2B et partenariats stratégiques.",
    },
];

// (value, suffix, label); 24/7 is counted as "24" with a "/7" suffix.
const STATS: [(u64, &str, &str); 6] = [
    (50_000, "+", "Utilisateurs actifs"),
    (10_000, "+", "Bornes de recharge"),
    (95, "%", "Satisfaction client"),
    (24, "/7", "Support disponible"),
    (15, "", "Pays couverts"),
    (2, "M+", "Recharges effectuées"),
];

const AWARDS: [(&str, &str); 4] = [
    ("Prix de l'Innovation 2023", "Reconnu par le ministère de la Transition écologique"),
    ("Certification ISO 14001", "Engagement environnemental certifié"),
    ("Partenariat avec Renault", "Intégration native dans les véhicules électriques"),
    ("Top 10 Startups", "Classé dans le top 10 des startups françaises 2024"),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <main class="page about-page">
            <MotionSection class="page-header" animation={Animation::Page} aria_labelledby="about-title">
                <div class="container">
                    <span class="badge badge-secondary">{"À propos"}</span>
                    <h1 id="about-title">
                        {"Nous construisons l'avenir de la "}
                        <span class="text-gradient">{"mobilité électrique"}</span>
                    </h1>
                    <p class="section-subtitle">
                        {format!("Depuis 2020, {} rend la recharge électrique simple, accessible et partagée.", BRAND_NAME)}
                    </p>
                </div>
            </MotionSection>

            <MotionSection class="section" animation={Animation::FadeIn} aria_labelledby="values-title">
                <div class="container">
                    <h2 id="values-title" class="section-title">{"Nos valeurs"}</h2>
                    <div class="feature-grid values-grid">
                        { for VALUES.iter().enumerate().map(|(i, (icon, title, description))| html! {
                            <MotionArticle animation={Animation::StaggerItem} index={i}>
                                <MotionCard class="value-card">
                                    <div class="feature-icon" aria-hidden="true">{*icon}</div>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </MotionCard>
                            </MotionArticle>
                        }) }
                    </div>
                </div>
            </MotionSection>

            <MotionSection class="section section-muted" animation={Animation::ScrollReveal} aria_labelledby="timeline-title">
                <div class="container">
                    <h2 id="timeline-title" class="section-title">{"Notre histoire"}</h2>
                    <ol class="timeline">
                        { for MILESTONES.iter().enumerate().map(|(i, (year, title, description))| html! {
                            <li class={classes!("timeline-item", if i % 2 == 0 { "left" } else { "right" })}>
                                <MotionDiv animation={Animation::SlideUp} index={i}>
                                    <span class="timeline-year">{*year}</span>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </MotionDiv>
                            </li>
                        }) }
                    </ol>
                </div>
            </MotionSection>

            <MotionSection class="section" animation={Animation::FadeIn} aria_labelledby="team-title">
                <div class="container">
                    <h2 id="team-title" class="section-title">{"Notre équipe"}</h2>
                    <div class="team-grid">
                        { for TEAM.iter().enumerate().map(|(i, member)| html! {
                            <MotionArticle class="team-member" animation={Animation::StaggerItem} index={i}>
                                <MotionCard>
                                    <div class="avatar" aria-hidden="true">{member.initials()}</div>
                                    <h3>{member.name}</h3>
                                    <p class="team-role">{member.role}</p>
                                    <p>{member.bio}</p>
                                </MotionCard>
                            </MotionArticle>
                        }) }
                    </div>
                </div>
            </MotionSection>

            <MotionSection class="section stats-section" animation={Animation::FadeIn} aria_labelledby="about-stats-title">
                <div class="container">
                    <h2 id="about-stats-title"><ScreenReaderText>{format!("{} en chiffres", BRAND_NAME)}</ScreenReaderText></h2>
                    <div class="stats-grid stats-grid-6">
                        { for STATS.iter().enumerate().map(|(i, (value, suffix, label))| html! {
                            <MotionDiv class="stat-item" animation={Animation::ScaleIn} index={i}>
                                <AnimatedNumber class="stat-value" to={*value} suffix={*suffix} />
                                <p class="stat-label">{*label}</p>
                            </MotionDiv>
                        }) }
                    </div>
                </div>
            </MotionSection>

            <MotionSection class="section" animation={Animation::ScrollReveal} aria_labelledby="awards-title">
                <div class="container">
                    <h2 id="awards-title" class="section-title">{"Reconnaissances"}</h2>
                    <ul class="awards-grid">
                        { for AWARDS.iter().map(|(title, description)| html! {
                            <li class="award-item">
                                <span class="award-icon" aria-hidden="true">{"🏅"}</span>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </li>
                        }) }
                    </ul>
                </div>
            </MotionSection>

            <MotionSection class="section cta-section" animation={Animation::SlideUp}>
                <div class="container cta-content">
                    <h2>{"Rejoignez l'aventure"}</h2>
                    <p>{"Une question, une idée de partenariat ? Parlons-en."}</p>
                    <Link<Route> to={Route::Contact} classes="btn btn-default btn-lg">{"Nous contacter"}</Link<Route>>
                </div>
            </MotionSection>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_avatars_use_initials() {
        assert_eq!(TEAM[0].initials(), "MD");
        assert_eq!(TEAM[3].initials(), "AR");
    }
}
