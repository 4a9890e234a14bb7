use yew::prelude::*;
use yew_hooks::use_bool_toggle;
use yew_router::prelude::*;

use crate::a11y::keyboard::handle_activation_event;
use crate::components::faq::FaqList;
use crate::components::motion::{Animation, MotionArticle, MotionButton, MotionDiv, MotionSection};
use crate::components::toast::{Toaster, ToastVariant};
use crate::config::BRAND_NAME;
use crate::Route;

#[derive(Clone, Copy, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub monthly_price: u32,
    pub annual_price: u32,
    pub popular: bool,
    pub contact_sales: bool,
    pub features: &'static [&'static str],
    pub limitations: &'static [&'static str],
}

impl Plan {
    pub fn price(&self, annual: bool) -> u32 {
        if annual {
            self.annual_price
        } else {
            self.monthly_price
        }
    }
}

/// Per-month cost of an annual subscription, rounded to the euro.
pub fn monthly_equivalent(annual_price: u32) -> u32 {
    (f64::from(annual_price) / 12.0).round() as u32
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        description: "Parfait pour débuter avec la mobilité électrique",
        icon: "⚡",
        monthly_price: 9,
        annual_price: 90,
        popular: false,
        contact_sales: false,
        features: &[
            "Jusqu'à 5 recharges par mois",
            "Recherche de bornes de base",
            "Support par email",
            "Application mobile",
            "Historique des recharges",
        ],
        limitations: &[
            "Pas de réservation avancée",
            "Pas de support prioritaire",
            "Pas d'analytics détaillés",
        ],
    },
    Plan {
        name: "Pro",
        description: "Pour les conducteurs réguliers qui veulent plus de flexibilité",
        icon: "👑",
        monthly_price: 29,
        annual_price: 290,
        popular: true,
        contact_sales: false,
        features: &[
            "Recharges illimitées",
            "Réservation avancée",
            "Support prioritaire 24/7",
            "Analytics détaillés",
            "Notifications personnalisées",
            "Intégration calendrier",
            "Statistiques de consommation",
            "Programme de fidélité",
        ],
        limitations: &[],
    },
    Plan {
        name: "Enterprise",
        description: "Solution complète pour les flottes et entreprises",
        icon: "🚀",
        monthly_price: 99,
        annual_price: 990,
        popular: false,
        contact_sales: true,
        features: &[
            "Tout de Pro inclus",
            "Gestion de flotte",
            "API personnalisée",
            "Support dédié",
            "Tableau de bord avancé",
            "Rapports personnalisés",
            "Intégrations tierces",
            "Formation équipe",
            "SLA garanti",
            "Facturation centralisée",
        ],
        limitations: &[],
    },
];

const BENEFITS: [(&str, &str, &str); 4] = [
    ("🛡️", "Sécurisé", "Paiements sécurisés et données protégées"),
    ("👥", "Communauté", "Rejoignez 50 000+ utilisateurs satisfaits"),
    ("🕐", "Support 24/7", "Assistance disponible à tout moment"),
    ("🌍", "Couverture", "10 000+ bornes dans toute la France"),
];

const PRICING_FAQ: &[(&str, &str)] = &[
    (
        "Puis-je changer de plan à tout moment ?",
        "Oui, vous pouvez changer de plan à tout moment. Les changements prennent effet immédiatement et nous ajustons la facturation en conséquence.",
    ),
    (
        "Que se passe-t-il si je dépasse ma limite de recharges ?",
        "Pour le plan Starter, vous recevrez une notification quand vous approchez de votre limite. Vous pouvez passer au plan Pro pour des recharges illimitées.",
    ),
    (
        "Les prix incluent-ils les frais de recharge ?",
        "Non, nos abonnements couvrent uniquement l'accès à la plateforme et ses fonctionnalités. Les frais de recharge sont facturés séparément par les opérateurs de bornes.",
    ),
    (
        "Y a-t-il un engagement minimum ?",
        "Non, tous nos plans sont sans engagement. Vous pouvez annuler à tout moment sans frais supplémentaires.",
    ),
    (
        "Proposez-vous des remises pour les étudiants ?",
        "Oui, nous offrons 50% de réduction sur le plan Pro pour les étudiants avec une carte d'étudiant valide.",
    ),
    (
        "Comment fonctionne la facturation annuelle ?",
        "Avec la facturation annuelle, vous économisez 2 mois par rapport au paiement mensuel. Le paiement est effectué une fois par an.",
    ),
];

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    plan: Plan,
    annual: bool,
    index: usize,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let toaster = use_context::<Toaster>();
    let plan = props.plan;

    let choose = {
        let name = plan.name;
        Callback::from(move |_: MouseEvent| {
            log::info!("Plan {} selected", name);
            if let Some(toaster) = &toaster {
                toaster.show(
                    &format!("Plan {}", name),
                    "L'inscription se fait depuis l'application mobile.",
                    ToastVariant::Success,
                );
            }
        })
    };

    let title_id = format!("plan-{}", plan.name.to_lowercase());
    let button_class = if plan.popular { "btn-default btn-lg btn-block" } else { "btn-dark btn-lg btn-block" };

    html! {
        <MotionArticle
            class={classes!("pricing-card", plan.popular.then(|| "popular"))}
            animation={Animation::StaggerItem}
            index={props.index}
            aria_labelledby={title_id.clone()}
        >
            {
                if plan.popular {
                    html! { <div class="popular-tag">{"⭐ Le plus populaire"}</div> }
                } else {
                    html! {}
                }
            }
            <div class="card-header">
                <div class="plan-icon" aria-hidden="true">{plan.icon}</div>
                <h3 id={title_id}>{plan.name}</h3>
                <p class="card-description">{plan.description}</p>
                <div class="price">
                    <span class="amount">{format!("{}€", plan.price(props.annual))}</span>
                    <span class="period">{if props.annual { "/an" } else { "/mois" }}</span>
                </div>
                {
                    if props.annual {
                        html! {
                            <p class="price-note">{format!("Soit {}€/mois", monthly_equivalent(plan.annual_price))}</p>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="card-content">
                <h4>{"Inclus :"}</h4>
                <ul class="plan-features">
                    { for plan.features.iter().map(|f| html! {
                        <li><span class="check" aria-hidden="true">{"✓"}</span>{*f}</li>
                    }) }
                </ul>
                {
                    if plan.limitations.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <>
                                <h4>{"Limitations :"}</h4>
                                <ul class="plan-limitations">
                                    { for plan.limitations.iter().map(|l| html! {
                                        <li><span class="cross" aria-hidden="true">{"✕"}</span>{*l}</li>
                                    }) }
                                </ul>
                            </>
                        }
                    }
                }
                {
                    if plan.contact_sales {
                        html! {
                            <Link<Route> to={Route::Contact} classes={classes!("btn", button_class)}>
                                {"Nous contacter"}
                            </Link<Route>>
                        }
                    } else {
                        html! {
                            <MotionButton class={button_class} onclick={choose}>{"Commencer"}</MotionButton>
                        }
                    }
                }
            </div>
        </MotionArticle>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let annual = use_bool_toggle(false);

    let toggle_billing = {
        let annual = annual.clone();
        Callback::from(move |_: MouseEvent| annual.toggle())
    };

    // The labels next to the switch pick their period directly, by click or Enter/Space.
    let billing_label = |label: &'static str, value: bool| {
        let on_click = {
            let annual = annual.clone();
            Callback::from(move |_: MouseEvent| annual.set(value))
        };
        let on_keydown = {
            let annual = annual.clone();
            Callback::from(move |e: KeyboardEvent| handle_activation_event(&e, || annual.set(value)))
        };
        html! {
            <span
                class={classes!("billing-label", (*annual == value).then(|| "active"))}
                role="button"
                tabindex="0"
                aria-pressed={(*annual == value).to_string()}
                onclick={on_click}
                onkeydown={on_keydown}
            >
                {label}
            </span>
        }
    };

    html! {
        <main class="page pricing-page">
            <MotionSection class="page-header" animation={Animation::Page} aria_labelledby="pricing-title">
                <div class="container">
                    <span class="badge badge-secondary">{"💰 Tarifs"}</span>
                    <h1 id="pricing-title">
                        {"Choisissez le plan qui vous "}
                        <span class="text-gradient">{"convient"}</span>
                    </h1>
                    <p class="section-subtitle">
                        {"Des tarifs transparents et flexibles pour tous vos besoins de mobilité électrique. Changez de plan à tout moment, sans engagement."}
                    </p>
                    <div class="billing-toggle">
                        { billing_label("Mensuel", false) }
                        <button
                            type="button"
                            role="switch"
                            class={classes!("switch", (*annual).then(|| "on"))}
                            aria-checked={(*annual).to_string()}
                            aria-label="Facturation annuelle"
                            onclick={toggle_billing}
                        >
                            <span class="switch-thumb"></span>
                        </button>
                        { billing_label("Annuel", true) }
                        {
                            if *annual {
                                html! { <span class="badge badge-success">{"Économisez 2 mois"}</span> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
            </MotionSection>

            <section class="section" aria-label="Plans">
                <div class="container pricing-grid">
                    { for PLANS.iter().enumerate().map(|(i, plan)| html! {
                        <PlanCard plan={*plan} annual={*annual} index={i} />
                    }) }
                </div>
            </section>

            <MotionSection class="section section-muted" animation={Animation::ScrollReveal} aria_labelledby="benefits-title">
                <div class="container">
                    <h2 id="benefits-title" class="section-title">{format!("Pourquoi choisir {} ?", BRAND_NAME)}</h2>
                    <div class="benefits-grid">
                        { for BENEFITS.iter().enumerate().map(|(i, (icon, title, description))| html! {
                            <MotionDiv class="benefit-item" animation={Animation::StaggerItem} index={i}>
                                <div class="benefit-icon" aria-hidden="true">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </MotionDiv>
                        }) }
                    </div>
                </div>
            </MotionSection>

            <MotionSection class="section faq-section" animation={Animation::FadeIn} aria_labelledby="pricing-faq-title">
                <div class="container">
                    <h2 id="pricing-faq-title" class="section-title">{"Questions fréquentes"}</h2>
                    <FaqList items={PRICING_FAQ} />
                </div>
            </MotionSection>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annual_prices_show_rounded_monthly_equivalent() {
        assert_eq!(monthly_equivalent(90), 8);
        assert_eq!(monthly_equivalent(290), 24);
        assert_eq!(monthly_equivalent(990), 83);
    }

    #[test]
    fn annual_billing_saves_two_months() {
        for plan in PLANS {
            assert_eq!(plan.price(true), plan.price(false) * 10);
        }
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
        assert!(PLANS.iter().any(|p| p.contact_sales && p.name == "Enterprise"));
    }
}
