use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::motion::{Animation, MotionDiv};
use crate::config::{
    APP_STORE_URL, BRAND_NAME, BRAND_TAGLINE, CONTACT_EMAIL, CONTACT_PHONE, PLAY_STORE_URL,
};
use crate::Route;

const FOOTER_SECTIONS: [(&str, &[(&str, Route)]); 3] = [
    (
        "Produit",
        &[
            ("Fonctionnalités", Route::Features),
            ("Tarifs", Route::Pricing),
            ("Devenir hôte", Route::BecomeHost),
        ],
    ),
    ("Entreprise", &[("À propos", Route::About)]),
    ("Support", &[("Contact", Route::Contact)]),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <MotionDiv class="footer-brand" animation={Animation::SlideUp} index={1}>
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <span class="nav-logo-mark" aria-hidden="true">{"⚡"}</span>
                        {BRAND_NAME}
                    </Link<Route>>
                    <p class="footer-tagline">{BRAND_TAGLINE}</p>
                    <div class="store-badges">
                        <a href={APP_STORE_URL} target="_blank" rel="noopener noreferrer" aria-label="Download on the App Store">
                            <img
                                src="https://tools.applemediaservices.com/api/badges/download-on-the-app-store/black/en-us?size=250x83"
                                alt="Download on the App Store"
                                class="store-badge"
                                loading="lazy"
                            />
                        </a>
                        <a href={PLAY_STORE_URL} target="_blank" rel="noopener noreferrer" aria-label="Get it on Google Play">
                            <img
                                src="https://play.google.com/intl/en_us/badges/static/images/badges/en_badge_web_generic.png"
                                alt="Get it on Google Play"
                                class="store-badge store-badge-play"
                                loading="lazy"
                            />
                        </a>
                    </div>
                    <ul class="footer-contact">
                        <li>{"✉️ "}<a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a></li>
                        <li>{"📞 "}{CONTACT_PHONE}</li>
                        <li>{"📍 Paris, France"}</li>
                    </ul>
                </MotionDiv>

                { for FOOTER_SECTIONS.iter().enumerate().map(|(i, (title, links))| html! {
                    <MotionDiv class="footer-section" animation={Animation::SlideUp} index={i + 2}>
                        <h3>{*title}</h3>
                        <ul>
                            { for links.iter().map(|(name, route)| html! {
                                <li>
                                    <Link<Route> to={route.clone()} classes="footer-link">{*name}</Link<Route>>
                                </li>
                            }) }
                        </ul>
                    </MotionDiv>
                }) }
            </div>
            <div class="container footer-bottom">
                <p>{format!("© {} {}. Tous droits réservés.", current_year, BRAND_NAME)}</p>
            </div>
        </footer>
    }
}
