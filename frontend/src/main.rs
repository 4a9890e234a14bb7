use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod contact;
mod estimator;
mod motion;
mod a11y {
    pub mod aria;
    pub mod contrast;
    pub mod focus;
    pub mod keyboard;
    pub mod motion;
}
mod components {
    pub mod animated_number;
    pub mod faq;
    pub mod footer;
    pub mod motion;
    pub mod nav;
    pub mod revenue_estimator;
    pub mod screen_reader_text;
    pub mod toast;
}
mod pages {
    pub mod about;
    pub mod become_host;
    pub mod contact;
    pub mod features;
    pub mod home;
    pub mod pricing;
}

use a11y::motion::WindowPreferences;
use components::{footer::Footer, nav::{self, Nav}, toast::ToastProvider};
use motion::MotionConfig;
use pages::{
    about::About,
    become_host::BecomeHost,
    contact::Contact,
    features::Features,
    home::Home,
    pricing::Pricing,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/features")]
    Features,
    #[at("/pricing")]
    Pricing,
    #[at("/become-charger")]
    BecomeHost,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Features => {
            info!("Rendering Features page");
            html! { <Features /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::BecomeHost => {
            info!("Rendering Become Host page");
            html! { <BecomeHost /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! {
                <main class="page not-found-page">
                    <div class="container cta-content">
                        <h1>{"Page introuvable"}</h1>
                        <p>{"La page que vous cherchez n'existe pas ou a été déplacée."}</p>
                        <Link<Route> to={Route::Home} classes="btn btn-default btn-lg">
                            {"Retour à l'accueil"}
                        </Link<Route>>
                    </div>
                </main>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    // Read once; components pick it up from context instead of querying the window.
    let motion_config = use_state(|| MotionConfig::detect(&WindowPreferences));

    html! {
        <ContextProvider<MotionConfig> context={*motion_config}>
            <ToastProvider>
                <BrowserRouter>
                    <a class="skip-link sr-only" href={format!("#{}", nav::MAIN_CONTENT_ID)}>{"Aller au contenu"}</a>
                    <Nav />
                    <div id={nav::MAIN_CONTENT_ID}>
                        <Switch<Route> render={switch} />
                    </div>
                    <Footer />
                </BrowserRouter>
            </ToastProvider>
        </ContextProvider<MotionConfig>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    #[cfg(debug_assertions)]
    config::audit_palette();

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
