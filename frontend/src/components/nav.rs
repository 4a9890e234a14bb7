use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::a11y::aria::{hide, show};
use crate::a11y::focus::{get_current_focus, restore_focus, trap_focus, FocusTrapGuard};
use crate::a11y::keyboard::{handle_arrow_keys, Key, Orientation};
use crate::components::motion::{use_entered, use_motion_config, Animation, MotionDiv};
use crate::config::BRAND_NAME;
use crate::motion::Phase;
use crate::Route;

const SCROLL_THRESHOLD: i32 = 16;
pub const MAIN_CONTENT_ID: &str = "main-content";

pub const NAV_ITEMS: [(&str, Route); 5] = [
    ("Fonctionnalités", Route::Features),
    ("Tarifs", Route::Pricing),
    ("Devenir hôte", Route::BecomeHost),
    ("À propos", Route::About),
    ("Contact", Route::Contact),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let current = use_route::<Route>();
    let config = use_motion_config();
    let entered = use_entered();
    let menu_ref = use_node_ref();
    let toggle_ref = use_node_ref();
    let links_ref = use_node_ref();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::<dyn Fn()>::new(move || {
                let scroll_top = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                    .map(|el| el.scroll_top())
                    .unwrap_or(0);
                is_scrolled.set(scroll_top > SCROLL_THRESHOLD);
            });

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    // While the mobile menu is open, Tab stays inside it and the page behind it is
    // hidden from screen readers. Closing hands focus back to whatever had it before
    // (normally the burger button).
    {
        let menu_ref = menu_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_effect_with_deps(move |open: &bool| {
            let guard: Rc<RefCell<Option<FocusTrapGuard>>> = Rc::new(RefCell::new(None));
            let previous = get_current_focus().or_else(|| toggle_ref.cast::<HtmlElement>());
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(MAIN_CONTENT_ID));
            if *open {
                if let Some(menu) = menu_ref.cast::<HtmlElement>() {
                    *guard.borrow_mut() = Some(trap_focus(&menu));
                }
                if let Some(content) = &content {
                    hide(content);
                }
            }
            let was_open = *open;
            move || {
                if let Some(guard) = guard.borrow_mut().take() {
                    guard.release();
                }
                if was_open {
                    if let Some(content) = &content {
                        show(content);
                    }
                    restore_focus(previous.as_ref());
                }
            }
        }, *menu_open);
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let on_menu_keydown = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: KeyboardEvent| {
            if Key::from_event_key(&e.key()) == Key::Escape {
                e.prevent_default();
                menu_open.set(false);
            }
        })
    };

    // Arrow keys, Home and End move focus along the desktop links.
    let on_links_keydown = {
        let links_ref = links_ref.clone();
        Callback::from(move |e: KeyboardEvent| {
            let Some(container) = links_ref.cast::<HtmlElement>() else {
                return;
            };
            let Ok(nodes) = container.query_selector_all("a") else {
                return;
            };
            let links: Vec<HtmlElement> = (0..nodes.length())
                .filter_map(|i| nodes.item(i))
                .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
                .collect();
            let focused = get_current_focus();
            let current = links
                .iter()
                .position(|l| Some(l) == focused.as_ref())
                .unwrap_or(0);
            let next = handle_arrow_keys(&e, links.len(), current, Orientation::Horizontal);
            if next != current {
                if let Some(link) = links.get(next) {
                    let _ = link.focus();
                }
            }
        })
    };

    let phase = if entered { Phase::Animate } else { Phase::Initial };
    let nav_style = config.page().style(phase, 0.0);
    let menu_class = if *menu_open {
        "nav-mobile mobile-menu-open"
    } else {
        "nav-mobile"
    };

    let link = |label: &'static str, route: Route, class: &'static str| {
        let active = current.as_ref() == Some(&route);
        html! {
            <Link<Route> to={route} classes={classes!(class, active.then(|| "active"))}>
                {label}
            </Link<Route>>
        }
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))} style={nav_style} aria-label="Navigation principale">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="nav-logo-mark" aria-hidden="true">{"⚡"}</span>
                    {BRAND_NAME}
                </Link<Route>>

                <div class="nav-links" ref={links_ref} onkeydown={on_links_keydown}>
                    { for NAV_ITEMS.iter().map(|(label, route)| link(*label, route.clone(), "nav-link")) }
                </div>

                <div class="nav-actions">
                    <button class="btn btn-outline btn-sm">{"Se connecter"}</button>
                    <button class="btn btn-default btn-sm">{"S'inscrire"}</button>
                </div>

                <button
                    class="burger-menu"
                    ref={toggle_ref}
                    onclick={toggle_menu}
                    aria-label="Toggle menu"
                    aria-expanded={menu_open.to_string()}
                    aria-controls="mobile-menu"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <>
                            <div class="nav-backdrop-wrapper" aria-hidden="true" onclick={close_menu.clone()}>
                                <MotionDiv class="nav-backdrop" animation={Animation::Backdrop} />
                            </div>
                            <div id="mobile-menu" class={menu_class} ref={menu_ref} onkeydown={on_menu_keydown}>
                                <MotionDiv class="nav-mobile-panel" animation={Animation::ModalPanel}>
                                    { for NAV_ITEMS.iter().map(|(label, route)| html! {
                                        <div onclick={close_menu.clone()}>
                                            { link(*label, route.clone(), "nav-mobile-link") }
                                        </div>
                                    }) }
                                    <div class="nav-mobile-actions">
                                        <button class="btn btn-outline btn-sm" onclick={close_menu.clone()}>{"Se connecter"}</button>
                                        <button class="btn btn-default btn-sm" onclick={close_menu.clone()}>{"S'inscrire"}</button>
                                    </div>
                                </MotionDiv>
                            </div>
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
