use yew::prelude::*;
use yew_hooks::prelude::*;
use log::{info, warn};
use web_sys::{window, CustomEvent, KeyboardEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod header;
mod reveal;
mod scroll;
mod sections;
mod submission;
mod validation;
mod components {
    pub mod anchor_link;
    pub mod detail_panel;
    pub mod notification;
    pub mod quote_form;
}
mod pages {
    pub mod home;
}

use components::anchor_link::AnchorLink;
use header::HeaderStyle;
use pages::home::Home;
use sections::{Section, SectionAction, SectionToggler};

const NAV_LINKS: &[(&str, &str)] = &[
    ("#services", "Services"),
    ("#projects", "Projects"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

fn current_scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let header_style = use_state_eq(|| HeaderStyle::for_scroll(current_scroll_y()));

    {
        let header_style = header_style.clone();
        use_effect_with_deps(move |_| {
            let window = window();
            let scroll_callback = Closure::<dyn Fn()>::new(move || {
                header_style.set(HeaderStyle::for_scroll(current_scroll_y()));
            });

            if let Some(window) = &window {
                if let Err(e) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    warn!("Could not listen for scroll: {:?}", e);
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    html! {
        <header class="site-header" style={header_style.style()}>
            <div class="nav-content">
                <AnchorLink href="#top" class={classes!("nav-logo")}>
                    {"Key Solutions"}
                </AnchorLink>
                <nav class="nav-links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <AnchorLink href={*href} class={classes!("nav-link")}>
                            {*label}
                        </AnchorLink>
                    }) }
                </nav>
            </div>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    let sections = use_reducer(SectionToggler::default);

    {
        let sections = sections.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            sections.dispatch(SectionAction::Escape(e.key()));
        });
    }

    // Page scripts can still ask for a panel by name
    {
        let sections = sections.dispatcher();
        use_event_with_window(config::TOGGLE_SECTION_EVENT, move |e: CustomEvent| {
            match e.detail().as_string() {
                Some(name) => sections.dispatch(SectionAction::ToggleNamed(name)),
                None => warn!("{} without a section name", config::TOGGLE_SECTION_EVENT),
            }
        });
    }

    let on_toggle = {
        let sections = sections.dispatcher();
        Callback::from(move |section: Section| sections.dispatch(SectionAction::Toggle(section)))
    };

    let on_close = {
        let sections = sections.dispatcher();
        Callback::from(move |_: ()| sections.dispatch(SectionAction::CloseAll))
    };

    html! {
        <div id="top">
            <Nav />
            <Home sections={(*sections).clone()} {on_toggle} {on_close} />
            <footer class="site-footer">
                <p>{"© Key Solutions. All rights reserved."}</p>
            </footer>
        </div>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
