use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::detail_panel::DetailPanel;
use crate::components::quote_form::QuoteForm;
use crate::config;
use crate::reveal::RevealObserver;
use crate::scroll;
use crate::sections::{Section, SectionToggler};

const SERVICES: &[(&str, &str)] = &[
    ("Concrete Slabs", "Driveways, patios and foundations finished the way you want them."),
    ("Deck Building", "Custom decks in wood or composite, designed around your yard."),
    ("Roofing", "Full replacements and repairs with clean, watertight detailing."),
];

const PROJECTS: &[(&str, &str)] = &[
    ("Lakeside Deck", "/assets/projects/lakeside-deck.jpg"),
    ("Stamped Patio", "/assets/projects/stamped-patio.jpg"),
    ("Cedar Shake Roof", "/assets/projects/cedar-roof.jpg"),
];

const FEATURES: &[(&str, &str)] = &[
    ("Licensed & Insured", "Fully covered crews on every job."),
    ("Free Estimates", "Written quotes with no surprises."),
    ("Local Team", "Family owned and operating since 2009."),
];

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub sections: SectionToggler,
    pub on_toggle: Callback<Section>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn Home(props: &HomeProps) -> Html {
    let hero_ref = use_node_ref();

    // Fade-in animations for cards, observed once the page is mounted
    use_effect_with_deps(
        move |_| {
            let observer = RevealObserver::attach(config::REVEAL_SELECTOR);
            move || drop(observer)
        },
        (),
    );

    // Once a panel opens, wait for layout and bring the hero/panel seam into view
    {
        let hero_ref = hero_ref.clone();
        let opened = props.sections.active().is_some();
        use_effect_with_deps(
            move |requests| {
                if *requests > 0 && opened {
                    Timeout::new(config::PANEL_SCROLL_DELAY_MS, move || {
                        if let Some(hero) = hero_ref.cast::<HtmlElement>() {
                            debug!("Scrolling to hero boundary");
                            scroll::scroll_to_hero_boundary(&hero);
                        }
                    })
                    .forget();
                }
                || ()
            },
            props.sections.scroll_requests(),
        );
    }

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 60vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        padding: 6rem 2rem 2rem;
                        background: linear-gradient(135deg, #2f5233 0%, #4a7c59 100%);
                        color: white;
                        transition: height 0.4s ease;
                    }
                    .hero h1 {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }
                    .hero-images {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                        margin-top: 2rem;
                    }
                    .hero-images figure {
                        cursor: pointer;
                        margin: 0;
                        text-align: center;
                    }
                    .hero-images img {
                        width: 100%;
                        height: 220px;
                        object-fit: cover;
                        border-radius: 12px;
                        transition: transform 0.3s ease;
                    }
                    .hero-images figure.active img {
                        outline: 3px solid #f6ad55;
                    }
                    .hero-images img:hover {
                        transform: scale(1.03);
                    }
                    .details-section {
                        background: #f7fafc;
                        padding: 3rem 2rem;
                    }
                    .details-content {
                        position: relative;
                        max-width: 900px;
                        margin: 0 auto;
                    }
                    .details-close {
                        position: absolute;
                        top: 0;
                        right: 0;
                        background: none;
                        border: none;
                        font-size: 2rem;
                        cursor: pointer;
                    }
                    .service-grid, .project-grid, .feature-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 2rem;
                    }
                    .service-item, .project-card, .feature-item, .info-card {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .fade-in-up {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .project-card img {
                        width: 100%;
                        border-radius: 12px;
                    }
                    .quote-form .form-group {
                        display: flex;
                        flex-direction: column;
                        margin-bottom: 1rem;
                    }
                    .btn-submit:disabled {
                        opacity: 0.7;
                        cursor: wait;
                    }
                    @media (max-width: 768px) {
                        .hero h1 {
                            font-size: 2rem;
                        }
                        .hero-images {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>

            <section class="hero" ref={hero_ref} style={props.sections.hero().style()}>
                <div class="hero-content">
                    <h1>{"Built Solid. Built to Last."}</h1>
                    <p>{"Concrete, decks and roofs for homes across the valley."}</p>
                    <AnchorLink href="#contact" class={classes!("btn-primary")}>
                        {"Get a Free Quote"}
                    </AnchorLink>
                </div>
                <div class="hero-images">
                    { for Section::ALL.into_iter().map(|section| {
                        let onclick = props.on_toggle.reform(move |_: MouseEvent| section);
                        let active = props.sections.active() == Some(section);
                        html! {
                            <figure class={classes!(active.then_some("active"))}>
                                <img
                                    class={section.image_class()}
                                    src={format!("/assets/{}.jpg", section.name())}
                                    alt={section.title()}
                                    {onclick}
                                />
                                <figcaption>{section.title()}</figcaption>
                            </figure>
                        }
                    }) }
                </div>
            </section>

            { for Section::ALL.into_iter().map(|section| html! {
                <DetailPanel
                    {section}
                    visible={props.sections.is_visible(section)}
                    on_close={props.on_close.clone()}
                />
            }) }

            <section id="services" class="services">
                <h2>{"Our Services"}</h2>
                <div class="service-grid">
                    { for SERVICES.iter().map(|(title, blurb)| html! {
                        <div class="service-item">
                            <h3>{*title}</h3>
                            <p>{*blurb}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="projects" class="projects">
                <h2>{"Recent Projects"}</h2>
                <div class="project-grid">
                    { for PROJECTS.iter().map(|(title, image)| html! {
                        <div class="project-card">
                            <img src={*image} alt={*title} loading="lazy" />
                            <h3>{*title}</h3>
                        </div>
                    }) }
                </div>
            </section>

            <section id="about" class="about">
                <h2>{"Why Key Solutions"}</h2>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|(title, blurb)| html! {
                        <div class="feature-item">
                            <h3>{*title}</h3>
                            <p>{*blurb}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="contact" class="contact">
                <h2>{"Request Your Free Quote"}</h2>
                <div class="contact-layout">
                    <div class="info-card">
                        <h3>{"Contact"}</h3>
                        <p>{"Mon–Fri, 7am–6pm"}</p>
                        <p>{"info@keysolutions.example"}</p>
                    </div>
                    <QuoteForm />
                </div>
            </section>
        </div>
    }
}
