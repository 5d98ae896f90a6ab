use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::sections::Section;

fn panel_copy(section: Section) -> (&'static str, &'static [&'static str]) {
    match section {
        Section::Slab => (
            "Driveways, patios, shop floors and foundations poured on a compacted, \
             properly graded base.",
            &[
                "Reinforced with rebar or wire mesh",
                "Broom, stamped or exposed aggregate finishes",
                "Control joints cut to limit cracking",
            ],
        ),
        Section::Deck => (
            "Pressure-treated, cedar and composite decks built to code and to last.",
            &[
                "Footings and framing sized for the load",
                "Stairs, railings and built-in benches",
                "Hidden fastener systems for composite boards",
            ],
        ),
        Section::Roof => (
            "Tear-offs, re-roofs and repairs for homes and outbuildings.",
            &[
                "Asphalt shingle and metal roofing",
                "Ice and water shield at eaves and valleys",
                "Flashing, vents and gutters included",
            ],
        ),
    }
}

#[derive(Properties, PartialEq)]
pub struct DetailPanelProps {
    pub section: Section,
    pub visible: bool,
    pub on_close: Callback<()>,
}

#[function_component(DetailPanel)]
pub fn detail_panel(props: &DetailPanelProps) -> Html {
    let (summary, points) = panel_copy(props.section);
    let display = if props.visible { "display: block;" } else { "display: none;" };
    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <section id={props.section.panel_id()} class="details-section" style={display}>
            <div class="details-content">
                <button class="details-close" onclick={close}>{"×"}</button>
                <h2>{props.section.title()}</h2>
                <p>{summary}</p>
                <ul>
                    { for points.iter().map(|point| html! { <li>{*point}</li> }) }
                </ul>
                <AnchorLink href="#contact" class={classes!("btn-primary")}>{"Request a Quote"}</AnchorLink>
            </div>
        </section>
    }
}
