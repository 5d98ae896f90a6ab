use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::SuccessOverlay;
use crate::config;
use crate::submission::{simulate_submission, QuoteFormAction, QuoteFormState, QuoteRequest};
use crate::validation::{self, FieldKind, FormField};

const SERVICE_OPTIONS: &[(&str, &str)] = &[
    ("slab", "Concrete Slab"),
    ("deck", "Deck"),
    ("roof", "Roof"),
    ("other", "Other"),
];

fn render_control(field: &FormField, has_error: bool, on_input: Callback<String>) -> Html {
    let border = if has_error { "border-color: #e53e3e;" } else { "" };

    match field.kind {
        FieldKind::Select => html! {
            <select
                id={field.id}
                name={field.id}
                required={field.required}
                style={border}
                onchange={on_input.reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value())}
            >
                <option value="" selected={field.value.is_empty()}>{"Select a service"}</option>
                { for SERVICE_OPTIONS.iter().map(|(value, label)| html! {
                    <option value={*value} selected={field.value == *value}>{*label}</option>
                }) }
            </select>
        },
        FieldKind::TextArea => html! {
            <textarea
                id={field.id}
                name={field.id}
                rows="4"
                required={field.required}
                style={border}
                value={field.value.clone()}
                oninput={on_input.reform(|e: InputEvent| e.target_unchecked_into::<HtmlTextAreaElement>().value())}
            />
        },
        FieldKind::Text | FieldKind::Email | FieldKind::Phone => {
            let input_type = match field.kind {
                FieldKind::Email => "email",
                FieldKind::Phone => "tel",
                _ => "text",
            };
            html! {
                <input
                    type={input_type}
                    id={field.id}
                    name={field.id}
                    required={field.required}
                    style={border}
                    value={field.value.clone()}
                    oninput={on_input.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value())}
                />
            }
        }
    }
}

#[function_component(QuoteForm)]
pub fn quote_form() -> Html {
    let state = use_reducer(QuoteFormState::default);
    let tickets = use_mut_ref(|| 0u32);

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(QuoteFormAction::Validate);
            let errors = validation::validate(&state.fields);
            if !errors.is_empty() {
                info!("Quote form has {} invalid field(s)", errors.len());
                return;
            }

            let ticket = {
                let mut counter = tickets.borrow_mut();
                *counter += 1;
                *counter
            };
            let request = QuoteRequest::from_fields(&state.fields);
            state.dispatch(QuoteFormAction::Begin);

            let dispatcher = state.dispatcher();
            spawn_local(async move {
                let receipt = simulate_submission(ticket, request).await;
                dispatcher.dispatch(QuoteFormAction::Complete(receipt));
                Timeout::new(config::SUCCESS_DISPLAY_MS, move || {
                    dispatcher.dispatch(QuoteFormAction::DismissOverlay(ticket));
                })
                .forget();
            });
        })
    };

    html! {
        <>
            <form id="quoteForm" class="quote-form" novalidate={true} {onsubmit}>
                { for state.fields.iter().map(|field| {
                    let error = state.errors.get(field.id);
                    let on_input = {
                        let state = state.clone();
                        let id = field.id;
                        Callback::from(move |value: String| {
                            state.dispatch(QuoteFormAction::Input { field: id, value });
                        })
                    };
                    html! {
                        <div class="form-group" key={field.id}>
                            <label for={field.id}>
                                {field.label}
                                if field.required { {" *"} }
                            </label>
                            { render_control(field, error.is_some(), on_input) }
                            if let Some(message) = error {
                                <div class="field-error" style="color: #e53e3e; font-size: 0.875rem; margin-top: 0.25rem;">
                                    {message}
                                </div>
                            }
                        </div>
                    }
                }) }
                <button type="submit" class="btn-submit" disabled={state.button.disabled()}>
                    {state.button.label().to_string()}
                </button>
            </form>
            { for state.overlays.iter().enumerate().map(|(index, ticket)| html! {
                <SuccessOverlay key={ticket.to_string()} {index} />
            }) }
        </>
    }
}
