use shared::{BillFormInput, CreateBillRequest, ParticipantFormInput, SplitMode};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::backend::BackendHandle;

#[derive(Properties, PartialEq)]
pub struct BillFormProps {
    pub backend: BackendHandle,
    /// Store the bill; an `Err` carries a message to show above the form
    pub on_submit: Callback<CreateBillRequest, Result<(), String>>,
}

fn with_participant(input: &BillFormInput, name: String) -> BillFormInput {
    let mut next = input.clone();
    next.participants.push(ParticipantFormInput {
        name,
        paid_amount_input: String::new(),
    });
    next
}

fn without_participant(input: &BillFormInput, index: usize) -> BillFormInput {
    let mut next = input.clone();
    if index < next.participants.len() {
        next.participants.remove(index);
    }
    next
}

fn with_paid_amount(input: &BillFormInput, index: usize, value: String) -> BillFormInput {
    let mut next = input.clone();
    if let Some(row) = next.participants.get_mut(index) {
        row.paid_amount_input = value;
    }
    next
}

fn split_mode_from_value(value: &str) -> SplitMode {
    match value {
        "individual" => SplitMode::Individual,
        _ => SplitMode::Equal,
    }
}

/// Save stays disabled until the minimum the bill needs has been entered
fn can_save(input: &BillFormInput) -> bool {
    let has_total = match input.split_mode {
        SplitMode::Equal => !input.total_amount_input.trim().is_empty(),
        SplitMode::Individual => true,
    };
    !input.name.trim().is_empty() && !input.participants.is_empty() && has_total
}

#[function_component(BillForm)]
pub fn bill_form(props: &BillFormProps) -> Html {
    let form = use_state(BillFormInput::default);
    let participant_draft = use_state(String::new);
    let errors = use_state(Vec::<String>::new);
    let suggestions = use_state(Vec::<String>::new);
    let form_service = props.backend.bill_form_service.clone();

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(BillFormInput { name: input.value(), ..(*form).clone() });
        })
    };

    let on_total_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(BillFormInput { total_amount_input: input.value(), ..(*form).clone() });
        })
    };

    let on_payer_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(BillFormInput { designated_payer: input.value(), ..(*form).clone() });
        })
    };

    let on_split_mode_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(BillFormInput {
                split_mode: split_mode_from_value(&select.value()),
                ..(*form).clone()
            });
        })
    };

    let on_draft_input = {
        let participant_draft = participant_draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            participant_draft.set(input.value());
        })
    };

    let on_add_participant = {
        let form = form.clone();
        let participant_draft = participant_draft.clone();
        let errors = errors.clone();
        let form_service = form_service.clone();
        Callback::from(move |_: MouseEvent| {
            match form_service.can_add_participant(&form.participants, &participant_draft) {
                Ok(name) => {
                    form.set(with_participant(&form, name));
                    participant_draft.set(String::new());
                    errors.set(Vec::new());
                }
                // Blank drafts are ignored rather than reported
                Err(shared::BillFormError::EmptyParticipantName) => {}
                Err(error) => errors.set(vec![form_service.get_error_message(&error)]),
            }
        })
    };

    let on_save = {
        let form = form.clone();
        let errors = errors.clone();
        let suggestions = suggestions.clone();
        let form_service = form_service.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let validation = form_service.validate_bill_form(&form);
            if !validation.is_valid {
                errors.set(form_service.get_error_messages(&validation.errors));
                suggestions.set(validation.suggestions);
                return;
            }

            let request = match form_service.to_create_bill_request(&form) {
                Ok(request) => request,
                Err(form_errors) => {
                    errors.set(form_service.get_error_messages(&form_errors));
                    return;
                }
            };

            match on_submit.emit(request) {
                Ok(()) => {
                    form.set(BillFormInput::default());
                    errors.set(Vec::new());
                    suggestions.set(Vec::new());
                }
                Err(message) => errors.set(vec![message]),
            }
        })
    };

    let individual = form.split_mode == SplitMode::Individual;

    html! {
        <div class="content">
            {for errors.iter().map(|error| html! {
                <div class="form-message error">{error}</div>
            })}

            {if !suggestions.is_empty() {
                html! {
                    <div class="form-message info">
                        <strong>{"Suggestions:"}</strong>
                        <ul>
                            {for suggestions.iter().map(|suggestion| html! { <li>{suggestion}</li> })}
                        </ul>
                    </div>
                }
            } else { html! {} }}

            <form onsubmit={on_save}>
                <div class="form-group">
                    <label for="bill-name">{"Event Name"}</label>
                    <input
                        type="text"
                        id="bill-name"
                        placeholder="Dinner, Trip, etc."
                        value={form.name.clone()}
                        oninput={on_name_input}
                    />
                </div>

                <div class="form-group">
                    <label for="split-mode">{"How was it paid?"}</label>
                    <select id="split-mode" onchange={on_split_mode_change}>
                        <option value="equal" selected={!individual}>{SplitMode::Equal.label()}</option>
                        <option value="individual" selected={individual}>{SplitMode::Individual.label()}</option>
                    </select>
                </div>

                {if individual {
                    html! {}
                } else {
                    html! {
                        <>
                            <div class="form-group">
                                <label for="total-amount">{"Total Amount"}</label>
                                <input
                                    type="number"
                                    id="total-amount"
                                    placeholder="0.00"
                                    min="0"
                                    step="0.01"
                                    value={form.total_amount_input.clone()}
                                    oninput={on_total_input}
                                />
                            </div>
                            <div class="form-group">
                                <label for="paid-by">{"Paid By (Optional)"}</label>
                                <input
                                    type="text"
                                    id="paid-by"
                                    placeholder="Name of person who paid"
                                    value={form.designated_payer.clone()}
                                    oninput={on_payer_input}
                                />
                            </div>
                        </>
                    }
                }}

                <div class="form-group">
                    <label for="participant-name">{"Add Participants"}</label>
                    <div class="inline">
                        <input
                            type="text"
                            id="participant-name"
                            placeholder="Participant name"
                            value={(*participant_draft).clone()}
                            oninput={on_draft_input}
                        />
                        <button type="button" class="btn btn-primary" onclick={on_add_participant}>{"Add"}</button>
                    </div>
                </div>

                {if form.participants.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="form-group">
                            <label>{"Participants"}</label>
                            <ul class="panel">
                                {for form.participants.iter().enumerate().map(|(index, row)| {
                                    let on_remove = {
                                        let form = form.clone();
                                        Callback::from(move |_: MouseEvent| form.set(without_participant(&form, index)))
                                    };
                                    let on_paid_input = {
                                        let form = form.clone();
                                        Callback::from(move |e: InputEvent| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            form.set(with_paid_amount(&form, index, input.value()));
                                        })
                                    };

                                    html! {
                                        <li key={row.name.clone()} class="inline">
                                            <span>{&row.name}</span>
                                            {if individual {
                                                html! {
                                                    <input
                                                        type="number"
                                                        placeholder="Amount paid"
                                                        min="0"
                                                        step="0.01"
                                                        value={row.paid_amount_input.clone()}
                                                        oninput={on_paid_input}
                                                    />
                                                }
                                            } else { html! {} }}
                                            <button type="button" class="btn btn-link" onclick={on_remove}>{"Remove"}</button>
                                        </li>
                                    }
                                })}
                            </ul>
                        </div>
                    }
                }}

                <button type="submit" class="btn btn-primary btn-block" disabled={!can_save(&form)}>
                    {"Save Bill"}
                </button>
            </form>
        </div>
    }
}
