use bill_splitter_backend::SettlementSummaryService;
use shared::{AmountType, BillSummaryResponse, SplitMode};
use yew::prelude::*;

use crate::services::backend::BackendHandle;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct BillDetailProps {
    pub backend: BackendHandle,
    pub bill_id: String,
    pub on_delete: Callback<String>,
}

/// Bill details with settlements computed fresh from the stored bill
#[function_component(BillDetail)]
pub fn bill_detail(props: &BillDetailProps) -> Html {
    let summary = {
        let backend = props.backend.clone();
        use_memo(props.bill_id.clone(), move |bill_id| {
            Logger::debug_with_component("bill_detail", &format!("Computing settlements for {}", bill_id));
            backend
                .bill_service
                .get_bill_summary(bill_id)
                .map_err(|e| e.to_string())
        })
    };

    match &*summary {
        Ok(Some(response)) => render_summary(props, response),
        Ok(None) => html! {
            <div class="content">
                <p class="note">{"This bill no longer exists."}</p>
            </div>
        },
        Err(message) => html! {
            <div class="content">
                <div class="form-message error">{format!("Could not load bill: {}", message)}</div>
            </div>
        },
    }
}

fn render_summary(props: &BillDetailProps, response: &BillSummaryResponse) -> Html {
    let summary_service = props.backend.bill_service.summary_service();
    let bill = &response.bill;
    let summary = &response.summary;

    let bill_id = bill.id.clone();
    let on_delete = props.on_delete.reform(move |_: MouseEvent| bill_id.clone());

    html! {
        <div class="content">
            <div>
                <h2>{&bill.name}</h2>
                <p class="muted">{format!("Total: {}", summary_service.format_amount(bill.total_amount))}</p>
                {if let Some(payer) = &bill.designated_payer {
                    html! { <p class="muted">{format!("Paid by: {}", payer)}</p> }
                } else { html! {} }}
                <p class="muted">
                    {format!("{} · {}", bill.split_mode.label(), summary_service.format_created_date(bill))}
                </p>
            </div>

            <div>
                <h3>{"Participants"}</h3>
                <ul class="panel">
                    {match bill.split_mode {
                        SplitMode::Equal => html! {
                            {for bill.participants.iter().map(|p| html! { <li>{&p.name}</li> })}
                        },
                        SplitMode::Individual => html! {
                            {for summary.balances.iter().map(|balance| {
                                let amount_class = match balance.amount_type {
                                    AmountType::Positive => "amount positive",
                                    AmountType::Negative => "amount negative",
                                    AmountType::Zero => "amount zero",
                                };
                                html! {
                                    <li>
                                        {format!("{} paid {} ", balance.name, balance.formatted_paid)}
                                        <span class={amount_class}>{format!("({})", balance.formatted_balance)}</span>
                                    </li>
                                }
                            })}
                        },
                    }}
                </ul>
            </div>

            <div>
                <h3>{"Split Details"}</h3>
                <div class="panel">
                    <p class="muted">{&summary.share_line}</p>
                    {if !summary.settlements.is_empty() {
                        html! {
                            <ul>
                                {for summary.settlements.iter().map(|settlement| html! {
                                    <li>
                                        <strong>{&settlement.from}</strong>
                                        {" owes "}
                                        <strong>{&settlement.to}</strong>
                                        {format!(" {}", settlement.formatted_amount)}
                                    </li>
                                })}
                            </ul>
                        }
                    } else if let Some(note) = summary.note {
                        html! { <p class="note">{SettlementSummaryService::note_message(note)}</p> }
                    } else {
                        html! {}
                    }}
                </div>
            </div>

            <div>
                <button class="btn btn-danger btn-block" onclick={on_delete}>{"Delete Bill"}</button>
            </div>
        </div>
    }
}
