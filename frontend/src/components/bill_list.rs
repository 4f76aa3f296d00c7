use shared::Bill;
use yew::prelude::*;

use crate::services::backend::BackendHandle;

#[derive(Properties, PartialEq)]
pub struct BillListProps {
    pub backend: BackendHandle,
    pub bills: Vec<Bill>,
    pub on_select: Callback<String>,
    pub on_delete: Callback<String>,
    pub on_create_new: Callback<()>,
}

#[function_component(BillList)]
pub fn bill_list(props: &BillListProps) -> Html {
    if props.bills.is_empty() {
        return html! {
            <div class="content empty-state">
                <p class="muted">{"No bills yet. Create your first bill!"}</p>
                <button
                    class="btn btn-primary"
                    onclick={props.on_create_new.reform(|_: MouseEvent| ())}
                >
                    {"Create New Bill"}
                </button>
            </div>
        };
    }

    let summary_service = props.backend.bill_service.summary_service();

    html! {
        <div class="content">
            <ul class="bill-list">
                {for props.bills.iter().map(|bill| {
                    let bill_id = bill.id.clone();
                    let on_select = props.on_select.reform(move |_: MouseEvent| bill_id.clone());
                    let bill_id = bill.id.clone();
                    let on_delete = props.on_delete.reform(move |_: MouseEvent| bill_id.clone());

                    html! {
                        <li key={bill.id.clone()}>
                            <div class="bill-summary" onclick={on_select}>
                                <h3>{&bill.name}</h3>
                                <p class="muted">{summary_service.format_bill_line(bill)}</p>
                                <p class="muted">{summary_service.format_created_date(bill)}</p>
                            </div>
                            <button class="btn btn-link" onclick={on_delete}>{"Delete"}</button>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}
