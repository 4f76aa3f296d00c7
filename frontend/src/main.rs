use bill_splitter_backend::config::DEFAULT_STORE_KEY;
use log::LevelFilter;
use shared::CreateBillRequest;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::bill_detail::BillDetail;
use components::bill_form::BillForm;
use components::bill_list::BillList;
use components::header::Header;
use hooks::use_bills::use_bills;
use services::backend::BackendHandle;

/// Which screen the app is showing
#[derive(Clone, Debug, PartialEq)]
pub enum ActiveView {
    List,
    Create,
    Detail(String),
}

#[derive(Properties, PartialEq)]
struct AppProps {
    backend: BackendHandle,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let active_view = use_state(|| ActiveView::List);
    let bills = use_bills(&props.backend);

    let show_list = {
        let active_view = active_view.clone();
        let refresh_bills = bills.actions.refresh_bills.clone();
        Callback::from(move |_| {
            refresh_bills.emit(());
            active_view.set(ActiveView::List);
        })
    };

    let create_new = {
        let active_view = active_view.clone();
        Callback::from(move |_| active_view.set(ActiveView::Create))
    };

    let select_bill = {
        let active_view = active_view.clone();
        Callback::from(move |bill_id: String| active_view.set(ActiveView::Detail(bill_id)))
    };

    // Deleting from the detail view returns to the list
    let delete_bill = {
        let active_view = active_view.clone();
        let delete_bill = bills.actions.delete_bill.clone();
        Callback::from(move |bill_id: String| {
            delete_bill.emit(bill_id);
            if matches!(*active_view, ActiveView::Detail(_)) {
                active_view.set(ActiveView::List);
            }
        })
    };

    let submit_bill = {
        let active_view = active_view.clone();
        let create_bill = bills.actions.create_bill.clone();
        Callback::from(move |request: CreateBillRequest| -> Result<(), String> {
            create_bill.emit(request)?;
            active_view.set(ActiveView::List);
            Ok(())
        })
    };

    html! {
        <div class="app">
            <Header
                active_view={(*active_view).clone()}
                on_show_list={show_list}
                on_create_new={create_new.clone()}
            />

            {if let Some(error) = &bills.state.error {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            {if let Some(message) = &bills.flash_message {
                html! { <div class="form-message success">{message}</div> }
            } else { html! {} }}

            {match &*active_view {
                ActiveView::List => html! {
                    <BillList
                        backend={props.backend.clone()}
                        bills={bills.state.bills.clone()}
                        on_select={select_bill}
                        on_delete={delete_bill}
                        on_create_new={create_new}
                    />
                },
                ActiveView::Create => html! {
                    <BillForm backend={props.backend.clone()} on_submit={submit_bill} />
                },
                ActiveView::Detail(bill_id) => html! {
                    <BillDetail
                        backend={props.backend.clone()}
                        bill_id={bill_id.clone()}
                        on_delete={delete_bill}
                    />
                },
            }}
        </div>
    }
}

fn main() {
    services::logging::init(LevelFilter::Info);
    let backend = BackendHandle::open(DEFAULT_STORE_KEY);
    yew::Renderer::<App>::with_props(AppProps { backend }).render();
}
