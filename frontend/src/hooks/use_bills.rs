use bill_splitter_backend::{Backend, Connection};
use gloo::timers::callback::Timeout;
use shared::{Bill, CreateBillRequest, DeleteBillRequest};
use yew::prelude::*;

use crate::services::backend::BackendHandle;
use crate::services::logging::Logger;

const COMPONENT: &str = "use_bills";
const FLASH_DURATION_MS: u32 = 3000;

#[derive(Clone, PartialEq, Default)]
pub struct BillsState {
    pub bills: Vec<Bill>,
    pub error: Option<String>,
}

pub struct UseBillsResult {
    pub state: BillsState,
    pub flash_message: Option<String>,
    pub actions: UseBillsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseBillsActions {
    pub refresh_bills: Callback<()>,
    /// Store a new bill; returns the saved bill or a message to show the user
    pub create_bill: Callback<CreateBillRequest, Result<Bill, String>>,
    pub delete_bill: Callback<String>,
}

fn load_bills<C: Connection>(backend: &Backend<C>) -> BillsState {
    match backend.bill_service.list_bills() {
        Ok(response) => BillsState {
            bills: response.bills,
            error: None,
        },
        Err(e) => {
            Logger::error_with_component(COMPONENT, &format!("Failed to load bills: {:#}", e));
            BillsState {
                bills: Vec::new(),
                error: Some(format!("Could not load saved bills: {}", e)),
            }
        }
    }
}

/// Reload the stored list after a failed delete and attach the failure
fn failed_delete_state<C: Connection>(backend: &Backend<C>, error: &anyhow::Error) -> BillsState {
    let mut state = load_bills(backend);
    if state.error.is_none() {
        state.error = Some(format!("Could not delete bill: {}", error));
    }
    state
}

/// Show a message for a few seconds
fn flash(handle: &UseStateHandle<Option<String>>, message: String) {
    handle.set(Some(message));
    let handle = handle.clone();
    Timeout::new(FLASH_DURATION_MS, move || handle.set(None)).forget();
}

/// Hook owning the bill list: loads it on mount and reloads after every mutation
#[hook]
pub fn use_bills(backend: &BackendHandle) -> UseBillsResult {
    let bills_state = use_state(BillsState::default);
    let flash_message = use_state(|| Option::<String>::None);

    use_effect_with(backend.clone(), {
        let bills_state = bills_state.clone();
        move |backend| {
            bills_state.set(load_bills(&**backend));
            || ()
        }
    });

    let refresh_bills = {
        let backend = backend.clone();
        let bills_state = bills_state.clone();
        use_callback((), move |_, _| {
            bills_state.set(load_bills(&*backend));
        })
    };

    let create_bill = {
        let backend = backend.clone();
        let bills_state = bills_state.clone();
        let flash_message = flash_message.clone();
        use_callback((), move |request: CreateBillRequest, _| {
            match backend.bill_service.create_bill(request) {
                Ok(response) => {
                    Logger::info_with_component(COMPONENT, &format!("Saved bill {}", response.bill.id));
                    bills_state.set(load_bills(&*backend));
                    flash(&flash_message, response.success_message);
                    Ok(response.bill)
                }
                Err(e) => {
                    Logger::warn_with_component(COMPONENT, &format!("Bill rejected: {:#}", e));
                    Err(e.to_string())
                }
            }
        })
    };

    let delete_bill = {
        let backend = backend.clone();
        let bills_state = bills_state.clone();
        let flash_message = flash_message.clone();
        use_callback((), move |bill_id: String, _| {
            match backend.bill_service.delete_bill(DeleteBillRequest { bill_id }) {
                Ok(response) => {
                    bills_state.set(load_bills(&*backend));
                    flash(&flash_message, response.success_message);
                }
                Err(e) => {
                    Logger::error_with_component(COMPONENT, &format!("Failed to delete bill: {:#}", e));
                    bills_state.set(failed_delete_state(&*backend, &e));
                }
            }
        })
    };

    UseBillsResult {
        state: (*bills_state).clone(),
        flash_message: (*flash_message).clone(),
        actions: UseBillsActions {
            refresh_bills,
            create_bill,
            delete_bill,
        },
    }
}
