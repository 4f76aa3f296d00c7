use std::ops::Deref;
use std::rc::Rc;

use bill_splitter_backend::Backend;

use super::local_storage::LocalStorageConnection;

pub type AppBackend = Backend<LocalStorageConnection>;

/// Shared handle to the bill backend, created once at startup and handed to
/// every component that reads or writes bills
#[derive(Clone)]
pub struct BackendHandle(Rc<AppBackend>);

impl BackendHandle {
    /// Open the backend over browser local storage under `store_key`
    pub fn open(store_key: &str) -> Self {
        Self(Rc::new(Backend::new(LocalStorageConnection, store_key)))
    }
}

impl PartialEq for BackendHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for BackendHandle {
    type Target = AppBackend;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
