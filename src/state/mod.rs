mod delete;
mod edit;
mod list;

pub(crate) use delete::{confirm_delete, DeleteOutcome};
pub(crate) use edit::{run_save, EditForm};
pub(crate) use list::{load_all, load_chart, ListModel, Reload};

use crate::api::EntityClient;
use crate::config::EnvConfig;
use crate::models::Entity;
use crate::storage::load_auth_token;

#[derive(Clone)]
pub(crate) struct AppState {
    pub config: EnvConfig,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            config: EnvConfig::from_window(),
        }
    }

    /// Client for one entity resource. The token is re-read on every call so a
    /// login elsewhere in the page takes effect without a reload.
    pub fn client<E: Entity>(&self) -> EntityClient<E> {
        EntityClient::new(&self.config, load_auth_token())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
