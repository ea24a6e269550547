use crate::api::{ApiResult, EntityService};
use crate::models::Entity;

/// How the delete dialog was closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum DeleteOutcome {
    Deleted,
    Cancelled,
}

impl DeleteOutcome {
    /// Only a confirmed delete invalidates the list.
    pub fn requires_reload(self) -> bool {
        matches!(self, DeleteOutcome::Deleted)
    }
}

/// Issues the delete; the dialog closes with the returned outcome and stays
/// open on error.
pub(crate) async fn confirm_delete<E: Entity, S: EntityService<E>>(
    service: &S,
    id: i64,
) -> ApiResult<DeleteOutcome> {
    service.delete(id).await?;
    Ok(DeleteOutcome::Deleted)
}
