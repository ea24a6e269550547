use crate::models::Entity;

/// Prepends every candidate whose id is not yet in `collection`.
///
/// `None` candidates and candidates without an id are skipped. Among the
/// candidates the first occurrence of an id wins. Existing entries are kept
/// as they are, and when nothing qualifies the very same `Vec` comes back.
#[allow(dead_code)]
pub(crate) fn add_to_collection_if_missing<E: Entity>(
    collection: Vec<E>,
    candidates: impl IntoIterator<Item = Option<E>>,
) -> Vec<E> {
    let mut to_add: Vec<E> = Vec::new();
    for candidate in candidates.into_iter().flatten() {
        let known = collection
            .iter()
            .chain(&to_add)
            .any(|r| r.same_entity(&candidate));
        if candidate.is_persisted() && !known {
            to_add.push(candidate);
        }
    }

    if to_add.is_empty() {
        return collection;
    }

    let mut out = to_add;
    out.extend(collection);
    out
}
