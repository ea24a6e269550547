use std::sync::atomic::{AtomicUsize, Ordering};

static COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Unique DOM id for a form control, so `<label for>` keeps pointing at the
/// right input when the same form is mounted twice (e.g. list + dialog).
pub(crate) fn use_field_id(field: &str) -> String {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("field_{field}_{n}")
}
