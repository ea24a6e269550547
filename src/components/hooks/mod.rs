pub(crate) mod use_field_id;

pub(crate) use use_field_id::use_field_id;
