mod types;

pub use types::{Type, bool_type, int_type, type_equals};
