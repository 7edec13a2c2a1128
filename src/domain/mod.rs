pub mod field_label;
pub mod query_range;
pub mod record;

pub use field_label::*;
pub use query_range::*;
pub use record::*;
