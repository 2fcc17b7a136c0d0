//! saoke-core: the unified transaction record and the field normalizers shared
//! by every bank-specific extractor.

pub mod normalize;
pub mod query;
pub mod transaction;

pub use normalize::{
    FieldError, collapse_newlines, month_first_to_day_first, offset_name_from_details,
    parse_credit,
};
pub use query::{PageRequest, QueryError, SearchFilter, paginate, search, search_page};
pub use transaction::{Source, Transaction};
