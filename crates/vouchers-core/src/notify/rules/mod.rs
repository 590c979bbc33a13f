//! Field-level rules for voucher rows and validity dates.

pub mod amounts;
pub mod contact;
pub mod dates;
pub mod patterns;
pub mod status;

pub use amounts::{minimum_order_value, parse_voucher_amount};
pub use contact::normalize_contact;
pub use dates::{
    ValidityRange, display_date, format_date, ordinal_date, ordinal_from_display,
    ordinal_suffix, parse_picked_date, parse_sheet_date,
};
pub use status::{is_already_issued, normalize_marker};
