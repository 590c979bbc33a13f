//! Voucher notification pipeline: rows in, text segments out.

pub mod pipeline;
pub mod report;
pub mod rules;
pub mod segments;
pub mod sheet;
pub mod table;
pub mod validate;

pub use pipeline::{DuplicatePolicy, Pipeline};
pub use report::{NotificationDocument, Session, assemble, output_file_name};
pub use rules::ValidityRange;
pub use segments::{NotificationSegment, SegmentBuilder, SegmentMember};
pub use sheet::rows_for_day;
pub use table::{ParsedTable, parse_table};
pub use validate::{RowValidator, ValidationReport};
