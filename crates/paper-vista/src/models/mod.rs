//! Data models for the paper payload and the filter form.
//!
//! Paper records keep the payload's snake_case field names so an export
//! reads back as input.

mod criteria;
mod enums;
mod paper;

pub use criteria::{FilterCriteria, FilterInputs, coerce_number};
pub use enums::ExportFormat;
pub use paper::{Dataset, Paper};
