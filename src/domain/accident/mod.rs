//! Accident module - the logged incidents, their classification, and the
//! rules they cite.
//!
//! # Module Organization
//!
//! - `accident_type` - Classification categories
//! - `rule` - Rule reference data and the per-accident rule set
//! - `record` - Draft, unsaved, and persisted accident shapes
//! - `row_aggregator` - Folding flattened join rows into accidents
//! - `errors` - Accident service errors

mod accident_type;
mod errors;
mod record;
pub mod row_aggregator;
mod rule;

pub use accident_type::AccidentType;
pub use errors::AccidentError;
pub use record::{Accident, AccidentDraft, NewAccident, MAX_NAME_LEN};
pub use row_aggregator::{aggregate_rows, AccidentRow, RowAggregator};
pub use rule::{Rule, RuleSet};
