//! HiPS survey lists.
//!
//! A survey list is a sequence of properties blocks separated by blank
//! lines. [`HipsSurveyPropertiesList`] keeps the records in source order and
//! [`SurveyTable`] aggregates them into a sparse table for querying.

mod list;
mod table;

pub use list::{HipsSurveyPropertiesList, RECORD_SEPARATOR};
pub use table::SurveyTable;
