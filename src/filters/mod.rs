// Filter model: what the user is searching for.
//
// `model` holds the typed tree; `validate` checks its invariants and counts
// how many constraints are active (used in provider query summaries).

pub mod model;
pub mod validate;

pub use model::{FilterModel, Platform, Range};
