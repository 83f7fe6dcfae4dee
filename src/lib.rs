mod error;
mod json;
mod present;
mod sequence;
mod try_sequence;
mod util;

pub use crate::error::{SeqResult, SequenceError};
pub use crate::json::from_json_array;
pub use crate::present::{present_values, present_values_mut};
pub use crate::sequence::{AllOrNothing, CollectAllOrNothing};
pub use crate::try_sequence::TryAllOrNothing;

/// Converts a sequence of optional values into an optional sequence.
///
/// Returns the unwrapped values, in input order, only when no element is
/// absent; a single absent element makes the whole result `None`. The
/// empty sequence is vacuously all-present.
pub fn all_or_nothing<T>(values: impl IntoIterator<Item = Option<T>>) -> Option<Vec<T>> {
    values.into_iter().collect()
}
