use itertools::Itertools;

use crate::error::{SeqResult, SequenceError};

pub fn check_all_present<T>(values: &[Option<T>]) -> SeqResult<()> {
    let absent: Vec<usize> = values.iter().positions(Option::is_none).collect();
    if !absent.is_empty() {
        Err(SequenceError::AbsentElements(absent))
    } else {
        Ok(())
    }
}
