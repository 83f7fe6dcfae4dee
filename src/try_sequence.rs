use crate::error::SeqResult;
use crate::util::check_all_present;

/// Fallible form of `AllOrNothing` for callers that need to know which
/// positions were absent.
pub trait TryAllOrNothing<T> {
    /// Returns the unwrapped values when every element is present, or
    /// `SequenceError::AbsentElements` listing every absent index in
    /// ascending order.
    fn try_all_or_nothing(self) -> SeqResult<Vec<T>>;
}

impl<T> TryAllOrNothing<T> for Vec<Option<T>> {
    fn try_all_or_nothing(self) -> SeqResult<Vec<T>> {
        check_all_present(&self)?;
        Ok(self.into_iter().flatten().collect())
    }
}

impl<T: Clone> TryAllOrNothing<T> for &[Option<T>] {
    fn try_all_or_nothing(self) -> SeqResult<Vec<T>> {
        check_all_present(self)?;
        Ok(self.iter().flatten().cloned().collect())
    }
}

impl<T, const N: usize> TryAllOrNothing<T> for [Option<T>; N] {
    fn try_all_or_nothing(self) -> SeqResult<Vec<T>> {
        check_all_present(&self)?;
        Ok(self.into_iter().flatten().collect())
    }
}

impl<T: Clone, const N: usize> TryAllOrNothing<T> for &[Option<T>; N] {
    fn try_all_or_nothing(self) -> SeqResult<Vec<T>> {
        check_all_present(self)?;
        Ok(self.iter().flatten().cloned().collect())
    }
}
