/// Iterates the present values of a sequence of optionals, in order,
/// skipping absent slots. Lazy, borrows the input.
pub fn present_values<'a, I, T>(it: I) -> impl Iterator<Item = &'a T>
where
    I: IntoIterator<Item = &'a Option<T>>,
    T: 'a,
{
    it.into_iter().filter_map(Option::as_ref)
}

/// Mutable counterpart of `present_values`.
pub fn present_values_mut<'a, I, T>(it: I) -> impl Iterator<Item = &'a mut T>
where
    I: IntoIterator<Item = &'a mut Option<T>>,
    T: 'a,
{
    it.into_iter().filter_map(Option::as_mut)
}
