pub(crate) trait OptionExtension<T> {
    fn or_unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts like [`Option::unwrap`] for values that are guaranteed by a structural invariant, such
    /// as a link stored in one node pointing at a live slot of the same arena. Reaching the [`None`]
    /// branch means the invariant was broken by a bug in this crate, not by the caller.
    #[track_caller]
    fn or_unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!("collection links are out of sync"),
        }
    }
}
