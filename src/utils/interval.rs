//! Half-open interval arithmetic shared by the layout and reschedule engines.

/// `[start1, end1)` and `[start2, end2)` share at least one instant.
///
/// Touching endpoints do not count as overlap.
pub fn overlaps<T: PartialOrd>(start1: T, end1: T, start2: T, end2: T) -> bool {
    start1 < end2 && start2 < end1
}

/// `[inner_start, inner_end)` is a subset of `[outer_start, outer_end)`.
pub fn contains<T: PartialOrd>(outer_start: T, outer_end: T, inner_start: T, inner_end: T) -> bool {
    inner_start >= outer_start && inner_end <= outer_end
}
