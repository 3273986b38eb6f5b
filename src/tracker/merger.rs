use super::types::{ReportRecord, SampleSet, Tracker};

/// Append newly collected reports to the previous tracker.
///
/// With `search_repeated`, the intersection of every row's samples (old and
/// new) is recomputed and shared by all rows.
pub(crate) fn merge_reports(
    previous: Tracker,
    new_reports: Vec<ReportRecord>,
    search_repeated: bool,
) -> Tracker {
    let mut rows = previous.rows;
    rows.extend(new_reports);

    let repeated_samples = if search_repeated {
        Some(intersect_samples(&rows))
    } else {
        None
    };

    Tracker {
        rows,
        repeated_samples,
    }
}

/// Fold row sample sets into their intersection, seeded with the first row.
pub(crate) fn intersect_samples(rows: &[ReportRecord]) -> SampleSet {
    let mut iter = rows.iter();
    let Some(first) = iter.next() else {
        return SampleSet::new();
    };

    iter.fold(first.unique_samples.clone(), |common, row| {
        common
            .intersection(&row.unique_samples)
            .cloned()
            .collect()
    })
}
