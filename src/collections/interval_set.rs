use std::ops::RangeInclusive;

/// A set of `u64` values stored as sorted, disjoint, non-adjacent inclusive intervals
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntervalSet {
    intervals: Vec<(u64, u64)>,
}

impl IntervalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values in the set, or `None` if it doesn't fit in a `u64`
    pub fn size(&self) -> Option<u64> {
        self.intervals.iter().try_fold(0u64, |size, &(start, end)| {
            (end - start).checked_add(1)?.checked_add(size)
        })
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn contains(&self, n: u64) -> bool {
        // index of the first interval starting after n
        let i = self.intervals.partition_point(|&(start, _)| start <= n);
        i > 0 && n <= self.intervals[i - 1].1
    }

    pub fn iter(&self) -> impl Iterator<Item = RangeInclusive<u64>> + '_ {
        self.intervals.iter().map(|&(start, end)| start..=end)
    }
}

impl Extend<RangeInclusive<u64>> for IntervalSet {
    fn extend<I: IntoIterator<Item = RangeInclusive<u64>>>(&mut self, iter: I) {
        let mut all: Vec<(u64, u64)> = self.intervals.drain(..).collect();
        all.extend(
            iter.into_iter()
                .filter(|range| !range.is_empty())
                .map(|range| range.into_inner()),
        );
        all.sort_unstable();
        for (start, end) in all {
            match self.intervals.last_mut() {
                Some(last) if start <= last.1.saturating_add(1) => {
                    last.1 = last.1.max(end);
                }
                _ => self.intervals.push((start, end)),
            }
        }
    }
}

impl std::iter::FromIterator<RangeInclusive<u64>> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = RangeInclusive<u64>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
