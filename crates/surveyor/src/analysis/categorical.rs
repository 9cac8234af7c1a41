//! Frequency distributions for categorical columns.

use indexmap::IndexMap;

use crate::input::Value;
use crate::profile::{CategoricalStatistics, CategoryCount, ColumnStatistics, Percent};

/// Builds the category distribution of a column.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoricalAnalyzer;

impl CategoricalAnalyzer {
    pub fn analyze(values: &[&Value]) -> ColumnStatistics {
        let counts = frequency_counts(values.iter().map(|v| v.to_text()));
        let total: usize = counts.values().sum();
        let shares = apportion_tenths(&counts, total);

        let most_common = counts
            .first()
            .map(|(label, &count)| (label.clone(), count));

        let distribution: IndexMap<String, CategoryCount> = counts
            .into_iter()
            .zip(shares)
            .map(|((label, count), tenths)| {
                (
                    label,
                    CategoryCount {
                        count,
                        percentage: Percent::from_tenths(tenths),
                    },
                )
            })
            .collect();

        ColumnStatistics::Categorical(CategoricalStatistics {
            categories: distribution.len(),
            distribution,
            most_common,
        })
    }
}

/// Count labels, ordered by descending count with ties in first-seen order.
pub(crate) fn frequency_counts<I>(labels: I) -> IndexMap<String, usize>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }
    // Stable sort keeps first-seen order among equal counts
    counts.sort_by(|_, a, _, b| b.cmp(a));
    counts
}

/// Split 100.0% into tenths across categories with the largest-remainder
/// method, so shares always sum to exactly 1000 tenths.
fn apportion_tenths(counts: &IndexMap<String, usize>, total: usize) -> Vec<u64> {
    if total == 0 {
        return vec![0; counts.len()];
    }

    let total = total as u64;
    let mut shares: Vec<u64> = Vec::with_capacity(counts.len());
    let mut remainders: Vec<(usize, u64)> = Vec::with_capacity(counts.len());

    for (idx, &count) in counts.values().enumerate() {
        let scaled = count as u64 * 1000;
        shares.push(scaled / total);
        remainders.push((idx, scaled % total));
    }

    let assigned: u64 = shares.iter().sum();
    let leftover = (1000 - assigned) as usize;

    // Largest remainder first; ties go to the earlier (more frequent) category
    remainders.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    for &(idx, _) in remainders.iter().take(leftover) {
        shares[idx] += 1;
    }

    shares
}
