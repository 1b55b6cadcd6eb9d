use std::hash::Hash;

use serde::Serialize;

use super::counter::OrderedCounter;
use super::counts::CategoryCount;

/// One cluster of a grouped bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedCounts<P, S> {
    pub primary: P,
    pub counts: Vec<CategoryCount<S>>,
}

impl<P, S: PartialEq> GroupedCounts<P, S> {
    pub fn count(&self, secondary: &S) -> usize {
        self.counts
            .iter()
            .find(|c| &c.key == secondary)
            .map_or(0, |c| c.count)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }
}

/// Counts `items` by a primary key drawn from a fixed `domain` and a
/// data-derived secondary key.
///
/// Every domain value gets a row (even when absent from the data) and every
/// row carries a zero-initialized count for each secondary value observed
/// anywhere in `items`. Items whose primary key is outside the domain still
/// contribute their secondary value to the column set but are not counted.
pub fn grouped_by_two_keys<T, P, S, FP, FS>(
    items: &[T],
    primary_fn: FP,
    domain: &[P],
    secondary_fn: FS,
) -> Vec<GroupedCounts<P, S>>
where
    P: Eq + Hash + Clone,
    S: Eq + Hash + Clone,
    FP: Fn(&T) -> P,
    FS: Fn(&T) -> S,
{
    let secondary_domain: OrderedCounter<S> = items.iter().map(&secondary_fn).collect();
    let primary_index = OrderedCounter::with_domain(domain.iter().cloned());

    let mut rows: Vec<OrderedCounter<S>> = domain
        .iter()
        .map(|_| OrderedCounter::with_domain(secondary_domain.keys().cloned()))
        .collect();

    for item in items {
        if let Some(pos) = primary_index.position(&primary_fn(item)) {
            rows[pos].add(secondary_fn(item));
        }
    }

    domain
        .iter()
        .cloned()
        .zip(rows)
        .map(|(primary, row)| GroupedCounts {
            primary,
            counts: row.into_counts(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeGroup, PatientRecord};

    fn rec(age_group: AgeGroup, gender: &str) -> PatientRecord {
        PatientRecord {
            age_group,
            gender: gender.into(),
            ..Default::default()
        }
    }

    #[test]
    fn every_domain_row_with_every_secondary_column() {
        let records = vec![
            rec(AgeGroup::YoungAdult, "female"),
            rec(AgeGroup::Senior, "male"),
            rec(AgeGroup::YoungAdult, "female"),
        ];
        let groups = grouped_by_two_keys(&records, |r| r.age_group, &AgeGroup::BUCKETS, |r| r.gender.clone());

        assert_eq!(groups.len(), 4);
        let primaries: Vec<AgeGroup> = groups.iter().map(|g| g.primary).collect();
        assert_eq!(primaries, AgeGroup::BUCKETS.to_vec());

        for g in &groups {
            let keys: Vec<&str> = g.counts.iter().map(|c| c.key.as_str()).collect();
            assert_eq!(keys, vec!["female", "male"]);
        }

        assert_eq!(groups[0].total(), 0);
        assert_eq!(groups[1].count(&"female".to_string()), 2);
        assert_eq!(groups[1].count(&"male".to_string()), 0);
        assert_eq!(groups[3].count(&"male".to_string()), 1);
    }

    #[test]
    fn out_of_domain_primary_still_defines_columns() {
        let records = vec![rec(AgeGroup::Unknown, "other"), rec(AgeGroup::Child, "female")];
        let groups = grouped_by_two_keys(&records, |r| r.age_group, &AgeGroup::BUCKETS, |r| r.gender.clone());
        assert_eq!(groups[0].counts.len(), 2);
        assert_eq!(groups[0].count(&"other".to_string()), 0);
        assert_eq!(groups[0].count(&"female".to_string()), 1);
        assert_eq!(groups.iter().map(|g| g.total()).sum::<usize>(), 1);
    }

    #[test]
    fn empty_input_keeps_domain_rows() {
        let groups = grouped_by_two_keys(&[] as &[PatientRecord], |r| r.age_group, &AgeGroup::BUCKETS, |r| r.gender.clone());
        assert_eq!(groups.len(), 4);
        assert!(groups.iter().all(|g| g.counts.is_empty()));
    }
}
