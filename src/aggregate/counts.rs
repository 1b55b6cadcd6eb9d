use std::hash::Hash;

use serde::Serialize;

use super::counter::OrderedCounter;

/// One slice of a donut / one bar: a category and its membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount<K> {
    pub key: K,
    pub count: usize,
}

/// Groups `items` by `key_fn` and counts each group, in first-seen order.
pub fn count_by_category<T, K, F>(items: &[T], key_fn: F) -> Vec<CategoryCount<K>>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    items.iter().map(key_fn).collect::<OrderedCounter<K>>().into_counts()
}

/// Like `count_by_category` but the output follows `domain` exactly:
/// zero-count keys are kept, keys outside the domain are dropped.
pub fn count_by_category_in<T, K, F>(items: &[T], key_fn: F, domain: &[K]) -> Vec<CategoryCount<K>>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut counter = OrderedCounter::with_domain(domain.iter().cloned());
    for item in items {
        counter.add_existing(&key_fn(item));
    }
    counter.into_counts()
}

/// Most frequent value of `key_fn` among `items`, ties broken by first occurrence.
pub fn dominant_category<T, K, F>(items: &[T], key_fn: F) -> Option<K>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    items
        .iter()
        .map(key_fn)
        .collect::<OrderedCounter<K>>()
        .dominant()
        .cloned()
}
