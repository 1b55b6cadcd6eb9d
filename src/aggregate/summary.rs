use serde::Serialize;

/// Count/min/max/mean over the present values of an optional numeric field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NumericSummary {
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

pub fn summarize<T, F>(items: &[T], value_fn: F) -> NumericSummary
where
    F: Fn(&T) -> Option<f64>,
{
    let values: Vec<f64> = items
        .iter()
        .filter_map(value_fn)
        .filter(|v| v.is_finite())
        .collect();

    if values.is_empty() {
        return NumericSummary::default();
    }

    let count = values.len();
    let sum: f64 = values.iter().sum();
    NumericSummary {
        count,
        min: values.iter().copied().reduce(f64::min),
        max: values.iter().copied().reduce(f64::max),
        mean: Some(sum / count as f64),
    }
}
