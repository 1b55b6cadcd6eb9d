use serde::Serialize;

/// One equal-width bin. Membership is `[lower_bound, upper_bound)` except for
/// the last bin of a histogram, which also includes `upper_bound`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub count: usize,
}

/// Buckets `values` into `bin_count` equal-width bins spanning `[min, max]`.
///
/// Non-finite values are ignored. No values (or `bin_count == 0`) yields no
/// bins. When every value is identical there is nothing to split, so a single
/// closed bin `[v, v]` holds them all.
pub fn histogram(values: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bin_count == 0 {
        return Vec::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max == min {
        return vec![HistogramBin {
            lower_bound: min,
            upper_bound: max,
            count: finite.len(),
        }];
    }

    let width = (max - min) / bin_count as f64;
    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            lower_bound: min + i as f64 * width,
            upper_bound: if i + 1 == bin_count {
                max
            } else {
                min + (i + 1) as f64 * width
            },
            count: 0,
        })
        .collect();

    for v in finite {
        let idx = bin_index(&bins, v, min, width);
        bins[idx].count += 1;
    }
    bins
}

/// Histogram over an optional numeric field; `None` values are excluded.
pub fn histogram_of<T, F>(items: &[T], value_fn: F, bin_count: usize) -> Vec<HistogramBin>
where
    F: Fn(&T) -> Option<f64>,
{
    let values: Vec<f64> = items.iter().filter_map(value_fn).collect();
    histogram(&values, bin_count)
}

// Arithmetic estimate first, then nudged against the stored bounds so values
// sitting exactly on an edge land in the bin whose lower bound they equal.
fn bin_index(bins: &[HistogramBin], v: f64, min: f64, width: f64) -> usize {
    let last = bins.len() - 1;
    let mut idx = (((v - min) / width).floor().max(0.0) as usize).min(last);
    while idx < last && v >= bins[idx + 1].lower_bound {
        idx += 1;
    }
    while idx > 0 && v < bins[idx].lower_bound {
        idx -= 1;
    }
    idx
}
