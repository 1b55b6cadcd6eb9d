use super::layout::Region;

/// US census divisions: approximate bounding boxes, weighted by population (millions).
const US_DIVISIONS: &[(&str, (f64, f64), (f64, f64), f64)] = &[
    ("New England", (-73.7, -67.0), (41.0, 47.4), 15.1),
    ("Middle Atlantic", (-80.5, -72.0), (39.7, 45.0), 42.5),
    ("East North Central", (-91.5, -80.5), (37.0, 47.5), 47.4),
    ("West North Central", (-104.0, -89.5), (36.0, 49.0), 21.6),
    ("South Atlantic", (-84.5, -75.5), (25.0, 39.7), 67.5),
    ("East South Central", (-91.6, -82.0), (30.2, 39.1), 19.6),
    ("West South Central", (-106.6, -89.0), (26.0, 37.0), 42.5),
    ("Mountain", (-117.0, -102.0), (31.3, 49.0), 25.4),
    ("Pacific", (-124.4, -114.1), (32.5, 49.0), 54.0),
];

pub fn default_regions() -> Vec<Region> {
    US_DIVISIONS
        .iter()
        .map(|&(name, lon_range, lat_range, weight)| Region {
            region: name.to_string(),
            lon_range,
            lat_range,
            weight,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_well_formed() {
        let regions = default_regions();
        assert_eq!(regions.len(), 9);
        for r in &regions {
            assert!(r.weight > 0.0, "{}", r.region);
            assert!(r.lon_range.0 < r.lon_range.1, "{}", r.region);
            assert!(r.lat_range.0 < r.lat_range.1, "{}", r.region);
        }
    }
}
