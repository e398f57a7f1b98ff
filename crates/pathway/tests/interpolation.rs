//! Property tests for the climatology interpolator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use isotherm_pathway::{BASELINE_PRECIPITATION, BASELINE_TEMPERATURE, ClimatologyTable};

fn bracket(table: &ClimatologyTable, lat: f64) -> (f64, f64) {
    let anchors = table.anchors();
    for w in anchors.windows(2) {
        if lat >= w[0].0 && lat <= w[1].0 {
            let lo = w[0].1.min(w[1].1);
            let hi = w[0].1.max(w[1].1);
            return (lo, hi);
        }
    }
    panic!("latitude {lat} not inside the table range");
}

#[test]
fn interpolated_values_lie_between_bracketing_anchors() {
    let mut rng = StdRng::seed_from_u64(7);
    for table in [BASELINE_TEMPERATURE, BASELINE_PRECIPITATION] {
        let first = table.anchors()[0].0;
        let last = table.anchors()[table.anchors().len() - 1].0;
        for _ in 0..2_000 {
            let lat = rng.random_range(first..=last);
            let v = table.value_at(lat);
            let (lo, hi) = bracket(&table, lat);
            assert!(
                v >= lo - 1e-9 && v <= hi + 1e-9,
                "lat {lat}: {v} outside [{lo}, {hi}]"
            );
        }
    }
}

#[test]
fn interpolation_is_total_over_valid_latitudes() {
    let mut lat = -90.0;
    while lat <= 90.0 {
        assert!(BASELINE_TEMPERATURE.value_at(lat).is_finite());
        assert!(BASELINE_PRECIPITATION.value_at(lat).is_finite());
        lat += 0.25;
    }
}

#[test]
fn interpolation_is_deterministic() {
    let a = BASELINE_TEMPERATURE.value_at(12.345);
    let b = BASELINE_TEMPERATURE.value_at(12.345);
    assert_eq!(a.to_bits(), b.to_bits());
}
