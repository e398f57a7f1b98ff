//! Integration tests for reproducibility and channel separation.

use std::collections::HashSet;

use isotherm_pathway::{Scenario, TimePeriod};
use isotherm_perturb::{Perturber, SeedContext, channel, mix_seed, perturb};

// ---------------------------------------------------------------------------
// 1. Identical inputs -- bit-identical output
// ---------------------------------------------------------------------------

#[test]
fn identical_inputs_are_bit_identical() {
    let ctx = SeedContext::for_run(channel::TEMPERATURE, Scenario::Ssp245, TimePeriod::P2050);
    let a = perturb(3.12, 40.0, -74.0, &ctx);
    let b = perturb(3.12, 40.0, -74.0, &ctx);
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn output_does_not_depend_on_evaluation_order() {
    let ctx = SeedContext::for_run(channel::HOT_DAYS, Scenario::Ssp370, TimePeriod::P2070);
    let points: Vec<(f64, f64)> = (0..50).map(|i| (-60.0 + 2.5 * i as f64, i as f64 * 7.0)).collect();

    let forward: Vec<u64> = points
        .iter()
        .map(|&(lat, lon)| perturb(10.0, lat, lon, &ctx).to_bits())
        .collect();
    let mut backward: Vec<u64> = points
        .iter()
        .rev()
        .map(|&(lat, lon)| perturb(10.0, lat, lon, &ctx).to_bits())
        .collect();
    backward.reverse();

    assert_eq!(forward, backward);
}

#[test]
fn threads_agree_with_main_thread() {
    let ctx = SeedContext::for_run(channel::PRECIPITATION, Scenario::Ssp126, TimePeriod::P2030);
    let expected = perturb(1200.0, 20.0, 80.0, &ctx).to_bits();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || {
                let ctx =
                    SeedContext::for_run(channel::PRECIPITATION, Scenario::Ssp126, TimePeriod::P2030);
                perturb(1200.0, 20.0, 80.0, &ctx).to_bits()
            })
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().expect("thread panicked"), expected);
    }
}

// ---------------------------------------------------------------------------
// 2. Distinct tags -- outputs differ
// ---------------------------------------------------------------------------

#[test]
fn hundred_distinct_tags_give_distinct_outputs() {
    let tags: Vec<String> = (0..120).map(|i| format!("channel-{i}")).collect();
    let outputs: Vec<f64> = tags
        .iter()
        .map(|t| perturb(100.0, 12.5, -45.0, &SeedContext::new(t)))
        .collect();

    let mut pairs = 0usize;
    let mut differing = 0usize;
    for i in 0..outputs.len() {
        for j in (i + 1)..outputs.len() {
            pairs += 1;
            if outputs[i].to_bits() != outputs[j].to_bits() {
                differing += 1;
            }
        }
    }
    let frac = differing as f64 / pairs as f64;
    assert!(frac > 0.99, "only {frac} of tag pairs differ");
}

#[test]
fn grid_channels_do_not_collide() {
    let tags = [
        channel::TEMPERATURE,
        channel::PRECIPITATION,
        channel::HOT_DAYS,
        channel::EXTREME_HEAT,
        channel::CONSECUTIVE_DRY_DAYS,
    ];
    let mut seeds = HashSet::new();
    for tag in tags {
        for s in Scenario::ALL {
            for p in TimePeriod::ALL {
                let ctx = SeedContext::for_run(tag, s, p);
                assert!(seeds.insert(mix_seed(&ctx, 40.0, -74.0)));
            }
        }
    }
    assert_eq!(seeds.len(), tags.len() * Scenario::ALL.len() * TimePeriod::ALL.len());
}

// ---------------------------------------------------------------------------
// 3. Spread -- multiplicative noise has roughly the configured sigma
// ---------------------------------------------------------------------------

#[test]
fn relative_spread_matches_sigma() {
    let p = Perturber::default();
    let ctx = SeedContext::new(channel::TEMPERATURE);
    let mut samples = Vec::new();
    for lat in -60..=80 {
        for lon in (-180..180).step_by(10) {
            samples.push(p.sample(&ctx, lat as f64, lon as f64));
        }
    }
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let sd = (samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt();
    assert!(mean.abs() < 0.01, "mean {mean}");
    assert!((sd - 0.15).abs() < 0.01, "sd {sd}");
}
