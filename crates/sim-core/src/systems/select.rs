//! Stochastic Sampler
//!
//! Stochastic universal sampling over weighted event pools. Single
//! selection draws one uniform pointer; multi-selection places k evenly
//! spaced pointers over the cumulative distribution, which keeps the
//! variance of the outcome low: an event holding 30% of the pool weight
//! captures close to 30% of the pointers by construction.

use rand::Rng;
use tracing::debug;

use sim_events::LifeEvent;

use crate::systems::weight::WeightedEvent;

/// Selects one event proportionally to weight.
///
/// A pool whose total weight is 0 falls back to a uniform choice among
/// the events rather than failing.
pub fn select_one<'a, R: Rng>(rng: &mut R, pool: &[WeightedEvent<'a>]) -> Option<&'a LifeEvent> {
    if pool.is_empty() {
        return None;
    }

    let cumulative = cumulative_weights(pool);
    let total = *cumulative.last().expect("non-empty pool");

    if total <= 0.0 {
        debug!("zero total weight, selecting uniformly");
        let idx = rng.gen_range(0..pool.len());
        return Some(pool[idx].event);
    }

    let pointer = rng.gen::<f64>() * total;
    Some(pool[locate(&cumulative, pointer)].event)
}

/// Selects up to `count` distinct events with low-variance proportional
/// representation.
///
/// The k evenly spaced pointers may land on the same event when weight
/// is concentrated; duplicates are skipped and the shortfall is filled
/// by repeated weighted draws over the unselected remainder (each round
/// with its own cumulative array) until `count` events are chosen or the
/// pool is exhausted.
pub fn select_distinct<'a, R: Rng>(
    rng: &mut R,
    pool: &[WeightedEvent<'a>],
    count: usize,
) -> Vec<&'a LifeEvent> {
    if pool.is_empty() || count == 0 {
        return Vec::new();
    }
    let count = count.min(pool.len());

    let cumulative = cumulative_weights(pool);
    let total = *cumulative.last().expect("non-empty pool");

    if total <= 0.0 {
        debug!("zero total weight, selecting {} uniformly", count);
        return uniform_distinct(rng, pool, count);
    }

    let mut taken = vec![false; pool.len()];
    let mut chosen: Vec<usize> = Vec::with_capacity(count);

    // SUS pass: one offset, k evenly spaced pointers.
    let spacing = total / count as f64;
    let offset = rng.gen::<f64>() * spacing;
    for i in 0..count {
        // The modulo only guards floating-point drift past the total.
        let pointer = (offset + spacing * i as f64) % total;
        let idx = locate(&cumulative, pointer);
        if !taken[idx] {
            taken[idx] = true;
            chosen.push(idx);
        }
    }

    // Refill pass: weighted draws over whatever was not selected.
    while chosen.len() < count {
        let remaining: Vec<usize> = (0..pool.len()).filter(|&i| !taken[i]).collect();

        let mut rem_cumulative = Vec::with_capacity(remaining.len());
        let mut rem_total = 0.0;
        for &i in &remaining {
            rem_total += pool[i].weight.max(0.0);
            rem_cumulative.push(rem_total);
        }

        let idx = if rem_total <= 0.0 {
            remaining[rng.gen_range(0..remaining.len())]
        } else {
            let pointer = rng.gen::<f64>() * rem_total;
            remaining[locate(&rem_cumulative, pointer)]
        };
        taken[idx] = true;
        chosen.push(idx);
    }

    chosen.into_iter().map(|i| pool[i].event).collect()
}

/// Running sums of the pool weights. Negative weights cannot occur after
/// clamping but are flattened to 0 anyway.
fn cumulative_weights(pool: &[WeightedEvent<'_>]) -> Vec<f64> {
    let mut sums = Vec::with_capacity(pool.len());
    let mut running = 0.0;
    for entry in pool {
        running += entry.weight.max(0.0);
        sums.push(running);
    }
    sums
}

/// Binary search for the slot containing `pointer`: the first index whose
/// cumulative weight exceeds it.
fn locate(cumulative: &[f64], pointer: f64) -> usize {
    cumulative
        .partition_point(|&c| c <= pointer)
        .min(cumulative.len() - 1)
}

/// Uniform fallback: a partial shuffle picking `count` distinct indices.
fn uniform_distinct<'a, R: Rng>(
    rng: &mut R,
    pool: &[WeightedEvent<'a>],
    count: usize,
) -> Vec<&'a LifeEvent> {
    let mut indices: Vec<usize> = (0..pool.len()).collect();
    for i in 0..count {
        let j = rng.gen_range(i..indices.len());
        indices.swap(i, j);
    }
    indices.truncate(count);
    indices.into_iter().map(|i| pool[i].event).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn pool_with_weights(weights: &[f64]) -> (Vec<LifeEvent>, Vec<f64>) {
        let events: Vec<LifeEvent> = weights
            .iter()
            .enumerate()
            .map(|(i, _)| LifeEvent::generic(format!("evt_{}", i), format!("Event {}", i), 0.5))
            .collect();
        (events, weights.to_vec())
    }

    fn weighted<'a>(events: &'a [LifeEvent], weights: &[f64]) -> Vec<WeightedEvent<'a>> {
        let total: f64 = weights.iter().sum();
        events
            .iter()
            .zip(weights)
            .map(|(event, &weight)| WeightedEvent {
                event,
                weight,
                probability: if total > 0.0 { weight / total } else { 0.0 },
            })
            .collect()
    }

    #[test]
    fn test_single_selection_frequency_band() {
        let (events, weights) = pool_with_weights(&[0.8, 0.2]);
        let pool = weighted(&events, &weights);
        let mut rng = SmallRng::seed_from_u64(12345);

        let mut high_count = 0;
        for _ in 0..1000 {
            let selected = select_one(&mut rng, &pool).unwrap();
            if selected.id.as_str() == "evt_0" {
                high_count += 1;
            }
        }

        // ~80% expected; allow a generous band
        assert!(
            (650..=950).contains(&high_count),
            "high-weight event selected {} times out of 1000",
            high_count
        );
    }

    #[test]
    fn test_selection_is_deterministic_per_seed() {
        let (events, weights) = pool_with_weights(&[0.1, 0.3, 0.4, 0.2]);
        let pool = weighted(&events, &weights);

        let run = |seed: u64| -> Vec<String> {
            let mut rng = SmallRng::seed_from_u64(seed);
            (0..50)
                .map(|_| select_one(&mut rng, &pool).unwrap().id.to_string())
                .collect()
        };

        assert_eq!(run(42), run(42));
        assert_ne!(run(42), run(43));
    }

    #[test]
    fn test_multi_select_returns_distinct() {
        let (events, weights) = pool_with_weights(&[0.2, 0.2, 0.2, 0.2, 0.2]);
        let pool = weighted(&events, &weights);
        let mut rng = SmallRng::seed_from_u64(7);

        for k in 1..=5 {
            let selected = select_distinct(&mut rng, &pool, k);
            assert_eq!(selected.len(), k);
            let mut ids: Vec<&str> = selected.iter().map(|e| e.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), k, "duplicate events in multi-select of {}", k);
        }
    }

    #[test]
    fn test_multi_select_with_concentrated_weight() {
        // Nearly all weight on one event: the SUS pointers collapse onto
        // it and the refill pass has to complete the set.
        let (events, weights) = pool_with_weights(&[0.97, 0.01, 0.01, 0.01]);
        let pool = weighted(&events, &weights);
        let mut rng = SmallRng::seed_from_u64(99);

        let selected = select_distinct(&mut rng, &pool, 3);
        assert_eq!(selected.len(), 3);
        let mut ids: Vec<&str> = selected.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_multi_select_caps_at_pool_size() {
        let (events, weights) = pool_with_weights(&[0.5, 0.5]);
        let pool = weighted(&events, &weights);
        let mut rng = SmallRng::seed_from_u64(3);

        let selected = select_distinct(&mut rng, &pool, 10);
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_zero_weight_pool_falls_back_to_uniform() {
        let (events, weights) = pool_with_weights(&[0.0, 0.0, 0.0]);
        let pool = weighted(&events, &weights);
        let mut rng = SmallRng::seed_from_u64(11);

        assert!(select_one(&mut rng, &pool).is_some());

        let selected = select_distinct(&mut rng, &pool, 2);
        assert_eq!(selected.len(), 2);
        assert_ne!(selected[0].id, selected[1].id);
    }

    #[test]
    fn test_empty_pool() {
        let pool: Vec<WeightedEvent<'_>> = Vec::new();
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(select_one(&mut rng, &pool).is_none());
        assert!(select_distinct(&mut rng, &pool, 3).is_empty());
    }

    #[test]
    fn test_multi_select_deterministic_sequence() {
        let (events, weights) = pool_with_weights(&[0.4, 0.3, 0.2, 0.1]);
        let pool = weighted(&events, &weights);

        let run = |seed: u64| -> Vec<String> {
            let mut rng = SmallRng::seed_from_u64(seed);
            select_distinct(&mut rng, &pool, 3)
                .iter()
                .map(|e| e.id.to_string())
                .collect()
        };

        assert_eq!(run(2024), run(2024));
    }
}
