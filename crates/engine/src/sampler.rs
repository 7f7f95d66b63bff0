#![forbid(unsafe_code)]

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Draw one vocabulary index from temperature-scaled logits.
///
/// The maximum logit is subtracted before exponentiation so arbitrarily
/// large magnitudes stay finite; the normalized distribution lands in the
/// caller-owned `probs` scratch. One uniform value in `[0, 1)` is drawn
/// and the cumulative distribution walked; if floating-point rounding
/// exhausts the walk the last index is the defined fallback — a normal
/// path, not an error.
///
/// `temperature` must be strictly positive; lower values concentrate the
/// mass on the top logit.
pub fn sample(logits: &[f32], temperature: f32, probs: &mut [f32], rng: &mut ChaCha8Rng) -> usize {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);

    let mut sum = 0.0_f32;
    for (p, &l) in probs.iter_mut().zip(logits.iter()) {
        *p = ((l - max) / temperature).exp();
        sum += *p;
    }
    for p in probs.iter_mut() {
        *p /= sum;
    }

    let r: f32 = rng.gen();
    let mut cumulative = 0.0_f32;
    for (i, &p) in probs.iter().enumerate() {
        cumulative += p;
        if r <= cumulative {
            return i;
        }
    }
    logits.len().saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn huge_logits_stay_finite_and_normalized() {
        let logits = [3.0e38f32, -3.0e38, 0.0, 1.0e30];
        let mut probs = [0.0f32; 4];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let idx = sample(&logits, 0.8, &mut probs, &mut rng);
        assert!(idx < logits.len());
        assert!(probs.iter().all(|p| p.is_finite()));
        let total: f32 = probs.iter().sum();
        assert!((total - 1.0).abs() < 1e-5, "total = {total}");
    }

    #[test]
    fn low_temperature_selects_the_argmax() {
        let logits = [0.1f32, 2.0, -1.0, 1.9];
        let mut probs = [0.0f32; 4];
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(sample(&logits, 0.01, &mut probs, &mut rng), 1);
        }
    }

    #[test]
    fn identical_rng_seed_is_deterministic() {
        let logits = [0.4f32, 0.3, 0.2, 0.6, 0.1];
        let mut probs = [0.0f32; 5];
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..50 {
            let x = sample(&logits, 0.8, &mut probs, &mut a);
            let y = sample(&logits, 0.8, &mut probs, &mut b);
            assert_eq!(x, y);
        }
    }

    #[test]
    fn single_entry_always_wins() {
        let logits = [-42.0f32];
        let mut probs = [0.0f32; 1];
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(sample(&logits, 0.8, &mut probs, &mut rng), 0);
    }

    proptest! {
        #[test]
        fn drawn_index_in_range(
            logits in proptest::collection::vec(-1.0e6f32..1.0e6, 1..40),
            seed in any::<u64>(),
        ) {
            let mut probs = vec![0.0f32; logits.len()];
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let idx = sample(&logits, 0.8, &mut probs, &mut rng);
            prop_assert!(idx < logits.len());
            prop_assert!(probs.iter().all(|p| p.is_finite()));
            let total: f32 = probs.iter().sum();
            prop_assert!((total - 1.0).abs() < 1e-3);
        }
    }
}
