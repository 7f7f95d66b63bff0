#![forbid(unsafe_code)]

use crate::weights::ModelWeights;

/// Project the hidden state to per-vocabulary-item logits:
/// `logits[i] = bias[i] + Σ_j h[j] * kernel[j][i]`. Pure numeric
/// transform, no error paths.
pub fn project(w: &ModelWeights<'_>, h: &[f32], logits: &mut [f32]) {
    let vocab = w.dims.vocab;
    for i in 0..vocab {
        let mut sum = w.dense_bias[i];
        for (j, &hj) in h.iter().enumerate() {
            sum += hj * w.dense_kernel[j * vocab + i];
        }
        logits[i] = sum;
    }
}
