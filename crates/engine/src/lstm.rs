#![forbid(unsafe_code)]

use crate::weights::ModelWeights;

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Advance the gated recurrent cell one step, mutating `h` and `c` in
/// place and leaving a copy of the new hidden state in `output`.
///
/// `gates` is caller-owned scratch of length `4H`. The pre-activation is
/// accumulated as `bias + input·kernel + h·recurrent`, then split into
/// four contiguous chunks in fixed order — input gate, forget gate,
/// candidate, output gate — with sigmoid on the gates and tanh on the
/// candidate:
///
/// `c[i] = f[i]*c[i] + i[i]*g[i]`, `h[i] = o[i]*tanh(c[i])`.
///
/// Pure numeric transform, no error paths. Cost is O(H·(E+H)) per call.
pub fn step(
    w: &ModelWeights<'_>,
    input: &[f32],
    h: &mut [f32],
    c: &mut [f32],
    gates: &mut [f32],
    output: &mut [f32],
) {
    let hidden = w.dims.hidden;
    let units4 = hidden * 4;

    // bias + input transform
    for i in 0..units4 {
        let mut sum = w.bias[i];
        for (j, &x) in input.iter().enumerate() {
            sum += x * w.kernel[j * units4 + i];
        }
        gates[i] = sum;
    }

    // recurrent transform
    for i in 0..units4 {
        let mut sum = gates[i];
        for (j, &hj) in h.iter().enumerate() {
            sum += hj * w.recurrent[j * units4 + i];
        }
        gates[i] = sum;
    }

    // gate order: input, forget, candidate, output
    for i in 0..hidden {
        let i_gate = sigmoid(gates[i]);
        let f_gate = sigmoid(gates[hidden + i]);
        let g_cand = gates[2 * hidden + i].tanh();
        let o_gate = sigmoid(gates[3 * hidden + i]);

        c[i] = f_gate * c[i] + i_gate * g_cand;
        h[i] = o_gate * c[i].tanh();
    }

    output.copy_from_slice(h);
}
