#![forbid(unsafe_code)]

use thiserror::Error;

/// Vocabulary size of the shipped word model.
pub const VOCAB_SIZE: usize = 4000;
/// Embedding width of the shipped word model.
pub const EMBEDDING_DIM: usize = 64;
/// Hidden width of the shipped word model.
pub const LSTM_UNITS: usize = 256;

/// Error raised when a supplied tensor disagrees with the declared dims.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum WeightsError {
    /// A tensor slice had the wrong number of elements.
    #[error("{tensor}: expected {expected} floats, got {actual}")]
    ShapeMismatch {
        /// Name of the offending tensor.
        tensor: &'static str,
        /// Element count implied by the dims.
        expected: usize,
        /// Element count actually supplied.
        actual: usize,
    },
}

/// Model dimensions, fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    /// Vocabulary size (V).
    pub vocab: usize,
    /// Embedding width (E).
    pub embed: usize,
    /// Hidden width (H).
    pub hidden: usize,
}

/// Read-only view over the trained tensors. Layouts are row-major and
/// match the training export: the LSTM kernel is indexed
/// `kernel[j * 4H + i]` for input component `j`, the recurrent tensor
/// `recurrent[j * 4H + i]` for hidden component `j`, and the dense kernel
/// `dense_kernel[j * V + i]`.
///
/// The view is never mutated; in a deployed build the slices point into
/// static program data and are shared by every generation call.
pub struct ModelWeights<'a> {
    /// Declared tensor dimensions.
    pub dims: Dims,
    pub(crate) embedding: &'a [f32],
    pub(crate) kernel: &'a [f32],
    pub(crate) recurrent: &'a [f32],
    pub(crate) bias: &'a [f32],
    pub(crate) dense_kernel: &'a [f32],
    pub(crate) dense_bias: &'a [f32],
}

fn check(tensor: &'static str, expected: usize, actual: usize) -> Result<(), WeightsError> {
    if expected == actual {
        Ok(())
    } else {
        Err(WeightsError::ShapeMismatch { tensor, expected, actual })
    }
}

impl<'a> ModelWeights<'a> {
    /// Build a view from the six tensors, validating every length against
    /// `dims`. This is the only place a shape problem can surface; after
    /// construction all lookups are total.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        dims: Dims,
        embedding: &'a [f32],
        kernel: &'a [f32],
        recurrent: &'a [f32],
        bias: &'a [f32],
        dense_kernel: &'a [f32],
        dense_bias: &'a [f32],
    ) -> Result<Self, WeightsError> {
        let units4 = dims.hidden * 4;
        check("embedding", dims.vocab * dims.embed, embedding.len())?;
        check("lstm kernel", dims.embed * units4, kernel.len())?;
        check("lstm recurrent", dims.hidden * units4, recurrent.len())?;
        check("lstm bias", units4, bias.len())?;
        check("dense kernel", dims.hidden * dims.vocab, dense_kernel.len())?;
        check("dense bias", dims.vocab, dense_bias.len())?;
        Ok(Self { dims, embedding, kernel, recurrent, bias, dense_kernel, dense_bias })
    }

    /// Carve one contiguous f32 blob in the fixed export order:
    /// embedding, lstm kernel, lstm recurrent, lstm bias, dense kernel,
    /// dense bias. The blob must have exactly the implied total length.
    pub fn from_blob(dims: Dims, blob: &'a [f32]) -> Result<Self, WeightsError> {
        let units4 = dims.hidden * 4;
        let sizes = [
            dims.vocab * dims.embed,
            dims.embed * units4,
            dims.hidden * units4,
            units4,
            dims.hidden * dims.vocab,
            dims.vocab,
        ];
        let total: usize = sizes.iter().sum();
        check("weight blob", total, blob.len())?;

        let (embedding, rest) = blob.split_at(sizes[0]);
        let (kernel, rest) = rest.split_at(sizes[1]);
        let (recurrent, rest) = rest.split_at(sizes[2]);
        let (bias, rest) = rest.split_at(sizes[3]);
        let (dense_kernel, dense_bias) = rest.split_at(sizes[4]);
        Self::from_parts(dims, embedding, kernel, recurrent, bias, dense_kernel, dense_bias)
    }

    /// Copy embedding row `idx` into `out`. An out-of-range index writes
    /// the all-zero vector instead; generation must never fail on an
    /// unexpected index.
    pub fn embed(&self, idx: usize, out: &mut [f32]) {
        if idx >= self.dims.vocab {
            out.fill(0.0);
            return;
        }
        let offset = idx * self.dims.embed;
        out.copy_from_slice(&self.embedding[offset..offset + self.dims.embed]);
    }
}
