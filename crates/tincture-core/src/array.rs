//! N-dimensional colour arrays.
//!
//! A [`ColourArray`] is a flat `f64` buffer plus a shape whose trailing axis
//! is the colour channel axis. Every leading axis is a batch axis: a single
//! triple has shape `[3]`, six triples `[6, 3]`, two groups of three triples
//! `[2, 3, 3]`. Conversions map each pixel independently and only ever change
//! the length of the trailing axis.

use serde::{Deserialize, Serialize};

use crate::error::ColourError;

/// Owned n-dimensional array of colour pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawColourArray")]
pub struct ColourArray {
    shape: Vec<usize>,
    data: Vec<f64>,
}

/// Unvalidated wire form; deserialization goes through [`ColourArray::from_shape_vec`].
#[derive(Deserialize)]
struct RawColourArray {
    shape: Vec<usize>,
    data: Vec<f64>,
}

impl TryFrom<RawColourArray> for ColourArray {
    type Error = ColourError;

    fn try_from(raw: RawColourArray) -> Result<Self, Self::Error> {
        Self::from_shape_vec(raw.shape, raw.data)
    }
}

impl ColourArray {
    /// Build an array from a shape and row-major data.
    ///
    /// The shape must have at least one axis and its product must equal
    /// `data.len()`.
    pub fn from_shape_vec(shape: impl Into<Vec<usize>>, data: Vec<f64>) -> Result<Self, ColourError> {
        let shape = shape.into();
        if shape.is_empty() || shape.iter().product::<usize>() != data.len() {
            return Err(ColourError::InvalidShape {
                shape,
                len: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// A rank-1 array holding one pixel.
    pub fn from_pixel<const N: usize>(pixel: [f64; N]) -> Self {
        Self {
            shape: vec![N],
            data: pixel.to_vec(),
        }
    }

    /// A `[pixels.len(), N]` array.
    pub fn from_pixels<const N: usize>(pixels: &[[f64; N]]) -> Self {
        Self {
            shape: vec![pixels.len(), N],
            data: pixels.iter().flatten().copied().collect(),
        }
    }

    /// A `[count, N]` array with every pixel equal to `pixel`.
    pub fn tile<const N: usize>(pixel: [f64; N], count: usize) -> Self {
        let mut data = Vec::with_capacity(count * N);
        for _ in 0..count {
            data.extend_from_slice(&pixel);
        }
        Self {
            shape: vec![count, N],
            data,
        }
    }

    /// Reinterpret the same data under a new shape.
    pub fn reshape(self, shape: impl Into<Vec<usize>>) -> Result<Self, ColourError> {
        Self::from_shape_vec(shape, self.data)
    }

    /// Full shape, channel axis last.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Shape without the channel axis.
    pub fn leading_shape(&self) -> &[usize] {
        &self.shape[..self.shape.len() - 1]
    }

    /// Length of the trailing (channel) axis.
    pub fn channels(&self) -> usize {
        self.shape[self.shape.len() - 1]
    }

    /// Number of pixels across all leading axes.
    pub fn len(&self) -> usize {
        self.leading_shape().iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Iterate pixels as fixed-size arrays.
    ///
    /// Fails with [`ColourError::ShapeMismatch`] when the channel axis is not
    /// `N` long.
    pub fn pixels<const N: usize>(&self) -> Result<impl Iterator<Item = [f64; N]> + '_, ColourError> {
        self.expect_channels(N)?;
        Ok(self
            .data
            .chunks_exact(N)
            .map(|chunk| std::array::from_fn(|i| chunk[i])))
    }

    /// Apply a per-pixel `N -> M` kernel, keeping every leading axis.
    pub fn map_channels<const N: usize, const M: usize>(
        &self,
        kernel: impl Fn([f64; N]) -> [f64; M],
    ) -> Result<ColourArray, ColourError> {
        let mut data = Vec::with_capacity(self.len() * M);
        for pixel in self.pixels::<N>()? {
            data.extend_from_slice(&kernel(pixel));
        }

        let mut shape = self.leading_shape().to_vec();
        shape.push(M);
        Ok(ColourArray { shape, data })
    }

    /// Reduce every pixel to one value, keeping the leading axes in row-major order.
    pub fn map_pixels<const N: usize, T>(
        &self,
        kernel: impl Fn([f64; N]) -> T,
    ) -> Result<Vec<T>, ColourError> {
        Ok(self.pixels::<N>()?.map(kernel).collect())
    }

    fn expect_channels(&self, expected: usize) -> Result<(), ColourError> {
        let found = self.channels();
        if found != expected {
            return Err(ColourError::ShapeMismatch { expected, found });
        }
        Ok(())
    }
}
