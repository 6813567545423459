//! Layout of the 3-N-1 network diagram and its forward-pass animation.
//!
//! The diagram has no trainer behind it: connection weights are random and
//! only decide the colour and thickness of each edge.

use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{Matrix, PlaygroundError, Result};

pub const INPUT_NEURONS: usize = 3;
pub const OUTPUT_NEURONS: usize = 1;

/// Horizontal inset of the input and output columns.
const LAYER_INSET: f64 = 100.0;
/// Vertical margin shared by the top and bottom of every column.
const COLUMN_MARGIN: f64 = 50.0;

#[derive(Clone, Debug)]
pub struct NetworkTopology {
    layer_sizes: [usize; 3],
    /// `weights[l][(i, j)]` connects neuron `i` of layer `l` to neuron `j` of
    /// layer `l + 1`.
    weights: Vec<Matrix>,
}

impl NetworkTopology {
    pub fn new(hidden_neurons: usize) -> Result<Self> {
        Self::build(hidden_neurons, &mut StdRng::from_entropy())
    }

    pub fn with_seed(hidden_neurons: usize, seed: u64) -> Result<Self> {
        Self::build(hidden_neurons, &mut StdRng::seed_from_u64(seed))
    }

    fn build(hidden_neurons: usize, rng: &mut StdRng) -> Result<Self> {
        if hidden_neurons == 0 {
            return Err(PlaygroundError::InvalidConfig(
                "hidden neuron count must be > 0".to_string(),
            ));
        }

        let layer_sizes = [INPUT_NEURONS, hidden_neurons, OUTPUT_NEURONS];
        let weights = layer_sizes
            .windows(2)
            .map(|pair| {
                Matrix::random_using((pair[0], pair[1]), Uniform::new(-1.0, 1.0), &mut *rng)
            })
            .collect();

        Ok(Self { layer_sizes, weights })
    }

    pub fn layer_sizes(&self) -> &[usize] {
        &self.layer_sizes
    }

    pub fn hidden_neurons(&self) -> usize {
        self.layer_sizes[1]
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    /// Pixel centre of every neuron, grouped by layer, on a
    /// `width × height` surface.
    pub fn layout(&self, width: f64, height: f64) -> Vec<Vec<(f64, f64)>> {
        let columns = [LAYER_INSET, width / 2.0, width - LAYER_INSET];

        columns
            .iter()
            .zip(self.layer_sizes.iter())
            .map(|(&x, &count)| {
                let spacing = (height - 2.0 * COLUMN_MARGIN) / (count + 1) as f64;
                (0..count)
                    .map(|i| (x, COLUMN_MARGIN + spacing * (i + 1) as f64))
                    .collect()
            })
            .collect()
    }

    pub fn connection_count(&self) -> usize {
        self.layer_sizes.windows(2).map(|pair| pair[0] * pair[1]).sum()
    }
}

/// One tick of the forward-pass animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub step: usize,
    pub highlighted_layer: Option<usize>,
}

/// Finite frame sequence: one frame per layer with that layer highlighted,
/// then a closing frame with nothing highlighted.
#[derive(Clone, Debug)]
pub struct ForwardPassAnimation {
    layers: usize,
    step: usize,
}

impl ForwardPassAnimation {
    pub fn new(topology: &NetworkTopology) -> Self {
        Self {
            layers: topology.layer_sizes().len(),
            step: 0,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.layers + 1
    }

    pub fn restart(&mut self) {
        self.step = 0;
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.frame_count()
    }
}

impl Iterator for ForwardPassAnimation {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.is_finished() {
            return None;
        }

        let frame = Frame {
            step: self.step,
            highlighted_layer: (self.step < self.layers).then_some(self.step),
        };
        self.step += 1;
        Some(frame)
    }
}
