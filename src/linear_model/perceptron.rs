use log::{debug, info, warn};
use ndarray::Axis;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{validate_epochs, validate_learning_rate};
use crate::geometry::{Domain, Point2D};
use crate::{Matrix, PlaygroundError, Result, Vector};

/// Below this `|weight2|` the boundary is too close to vertical to draw as
/// `y = f(x)`.
pub const BOUNDARY_EPSILON: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    ClassA,
    ClassB,
}

impl Label {
    pub fn target(self) -> f64 {
        match self {
            Label::ClassA => 0.0,
            Label::ClassB => 1.0,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Label::ClassA => Label::ClassB,
            Label::ClassB => Label::ClassA,
        }
    }

    fn from_score(score: f64) -> Self {
        if score > 0.0 { Label::ClassB } else { Label::ClassA }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClassifierModel {
    pub weight1: f64,
    pub weight2: f64,
    pub bias: f64,
    pub trained: bool,
}

impl ClassifierModel {
    pub fn score(&self, p: Point2D) -> f64 {
        self.weight1 * p.x + self.weight2 * p.y + self.bias
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrainingReport {
    pub accuracy: f64,
    pub epochs: usize,
    pub correct: usize,
    pub total: usize,
}

#[derive(Clone, Debug, Default)]
pub struct LabeledPointSets {
    class_a: Vec<Point2D>,
    class_b: Vec<Point2D>,
}

impl LabeledPointSets {
    pub fn get(&self, label: Label) -> &[Point2D] {
        match label {
            Label::ClassA => &self.class_a,
            Label::ClassB => &self.class_b,
        }
    }

    pub fn count(&self, label: Label) -> usize {
        self.get(label).len()
    }

    pub fn total(&self) -> usize {
        self.class_a.len() + self.class_b.len()
    }

    fn push(&mut self, label: Label, p: Point2D) {
        match label {
            Label::ClassA => self.class_a.push(p),
            Label::ClassB => self.class_b.push(p),
        }
    }

    fn clear(&mut self) {
        self.class_a.clear();
        self.class_b.clear();
    }

    /// Rows of `[x, y, 1]`, every class A point before every class B point,
    /// each class in insertion order. The trailing column carries the bias.
    fn design_matrix(&self) -> (Matrix, Vector) {
        let points = self.class_a.iter().chain(self.class_b.iter());
        let mut x = Matrix::ones((self.total(), 3));
        for (mut row, p) in x.axis_iter_mut(Axis(0)).zip(points) {
            row[0] = p.x;
            row[1] = p.y;
        }

        let targets = std::iter::repeat_n(Label::ClassA.target(), self.class_a.len())
            .chain(std::iter::repeat_n(Label::ClassB.target(), self.class_b.len()))
            .collect::<Vector>();
        (x, targets)
    }
}

/// Two-feature perceptron trained with the classic mistake-driven update.
#[derive(Clone, Debug)]
pub struct PerceptronTrainer {
    model: ClassifierModel,
    sets: LabeledPointSets,
    active_label: Label,
    learning_rate: f64,
    epochs: usize,
    domain: Domain,
    rng: StdRng,
}

impl PerceptronTrainer {
    pub fn new() -> Self {
        Self {
            model: ClassifierModel::default(),
            sets: LabeledPointSets::default(),
            active_label: Label::ClassA,
            learning_rate: 0.1,
            epochs: 100,
            domain: Domain::classifier(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_params(learning_rate: f64, epochs: usize) -> Result<Self> {
        validate_learning_rate(learning_rate)?;
        validate_epochs(epochs)?;

        Ok(Self {
            learning_rate,
            epochs,
            ..Self::new()
        })
    }

    pub fn random_state(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn model(&self) -> &ClassifierModel {
        &self.model
    }

    pub fn point_sets(&self) -> &LabeledPointSets {
        &self.sets
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn epochs(&self) -> usize {
        self.epochs
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Used by later [`train`](Self::train) calls; stored points are kept.
    pub fn set_learning_rate(&mut self, learning_rate: f64) -> Result<()> {
        validate_learning_rate(learning_rate)?;
        self.learning_rate = learning_rate;
        Ok(())
    }

    pub fn set_epochs(&mut self, epochs: usize) -> Result<()> {
        validate_epochs(epochs)?;
        self.epochs = epochs;
        Ok(())
    }

    pub fn active_label(&self) -> Label {
        self.active_label
    }

    pub fn toggle_label(&mut self) -> Label {
        self.active_label = self.active_label.toggled();
        self.active_label
    }

    /// Stores `p` under `label` if it lies inside the plot domain.
    pub fn add_point(&mut self, label: Label, p: Point2D) -> bool {
        if !self.domain.contains(p) {
            debug!("rejected {:?} point outside domain: ({}, {})", label, p.x, p.y);
            return false;
        }
        self.sets.push(label, p);
        true
    }

    pub fn add_point_to_active(&mut self, p: Point2D) -> bool {
        self.add_point(self.active_label, p)
    }

    /// Trains with the stored learning rate and epoch count.
    pub fn train(&mut self) -> Result<TrainingReport> {
        self.train_with(self.learning_rate, self.epochs)
    }

    /// Trains the current point sets with the given parameters. The stored
    /// defaults are left as they are.
    pub fn train_with(&mut self, learning_rate: f64, epochs: usize) -> Result<TrainingReport> {
        validate_learning_rate(learning_rate)?;
        validate_epochs(epochs)?;

        let (class_a, class_b) = (self.sets.count(Label::ClassA), self.sets.count(Label::ClassB));
        if class_a == 0 || class_b == 0 {
            warn!("perceptron training skipped: class A has {class_a} points, class B has {class_b}");
            return Err(PlaygroundError::MissingClass { class_a, class_b });
        }

        let (x, targets) = self.sets.design_matrix();
        let mut weights = Vector::from_iter((0..3).map(|_| self.rng.gen_range(-0.5..0.5)));

        for _ in 0..epochs {
            for (row, &target) in x.axis_iter(Axis(0)).zip(targets.iter()) {
                let output = row.dot(&weights);
                let prediction = if output > 0.0 { 1.0 } else { 0.0 };
                let error = target - prediction;
                if error != 0.0 {
                    weights.scaled_add(learning_rate * error, &row);
                }
            }
        }

        self.model = ClassifierModel {
            weight1: weights[0],
            weight2: weights[1],
            bias: weights[2],
            trained: true,
        };

        let predictions = x.dot(&weights).mapv(|output| Label::from_score(output).target());
        let total = targets.len();
        let correct = targets
            .iter()
            .zip(predictions.iter())
            .filter(|(target, prediction)| target == prediction)
            .count();
        let accuracy = correct as f64 / total as f64;

        info!(
            "perceptron trained for {} epochs: w1={:.3} w2={:.3} b={:.3} accuracy={:.1}%",
            epochs,
            self.model.weight1,
            self.model.weight2,
            self.model.bias,
            accuracy * 100.0
        );

        Ok(TrainingReport {
            accuracy,
            epochs,
            correct,
            total,
        })
    }

    pub fn reset(&mut self) {
        self.sets.clear();
        self.model = ClassifierModel::default();
    }

    /// Linear score of `p`; `<= 0` is class A and `> 0` is class B.
    pub fn classify(&self, p: Point2D) -> f64 {
        self.model.score(p)
    }

    pub fn predict_label(&self, p: Point2D) -> Label {
        Label::from_score(self.classify(p))
    }

    /// Endpoints of `w1·x + w2·y + b = 0` at the domain's x bounds. `None`
    /// before training or when the line is too close to vertical.
    pub fn decision_boundary(&self) -> Option<(Point2D, Point2D)> {
        if !self.model.trained || self.model.weight2.abs() <= BOUNDARY_EPSILON {
            return None;
        }

        let ClassifierModel { weight1, weight2, bias, .. } = self.model;
        let at = |x: f64| Point2D::new(x, -(weight1 * x + bias) / weight2);
        Some((at(self.domain.x_min), at(self.domain.x_max)))
    }
}

impl Default for PerceptronTrainer {
    fn default() -> Self {
        Self::new()
    }
}
