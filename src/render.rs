//! Draw directives handed to the renderer.
//!
//! Everything here is already in pixel space. The renderer owns radii,
//! colours, dash patterns and fonts; the core only tags what each primitive
//! is.

use serde::Serialize;

use crate::dataset::Dataset;
use crate::geometry::{Point2D, SpaceMapper};
use crate::linear_model::{Label, PerceptronTrainer, RegressionTrainer};
use crate::network::{Frame, NetworkTopology};
use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag {
    Sample,
    ClassA,
    ClassB,
    Neuron,
    ActiveNeuron,
}

impl From<Label> for ColorTag {
    fn from(label: Label) -> Self {
        match label {
            Label::ClassA => ColorTag::ClassA,
            Label::ClassB => ColorTag::ClassB,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum LineStyle {
    Axis,
    Grid,
    RegressionLine,
    DecisionBoundary,
    Connection { positive: bool, width: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum DrawDirective {
    Point {
        px: f64,
        py: f64,
        color: ColorTag,
    },
    Segment {
        px1: f64,
        py1: f64,
        px2: f64,
        py2: f64,
        style: LineStyle,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Scene {
    pub directives: Vec<DrawDirective>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn point(&mut self, mapper: &SpaceMapper, p: Point2D, color: ColorTag) {
        let (px, py) = mapper.to_pixel(p);
        self.directives.push(DrawDirective::Point { px, py, color });
    }

    pub fn segment(&mut self, mapper: &SpaceMapper, a: Point2D, b: Point2D, style: LineStyle) {
        let (px1, py1) = mapper.to_pixel(a);
        let (px2, py2) = mapper.to_pixel(b);
        self.pixel_segment((px1, py1), (px2, py2), style);
    }

    fn pixel_segment(&mut self, (px1, py1): (f64, f64), (px2, py2): (f64, f64), style: LineStyle) {
        self.directives.push(DrawDirective::Segment { px1, py1, px2, py2, style });
    }

    /// The x axis along the bottom of the plot and the y axis along its left.
    pub fn axes(&mut self, mapper: &SpaceMapper) {
        let d = mapper.domain;
        let origin = Point2D::new(d.x_min, d.y_min);
        self.segment(mapper, origin, Point2D::new(d.x_max, d.y_min), LineStyle::Axis);
        self.segment(mapper, origin, Point2D::new(d.x_min, d.y_max), LineStyle::Axis);
    }

    /// `divisions + 1` vertical and horizontal lines across the plot. Zero
    /// divisions draws no grid.
    pub fn grid(&mut self, mapper: &SpaceMapper, divisions: usize) {
        if divisions == 0 {
            return;
        }
        let d = mapper.domain;
        for i in 0..=divisions {
            let t = i as f64 / divisions as f64;
            let x = d.x_min + t * d.width();
            self.segment(mapper, Point2D::new(x, d.y_min), Point2D::new(x, d.y_max), LineStyle::Grid);
        }
        for i in 0..=divisions {
            let t = i as f64 / divisions as f64;
            let y = d.y_min + t * d.height();
            self.segment(mapper, Point2D::new(d.x_min, y), Point2D::new(d.x_max, y), LineStyle::Grid);
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Size/price scatter of the house table.
pub fn data_scene(data: &Dataset, mapper: &SpaceMapper) -> Scene {
    let mut scene = Scene::new();
    scene.axes(mapper);
    for p in data.scatter_points() {
        scene.point(mapper, p, ColorTag::Sample);
    }
    scene
}

/// Axes, a 10×10 grid, the fitted line when there is data, then the samples.
pub fn regression_scene(trainer: &RegressionTrainer, mapper: &SpaceMapper) -> Scene {
    let mut scene = Scene::new();
    scene.axes(mapper);
    scene.grid(mapper, 10);
    if let Some((a, b)) = trainer.regression_line() {
        scene.segment(mapper, a, b, LineStyle::RegressionLine);
    }
    for &p in trainer.training_set().points() {
        scene.point(mapper, p, ColorTag::Sample);
    }
    scene
}

/// Decision boundary (when drawable) under the axes and both classes.
pub fn classifier_scene(trainer: &PerceptronTrainer, mapper: &SpaceMapper) -> Scene {
    let mut scene = Scene::new();
    if let Some((a, b)) = trainer.decision_boundary() {
        scene.segment(mapper, a, b, LineStyle::DecisionBoundary);
    }
    scene.axes(mapper);
    for label in [Label::ClassA, Label::ClassB] {
        for &p in trainer.point_sets().get(label) {
            scene.point(mapper, p, label.into());
        }
    }
    scene
}

/// Connections, then neurons, on a `width × height` surface. `frame`
/// highlights one layer during the forward-pass animation.
pub fn network_scene(
    topology: &NetworkTopology,
    width: f64,
    height: f64,
    frame: Option<Frame>,
) -> Scene {
    let layout = topology.layout(width, height);
    let mut scene = Scene::new();

    for (l, weights) in topology.weights().iter().enumerate() {
        for ((i, j), &w) in weights.indexed_iter() {
            let style = LineStyle::Connection {
                positive: w > 0.0,
                width: w.abs() * 2.0,
            };
            scene.pixel_segment(layout[l][i], layout[l + 1][j], style);
        }
    }

    let highlighted = frame.and_then(|f| f.highlighted_layer);
    for (l, neurons) in layout.iter().enumerate() {
        let color = if highlighted == Some(l) { ColorTag::ActiveNeuron } else { ColorTag::Neuron };
        for &(px, py) in neurons {
            scene.directives.push(DrawDirective::Point { px, py, color });
        }
    }
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Domain, PixelRect};
    use crate::network::ForwardPassAnimation;

    fn mapper(domain: Domain) -> SpaceMapper {
        SpaceMapper::new(domain, PixelRect::new(600.0, 400.0, 50.0).unwrap())
    }

    fn points_with(scene: &Scene, tag: ColorTag) -> usize {
        scene
            .directives
            .iter()
            .filter(|d| matches!(d, DrawDirective::Point { color, .. } if *color == tag))
            .count()
    }

    fn segments_with(scene: &Scene, wanted: LineStyle) -> Vec<DrawDirective> {
        scene
            .directives
            .iter()
            .copied()
            .filter(|d| matches!(d, DrawDirective::Segment { style, .. } if *style == wanted))
            .collect()
    }

    #[test]
    fn test_axes_follow_padding() {
        let mut scene = Scene::new();
        scene.axes(&mapper(Domain::regression()));

        assert_eq!(
            scene.directives[0],
            DrawDirective::Segment { px1: 50.0, py1: 350.0, px2: 550.0, py2: 350.0, style: LineStyle::Axis }
        );
        assert_eq!(
            scene.directives[1],
            DrawDirective::Segment { px1: 50.0, py1: 350.0, px2: 50.0, py2: 50.0, style: LineStyle::Axis }
        );
    }

    #[test]
    fn test_grid_without_divisions_is_empty() {
        let m = mapper(Domain::regression());
        let mut scene = Scene::new();
        scene.grid(&m, 0);
        assert!(scene.is_empty());

        scene.grid(&m, 1);
        let lines = segments_with(&scene, LineStyle::Grid);
        assert_eq!(lines.len(), 4);
        for line in lines {
            if let DrawDirective::Segment { px1, py1, px2, py2, .. } = line {
                assert!([px1, py1, px2, py2].iter().all(|v| v.is_finite()));
            }
        }
    }

    #[test]
    fn test_regression_scene_contents() {
        let m = mapper(Domain::regression());
        let mut trainer = RegressionTrainer::new(0.01).unwrap().random_state(5);

        let empty = regression_scene(&trainer, &m);
        assert!(segments_with(&empty, LineStyle::RegressionLine).is_empty());
        assert_eq!(segments_with(&empty, LineStyle::Grid).len(), 22);

        trainer.seed_sample_data();
        let scene = regression_scene(&trainer, &m);
        assert_eq!(segments_with(&scene, LineStyle::RegressionLine).len(), 1);
        assert_eq!(points_with(&scene, ColorTag::Sample), 8);
    }

    #[test]
    fn test_classifier_scene_tags_classes() {
        let m = mapper(Domain::classifier());
        let mut trainer = PerceptronTrainer::new().random_state(9);
        trainer.add_point(Label::ClassA, Point2D::new(1.0, 1.0));
        trainer.add_point(Label::ClassA, Point2D::new(2.0, 1.0));
        trainer.add_point(Label::ClassB, Point2D::new(9.0, 9.0));

        let before = classifier_scene(&trainer, &m);
        assert!(segments_with(&before, LineStyle::DecisionBoundary).is_empty());
        assert_eq!(points_with(&before, ColorTag::ClassA), 2);
        assert_eq!(points_with(&before, ColorTag::ClassB), 1);

        trainer.train().unwrap();
        let after = classifier_scene(&trainer, &m);
        let drawable = trainer.decision_boundary().is_some();
        assert_eq!(segments_with(&after, LineStyle::DecisionBoundary).len(), drawable as usize);
    }

    #[test]
    fn test_data_scene_has_every_house() {
        let data = Dataset::house_prices();
        let m = mapper(data.scatter_domain().unwrap());
        let scene = data_scene(&data, &m);

        assert_eq!(points_with(&scene, ColorTag::Sample), 8);
        // the largest house sits on the right edge, the priciest on the top edge
        assert!(scene.directives.contains(&DrawDirective::Point { px: 550.0, py: 50.0, color: ColorTag::Sample }));
    }

    #[test]
    fn test_network_scene_highlights_frame_layer() {
        let net = NetworkTopology::with_seed(4, 3).unwrap();
        let frame = ForwardPassAnimation::new(&net).nth(1);

        let scene = network_scene(&net, 700.0, 400.0, frame);
        assert_eq!(scene.len(), net.connection_count() + 8);
        assert_eq!(points_with(&scene, ColorTag::ActiveNeuron), 4);
        assert_eq!(points_with(&scene, ColorTag::Neuron), 4);

        let idle = network_scene(&net, 700.0, 400.0, None);
        assert_eq!(points_with(&idle, ColorTag::ActiveNeuron), 0);
    }

    #[test]
    fn test_network_connections_follow_weights() {
        let net = NetworkTopology::with_seed(5, 11).unwrap();
        let layout = net.layout(700.0, 400.0);
        let scene = network_scene(&net, 700.0, 400.0, None);

        let mut segments = scene
            .directives
            .iter()
            .filter(|d| matches!(d, DrawDirective::Segment { .. }));
        for (l, weights) in net.weights().iter().enumerate() {
            for ((i, j), &w) in weights.indexed_iter() {
                let Some(&DrawDirective::Segment { px1, py1, px2, py2, style }) = segments.next() else {
                    panic!("missing connection {l}:{i}->{j}");
                };
                assert_eq!((px1, py1), layout[l][i]);
                assert_eq!((px2, py2), layout[l + 1][j]);
                assert_eq!(style, LineStyle::Connection { positive: w > 0.0, width: w.abs() * 2.0 });
            }
        }
        assert!(segments.next().is_none());

        // the sign decides the colour, the magnitude the stroke width
        let has_both = net.weights().iter().flat_map(|m| m.iter()).any(|&w| w > 0.0)
            && net.weights().iter().flat_map(|m| m.iter()).any(|&w| w < 0.0);
        if has_both {
            let positives = scene
                .directives
                .iter()
                .filter(|d| matches!(d, DrawDirective::Segment { style: LineStyle::Connection { positive: true, .. }, .. }))
                .count();
            assert!(positives > 0 && positives < net.connection_count());
        }
    }

    #[test]
    fn test_scene_json_shape() {
        let mut scene = Scene::new();
        scene.directives.push(DrawDirective::Point { px: 1.0, py: 2.0, color: ColorTag::ClassB });
        scene.directives.push(DrawDirective::Segment {
            px1: 0.0,
            py1: 0.0,
            px2: 1.0,
            py2: 1.0,
            style: LineStyle::Connection { positive: false, width: 0.5 },
        });

        let value: serde_json::Value = serde_json::from_str(&scene.to_json().unwrap()).unwrap();
        assert_eq!(value["directives"][0]["type"], "point");
        assert_eq!(value["directives"][0]["color"], "class_b");
        assert_eq!(value["directives"][1]["style"]["kind"], "connection");
        assert_eq!(value["directives"][1]["style"]["positive"], false);
    }
}
