use mlplayground::{Label, Point2D, PlaygroundConfig, PlaygroundError, Session};

fn main() -> Result<(), PlaygroundError> {
    env_logger::init();

    println!("=== Classification Demo ===\n");

    let mut session = Session::new(PlaygroundConfig::default())?;

    // Training with only one class is refused
    session.classifier.add_point(Label::ClassA, Point2D::new(1.0, 1.0));
    if let Err(e) = session.train_classifier() {
        println!("Refused: {e}");
    }

    for (x, y) in [(1.0, 2.0), (2.0, 1.0), (2.5, 3.0)] {
        session.classifier.add_point(Label::ClassA, Point2D::new(x, y));
    }
    session.toggle_class();
    for (x, y) in [(8.0, 8.0), (8.0, 9.0), (9.0, 8.0), (7.0, 9.5)] {
        session.classifier.add_point_to_active(Point2D::new(x, y));
    }

    let report = session.train_classifier()?;
    let model = session.classifier.model();
    println!("\nTrained for {} epochs", report.epochs);
    println!("w1={:.3} w2={:.3} b={:.3}", model.weight1, model.weight2, model.bias);
    println!("Accuracy: {:.1}% ({} of {})", report.accuracy * 100.0, report.correct, report.total);

    println!("\nPredictions:");
    for p in [Point2D::new(0.5, 0.5), Point2D::new(5.0, 5.0), Point2D::new(9.5, 9.5)] {
        println!(
            "({:.1}, {:.1}): score={:.3} -> {:?}",
            p.x,
            p.y,
            session.classifier.classify(p),
            session.classifier.predict_label(p)
        );
    }

    match session.classifier.decision_boundary() {
        Some((a, b)) => println!("\nBoundary from ({:.1}, {:.2}) to ({:.1}, {:.2})", a.x, a.y, b.x, b.y),
        None => println!("\nBoundary is too close to vertical to draw"),
    }

    println!("\nScene JSON:\n{}", session.classifier_scene().to_json()?);

    Ok(())
}
