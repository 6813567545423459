use mlplayground::{PlaygroundConfig, PlaygroundError, Session};

fn main() -> Result<(), PlaygroundError> {
    env_logger::init();

    println!("=== Training Simulator ===\n");

    let config = PlaygroundConfig::from_json(r#"{"regression": {"learning_rate": 0.01}, "seed": 42}"#)?;
    let mut session = Session::new(config)?;

    let model = *session.regression.model();
    println!("Initial weight: {:.3}", model.weight);
    println!("Initial bias:   {:.3}", model.bias);
    println!("Initial loss:   {:.3}", session.regression.current_loss());

    // A click near the top-right of the plot adds a noisy sample
    if session.click_regression(500.0, 80.0) {
        println!("\nAdded a point by clicking at (500, 80)");
    }

    let reports = session.train_regression();
    println!("\nLoss every 20 epochs:");
    for report in reports.iter().filter(|r| r.epoch % 20 == 0) {
        println!(
            "Epoch {:3}: weight={:.3} bias={:.3} loss={:.3}",
            report.epoch, report.weight, report.bias, report.loss
        );
    }

    println!("\nFinal loss: {:.3}", session.regression.current_loss());
    if let Some((a, b)) = session.regression.regression_line() {
        println!("Line from ({:.1}, {:.2}) to ({:.1}, {:.2})", a.x, a.y, b.x, b.y);
    }

    let scene = session.regression_scene();
    println!("\nScene has {} draw directives", scene.len());

    session.regression.reset();
    println!("After reset: epoch={} points={}", session.regression.model().epoch, session.regression.training_set().len());

    Ok(())
}
