use mlplayground::{PlaygroundConfig, PlaygroundError, Session};

fn main() -> Result<(), PlaygroundError> {
    env_logger::init();

    let mut session = Session::new(PlaygroundConfig::default())?;

    println!("=== Data Playground ===\n");
    let summary = session.data.summary()?;
    println!("Records:     {}", summary.records);
    println!("Avg size:    {:.0} sq ft", summary.avg_size);
    println!("Avg price:   ${:.0}k", summary.avg_price);
    println!("Price range: ${:.0}k", summary.price_range);

    println!("\n=== Neural Network ===\n");
    println!("Layers: {:?}", session.network.layer_sizes());
    for (i, frame) in session.network_frames().iter().enumerate() {
        println!("Frame {}: {} directives", i, frame.len());
    }

    println!("\n=== Sentiment Analysis ===\n");
    for text in [
        "I love this product, it is amazing!",
        "Terrible service and awful food",
        "It arrived on Tuesday",
    ] {
        let result = session.sentiment.analyze(text);
        println!("{:40} -> {:?} ({:.0}%)", text, result.sentiment, result.score);
    }

    println!("\n=== Price Prediction ===\n");
    for (size, bedrooms) in [(1000.0, 2.0), (2000.0, 3.0), (3000.0, 5.0)] {
        println!(
            "{:.0} sq ft, {} bedrooms: ${:.0}k",
            size,
            bedrooms,
            session.pricing.predict(size, bedrooms)
        );
    }
    println!("R² on the sample table: {:.3}", session.pricing.score(&session.data)?);

    for id in [2, 4, 6] {
        session.progress.complete(id);
    }
    println!("\nProgress: {} ({:.0}%)", session.progress.label(), session.progress.percent());

    Ok(())
}
