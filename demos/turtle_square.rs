fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let side = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(1.0);

    let mut sketch = croquis::Sketch::new();
    let polygon = sketch.add_polygon(|b| {
        b.start_at([0.0, 0.0]);
        b.forward(side)?;
        b.turn_left(90.0);
        b.forward(side)?;
        b.turn_left(90.0);
        b.forward(side)?;
        Ok(())
    })?;

    println!("square vertices:");
    for v in polygon.vertices() {
        println!("  {}", v);
    }

    if let Some(size) = sketch.size() {
        println!("sketch size: {}", size);
    }
    Ok(())
}
