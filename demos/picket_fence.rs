fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    // One picket per repetition: rise from the baseline, come back down.
    let points = croquis::RepeatBuilder::build_from([0.0, 0.0], [8.0, 0.0], 8, |b, step| {
        b.turn_left(75.0);
        b.forward(step)?;
        b.turn_right(150.0);
        b.forward(step)?;
        Ok(())
    })?;

    println!("fence outline:");
    for p in &points {
        println!("  {}", p);
    }
    Ok(())
}
