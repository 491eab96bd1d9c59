//! Formatting walkthrough: one resolution rendered as text, JSON and CSV

use pose_resolver::{
    CsvFormatter, JsonFormatter, PoseResolver, ResolutionFormatter, TextFormatter,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let resolver = PoseResolver::new();
    let formatter = ResolutionFormatter::new();

    let resolution = resolver
        .resolve_from_preset("101")
        .expect("101 is a built-in preset");
    let formatted = formatter.format_preset(&resolution);

    println!("--- text (verbose) ---");
    print!("{}", TextFormatter::new().format_text(&formatted));

    println!("--- text (compact) ---");
    println!("{}", TextFormatter::compact().format_text(&formatted));

    println!("--- json ---");
    println!("{}", JsonFormatter::pretty().format_json(&formatted)?);

    println!("--- csv ---");
    let csv = CsvFormatter::new();
    println!("{}", csv.header());
    println!("{}", csv.format_csv(&formatted));

    Ok(())
}
