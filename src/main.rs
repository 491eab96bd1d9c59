//! Walkthrough of the pose resolution library
//!
//! Resolves every built-in preset, the home dock, and a sample map click,
//! printing the values the dashboard would display next to the commands it
//! would send.

use pose_resolver::{
    BatteryReading, JsonFormatter, PointerRatio, PoseResolver, ResolutionFormatter, TextFormatter,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let resolver = PoseResolver::new();
    let formatter = ResolutionFormatter::new();
    let compact = TextFormatter::compact();

    println!("=== Preset resolutions ===");
    for id in resolver.location_ids() {
        if let Some(resolution) = resolver.resolve_from_preset(id) {
            println!("{}", compact.format_text(&formatter.format_preset(&resolution)));
        }
    }

    println!("\n=== Home dock ===");
    let home = resolver.resolve_home();
    println!("{}", compact.format_text(&formatter.format_preset(&home)));
    println!("{}", JsonFormatter::pretty().format_json(&formatter.format_preset(&home))?);

    println!("\n=== Map click at the viewport center-right ===");
    let click = resolver.resolve_from_pointer(PointerRatio::new(0.75, 0.5));
    println!("{}", TextFormatter::new().format_pointer(&click));
    println!(
        "full precision ({}, {}) for marker placement",
        click.world.x, click.world.y
    );

    println!("\n=== Battery card ===");
    let battery = BatteryReading::new(62.0, 23.8, 29.5);
    println!(
        "charge {:.0}% -> status {} ({:.0}% bar)",
        battery.percentage,
        battery.status().label(),
        battery.charge_fraction() * 100.0
    );

    Ok(())
}
