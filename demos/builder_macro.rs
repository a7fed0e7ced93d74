//! The doc! literal syntax for building documents.
//!
//! Run with: cargo run --example builder_macro

use json_scribe::doc;

fn main() -> json_scribe::Result<()> {
    let report = doc! {
        "service": "billing",
        "healthy": true,
        "uptime": 99.98,
        "regions": ["eu-west", "us-east"],
        "last incident": null,
        "owner": { "team": "payments", "oncall": "alice" },
    };

    println!("compact: {}", json_scribe::to_compact(&report)?);
    println!("pretty:");
    report.pretty_print()?;

    Ok(())
}
