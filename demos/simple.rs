//! Building and pretty-printing a document field by field.
//!
//! Run with: cargo run --example simple

use json_scribe::{Document, False, Null, True};

fn main() -> json_scribe::Result<()> {
    let mut root = Document::new();
    root.field("name").set("Bob");
    root.field("age").set(44);

    let mut address = Document::new();
    address.field("planet").set("Earth");
    root.field("address").set(address);

    let mut joe = Document::new();
    joe.field("name").set("Joe");
    joe.field("age").set(15);

    let mut sara = Document::new();
    sara.field("name").set("Sara");
    sara.field("age").set(13);

    root.field("children").at(0).set(joe);
    root.field("children").at(1).set(sara);

    root.field("likes rust").set(True);
    root.field("finished projects").set(Null);
    root.field("placeholder").set(False);

    root.pretty_print()?;

    Ok(())
}
