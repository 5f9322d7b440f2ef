//! Basic parsing and serialization.
//!
//! Run with: cargo run --example simple

use kvtext::{parse, to_string};

fn main() {
    let doc = "\
@title
A first document

@body
Values span multiple lines
until the next key.

@footer
bye";

    let map = parse(doc);
    for (key, value) in &map {
        println!("{key:?} => {value:?}");
    }

    // Serialize back with blank-line separators
    let text = to_string(&map, true);
    println!("\nSerialized:\n{text}");

    assert_eq!(parse(&text), map);
    println!("\n✓ Round-trip successful");
}
