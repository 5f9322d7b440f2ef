//! Configuring marker characters, comments, and escapes.
//!
//! Run with: cargo run --example custom_markers

use kvtext::{parse_with_options, to_string_with_options, MarkerSet, Options};

fn main() {
    // '%' and '@' both declare keys; '%' was declared first, so it is the
    // primary marker and drives serialization.
    let options = Options::new().with_markers(MarkerSet::from_chars(['%', '@']));

    let doc = "\
%greeting
hello from the percent marker
@aside
the at-marker still works
%escaped
\\%this line is value text, not a key
# this comment disappears";

    let map = parse_with_options(doc, &options);
    for (key, value) in &map {
        println!("{key:?} => {value:?}");
    }

    println!("\nSerialized with the primary marker:");
    println!("{}", to_string_with_options(&map, true, &options));

    // Comments can be turned off entirely
    let no_comments = Options::new().with_comments(false);
    let map = parse_with_options("@k\n# kept as value text", &no_comments);
    assert_eq!(map.get("k"), Some("# kept as value text"));
    println!("\n✓ With comments off, '#' lines are ordinary values");
}
