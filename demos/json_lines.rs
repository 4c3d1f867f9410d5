//! JSON Lines: one compact JSON document per line.
//!
//! Run with: cargo run --example json_lines

use serde_box::{deserialize, serialize, value, EncodeOptions, Format, Source};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let stars = value!([
        {"name": "Mel Brooks", "role": "President Skroob"},
        {"name": "John Candy", "role": "Barf"},
        {"name": "Rick Moranis", "role": "Dark Helmet"}
    ]);

    let text = serialize(
        Format::Json,
        &stars,
        &EncodeOptions::new().with_multiline(true),
    )?;
    print!("{}", text);

    let back = deserialize(Format::Json, &Source::text(text).with_multiline(true))?;
    assert_eq!(back, stars);
    println!("read back {} records", back.as_array().map_or(0, Vec::len));

    Ok(())
}
