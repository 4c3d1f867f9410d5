//! Convert one document between TOML, JSON and YAML.
//!
//! Run with: cargo run --example simple

use serde_box::{from_toml, from_yaml, to_json, to_toml, to_yaml};
use std::error::Error;

const MOVIES: &str = r#"
[movies.Spaceballs]
imdb_stars = 7.1
rating = "PG"
length = 96
Director = "Mel Brooks"

[[movies.Spaceballs.Stars]]
name = "Mel Brooks"
imdb = "nm0000316"
role = "President Skroob"

[[movies.Spaceballs.Stars]]
name = "John Candy"
imdb = "nm0001006"
role = "Barf"
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let movies = from_toml(MOVIES)?;
    println!("Director: {}", movies["movies"]["Spaceballs"]["Director"]);

    let json = to_json(&movies)?;
    println!("JSON:\n{}\n", json);

    let yaml = to_yaml(&movies)?;
    println!("YAML:\n{}", yaml);

    let back = from_yaml(&yaml)?;
    assert_eq!(back, movies);
    println!("TOML again:\n{}", to_toml(&back)?);

    Ok(())
}
