//! Write a value to files in every format and load them back.
//!
//! File reads and writes are logged at debug level.
//!
//! Run with: cargo run --example files

use serde::Serialize;
use serde_box::{load, save, to_value, Format};
use std::error::Error;

#[derive(Serialize)]
struct Movie {
    title: String,
    length: u32,
    stars: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let movie = to_value(&Movie {
        title: "Robin Hood: Men in Tights".to_string(),
        length: 104,
        stars: vec!["Cary Elwes".to_string(), "Richard Lewis".to_string()],
    })?;

    let dir = std::env::temp_dir().join("serde_box_files_demo");
    std::fs::create_dir_all(&dir)?;

    for format in Format::ALL {
        let path = dir.join(format!("movie.{}", format.extension()));
        let written = save(&movie, &path)?;
        println!("{} ({} bytes):\n{}", path.display(), written.len(), written);

        assert_eq!(load(&path)?, movie);
    }

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}
