//! # serde_box
//!
//! A dynamic nested value container with conversion to and from TOML, JSON
//! and YAML, as strings or files.
//!
//! ## Key Features
//!
//! - **One value type**: [`Value`] holds null, booleans, numbers, strings,
//!   arrays and insertion-ordered objects
//! - **Three formats**: encoding and decoding are delegated to `toml`,
//!   `serde_json` and `serde_yaml`
//! - **Files**: every encoder can also write its output to a path, and every
//!   decoder can read from one
//! - **One error type**: all failures, including missing input and I/O, are
//!   an [`Error`]
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_box::{from_toml, to_json, to_yaml};
//!
//! let movies = from_toml(
//!     r#"
//! [movies.Spaceballs]
//! length = 96
//! Director = "Mel Brooks"
//!
//! [[movies.Spaceballs.Stars]]
//! name = "Rick Moranis"
//! role = "Dark Helmet"
//! "#,
//! )
//! .unwrap();
//!
//! assert_eq!(movies["movies"]["Spaceballs"]["length"], 96);
//! assert_eq!(movies["movies"]["Spaceballs"]["Stars"][0]["name"], "Rick Moranis");
//!
//! let json = to_json(&movies).unwrap();
//! assert!(json.contains("\"Rick Moranis\""));
//!
//! let yaml = to_yaml(&movies).unwrap();
//! assert!(yaml.contains("Rick Moranis"));
//! ```
//!
//! ### Files
//!
//! ```rust,no_run
//! use serde_box::{from_json_file, to_json_file, value};
//!
//! let data = value!({"name": "Rick Moranis"});
//! let written = to_json_file(&data, "movie_data.json").unwrap();
//! assert_eq!(std::fs::read_to_string("movie_data.json").unwrap(), written);
//! assert_eq!(from_json_file("movie_data.json").unwrap(), data);
//! ```
//!
//! ### Options
//!
//! [`serialize`] and [`deserialize`] take the format as a [`Format`] and
//! their settings as [`EncodeOptions`] / [`Source`]. Process-wide defaults
//! can be installed once at startup with [`options::init_defaults`].
//!
//! ## Logging
//!
//! File reads and writes are reported at `debug` level through the `log`
//! facade. No logger is installed by this crate.

pub mod bridge;
pub mod codec;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use bridge::{
    deserialize, from_json, from_json_file, from_toml, from_toml_file, from_yaml,
    from_yaml_file, load, save, serialize, to_json, to_json_file, to_toml, to_toml_file,
    to_yaml, to_yaml_file,
};
pub use codec::{Codec, JsonCodec, TomlCodec, YamlCodec};
pub use error::{Error, Result};
pub use format::Format;
pub use map::Map;
pub use options::{Defaults, EncodeOptions, Source};
pub use ser::{to_value, ValueSerializer};
pub use value::{Number, Value, ValueIndex};
