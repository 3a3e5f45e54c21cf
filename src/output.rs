use std::{fs::File, io::prelude::*};

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Format {
  /// JSON format used for scripting or writing to a *.json file
  Json,
  /// YAML format used for scripting or writing to a *.yaml file
  Yaml,
  /// Text format used for writing to stdout
  #[default]
  Text,
}

impl Format {
  /// Returns true for the machine readable formats
  pub fn is_structured(&self) -> bool {
    !matches!(self, Format::Text)
  }
}

/// Serialize a value in the requested structured format
pub fn to_structured<T: Serialize>(value: &T, format: &Format) -> Result<String> {
  let output = match format {
    Format::Json => serde_json::to_string_pretty(value)?,
    Format::Yaml => serde_yaml::to_string(value)?,
    Format::Text => anyhow::bail!("Text output is not a structured format"),
  };

  Ok(output)
}

/// Write the rendered output to the file provided, or stdout
pub fn output(rendered: &str, filename: &Option<String>) -> Result<()> {
  match filename {
    Some(filename) => {
      let mut file = File::create(filename)?;
      file.write_all(rendered.as_bytes())?;
    }
    None => {
      print!("{rendered}");
      if !rendered.ends_with('\n') {
        println!();
      }
    }
  }

  Ok(())
}
