use std::str::FromStr;

use anyhow::{Result, bail};

/// Amazon Resource Name split into its sections
///
/// `arn:partition:service:region:account-id:resource`, where the resource
/// may itself contain `:` or `/`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arn {
  pub partition: String,
  pub service: String,
  pub region: String,
  pub account_id: String,
  pub resource: String,
}

impl FromStr for Arn {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self> {
    let sections: Vec<&str> = s.splitn(6, ':').collect();

    if sections.first() != Some(&"arn") {
      bail!("arn: invalid prefix");
    }
    if sections.len() != 6 {
      bail!("arn: not enough sections");
    }

    Ok(Arn {
      partition: sections[1].to_string(),
      service: sections[2].to_string(),
      region: sections[3].to_string(),
      account_id: sections[4].to_string(),
      resource: sections[5].to_string(),
    })
  }
}
