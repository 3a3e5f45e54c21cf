use std::fmt::Display;

/// Column at which values start in the text report
pub const LABEL_WIDTH: usize = 28;

/// A single line of the text report
#[derive(Clone, Debug, PartialEq, Eq)]
enum Line {
  /// `Label:` padded to the value column, followed by the value
  Field { label: String, value: String },
  /// `Label:` on its own, introducing the nested lines below it
  Section(String),
  /// ` - value`, a list entry without a label
  Item(String),
}

/// Text report built from label/value records
///
/// Records that are not present are dropped when added, so callers describe
/// every field once and the padding lives in [`Report::render`] only
#[derive(Clone, Debug, Default)]
pub struct Report {
  lines: Vec<Line>,
}

impl Report {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn field(&mut self, label: &str, value: impl Display) -> &mut Self {
    self.field_if(true, label, value)
  }

  /// Add the field only when `present` is true
  pub fn field_if(&mut self, present: bool, label: &str, value: impl Display) -> &mut Self {
    if present {
      self.lines.push(Line::Field {
        label: label.to_string(),
        value: value.to_string(),
      });
    }
    self
  }

  /// Add the field only when the value is set and not empty
  pub fn field_opt(&mut self, label: &str, value: Option<&str>) -> &mut Self {
    match value {
      Some(value) if !value.is_empty() => self.field(label, value),
      _ => self,
    }
  }

  /// Field nested under the preceding section, rendered as ` - Label:`
  pub fn nested(&mut self, label: &str, value: impl Display) -> &mut Self {
    self.field(&format!(" - {label}"), value)
  }

  pub fn nested_opt(&mut self, label: &str, value: Option<&str>) -> &mut Self {
    self.field_opt(&format!(" - {label}"), value)
  }

  pub fn section(&mut self, label: &str) -> &mut Self {
    self.lines.push(Line::Section(label.to_string()));
    self
  }

  pub fn item(&mut self, value: impl Display) -> &mut Self {
    self.lines.push(Line::Item(value.to_string()));
    self
  }

  /// Render the report, surrounded by a blank line on each side
  pub fn render(&self) -> String {
    let mut output = String::from("\n");

    for line in &self.lines {
      match line {
        Line::Field { label, value } => {
          let label = format!("{label}:");
          let width = LABEL_WIDTH - 1;
          output.push_str(&format!("{label:<width$} {value}\n"));
        }
        Line::Section(label) => output.push_str(&format!("{label}:\n")),
        Line::Item(value) => output.push_str(&format!(" - {value}\n")),
      }
    }

    output.push('\n');
    output
  }
}
