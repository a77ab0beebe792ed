//! # Drop-Down Option Lists
//!
//! The option list behind a `<select>`-style control, built from JSON
//! records. Rendering the list is the caller's concern; this module owns
//! which options exist, in what order, and how each label is composed.
//!
//! Labels come from record fields named by [`OptionFields`]:
//!
//! | `concat` | `extra_label` | Label |
//! |----------|---------------|-------|
//! | false    | ignored       | `label` |
//! | true     | `None`        | `value - label` |
//! | true     | `Some(extra)` | `value - label - extra` |

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use formkit_core::OptionError;

/// One entry of a drop-down list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Text shown to the user.
    pub label: String,
}

/// Which record fields supply an option's value and label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionFields {
    /// Field holding the option value.
    pub value: String,
    /// Field holding the option label.
    pub label: String,
    /// Prefix the label with the value, separated by ` - `.
    #[serde(default)]
    pub concat: bool,
    /// Field appended after the label when `concat` is set.
    #[serde(default)]
    pub extra_label: Option<String>,
}

impl OptionFields {
    /// Map `value` and `label` fields with a plain label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            concat: false,
            extra_label: None,
        }
    }

    /// Show labels as `value - label`.
    pub fn concatenated(mut self) -> Self {
        self.concat = true;
        self
    }

    /// Show labels as `value - label - extra`. Implies [`Self::concatenated`].
    pub fn with_extra_label(mut self, field: impl Into<String>) -> Self {
        self.concat = true;
        self.extra_label = Some(field.into());
        self
    }

    fn build(&self, index: usize, record: &Value) -> Result<SelectOption, OptionError> {
        let record = record
            .as_object()
            .ok_or(OptionError::NotARecord { index })?;
        let value = field_text(record, index, &self.value)?;
        let label = field_text(record, index, &self.label)?;
        let label = match (&self.extra_label, self.concat) {
            (_, false) => label,
            (None, true) => format!("{value} - {label}"),
            (Some(extra), true) => {
                let extra = field_text(record, index, extra)?;
                format!("{value} - {label} - {extra}")
            }
        };
        Ok(SelectOption { value, label })
    }
}

/// Field as display text: strings verbatim, other JSON values in JSON form.
fn field_text(record: &Map<String, Value>, index: usize, field: &str) -> Result<String, OptionError> {
    match record.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Ok(other.to_string()),
        None => Err(OptionError::MissingField {
            index,
            field: field.to_string(),
        }),
    }
}

/// An ordered list of drop-down options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropDownList {
    options: Vec<SelectOption>,
}

impl DropDownList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The options in display order.
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the list has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Append one option.
    pub fn insert_option(&mut self, value: impl Into<String>, label: impl Into<String>) -> &mut Self {
        self.options.push(SelectOption {
            value: value.into(),
            label: label.into(),
        });
        self
    }

    /// Append one option per record, in record order.
    ///
    /// All records are converted before any is appended, so on error the
    /// list is unchanged.
    ///
    /// # Errors
    ///
    /// [`OptionError::NotARecord`] for a non-object record and
    /// [`OptionError::MissingField`] for a record lacking a mapped field.
    pub fn insert_options(
        &mut self,
        records: &[Value],
        fields: &OptionFields,
    ) -> Result<&mut Self, OptionError> {
        let built = records
            .iter()
            .enumerate()
            .map(|(index, record)| fields.build(index, record))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(count = built.len(), "inserting drop-down options");
        self.options.extend(built);
        Ok(self)
    }

    /// Remove every option, last first.
    pub fn remove_options(&mut self) -> &mut Self {
        while self.options.pop().is_some() {}
        self
    }
}
