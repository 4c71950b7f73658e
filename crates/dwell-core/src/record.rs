use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{FieldKind, WizardKind};
use crate::WizardError;

/// Value of a single wizard field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    #[must_use]
    pub fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::List => FieldValue::List(Vec::new()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::List(_) => FieldKind::List,
        }
    }

    /// Empty string or empty list. Whitespace-only text is not empty here;
    /// see [`FieldValue::is_blank`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

/// Field values accumulated across the steps of one wizard instance.
///
/// The schema is closed: every field of the owning wizard is present from
/// construction, and fields outside the schema cannot be set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardRecord {
    #[serde(skip)]
    kind: WizardKind,
    #[serde(flatten)]
    values: BTreeMap<&'static str, FieldValue>,
}

impl WizardRecord {
    /// A record with every schema field set to its empty value.
    #[must_use]
    pub fn empty(kind: WizardKind) -> Self {
        let values = kind
            .schema()
            .iter()
            .map(|spec| (spec.name, FieldValue::empty(spec.kind)))
            .collect();
        Self { kind, values }
    }

    #[must_use]
    pub fn kind(&self) -> WizardKind {
        self.kind
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Text value of `name`; empty for list fields and unknown names.
    #[must_use]
    pub fn text(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(FieldValue::Text(s)) => s,
            _ => "",
        }
    }

    /// List value of `name`; empty for text fields and unknown names.
    #[must_use]
    pub fn list(&self, name: &str) -> &[String] {
        match self.values.get(name) {
            Some(FieldValue::List(items)) => items,
            _ => &[],
        }
    }

    /// Overwrite a field. No validation beyond schema membership and kind.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::UnknownField`] for names outside the schema and
    /// [`WizardError::KindMismatch`] when a list is written to a text field
    /// or vice versa.
    pub fn set(&mut self, name: &str, value: FieldValue) -> Result<(), WizardError> {
        let spec = self
            .kind
            .field(name)
            .ok_or_else(|| WizardError::UnknownField {
                wizard: self.kind.slug(),
                field: name.to_owned(),
            })?;
        if spec.kind != value.kind() {
            return Err(WizardError::KindMismatch {
                field: name.to_owned(),
                expected: spec.kind,
            });
        }
        self.values.insert(spec.name, value);
        Ok(())
    }

    /// Add `item` to a list field, or remove it if already present.
    ///
    /// # Errors
    ///
    /// Same as [`WizardRecord::set`]; text fields yield
    /// [`WizardError::KindMismatch`].
    pub fn toggle(&mut self, name: &str, item: &str) -> Result<(), WizardError> {
        let mut items = match self.get(name) {
            Some(FieldValue::List(items)) => items.clone(),
            Some(FieldValue::Text(_)) => {
                return Err(WizardError::KindMismatch {
                    field: name.to_owned(),
                    expected: FieldKind::Text,
                })
            }
            None => {
                return Err(WizardError::UnknownField {
                    wizard: self.kind.slug(),
                    field: name.to_owned(),
                })
            }
        };
        if let Some(pos) = items.iter().position(|s| s == item) {
            items.remove(pos);
        } else {
            items.push(item.to_owned());
        }
        self.set(name, FieldValue::List(items))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    /// True when every field holds its empty value.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.values.values().all(FieldValue::is_empty)
    }
}
