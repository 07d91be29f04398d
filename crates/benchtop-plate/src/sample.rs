//! Sample records and the sample entry form

use std::fmt;

use serde::Serialize;

use crate::error::{PlateError, PlateResult};

/// Kinds of sample a well can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SampleType {
    /// Blood serum
    #[default]
    Serum,
    /// DNA
    #[serde(rename = "DNA")]
    Dna,
    /// RNA
    #[serde(rename = "RNA")]
    Rna,
    /// Prepared sequencing library
    #[serde(rename = "NGS Library")]
    NgsLibrary,
    /// Anything else
    Other,
}

impl SampleType {
    /// Options in the order the form cycles through them
    pub const ALL: [Self; 5] = [
        Self::Serum,
        Self::Dna,
        Self::Rna,
        Self::NgsLibrary,
        Self::Other,
    ];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Serum => "Serum",
            Self::Dna => "DNA",
            Self::Rna => "RNA",
            Self::NgsLibrary => "NGS Library",
            Self::Other => "Other",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    /// The next option, wrapping around
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous option, wrapping around
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A sample entered for one well
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRecord {
    /// Well label, e.g. `B7`
    pub well: String,
    /// Free-form sample identifier
    pub sample_id: String,
    /// Volume in microlitres
    pub volume_ul: Option<f64>,
    /// Sample type
    pub sample_type: SampleType,
    /// Concentration in ng/uL
    pub concentration_ng_ul: Option<f64>,
    /// Free-text description
    pub description: String,
}

/// Form fields, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Sample ID text box
    SampleId,
    /// Volume text box
    Volume,
    /// Sample type selector
    SampleType,
    /// Concentration text box
    Concentration,
    /// Description text box
    Description,
    /// The "Save Sample" button
    Save,
}

impl FormField {
    /// Fields in focus order
    pub const ALL: [Self; 6] = [
        Self::SampleId,
        Self::Volume,
        Self::SampleType,
        Self::Concentration,
        Self::Description,
        Self::Save,
    ];

    /// Label shown next to the field
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SampleId => "Sample ID",
            Self::Volume => "Volume (uL)",
            Self::SampleType => "Sample Type",
            Self::Concentration => "Concentration (ng/uL)",
            Self::Description => "Sample Description",
            Self::Save => "Save Sample",
        }
    }

    /// Returns true for free-text fields
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(
            self,
            Self::SampleId | Self::Volume | Self::Concentration | Self::Description
        )
    }
}

/// Editable sample entry form for one well
#[derive(Debug, Clone, PartialEq)]
pub struct SampleForm {
    well: String,
    focus: usize,
    sample_id: String,
    volume: String,
    sample_type: SampleType,
    concentration: String,
    description: String,
    error: Option<String>,
}

impl SampleForm {
    /// Creates an empty form for a well
    #[must_use]
    pub fn new(well: impl Into<String>) -> Self {
        Self {
            well: well.into(),
            focus: 0,
            sample_id: String::new(),
            volume: String::new(),
            sample_type: SampleType::default(),
            concentration: String::new(),
            description: String::new(),
            error: None,
        }
    }

    /// The well this form describes
    #[must_use]
    pub fn well(&self) -> &str {
        &self.well
    }

    /// Dialog title
    #[must_use]
    pub fn title(&self) -> String {
        format!("Sample Information: {}", self.well)
    }

    /// The focused field
    #[must_use]
    pub const fn focus(&self) -> FormField {
        FormField::ALL[self.focus]
    }

    /// Moves focus to the next field, wrapping around
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FormField::ALL.len();
    }

    /// Moves focus to the previous field, wrapping around
    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + FormField::ALL.len() - 1) % FormField::ALL.len();
    }

    /// Focuses a specific field
    pub fn set_focus(&mut self, field: FormField) {
        self.focus = FormField::ALL.iter().position(|&f| f == field).unwrap_or(0);
    }

    /// Current text of a field (the type label for the selector)
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::SampleId => &self.sample_id,
            FormField::Volume => &self.volume,
            FormField::SampleType => self.sample_type.label(),
            FormField::Concentration => &self.concentration,
            FormField::Description => &self.description,
            FormField::Save => "",
        }
    }

    /// The selected sample type
    #[must_use]
    pub const fn sample_type(&self) -> SampleType {
        self.sample_type
    }

    /// Message from the last failed save
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Shows a failure that happened after validation
    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::SampleId => Some(&mut self.sample_id),
            FormField::Volume => Some(&mut self.volume),
            FormField::Concentration => Some(&mut self.concentration),
            FormField::Description => Some(&mut self.description),
            FormField::SampleType | FormField::Save => None,
        }
    }

    /// Types a character into the focused text field
    pub fn insert_char(&mut self, ch: char) {
        let field = self.focus();
        if let Some(text) = self.text_mut(field) {
            text.push(ch);
            self.error = None;
        }
    }

    /// Deletes the last character of the focused text field
    pub fn backspace(&mut self) {
        let field = self.focus();
        if let Some(text) = self.text_mut(field) {
            text.pop();
            self.error = None;
        }
    }

    /// Replaces the text of a field
    pub fn set_value(&mut self, field: FormField, value: &str) {
        if let Some(text) = self.text_mut(field) {
            *text = value.to_string();
        }
    }

    /// Steps the sample type forward or backward
    pub fn cycle_type(&mut self, forward: bool) {
        self.sample_type = if forward {
            self.sample_type.next()
        } else {
            self.sample_type.prev()
        };
    }

    /// Selects a sample type
    pub fn set_sample_type(&mut self, sample_type: SampleType) {
        self.sample_type = sample_type;
    }

    /// Validates the form and builds the record.
    ///
    /// Numeric fields may be left blank; when filled they must hold a
    /// finite, non-negative number.
    pub fn build(&self) -> PlateResult<SampleRecord> {
        Ok(SampleRecord {
            well: self.well.clone(),
            sample_id: self.sample_id.trim().to_string(),
            volume_ul: parse_quantity(FormField::Volume, &self.volume)?,
            sample_type: self.sample_type,
            concentration_ng_ul: parse_quantity(FormField::Concentration, &self.concentration)?,
            description: self.description.trim().to_string(),
        })
    }

    /// Like [`build`](Self::build), remembering the failure for display
    pub fn submit(&mut self) -> PlateResult<SampleRecord> {
        let result = self.build();
        self.error = result.as_ref().err().map(ToString::to_string);
        result
    }
}

fn parse_quantity(field: FormField, text: &str) -> PlateResult<Option<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
        _ => Err(PlateError::InvalidNumber {
            field: field.label(),
            value: trimmed.to_string(),
        }),
    }
}
