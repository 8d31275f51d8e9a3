//! Contact form bound to the `mails` table.
//!
//! [`MailForm`] mirrors the four visitor-facing columns of a mail record.
//! Every field is a required character field; values are whitespace-trimmed
//! before validation and the column length limits apply. Errors are kept per
//! field so the contact page can re-display them next to the inputs.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Maximum length of `mails.name`.
pub const NAME_MAX_LENGTH: u64 = 200;

/// Maximum length of `mails.phone_number`.
pub const PHONE_NUMBER_MAX_LENGTH: u64 = 20;

/// Maximum length of `mails.contact`.
pub const CONTACT_MAX_LENGTH: u64 = 200;

const REQUIRED_MESSAGE: &str = "This field is required.";

// ---------------------------------------------------------------------------
// Field descriptors
// ---------------------------------------------------------------------------

/// Value type accepted by a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text, submitted as a string.
    Char,
}

/// HTML control used to render a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    TextInput,
    Textarea,
}

/// Static description of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub widget: Widget,
    pub required: bool,
    pub max_length: Option<u64>,
}

/// The fields of [`MailForm`], in display order.
pub const MAIL_FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        name: "name",
        label: "Name",
        kind: FieldKind::Char,
        widget: Widget::TextInput,
        required: true,
        max_length: Some(NAME_MAX_LENGTH),
    },
    FieldSpec {
        name: "phone_number",
        label: "Phone number",
        kind: FieldKind::Char,
        widget: Widget::TextInput,
        required: true,
        max_length: Some(PHONE_NUMBER_MAX_LENGTH),
    },
    FieldSpec {
        name: "contact",
        label: "Contact",
        kind: FieldKind::Char,
        widget: Widget::TextInput,
        required: true,
        max_length: Some(CONTACT_MAX_LENGTH),
    },
    FieldSpec {
        name: "memo",
        label: "Memo",
        kind: FieldKind::Char,
        widget: Widget::Textarea,
        required: true,
        max_length: None,
    },
];

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Raw submitted values. Missing keys deserialize as empty strings so they
/// surface as "required" errors instead of a rejected request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct MailInput {
    #[validate(
        custom(function = "not_blank"),
        length(max = 200, message = "Ensure this value has at most 200 characters.")
    )]
    pub name: String,

    #[validate(
        custom(function = "not_blank"),
        length(max = 20, message = "Ensure this value has at most 20 characters.")
    )]
    pub phone_number: String,

    #[validate(
        custom(function = "not_blank"),
        length(max = 200, message = "Ensure this value has at most 200 characters.")
    )]
    pub contact: String,

    #[validate(custom(function = "not_blank"))]
    pub memo: String,
}

impl MailInput {
    fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            contact: self.contact.trim().to_string(),
            memo: self.memo.trim().to_string(),
        }
    }

    fn value_of(&self, field: &str) -> &str {
        match field {
            "name" => &self.name,
            "phone_number" => &self.phone_number,
            "contact" => &self.contact,
            "memo" => &self.memo,
            _ => "",
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some(Cow::Borrowed(REQUIRED_MESSAGE));
        return Err(err);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// Error messages keyed by field name.
pub type FieldErrors = BTreeMap<&'static str, Vec<String>>;

/// A field paired with its current value and errors, ready for rendering.
#[derive(Debug, Clone, Copy)]
pub struct BoundField<'a> {
    pub spec: &'static FieldSpec,
    pub value: &'a str,
    pub errors: &'a [String],
}

impl BoundField<'_> {
    pub fn is_textarea(&self) -> bool {
        self.spec.widget == Widget::Textarea
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// The visitor contact form, either empty (unbound) or holding submitted data.
#[derive(Debug, Clone, Default)]
pub struct MailForm {
    data: MailInput,
    bound: bool,
    errors: FieldErrors,
}

impl MailForm {
    /// An empty form for the initial GET.
    pub fn unbound() -> Self {
        Self::default()
    }

    /// Bind submitted values and validate them.
    pub fn bind(input: MailInput) -> Self {
        let data = input.trimmed();
        let errors = match data.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errs) => collect_errors(&errs),
        };
        Self {
            data,
            bound: true,
            errors,
        }
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// `true` only for a bound form without errors.
    pub fn is_valid(&self) -> bool {
        self.bound && self.errors.is_empty()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// All fields in display order.
    pub fn fields(&self) -> Vec<BoundField<'_>> {
        MAIL_FIELDS.iter().map(|spec| self.bound_field(spec)).collect()
    }

    /// Look up a single field by name.
    pub fn field(&self, name: &str) -> Option<BoundField<'_>> {
        MAIL_FIELDS
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| self.bound_field(spec))
    }

    /// The trimmed, validated values. `None` unless [`Self::is_valid`].
    pub fn cleaned_data(&self) -> Option<&MailInput> {
        self.is_valid().then_some(&self.data)
    }

    fn bound_field(&self, spec: &'static FieldSpec) -> BoundField<'_> {
        BoundField {
            spec,
            value: self.data.value_of(spec.name),
            errors: self
                .errors
                .get(spec.name)
                .map(Vec::as_slice)
                .unwrap_or_default(),
        }
    }
}

fn collect_errors(errs: &ValidationErrors) -> FieldErrors {
    let by_field = errs.field_errors();
    let mut out = FieldErrors::new();
    for spec in &MAIL_FIELDS {
        if let Some(list) = by_field.get(spec.name) {
            let messages = list
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            out.insert(spec.name, messages);
        }
    }
    out
}
