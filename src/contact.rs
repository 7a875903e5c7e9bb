use std::collections::BTreeMap;
use std::sync::LazyLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

// Everything `encodeURIComponent` escapes.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const COMPANY_PLACEHOLDER: &str = "Not specified";
const PHONE_PLACEHOLDER: &str = "Not provided";
const SIGNATURE: &str = "Sent from Joseph Vazquez Portfolio Contact Form";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Company,
    Phone,
    Email,
    Message,
}

impl Field {
    pub fn all() -> [Field; 5] {
        [
            Field::Name,
            Field::Company,
            Field::Phone,
            Field::Email,
            Field::Message,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Company => "company",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn parse(s: &str) -> Option<Field> {
        match s {
            "name" => Some(Field::Name),
            "company" => Some(Field::Company),
            "phone" => Some(Field::Phone),
            "email" => Some(Field::Email),
            "message" => Some(Field::Message),
            _ => None,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Field::Name | Field::Email | Field::Message)
    }
}

pub type FormErrors = BTreeMap<Field, String>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    #[error("Contact form has {} invalid field(s)", .0.len())]
    Invalid(FormErrors),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Company => &self.company,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Company => &mut self.company,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }
}

/// Banner shown above the form after a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    MailClient,
    Manual,
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Notice::MailClient => {
                "Thank you for your message! I'll get back to you as soon as possible."
            }
            Notice::Manual => {
                "Your message has been formatted below. Copy the email address and message to send manually."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Email,
    Message,
}

impl CopyTarget {
    pub fn confirmation(&self) -> &'static str {
        match self {
            CopyTarget::Email => "Email address copied to clipboard!",
            CopyTarget::Message => "Message copied to clipboard!",
        }
    }
}

/// Payload of the manual contact panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualContact {
    pub address: String,
    pub message: String,
}

impl ManualContact {
    pub fn text_for(&self, target: CopyTarget) -> &str {
        match target {
            CopyTarget::Email => &self.address,
            CopyTarget::Message => &self.message,
        }
    }
}

pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s.trim())
}

pub fn encode_uri_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

pub fn mailto_link(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{address}?subject={}&body={}",
        encode_uri_component(subject),
        encode_uri_component(body)
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    address: String,
    fields: ContactFields,
    errors: FormErrors,
    submitting: bool,
    notice: Option<Notice>,
    manual: Option<ManualContact>,
}

impl ContactForm {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            fields: ContactFields::default(),
            errors: FormErrors::new(),
            submitting: false,
            notice: None,
            manual: None,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn manual_contact(&self) -> Option<&ManualContact> {
        self.manual.as_ref()
    }

    /// Sets one field and drops only that field's error.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
        self.errors.remove(&field);
    }

    pub fn validate(&mut self) -> bool {
        let mut errors = FormErrors::new();
        if self.fields.name.trim().is_empty() {
            errors.insert(Field::Name, "Please enter your name".to_string());
        }
        if !is_valid_email(&self.fields.email) {
            errors.insert(Field::Email, "Please enter a valid email address".to_string());
        }
        if self.fields.message.trim().is_empty() {
            errors.insert(Field::Message, "Please enter your message".to_string());
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    pub fn compose_message(&self) -> String {
        let f = &self.fields;
        let company = if f.company.is_empty() {
            COMPANY_PLACEHOLDER
        } else {
            &f.company
        };
        let phone = if f.phone.is_empty() {
            PHONE_PLACEHOLDER
        } else {
            &f.phone
        };
        format!(
            "Name: {}\nCompany: {company}\nPhone: {phone}\nEmail: {}\n\nMessage:\n{}\n\n---\n{SIGNATURE}",
            f.name, f.email, f.message
        )
    }

    pub fn subject(&self) -> String {
        format!("Portfolio Contact Form - {}", self.fields.name)
    }

    fn check(&mut self) -> Result<(), ContactError> {
        if self.validate() {
            Ok(())
        } else {
            log::debug!("contact form blocked: {:?}", self.errors.keys());
            Err(ContactError::Invalid(self.errors.clone()))
        }
    }

    /// Returns the `mailto:` link the caller should navigate to.
    ///
    /// Marks the form as submitting; the caller always schedules
    /// [`ContactForm::finish_submitting`]. Only once navigation succeeded does
    /// it call [`ContactForm::mail_client_opened`] and schedule
    /// [`ContactForm::reset_fields`].
    pub fn submit_via_mail_client(&mut self) -> Result<String, ContactError> {
        self.check()?;
        self.submitting = true;
        Ok(mailto_link(&self.address, &self.subject(), &self.compose_message()))
    }

    pub fn mail_client_opened(&mut self) {
        self.notice = Some(Notice::MailClient);
    }

    pub fn submit_via_clipboard(&mut self) -> Result<&ManualContact, ContactError> {
        self.check()?;
        let manual = ManualContact {
            address: self.address.clone(),
            message: self.compose_message(),
        };
        self.notice = Some(Notice::Manual);
        Ok(self.manual.insert(manual))
    }

    pub fn reset_fields(&mut self) {
        self.fields = ContactFields::default();
    }

    pub fn finish_submitting(&mut self) {
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new("owner@example.com");
        form.update_field(Field::Name, name);
        form.update_field(Field::Email, email);
        form.update_field(Field::Message, message);
        form
    }

    fn error_keys(form: &ContactForm) -> Vec<Field> {
        form.errors().keys().copied().collect()
    }

    #[test]
    fn test_valid_form() {
        let mut form = filled("Ada Lovelace", "ada@example.com", "Hello");
        assert!(form.validate());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_required_fields_whitespace() {
        for field in [Field::Name, Field::Email, Field::Message] {
            let mut form = filled("Ada", "ada@example.com", "Hello");
            form.update_field(field, "   \t ");
            assert!(!form.validate(), "{} should be required", field.as_str());
            assert_eq!(error_keys(&form), vec![field]);
        }
    }

    #[test]
    fn test_all_required_missing() {
        let mut form = filled("", "bad-email", "");
        assert!(!form.validate());
        assert_eq!(
            error_keys(&form),
            vec![Field::Name, Field::Email, Field::Message]
        );
        assert_eq!(form.error(Field::Name), Some("Please enter your name"));
        assert_eq!(
            form.error(Field::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(form.error(Field::Message), Some("Please enter your message"));
    }

    #[test]
    fn test_optional_fields_never_error() {
        let mut form = filled("", "", "");
        form.validate();
        assert!(form.error(Field::Company).is_none());
        assert!(form.error(Field::Phone).is_none());
        assert!(!Field::Company.is_required());
        assert!(!Field::Phone.is_required());
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("  ada@example.com  "));
        assert!(is_valid_email("first.last+tag@sub.example.co.uk"));
        assert!(!is_valid_email("bad-email"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada @example.com"));
        assert!(!is_valid_email("ada@@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_update_clears_only_that_error() {
        let mut form = filled("", "bad-email", "");
        form.validate();
        form.update_field(Field::Email, "still bad");
        assert_eq!(error_keys(&form), vec![Field::Name, Field::Message]);
        // typing does not re-validate
        assert!(form.error(Field::Email).is_none());
    }

    #[test]
    fn test_validation_replaces_errors() {
        let mut form = filled("", "bad-email", "");
        form.validate();
        form.update_field(Field::Name, "Ada");
        form.update_field(Field::Message, "Hi");
        assert!(!form.validate());
        assert_eq!(error_keys(&form), vec![Field::Email]);
    }

    #[test]
    fn test_compose_with_placeholders() {
        let form = filled("Ada Lovelace", "ada@example.com", "Hello");
        let expected = "Name: Ada Lovelace
Company: Not specified
Phone: Not provided
Email: ada@example.com

Message:
Hello

---
Sent from Joseph Vazquez Portfolio Contact Form";
        assert_eq!(form.compose_message(), expected);
    }

    #[test]
    fn test_compose_with_optional_fields() {
        let mut form = filled("Ada", "ada@example.com", "Line one\nLine two");
        form.update_field(Field::Company, "Analytical Engines");
        form.update_field(Field::Phone, "555-0100");
        let message = form.compose_message();
        assert!(message.contains("Company: Analytical Engines\n"));
        assert!(message.contains("Phone: 555-0100\n"));
        assert!(!message.contains("Not specified"));
        assert!(!message.contains("Not provided"));
        assert!(message.contains("Message:\nLine one\nLine two\n"));
        assert_eq!(message, form.compose_message());
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("a b"), "a%20b");
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_uri_component("a&b=c?d/e"), "a%26b%3Dc%3Fd%2Fe");
        assert_eq!(encode_uri_component("line\nnext"), "line%0Anext");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
    }

    #[test]
    fn test_mail_client_submission() {
        let mut form = filled("Ada Lovelace", "ada@example.com", "Hello");
        let link = form.submit_via_mail_client().unwrap();
        assert!(link.starts_with(
            "mailto:owner@example.com?subject=Portfolio%20Contact%20Form%20-%20Ada%20Lovelace&body="
        ));
        assert!(link.contains("Name%3A%20Ada%20Lovelace%0ACompany%3A%20Not%20specified"));
        assert!(form.is_submitting());
        assert_eq!(form.notice(), None);
        form.mail_client_opened();
        assert_eq!(form.notice(), Some(Notice::MailClient));
        assert!(form.manual_contact().is_none());

        form.reset_fields();
        assert_eq!(form.fields(), &ContactFields::default());
        assert!(form.is_submitting());
        form.finish_submitting();
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_mail_client_navigation_failed() {
        let mut form = filled("Ada Lovelace", "ada@example.com", "Hello");
        form.submit_via_mail_client().unwrap();
        // navigation failed: no success banner, fields kept for a retry
        form.finish_submitting();
        assert!(!form.is_submitting());
        assert_eq!(form.notice(), None);
        assert_eq!(form.field(Field::Name), "Ada Lovelace");
        assert_eq!(form.field(Field::Message), "Hello");
    }

    #[test]
    fn test_blocked_submissions() {
        let mut form = filled("", "bad-email", "");
        let err = form.submit_via_mail_client().unwrap_err();
        let ContactError::Invalid(errors) = err;
        assert_eq!(errors.len(), 3);
        assert!(!form.is_submitting());
        assert!(form.notice().is_none());

        assert!(form.submit_via_clipboard().is_err());
        assert!(form.manual_contact().is_none());
    }

    #[test]
    fn test_clipboard_submission() {
        let mut form = filled("Ada", "ada@example.com", "Hello");
        let composed = form.compose_message();
        let manual = form.submit_via_clipboard().unwrap().clone();
        assert_eq!(manual.text_for(CopyTarget::Email), "owner@example.com");
        assert_eq!(manual.text_for(CopyTarget::Message), composed);
        assert_eq!(form.notice(), Some(Notice::Manual));
        assert!(!form.is_submitting());
        assert_eq!(form.field(Field::Name), "Ada");
    }

    #[test]
    fn test_copy_confirmations() {
        assert_eq!(
            CopyTarget::Email.confirmation(),
            "Email address copied to clipboard!"
        );
        assert_eq!(
            CopyTarget::Message.confirmation(),
            "Message copied to clipboard!"
        );
    }

    #[test]
    fn test_field_names() {
        for field in Field::all() {
            assert_eq!(Field::parse(field.as_str()), Some(field));
        }
        assert_eq!(Field::parse("fax"), None);
    }
}
