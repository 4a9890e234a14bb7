//! Contact and host-application payloads, their validation, and submission.

use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::estimator::StationType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    General,
    Support,
    Partnership,
    Press,
    Career,
    Feedback,
}

impl InquiryType {
    pub const ALL: [InquiryType; 6] = [
        InquiryType::General,
        InquiryType::Support,
        InquiryType::Partnership,
        InquiryType::Press,
        InquiryType::Career,
        InquiryType::Feedback,
    ];

    pub fn value(self) -> &'static str {
        match self {
            InquiryType::General => "general",
            InquiryType::Support => "support",
            InquiryType::Partnership => "partnership",
            InquiryType::Press => "press",
            InquiryType::Career => "career",
            InquiryType::Feedback => "feedback",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InquiryType::General => "Question générale",
            InquiryType::Support => "Support technique",
            InquiryType::Partnership => "Partenariat",
            InquiryType::Press => "Presse & Médias",
            InquiryType::Career => "Carrières",
            InquiryType::Feedback => "Retour d'expérience",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            InquiryType::General => "💬",
            InquiryType::Support => "❓",
            InquiryType::Partnership => "🏢",
            InquiryType::Press | InquiryType::Career => "👤",
            InquiryType::Feedback => "💡",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    NameRequired,
    EmailRequired,
    EmailInvalid,
    InquiryTypeRequired,
    MessageRequired,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::NameRequired => "Le nom est requis",
            ValidationError::EmailRequired => "L'email est requis",
            ValidationError::EmailInvalid => "L'email n'est pas valide",
            ValidationError::InquiryTypeRequired => "Le type de demande est requis",
            ValidationError::MessageRequired => "Le message est requis",
        }
    }

    /// Form field the error belongs to, matching the input ids.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NameRequired => "name",
            ValidationError::EmailRequired | ValidationError::EmailInvalid => "email",
            ValidationError::InquiryTypeRequired => "inquiryType",
            ValidationError::MessageRequired => "message",
        }
    }
}

pub fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ValidationError::message)
        .collect::<Vec<_>>()
        .join(", ")
}

fn check_identity(name: &str, email: &str, errors: &mut Vec<ValidationError>) {
    if name.trim().is_empty() {
        errors.push(ValidationError::NameRequired);
    }
    if email.trim().is_empty() {
        errors.push(ValidationError::EmailRequired);
    }
    if !email.contains('@') {
        errors.push(ValidationError::EmailInvalid);
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub subject: String,
    pub message: String,
    pub inquiry_type: Option<InquiryType>,
}

impl ContactForm {
    /// Collects every problem rather than stopping at the first.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_identity(&self.name, &self.email, &mut errors);
        if self.inquiry_type.is_none() {
            errors.push(ValidationError::InquiryTypeRequired);
        }
        if self.message.trim().is_empty() {
            errors.push(ValidationError::MessageRequired);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn to_request(&self) -> Result<ContactRequest, Vec<ValidationError>> {
        self.validate()?;
        Ok(ContactRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: non_empty(&self.company),
            subject: non_empty(&self.subject),
            message: self.message.trim().to_string(),
            inquiry_type: self.inquiry_type.unwrap_or(InquiryType::General),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HostApplication {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub station_type: StationType,
}

impl Default for HostApplication {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            station_type: StationType::Standard,
        }
    }
}

impl HostApplication {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_identity(&self.name, &self.email, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Host applications travel as partnership inquiries.
    pub fn to_request(&self) -> Result<ContactRequest, Vec<ValidationError>> {
        self.validate()?;
        let mut message = format!("Type de borne envisagé : {}", self.station_type.label());
        if !self.address.trim().is_empty() {
            message.push_str(&format!("\nAdresse d'installation : {}", self.address.trim()));
        }
        if !self.phone.trim().is_empty() {
            message.push_str(&format!("\nTéléphone : {}", self.phone.trim()));
        }
        Ok(ContactRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: None,
            subject: Some("Devenir hôte".to_string()),
            message,
            inquiry_type: InquiryType::Partnership,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    pub inquiry_type: InquiryType,
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("could not encode contact request: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server answered with status {0}")]
    Status(u16),
}

pub async fn submit_contact_request(request: &ContactRequest) -> Result<(), ContactError> {
    let response = Request::post(&config::contact_endpoint())
        .json(request)
        .map_err(|e| ContactError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;

    if response.ok() {
        log::info!("contact request sent ({})", request.inquiry_type.value());
        Ok(())
    } else {
        Err(ContactError::Status(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Jane Doe".into(),
            email: "jane@exemple.com".into(),
            company: "  ".into(),
            subject: "Borne".into(),
            message: "Bonjour".into(),
            inquiry_type: Some(InquiryType::Support),
        }
    }

    #[test]
    fn empty_form_reports_every_error() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::NameRequired,
                ValidationError::EmailRequired,
                ValidationError::EmailInvalid,
                ValidationError::InquiryTypeRequired,
                ValidationError::MessageRequired,
            ]
        );
        assert!(join_errors(&errors).starts_with("Le nom est requis, L'email est requis"));
    }

    #[test]
    fn email_needs_an_at_sign() {
        let form = ContactForm {
            email: "jane.exemple.com".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(vec![ValidationError::EmailInvalid]));
        assert_eq!(ValidationError::EmailInvalid.field(), "email");
    }

    #[test]
    fn request_drops_blank_optionals_and_serializes_camel_case() {
        let request = filled().to_request().unwrap();
        assert_eq!(request.company, None);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["inquiryType"], "support");
        assert_eq!(json["subject"], "Borne");
        assert!(json.get("company").is_none());
    }

    #[test]
    fn inquiry_types_resolve_from_form_values() {
        for t in InquiryType::ALL {
            assert_eq!(InquiryType::from_value(t.value()), Some(t));
        }
        assert_eq!(InquiryType::from_value(""), None);
        assert_eq!(InquiryType::Press.icon(), InquiryType::Career.icon());
    }

    #[test]
    fn host_application_becomes_partnership_inquiry() {
        let app = HostApplication {
            name: "Jane".into(),
            email: "jane@exemple.com".into(),
            phone: "+33 6 00 00 00 00".into(),
            address: "1 rue de Paris".into(),
            station_type: StationType::Supercharger,
        };
        let request = app.to_request().unwrap();
        assert_eq!(request.inquiry_type, InquiryType::Partnership);
        assert!(request.message.contains("Superchargeur"));
        assert!(request.message.contains("1 rue de Paris"));

        let missing = HostApplication::default().validate().unwrap_err();
        assert!(missing.contains(&ValidationError::NameRequired));
    }
}
