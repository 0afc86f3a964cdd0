//! Outbound contact-message delivery: credentials, wire shape and the
//! [`Mailer`] seam implemented by the web front end.

use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Whether contact submissions are forwarded at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DeliveryConfig {
    #[default]
    Disabled,
    Enabled(Credentials),
}

impl DeliveryConfig {
    /// Values are trimmed; a missing or blank value disables delivery.
    pub fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Self {
        match (normalize(service_id), normalize(template_id), normalize(public_key)) {
            (Some(service_id), Some(template_id), Some(public_key)) => {
                DeliveryConfig::Enabled(Credentials {
                    service_id,
                    template_id,
                    public_key,
                })
            }
            _ => DeliveryConfig::Disabled,
        }
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        match self {
            DeliveryConfig::Enabled(c) => Some(c),
            DeliveryConfig::Disabled => None,
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.credentials().is_some()
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Template variables understood by the delivery service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub to_name: String,
    pub from_email: String,
    pub to_email: String,
    pub message: String,
}

/// Full request body for the delivery REST endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    #[serde(rename = "user_id")]
    pub public_key: String,
    pub template_params: TemplateParams,
}

impl EmailRequest {
    pub fn new(credentials: &Credentials, template_params: TemplateParams) -> Self {
        Self {
            service_id: credentials.service_id.clone(),
            template_id: credentials.template_id.clone(),
            public_key: credentials.public_key.clone(),
            template_params,
        }
    }

    pub fn to_json(&self) -> Result<String, DeliveryError> {
        serde_json::to_string(self).map_err(|e| DeliveryError::Encode(e.to_string()))
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("delivery rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

pub type DeliveryResult = Result<(), DeliveryError>;

/// Completion callback for a detached send.
pub type DeliveryHook = Box<dyn FnOnce(DeliveryResult)>;

/// Fire-and-forget sender. Implementations must return without waiting for
/// the outcome and report it only through `on_complete`.
pub trait Mailer {
    fn send(&self, request: EmailRequest, on_complete: Option<DeliveryHook>);
}
