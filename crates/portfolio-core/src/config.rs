use crate::delivery::DeliveryConfig;

pub const ENV_SERVICE_ID: &str = "PORTFOLIO_EMAILJS_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "PORTFOLIO_EMAILJS_TEMPLATE_ID";
pub const ENV_PUBLIC_KEY: &str = "PORTFOLIO_EMAILJS_PUBLIC_KEY";
pub const ENV_OWNER_NAME: &str = "PORTFOLIO_OWNER_NAME";
pub const ENV_OWNER_EMAIL: &str = "PORTFOLIO_OWNER_EMAIL";
pub const ENV_CONTACT_EMAIL: &str = "PORTFOLIO_CONTACT_EMAIL";

pub const DEFAULT_OWNER_NAME: &str = "Portfolio Owner";
pub const DEFAULT_OWNER_EMAIL: &str = "owner@example.com";

/// Who receives contact-form messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recipient {
    pub name: String,
    pub email: String,
}

impl Default for Recipient {
    fn default() -> Self {
        Self {
            name: DEFAULT_OWNER_NAME.to_string(),
            email: DEFAULT_OWNER_EMAIL.to_string(),
        }
    }
}

/// Site-wide settings resolved once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub delivery: DeliveryConfig,
    pub recipient: Recipient,
    /// Address placed on the clipboard by the copy widget.
    pub contact_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            delivery: DeliveryConfig::Disabled,
            recipient: Recipient::default(),
            contact_email: DEFAULT_OWNER_EMAIL.to_string(),
        }
    }
}

impl SiteConfig {
    /// Build from a key lookup (build-time env in the browser, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let delivery = DeliveryConfig::from_parts(
            lookup(ENV_SERVICE_ID).as_deref(),
            lookup(ENV_TEMPLATE_ID).as_deref(),
            lookup(ENV_PUBLIC_KEY).as_deref(),
        );
        let recipient = Recipient {
            name: get(ENV_OWNER_NAME).unwrap_or_else(|| DEFAULT_OWNER_NAME.to_string()),
            email: get(ENV_OWNER_EMAIL).unwrap_or_else(|| DEFAULT_OWNER_EMAIL.to_string()),
        };
        let contact_email = get(ENV_CONTACT_EMAIL).unwrap_or_else(|| recipient.email.clone());
        if !delivery.is_enabled() {
            log::info!("[config] delivery credentials missing; contact sends disabled");
        }
        Self {
            delivery,
            recipient,
            contact_email,
        }
    }
}
