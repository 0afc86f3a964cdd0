// Host-side tests for site configuration and the delivery wire format.

use portfolio_core::{
    Credentials, DeliveryConfig, EmailRequest, SiteConfig, TemplateParams, DEFAULT_OWNER_EMAIL,
    DEFAULT_OWNER_NAME, ENV_CONTACT_EMAIL, ENV_OWNER_EMAIL, ENV_OWNER_NAME, ENV_PUBLIC_KEY,
    ENV_SERVICE_ID, ENV_TEMPLATE_ID,
};
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn all_three_credentials_enable_delivery() {
    let d = DeliveryConfig::from_parts(Some(" svc "), Some("tpl"), Some("pk\n"));
    assert_eq!(
        d,
        DeliveryConfig::Enabled(Credentials {
            service_id: "svc".to_string(),
            template_id: "tpl".to_string(),
            public_key: "pk".to_string(),
        })
    );
    assert!(d.is_enabled());
}

#[test]
fn missing_or_blank_credentials_disable_delivery() {
    assert!(!DeliveryConfig::from_parts(None, Some("tpl"), Some("pk")).is_enabled());
    assert!(!DeliveryConfig::from_parts(Some("svc"), Some("   "), Some("pk")).is_enabled());
    assert!(!DeliveryConfig::from_parts(Some("svc"), Some("tpl"), Some("")).is_enabled());
    assert_eq!(DeliveryConfig::default(), DeliveryConfig::Disabled);
    assert!(DeliveryConfig::Disabled.credentials().is_none());
}

#[test]
fn empty_environment_falls_back_to_defaults() {
    let config = SiteConfig::from_lookup(lookup(&[]));
    assert_eq!(config, SiteConfig::default());
    assert_eq!(config.recipient.name, DEFAULT_OWNER_NAME);
    assert_eq!(config.recipient.email, DEFAULT_OWNER_EMAIL);
    assert_eq!(config.contact_email, DEFAULT_OWNER_EMAIL);
}

#[test]
fn full_environment_is_read_and_trimmed() {
    let config = SiteConfig::from_lookup(lookup(&[
        (ENV_SERVICE_ID, "svc"),
        (ENV_TEMPLATE_ID, "tpl"),
        (ENV_PUBLIC_KEY, "pk"),
        (ENV_OWNER_NAME, " Jo Doe "),
        (ENV_OWNER_EMAIL, "jo@doe.dev"),
        (ENV_CONTACT_EMAIL, "hello@doe.dev"),
    ]));
    assert!(config.delivery.is_enabled());
    assert_eq!(config.recipient.name, "Jo Doe");
    assert_eq!(config.recipient.email, "jo@doe.dev");
    assert_eq!(config.contact_email, "hello@doe.dev");
}

#[test]
fn contact_email_defaults_to_owner_email() {
    let config = SiteConfig::from_lookup(lookup(&[
        (ENV_OWNER_EMAIL, "jo@doe.dev"),
        (ENV_CONTACT_EMAIL, "  "),
    ]));
    assert_eq!(config.contact_email, "jo@doe.dev");
    assert!(!config.delivery.is_enabled());
}

#[test]
fn request_json_uses_service_field_names() {
    let credentials = Credentials {
        service_id: "svc".to_string(),
        template_id: "tpl".to_string(),
        public_key: "pk".to_string(),
    };
    let request = EmailRequest::new(
        &credentials,
        TemplateParams {
            from_name: "Ana".to_string(),
            to_name: "Jo".to_string(),
            from_email: "ana@x.io".to_string(),
            to_email: "jo@doe.dev".to_string(),
            message: "Hi".to_string(),
        },
    );
    let json: serde_json::Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();
    assert_eq!(json["service_id"], "svc");
    assert_eq!(json["template_id"], "tpl");
    assert_eq!(json["user_id"], "pk");
    assert!(json.get("public_key").is_none());
    let params = &json["template_params"];
    assert_eq!(params["from_name"], "Ana");
    assert_eq!(params["to_name"], "Jo");
    assert_eq!(params["from_email"], "ana@x.io");
    assert_eq!(params["to_email"], "jo@doe.dev");
    assert_eq!(params["message"], "Hi");
}
