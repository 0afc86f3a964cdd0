// Element ids and renderer tuning for the browser front end.

// Hero
pub const CANVAS_ID: &str = "hero-canvas";

// About: copy-email widget
pub const COPY_BUTTON_ID: &str = "copy-email";
pub const COPY_ICON_ID: &str = "copy-email-icon";
pub const COPY_TEXT_ID: &str = "copy-email-text";

// Contact
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub const CONTACT_SUBMIT_LABEL_ID: &str = "contact-submit-label";
pub const ALERT_ID: &str = "alert";
pub const ALERT_TEXT_ID: &str = "alert-text";
pub const FORM_FIELD_NAMES: [&str; 3] = ["name", "email", "message"];

// Renderer
pub const CLEAR_COLOR: [f64; 3] = [0.01, 0.01, 0.03];
// Upper bound on draw calls per frame (one uniform slot each)
pub const MAX_DRAWS: usize = 16;
// Largest frame step fed to the hero animation (seconds)
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Delivery endpoint
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
