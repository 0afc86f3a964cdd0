// Host-side tests for the contact form controller and its mailer seam.

use portfolio_core::{
    AlertKind, ContactForm, Credentials, DeliveryConfig, DeliveryError, DeliveryHook,
    DeliveryResult, EmailRequest, Field, Mailer, Phase, Recipient, SubmitOutcome,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Records requests and answers every send with a fixed result.
#[derive(Clone)]
struct StubMailer {
    sent: Rc<RefCell<Vec<EmailRequest>>>,
    answer: DeliveryResult,
}

impl StubMailer {
    fn failing() -> Self {
        Self {
            sent: Rc::default(),
            answer: Err(DeliveryError::Transport("network down".to_string())),
        }
    }

    fn ok() -> Self {
        Self {
            sent: Rc::default(),
            answer: Ok(()),
        }
    }
}

impl Mailer for StubMailer {
    fn send(&self, request: EmailRequest, on_complete: Option<DeliveryHook>) {
        self.sent.borrow_mut().push(request);
        if let Some(hook) = on_complete {
            hook(self.answer.clone());
        }
    }
}

fn enabled() -> DeliveryConfig {
    DeliveryConfig::Enabled(Credentials {
        service_id: "svc".to_string(),
        template_id: "tpl".to_string(),
        public_key: "pk".to_string(),
    })
}

fn fill(form: &mut ContactForm<StubMailer>) {
    form.set_field(Field::Name, "Ana");
    form.set_field(Field::Email, "ana@x.io");
    form.set_field(Field::Message, "Hi");
}

#[test]
fn field_names_map_to_fields() {
    assert_eq!(Field::from_name("name"), Some(Field::Name));
    assert_eq!(Field::from_name("email"), Some(Field::Email));
    assert_eq!(Field::from_name("message"), Some(Field::Message));
    assert_eq!(Field::from_name("phone"), None);
}

#[test]
fn set_field_replaces_only_that_field() {
    let mut form = ContactForm::new(StubMailer::ok(), enabled(), Recipient::default());
    fill(&mut form);
    form.set_field(Field::Email, "ana@y.io");
    assert_eq!(form.draft().name, "Ana");
    assert_eq!(form.draft().email, "ana@y.io");
    assert_eq!(form.draft().message, "Hi");
}

#[test]
fn failed_delivery_still_shows_success_and_resets_after_three_seconds() {
    let mailer = StubMailer::failing();
    let sent = mailer.sent.clone();
    let mut form = ContactForm::new(mailer, enabled(), Recipient::default());
    let seen: Rc<RefCell<Vec<DeliveryResult>>> = Rc::default();
    let seen_hook = seen.clone();
    form.set_delivery_observer(Rc::new(move |r: &DeliveryResult| {
        seen_hook.borrow_mut().push(r.clone())
    }));
    fill(&mut form);

    assert_eq!(form.submit(), SubmitOutcome::Recorded { dispatched: true });
    assert!(form.notification().show);
    assert_eq!(form.notification().kind, AlertKind::Success);
    assert_eq!(form.notification().text, "Your message is recorded ✅");
    assert!(form.is_submitting());
    assert_eq!(form.submit_label(), "Recording...");

    // the failure is observed but never surfaces in the UI
    assert_eq!(seen.borrow().len(), 1);
    assert!(seen.borrow()[0].is_err());
    assert_eq!(form.notification().kind, AlertKind::Success);

    let req = &sent.borrow()[0];
    assert_eq!(req.template_params.from_name, "Ana");
    assert_eq!(req.template_params.from_email, "ana@x.io");
    assert_eq!(req.template_params.message, "Hi");
    assert_eq!(req.template_params.to_email, Recipient::default().email);

    assert!(!form.tick(Duration::from_millis(2999)));
    assert!(form.notification().show);
    assert!(form.tick(Duration::from_millis(1)));
    assert!(!form.notification().show);
    assert!(form.draft().is_empty());
    assert_eq!(form.phase(), Phase::Idle);
    assert_eq!(form.submit_label(), "Send Message");
}

#[test]
fn successful_delivery_resets_on_the_same_schedule() {
    let mut form = ContactForm::new(StubMailer::ok(), enabled(), Recipient::default());
    fill(&mut form);
    form.submit();
    for _ in 0..180 {
        form.tick(Duration::from_millis(16));
    }
    // 2880ms elapsed
    assert!(form.notification().show);
    let mut reset = false;
    for _ in 0..10 {
        reset |= form.tick(Duration::from_millis(16));
    }
    assert!(reset);
    assert!(form.draft().is_empty());
}

#[test]
fn disabled_delivery_records_without_sending() {
    let mailer = StubMailer::ok();
    let sent = mailer.sent.clone();
    let mut form = ContactForm::new(mailer, DeliveryConfig::Disabled, Recipient::default());
    fill(&mut form);
    assert_eq!(form.submit(), SubmitOutcome::Recorded { dispatched: false });
    assert!(sent.borrow().is_empty());
    assert!(form.notification().show);
    assert!(form.tick(Duration::from_secs(3)));
    assert!(form.draft().is_empty());
}

#[test]
fn empty_draft_is_still_accepted() {
    let mailer = StubMailer::ok();
    let sent = mailer.sent.clone();
    let mut form = ContactForm::new(mailer, enabled(), Recipient::default());
    assert!(matches!(form.submit(), SubmitOutcome::Recorded { .. }));
    assert_eq!(sent.borrow()[0].template_params.message, "");
}

#[test]
fn second_submit_while_pending_is_ignored() {
    let mailer = StubMailer::ok();
    let sent = mailer.sent.clone();
    let mut form = ContactForm::new(mailer, enabled(), Recipient::default());
    fill(&mut form);
    form.submit();
    form.tick(Duration::from_millis(1500));
    assert_eq!(form.submit(), SubmitOutcome::Ignored);
    assert_eq!(sent.borrow().len(), 1);
    // the first window is not extended
    assert!(form.tick(Duration::from_millis(1500)));
    fill(&mut form);
    assert_eq!(form.submit(), SubmitOutcome::Recorded { dispatched: true });
    assert_eq!(sent.borrow().len(), 2);
}

#[test]
fn recipient_fills_the_to_fields() {
    let mailer = StubMailer::ok();
    let sent = mailer.sent.clone();
    let recipient = Recipient {
        name: "Site Owner".to_string(),
        email: "owner@site.dev".to_string(),
    };
    let mut form = ContactForm::new(mailer, enabled(), recipient);
    fill(&mut form);
    form.submit();
    let req = &sent.borrow()[0];
    assert_eq!(req.template_params.to_name, "Site Owner");
    assert_eq!(req.template_params.to_email, "owner@site.dev");
    assert_eq!(req.service_id, "svc");
    assert_eq!(req.template_id, "tpl");
    assert_eq!(req.public_key, "pk");
}
