//! Contact form controller.
//!
//! Submitting always looks successful: the notification is shown before the
//! send is even started, the send is detached, and the form resets on a fixed
//! timer whatever the delivery outcome turns out to be.

use crate::config::Recipient;
use crate::constants::*;
use crate::delivery::{DeliveryConfig, DeliveryResult, EmailRequest, Mailer, TemplateParams};
use crate::timer::Countdown;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Map a form control's `name` attribute.
    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "message" => Some(Field::Message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Draft {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

impl AlertKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub show: bool,
    pub text: String,
    pub kind: AlertKind,
}

impl Notification {
    pub fn hidden() -> Self {
        Self {
            show: false,
            text: String::new(),
            kind: AlertKind::Success,
        }
    }

    pub fn success(text: &str) -> Self {
        Self {
            show: true,
            text: text.to_string(),
            kind: AlertKind::Success,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A previous submission is still within its reset window.
    Ignored,
    /// Notification shown; `dispatched` tells whether a send was started.
    Recorded { dispatched: bool },
}

/// Observer for delivery outcomes. The UI never sees them.
pub type DeliveryObserver = Rc<dyn Fn(&DeliveryResult)>;

pub struct ContactForm<M: Mailer> {
    mailer: M,
    delivery: DeliveryConfig,
    recipient: Recipient,
    draft: Draft,
    notification: Notification,
    phase: Phase,
    reset: Countdown,
    observer: Option<DeliveryObserver>,
}

impl<M: Mailer> ContactForm<M> {
    pub fn new(mailer: M, delivery: DeliveryConfig, recipient: Recipient) -> Self {
        Self {
            mailer,
            delivery,
            recipient,
            draft: Draft::default(),
            notification: Notification::hidden(),
            phase: Phase::Idle,
            reset: Countdown::new(),
            observer: None,
        }
    }

    pub fn set_delivery_observer(&mut self, observer: DeliveryObserver) {
        self.observer = Some(observer);
    }

    pub fn set_field(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Name => &mut self.draft.name,
            Field::Email => &mut self.draft.email,
            Field::Message => &mut self.draft.message,
        };
        slot.clear();
        slot.push_str(value);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.phase == Phase::Submitting {
            log::debug!("[contact] submit ignored while a submission is pending");
            return SubmitOutcome::Ignored;
        }
        self.phase = Phase::Submitting;
        self.notification = Notification::success(SUCCESS_TEXT);

        let dispatched = match self.delivery.credentials() {
            Some(credentials) => {
                let request = EmailRequest::new(credentials, self.template_params());
                let observer = self.observer.clone();
                self.mailer.send(
                    request,
                    Some(Box::new(move |result: DeliveryResult| {
                        match &result {
                            Ok(()) => log::info!("[contact] message delivered"),
                            Err(e) => log::warn!("[contact] delivery failed: {}", e),
                        }
                        if let Some(observer) = observer {
                            observer(&result);
                        }
                    })),
                );
                true
            }
            None => {
                log::debug!("[contact] delivery disabled; message recorded locally only");
                false
            }
        };

        self.reset.start(Duration::from_millis(CONTACT_RESET_MS));
        SubmitOutcome::Recorded { dispatched }
    }

    /// Advance the reset timer. Returns `true` when the form was reset.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.reset.tick(dt) {
            return false;
        }
        self.notification = Notification::hidden();
        self.draft = Draft::default();
        self.phase = Phase::Idle;
        true
    }

    fn template_params(&self) -> TemplateParams {
        TemplateParams {
            from_name: self.draft.name.clone(),
            to_name: self.recipient.name.clone(),
            from_email: self.draft.email.clone(),
            to_email: self.recipient.email.clone(),
            message: self.draft.message.clone(),
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMIT_LABEL_BUSY
        } else {
            SUBMIT_LABEL_IDLE
        }
    }

    pub fn mailer(&self) -> &M {
        &self.mailer
    }
}
