use std::rc::Rc;

use log::{debug, error};
use thiserror::Error;
use yew::prelude::*;

use super::delivery::{Delivery, DeliveryError, OutboundMessage};
use crate::components::toast::Notice;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

/// What the visitor has typed so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("a message is already being sent")]
    Busy,
    #[error("required fields are empty: {0:?}")]
    MissingFields(Vec<Field>),
}

/// How a delivery attempt ended.
#[derive(Debug)]
pub enum Outcome {
    Delivered,
    Failed(DeliveryError),
}

impl Outcome {
    pub fn notice(&self) -> Notice {
        match self {
            Outcome::Delivered => Notice::success(
                "Message Sent!",
                "We'll get back to you as soon as possible.",
            ),
            Outcome::Failed(_) => Notice::error(
                "Error",
                "There was an error sending your message. Please try again later.",
            ),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: FormDraft,
    pub status: SubmissionStatus,
}

pub enum ContactAction {
    Edit(Field, String),
    Begin,
    Settle(Outcome),
}

impl ContactForm {
    pub fn can_submit(&self) -> bool {
        self.status == SubmissionStatus::Idle && self.draft.is_complete()
    }

    /// Checks that a submission may start and builds the message for it.
    pub fn prepare(&self, destination: &str) -> Result<OutboundMessage, SubmitRejected> {
        if self.status != SubmissionStatus::Idle {
            return Err(SubmitRejected::Busy);
        }
        let missing = self.draft.missing();
        if !missing.is_empty() {
            return Err(SubmitRejected::MissingFields(missing));
        }
        Ok(OutboundMessage {
            sender_name: self.draft.name.clone(),
            sender_email: self.draft.email.clone(),
            message_body: self.draft.message.clone(),
            destination_address: destination.to_string(),
        })
    }
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => form.draft.set(field, value),
            ContactAction::Begin => form.status = SubmissionStatus::Submitting,
            ContactAction::Settle(outcome) => {
                match outcome {
                    Outcome::Delivered => form.draft = FormDraft::default(),
                    // The visitor keeps what they typed.
                    Outcome::Failed(e) => debug!("Keeping contact draft after failed send: {}", e),
                }
                form.status = SubmissionStatus::Idle;
            }
        }
        form.into()
    }
}

/// Hands the message to the delivery collaborator. Failures are logged and
/// folded into the outcome so nothing escapes the form.
pub async fn send<D: Delivery + ?Sized>(delivery: &D, message: &OutboundMessage) -> Outcome {
    match delivery.deliver(message).await {
        Ok(()) => Outcome::Delivered,
        Err(e) => {
            error!("Error sending contact message: {}", e);
            Outcome::Failed(e)
        }
    }
}

/// Turns a finished delivery into the notice to raise and the action that
/// settles the form. Nothing comes back once the form has been unmounted.
pub fn conclude(outcome: Outcome, mounted: bool) -> Option<(Notice, ContactAction)> {
    if !mounted {
        debug!("Contact form unmounted before delivery finished, discarding result");
        return None;
    }
    let notice = outcome.notice();
    Some((notice, ContactAction::Settle(outcome)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::toast::Severity;
    use crate::contact::delivery::MockDelivery;
    use pretty_assertions::assert_eq;
    use tokio_test::block_on;

    /// Same steps the contact page runs on submit.
    async fn submit(
        form: Rc<ContactForm>,
        delivery: &MockDelivery,
        destination: &str,
    ) -> Result<(Rc<ContactForm>, Notice), SubmitRejected> {
        let message = form.prepare(destination)?;
        let form = form.reduce(ContactAction::Begin);
        assert_eq!(form.status, SubmissionStatus::Submitting);
        let outcome = send(delivery, &message).await;
        let (notice, settle) = conclude(outcome, true).expect("form is still mounted");
        Ok((form.reduce(settle), notice))
    }

    fn jane() -> Rc<ContactForm> {
        Rc::new(ContactForm {
            draft: FormDraft {
                name: "Jane".into(),
                email: "jane@x.com".into(),
                message: "Hi".into(),
            },
            status: SubmissionStatus::Idle,
        })
    }

    #[test]
    fn edits_touch_only_their_field() {
        let form = Rc::new(ContactForm::default());
        let form = form.reduce(ContactAction::Edit(Field::Email, "a@b.c".into()));
        assert_eq!(
            form.draft,
            FormDraft {
                name: String::new(),
                email: "a@b.c".into(),
                message: String::new(),
            }
        );

        let form = form.reduce(ContactAction::Edit(Field::Message, "hello".into()));
        assert_eq!(form.draft.email, "a@b.c");
        assert_eq!(form.draft.name, "");
        assert_eq!(form.draft.message, "hello");
    }

    #[test]
    fn successful_delivery_clears_the_draft() {
        let mut delivery = MockDelivery::new();
        delivery
            .expect_deliver()
            .withf(|m| {
                m.sender_name == "Jane"
                    && m.sender_email == "jane@x.com"
                    && m.message_body == "Hi"
                    && m.destination_address == "info@dinstack.com.ng"
            })
            .times(1)
            .returning(|_| Ok(()));

        let (form, notice) = block_on(submit(jane(), &delivery, "info@dinstack.com.ng")).unwrap();

        assert_eq!(notice.severity, Severity::Success);
        assert_eq!(notice.title, "Message Sent!");
        assert_eq!(form.draft, FormDraft::default());
        assert_eq!(form.status, SubmissionStatus::Idle);
    }

    #[test]
    fn failed_delivery_keeps_the_draft() {
        let mut delivery = MockDelivery::new();
        delivery
            .expect_deliver()
            .times(1)
            .returning(|_| Err(DeliveryError::Request("offline".into())));

        let (form, notice) = block_on(submit(jane(), &delivery, "info@dinstack.com.ng")).unwrap();

        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(form.draft, jane().draft);
        assert_eq!(form.status, SubmissionStatus::Idle);
    }

    #[test]
    fn rejected_response_also_returns_to_idle() {
        let mut delivery = MockDelivery::new();
        delivery.expect_deliver().returning(|_| {
            Err(DeliveryError::Rejected {
                status: 500,
                body: String::new(),
            })
        });

        let (form, _) = block_on(submit(jane(), &delivery, "x@y.z")).unwrap();
        assert_eq!(form.status, SubmissionStatus::Idle);
    }

    #[test]
    fn empty_fields_never_reach_delivery() {
        let mut delivery = MockDelivery::new();
        delivery.expect_deliver().never();

        for field in Field::ALL {
            let form = jane().reduce(ContactAction::Edit(field, "   ".into()));
            let result = block_on(submit(form, &delivery, "x@y.z"));
            assert_eq!(result.unwrap_err(), SubmitRejected::MissingFields(vec![field]));
        }
    }

    #[test]
    fn cannot_submit_while_submitting() {
        let mut delivery = MockDelivery::new();
        delivery.expect_deliver().never();

        let busy = jane().reduce(ContactAction::Begin);
        assert!(!busy.can_submit());
        let result = block_on(submit(busy, &delivery, "x@y.z"));
        assert_eq!(result.unwrap_err(), SubmitRejected::Busy);
    }

    #[test]
    fn settle_always_lands_idle() {
        let delivered = jane()
            .reduce(ContactAction::Begin)
            .reduce(ContactAction::Settle(Outcome::Delivered));
        let failed = jane()
            .reduce(ContactAction::Begin)
            .reduce(ContactAction::Settle(Outcome::Failed(DeliveryError::Request("x".into()))));
        assert_eq!(delivered.status, SubmissionStatus::Idle);
        assert_eq!(failed.status, SubmissionStatus::Idle);
        assert!(failed.can_submit());
    }

    #[test]
    fn unmounted_form_discards_the_result() {
        let mut delivery = MockDelivery::new();
        delivery.expect_deliver().times(1).returning(|_| Ok(()));

        let form = jane();
        let message = form.prepare("x@y.z").unwrap();
        let busy = form.reduce(ContactAction::Begin);
        let outcome = block_on(send(&delivery, &message));

        assert!(conclude(outcome, false).is_none());
        assert_eq!(busy.status, SubmissionStatus::Submitting);
        assert_eq!(busy.draft, jane().draft);
    }

    #[test]
    fn mounted_form_gets_notice_and_settle() {
        let failed = Outcome::Failed(DeliveryError::Request("offline".into()));
        let (notice, action) = conclude(failed, true).unwrap();

        assert_eq!(notice.severity, Severity::Error);
        assert!(matches!(action, ContactAction::Settle(Outcome::Failed(_))));
    }
}
