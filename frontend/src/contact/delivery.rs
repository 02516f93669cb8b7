use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
#[cfg(test)]
use mockall::automock;
use serde::Serialize;
use thiserror::Error;

use crate::config::{self, EmailJsCredentials};

/// A contact message ready to leave the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundMessage {
    pub sender_name: String,
    pub sender_email: String,
    pub message_body: String,
    pub destination_address: String,
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("could not send request: {0}")]
    Request(String),
    #[error("delivery rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

impl From<gloo_net::Error> for DeliveryError {
    fn from(e: gloo_net::Error) -> Self {
        DeliveryError::Request(e.to_string())
    }
}

/// Whatever actually transmits the message.
#[cfg_attr(test, automock)]
#[async_trait(?Send)]
pub trait Delivery {
    async fn deliver(&self, message: &OutboundMessage) -> Result<(), DeliveryError>;
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
    to_email: &'a str,
}

#[derive(Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// Sends through the EmailJS REST API.
pub struct EmailJsDelivery {
    endpoint: String,
    credentials: EmailJsCredentials,
}

impl EmailJsDelivery {
    pub fn new(credentials: EmailJsCredentials) -> Self {
        Self {
            endpoint: config::EMAILJS_ENDPOINT.to_string(),
            credentials,
        }
    }

    fn payload<'a>(&'a self, message: &'a OutboundMessage) -> EmailJsRequest<'a> {
        EmailJsRequest {
            service_id: &self.credentials.service_id,
            template_id: &self.credentials.template_id,
            user_id: &self.credentials.public_key,
            template_params: TemplateParams {
                from_name: &message.sender_name,
                from_email: &message.sender_email,
                message: &message.message_body,
                to_email: &message.destination_address,
            },
        }
    }
}

#[async_trait(?Send)]
impl Delivery for EmailJsDelivery {
    async fn deliver(&self, message: &OutboundMessage) -> Result<(), DeliveryError> {
        debug!("Posting contact message to {}", self.endpoint);
        let response = Request::post(&self.endpoint)
            .json(&self.payload(message))?
            .send()
            .await?;

        if response.ok() {
            return Ok(());
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(DeliveryError::Rejected { status, body })
    }
}

/// Pretends to send: waits a moment, then always succeeds.
pub struct SimulatedDelivery {
    delay_ms: u32,
}

impl SimulatedDelivery {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

#[async_trait(?Send)]
impl Delivery for SimulatedDelivery {
    async fn deliver(&self, message: &OutboundMessage) -> Result<(), DeliveryError> {
        TimeoutFuture::new(self.delay_ms).await;
        info!(
            "Simulated delivery of message from {} to {}",
            message.sender_email, message.destination_address
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn emailjs_payload_shape() {
        let delivery = EmailJsDelivery::new(EmailJsCredentials {
            service_id: "service_x".into(),
            template_id: "template_y".into(),
            public_key: "pk_z".into(),
        });
        let message = OutboundMessage {
            sender_name: "Jane".into(),
            sender_email: "jane@x.com".into(),
            message_body: "Hi".into(),
            destination_address: "info@dinstack.com.ng".into(),
        };

        let value = serde_json::to_value(delivery.payload(&message)).unwrap();
        assert_eq!(
            value,
            json!({
                "service_id": "service_x",
                "template_id": "template_y",
                "user_id": "pk_z",
                "template_params": {
                    "from_name": "Jane",
                    "from_email": "jane@x.com",
                    "message": "Hi",
                    "to_email": "info@dinstack.com.ng",
                }
            })
        );
    }

    #[test]
    fn rejected_error_mentions_status() {
        let err = DeliveryError::Rejected {
            status: 412,
            body: "template not found".into(),
        };
        assert_eq!(err.to_string(), "delivery rejected with status 412: template not found");
    }
}
