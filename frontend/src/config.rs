use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Inbox every contact message is addressed to.
pub const DESTINATION_ADDRESS: &str = "info@dinstack.com.ng";

pub const ROTATION_PERIOD_MS: u32 = 10_000;
pub const CROSSFADE_MS: u32 = 1_000;
pub const SIMULATED_DELIVERY_MS: u32 = 2_000;
pub const TOAST_LIFETIME_MS: u32 = 5_000;

pub const REVEAL_THRESHOLD: f64 = 0.1;

/// EmailJS account identifiers, baked in at build time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailJsCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailJsCredentials {
    /// Returns `None` unless all three identifiers are present and non-empty,
    /// in which case the contact form falls back to simulated delivery.
    pub fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Option<Self> {
        let nonempty = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(String::from);
        Some(Self {
            service_id: nonempty(service_id)?,
            template_id: nonempty(template_id)?,
            public_key: nonempty(public_key)?,
        })
    }
}

pub fn emailjs_credentials() -> Option<EmailJsCredentials> {
    EmailJsCredentials::from_parts(
        option_env!("EMAILJS_SERVICE_ID"),
        option_env!("EMAILJS_TEMPLATE_ID"),
        option_env!("EMAILJS_PUBLIC_KEY"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_require_every_part() {
        assert!(EmailJsCredentials::from_parts(Some("svc"), Some("tpl"), None).is_none());
        assert!(EmailJsCredentials::from_parts(Some("svc"), Some("  "), Some("key")).is_none());

        let creds = EmailJsCredentials::from_parts(Some("svc"), Some("tpl"), Some("key")).unwrap();
        assert_eq!(creds.service_id, "svc");
        assert_eq!(creds.template_id, "tpl");
        assert_eq!(creds.public_key, "key");
    }
}
