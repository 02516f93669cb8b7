//! Contact form: the draft/status state machine and the collaborators that
//! carry a message out of the browser.

pub mod delivery;
pub mod workflow;

use std::rc::Rc;

use log::info;

use crate::config;
use delivery::{Delivery, EmailJsDelivery, SimulatedDelivery};

/// Real EmailJS delivery when the build carries credentials, otherwise a
/// simulated send that always succeeds.
pub fn delivery_from_config() -> Rc<dyn Delivery> {
    match config::emailjs_credentials() {
        Some(credentials) => {
            info!("Contact form delivering through EmailJS");
            Rc::new(EmailJsDelivery::new(credentials))
        }
        None => {
            info!("No EmailJS credentials configured, contact form runs in simulated mode");
            Rc::new(SimulatedDelivery::new(config::SIMULATED_DELIVERY_MS))
        }
    }
}
