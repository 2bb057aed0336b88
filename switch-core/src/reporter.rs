//! Status messages toward the host, with their per-message timeout
//! policy.

use crate::hal::{LinkError, SendTimeout, StatusLink};
use switch_proto::{
    encode_hex_report, encode_status_report, SwitchState, HEARTBEAT, MAX_HEX_REPORT_LEN,
    MAX_STATUS_REPORT_LEN,
};

/// Timeout for switch state and hex value reports, in milliseconds.
pub const REPORT_TIMEOUT_MS: u32 = 100;

/// Owns the status link and encodes outgoing messages.
pub struct StatusReporter<U> {
    link: U,
}

impl<U: StatusLink> StatusReporter<U> {
    pub fn new(link: U) -> Self {
        Self { link }
    }

    /// Send the liveness beacon.
    ///
    /// The heartbeat waits unbounded, unlike the bounded reports: if the
    /// transport stalls, the whole control loop stalls with it.
    pub async fn heartbeat(&mut self) -> Result<(), LinkError> {
        self.link.send(HEARTBEAT, SendTimeout::Unbounded).await
    }

    /// Send a `MODE:<name> VAL:<decimal>` switch state report.
    pub async fn switch_state(&mut self, state: SwitchState) -> Result<(), LinkError> {
        let mut buf = [0u8; MAX_STATUS_REPORT_LEN];
        let len = encode_status_report(&mut buf, state);
        self.link
            .send(&buf[..len], SendTimeout::Bounded(REPORT_TIMEOUT_MS))
            .await
    }

    /// Send a `VAL:<hex>` report for the button-triggered uart path.
    pub async fn hex_value(&mut self, value: u8) -> Result<(), LinkError> {
        let mut buf = [0u8; MAX_HEX_REPORT_LEN];
        let len = encode_hex_report(&mut buf, value);
        self.link
            .send(&buf[..len], SendTimeout::Bounded(REPORT_TIMEOUT_MS))
            .await
    }
}
