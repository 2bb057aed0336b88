//! The control loop: one cooperative task that owns every piece of
//! mutable state (schedule bookkeeping, last-reported-mode cache) and
//! threads it explicitly - no globals, no shared access.

use crate::button::PushButton;
use crate::dispatch::dispatch;
use crate::encoder::BitBangTx;
use crate::hal::{DelayUs, DigitalInput, DigitalOutput, StatusLink, TickSource};
use crate::reporter::StatusReporter;
use crate::schedule::ScheduleEntry;
use crate::switches::{DipSwitch, ModeSelect};
use switch_proto::{Mode, SwitchState};

/// Liveness beacon period.
pub const HEARTBEAT_INTERVAL_MS: u32 = 1000;

/// Periodic switch state report period.
pub const SWITCH_STATE_INTERVAL_MS: u32 = 2000;

/// The complete bridge: switch inputs in, two output channels toward the
/// host.
///
/// Each [`poll`](Self::poll) iteration runs the periodic tasks and the
/// button handler once; [`run`](Self::run) loops forever. Transmit
/// failures are deliberately discarded - message loss is possible and
/// invisible to the host, and the loop never retries.
pub struct SwitchSync<I, B, M, O, U, T, D> {
    dip: DipSwitch<I>,
    mode_select: M,
    button: PushButton<B, D>,
    tx: BitBangTx<O, D>,
    reporter: StatusReporter<U>,
    ticks: T,
    heartbeat: ScheduleEntry,
    switch_state: ScheduleEntry,
    last_reported_mode: Option<Mode>,
}

impl<I, B, M, O, U, T, D> SwitchSync<I, B, M, O, U, T, D>
where
    I: DigitalInput,
    B: DigitalInput,
    M: ModeSelect,
    O: DigitalOutput,
    U: StatusLink,
    T: TickSource,
    D: DelayUs,
{
    /// Assemble the loop, arming both periodic tasks at the current tick.
    pub fn new(
        dip: DipSwitch<I>,
        mode_select: M,
        button: PushButton<B, D>,
        tx: BitBangTx<O, D>,
        reporter: StatusReporter<U>,
        ticks: T,
    ) -> Self {
        let now = ticks.now_ms();
        Self {
            dip,
            mode_select,
            button,
            tx,
            reporter,
            ticks,
            heartbeat: ScheduleEntry::new(HEARTBEAT_INTERVAL_MS, now),
            switch_state: ScheduleEntry::new(SWITCH_STATE_INTERVAL_MS, now),
            last_reported_mode: None,
        }
    }

    /// Run the bridge forever.
    pub async fn run(&mut self) -> ! {
        loop {
            self.poll().await;
        }
    }

    /// One loop iteration: periodic tasks, then the button handler.
    pub async fn poll(&mut self) {
        let now = self.ticks.now_ms();

        if self.heartbeat.poll(now) {
            let _ = self.reporter.heartbeat().await;
        }

        if self.switch_state.poll(now) {
            let state = self.sample();
            // The report goes out whether or not the mode changed; the
            // cache only tracks what was last seen.
            if self.last_reported_mode != Some(state.mode) {
                let _ = self.reporter.switch_state(state).await;
                self.last_reported_mode = Some(state.mode);
            } else {
                let _ = self.reporter.switch_state(state).await;
            }
        }

        if self.button.debounced_press().await {
            let state = self.sample();
            let _ = dispatch(state, &mut self.tx, &mut self.reporter).await;
            let _ = self.reporter.switch_state(state).await;
            self.button.wait_release().await;
        }
    }

    fn sample(&mut self) -> SwitchState {
        SwitchState::new(self.mode_select.read_mode(), self.dip.read())
    }
}
