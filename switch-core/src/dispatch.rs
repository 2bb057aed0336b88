//! Routes a sampled switch value to the matching transmit path.

use crate::encoder::BitBangTx;
use crate::hal::{DelayUs, DigitalOutput, LinkError, StatusLink};
use crate::reporter::StatusReporter;
use switch_proto::{Mode, SwitchState};

/// Transmit `state.value` on the path selected by `state.mode`.
///
/// `Serial` and `Parallel` both drive the bit-bang link with identical
/// timing and bit order - the two settings are indistinguishable on the
/// wire. `Uart` sends the hex value report instead. `Unknown` transmits
/// nothing (the periodic reporter still names it `unknown`).
pub async fn dispatch<O, D, U>(
    state: SwitchState,
    tx: &mut BitBangTx<O, D>,
    reporter: &mut StatusReporter<U>,
) -> Result<(), LinkError>
where
    O: DigitalOutput,
    D: DelayUs,
    U: StatusLink,
{
    match state.mode {
        Mode::Serial | Mode::Parallel => {
            tx.send_frame(state.value).await;
            Ok(())
        }
        Mode::Uart => reporter.hex_value(state.value).await,
        Mode::Unknown => Ok(()),
    }
}
