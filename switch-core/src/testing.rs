//! Shared mock hardware and a minimal blocking executor for host tests.

extern crate std;

use crate::hal::{
    DelayUs, DigitalInput, DigitalOutput, LinkError, SendTimeout, StatusLink, TickSource,
};
use core::cell::{Cell, RefCell};
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

/// Run a future to completion (simple blocking executor).
///
/// The mocks never return `Pending`, so a no-op waker is enough.
pub fn block_on<F: Future>(mut f: F) -> F::Output {
    fn noop_raw_waker() -> RawWaker {
        fn noop(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            noop_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);
        RawWaker::new(core::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(noop_raw_waker()) };
    let mut cx = Context::from_waker(&waker);

    // SAFETY: We don't move f after pinning
    let mut f = unsafe { Pin::new_unchecked(&mut f) };

    loop {
        match f.as_mut().poll(&mut cx) {
            Poll::Ready(result) => return result,
            Poll::Pending => {
                panic!("Mock future returned Pending unexpectedly");
            }
        }
    }
}

/// Delay that completes immediately.
pub struct InstantDelay;

impl DelayUs for InstantDelay {
    fn delay_us(&mut self, _us: u32) -> impl Future<Output = ()> {
        core::future::ready(())
    }
}

/// Input pin stuck at one level.
pub struct FixedPin(pub bool);

impl DigitalInput for FixedPin {
    fn is_high(&mut self) -> bool {
        self.0
    }
}

/// Input pin that replays a scripted level sequence, then settles at an
/// idle level once the script runs out.
///
/// `new` also returns a handle to the script so tests can queue further
/// levels after the pin has been moved into the component under test.
pub struct ScriptedPin {
    script: Rc<RefCell<VecDeque<bool>>>,
    idle: bool,
}

impl ScriptedPin {
    pub fn new(idle: bool) -> (Self, Rc<RefCell<VecDeque<bool>>>) {
        let script = Rc::new(RefCell::new(VecDeque::new()));
        (
            Self {
                script: script.clone(),
                idle,
            },
            script,
        )
    }
}

impl DigitalInput for ScriptedPin {
    fn is_high(&mut self) -> bool {
        self.script.borrow_mut().pop_front().unwrap_or(self.idle)
    }
}

/// Which of the two bit-bang lines an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Clock,
    Data,
}

/// Output pin that appends every level change to a shared event log,
/// tagged with its line, preserving cross-pin ordering.
pub struct RecordingPin {
    line: Line,
    log: Rc<RefCell<Vec<(Line, bool)>>>,
}

impl RecordingPin {
    /// Create a clock/data pin pair sharing one event log.
    pub fn pair() -> (Self, Self, Rc<RefCell<Vec<(Line, bool)>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                line: Line::Clock,
                log: log.clone(),
            },
            Self {
                line: Line::Data,
                log: log.clone(),
            },
            log,
        )
    }
}

impl DigitalOutput for RecordingPin {
    fn set_level(&mut self, high: bool) {
        self.log.borrow_mut().push((self.line, high));
    }
}

/// Status link that records every transmit together with its timeout.
pub struct MockLink {
    sent: Rc<RefCell<Vec<(Vec<u8>, SendTimeout)>>>,
    pub fail_with: Option<LinkError>,
}

impl MockLink {
    pub fn new() -> (Self, Rc<RefCell<Vec<(Vec<u8>, SendTimeout)>>>) {
        let sent = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                sent: sent.clone(),
                fail_with: None,
            },
            sent,
        )
    }
}

impl StatusLink for MockLink {
    fn send(
        &mut self,
        bytes: &[u8],
        timeout: SendTimeout,
    ) -> impl Future<Output = Result<(), LinkError>> {
        self.sent.borrow_mut().push((bytes.to_vec(), timeout));
        core::future::ready(match self.fail_with {
            Some(e) => Err(e),
            None => Ok(()),
        })
    }
}

/// Manually advanced tick counter.
#[derive(Clone)]
pub struct MockTicks(Rc<Cell<u32>>);

impl MockTicks {
    pub fn new(start: u32) -> Self {
        Self(Rc::new(Cell::new(start)))
    }

    pub fn set(&self, ms: u32) {
        self.0.set(ms);
    }
}

impl TickSource for MockTicks {
    fn now_ms(&self) -> u32 {
        self.0.get()
    }
}
