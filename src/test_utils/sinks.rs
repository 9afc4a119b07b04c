use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::mpsc;
use std::sync::Arc;

use bytes::Bytes;
use parking_lot::Mutex;

use crate::sink::DataSink;

/// Records every accepted payload, standing in for a real transport sink.
#[derive(Default)]
pub struct SpySink {
    accepted: Mutex<Vec<Bytes>>,
}

impl SpySink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn call_count(&self) -> usize {
        self.accepted.lock().len()
    }

    pub fn accepted(&self) -> Vec<Bytes> {
        self.accepted.lock().clone()
    }

    pub fn received(
        &self,
        bytes: &Bytes,
    ) -> bool {
        self.accepted.lock().iter().any(|b| b == bytes)
    }
}

impl DataSink for SpySink {
    fn accept(
        &self,
        data: Bytes,
    ) {
        self.accepted.lock().push(data);
    }
}

/// Panics on every delivery, for fault-isolation tests.
pub struct PanicSink;

impl DataSink for PanicSink {
    fn accept(
        &self,
        _data: Bytes,
    ) {
        panic!("sink failure injected by test");
    }
}

/// Blocks inside `accept` until released, for pinning the
/// deregistration-waits-for-in-flight-dispatch semantic. Signals entry on
/// one channel and parks on another.
pub struct GateSink {
    calls: AtomicUsize,
    entered_tx: Mutex<mpsc::Sender<()>>,
    release_rx: Mutex<mpsc::Receiver<()>>,
}

impl GateSink {
    /// Returns the sink, a receiver that observes each `accept` entry,
    /// and a sender that releases a parked `accept`.
    pub fn new() -> (Arc<Self>, mpsc::Receiver<()>, mpsc::Sender<()>) {
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();

        (
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                entered_tx: Mutex::new(entered_tx),
                release_rx: Mutex::new(release_rx),
            }),
            entered_rx,
            release_tx,
        )
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DataSink for GateSink {
    fn accept(
        &self,
        _data: Bytes,
    ) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let _ = self.entered_tx.lock().send(());
        let _ = self.release_rx.lock().recv();
    }
}
