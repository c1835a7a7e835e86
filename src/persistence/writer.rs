//! Background persistence: a store observer feeding a writer thread.
//!
//! The adapter encodes the post-change state on the caller's thread and queues the
//! payload. The writer thread keeps only the newest queued payload and writes it
//! atomically. Failures are logged and counted, never reported back to the store.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::file_store::FileStorage;
use super::persisted::encode_state;
use crate::store::{StoreEvent, StoreObserver, StoreState};

enum WriterMessage {
    Write(String),
    Flush(Sender<()>),
    Shutdown,
}

/// Counters reported by the writer thread
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterStats {
    pub writes: u64,
    pub failures: u64,
}

#[derive(Default)]
struct Counters {
    writes: AtomicU64,
    failures: AtomicU64,
}

impl Counters {
    fn snapshot(&self) -> WriterStats {
        WriterStats {
            writes: self.writes.load(Ordering::SeqCst),
            failures: self.failures.load(Ordering::SeqCst),
        }
    }
}

/// Store observer that forwards every change to the writer thread
pub struct PersistenceAdapter {
    sender: Sender<WriterMessage>,
}

impl StoreObserver for PersistenceAdapter {
    fn on_change(&mut self, event: &StoreEvent, state: &StoreState) {
        match encode_state(state) {
            Ok(payload) => {
                if self.sender.send(WriterMessage::Write(payload)).is_err() {
                    debug!(?event, "persistence writer stopped, dropping update");
                }
            }
            Err(e) => warn!(?event, "Failed to encode cache state: {}", e),
        }
    }
}

/// Handle to the writer thread
pub struct PersistenceWriter {
    sender: Sender<WriterMessage>,
    counters: Arc<Counters>,
    handle: Option<JoinHandle<()>>,
}

/// Start a writer thread for `storage` and return the observer that feeds it
pub fn spawn_writer(storage: FileStorage) -> Result<(PersistenceAdapter, PersistenceWriter)> {
    let (sender, receiver) = mpsc::channel();
    let counters = Arc::new(Counters::default());
    let thread_counters = Arc::clone(&counters);

    let handle = thread::Builder::new()
        .name("content-cache-writer".to_string())
        .spawn(move || run_writer(storage, receiver, thread_counters))
        .context("Failed to spawn persistence writer thread")?;

    let adapter = PersistenceAdapter { sender: sender.clone() };
    let writer = PersistenceWriter { sender, counters, handle: Some(handle) };
    Ok((adapter, writer))
}

impl PersistenceWriter {
    /// Block until everything queued so far has been written
    pub fn flush(&self) {
        let (ack_sender, ack_receiver) = mpsc::channel();
        if self.sender.send(WriterMessage::Flush(ack_sender)).is_err()
            || ack_receiver.recv().is_err()
        {
            warn!("Persistence writer is not running; flush skipped");
        }
    }

    /// Write pending updates, stop the thread and report final counters
    pub fn finish(mut self) -> WriterStats {
        self.shutdown();
        self.counters.snapshot()
    }

    fn shutdown(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        let _ = self.sender.send(WriterMessage::Shutdown);
        if handle.join().is_err() {
            warn!("Persistence writer thread panicked");
        }
    }
}

impl Drop for PersistenceWriter {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[derive(Default)]
struct Batch {
    latest: Option<String>,
    acks: Vec<Sender<()>>,
    shutdown: bool,
}

impl Batch {
    fn absorb(&mut self, message: WriterMessage) {
        match message {
            WriterMessage::Write(payload) => self.latest = Some(payload),
            WriterMessage::Flush(ack) => self.acks.push(ack),
            WriterMessage::Shutdown => self.shutdown = true,
        }
    }
}

fn run_writer(storage: FileStorage, receiver: Receiver<WriterMessage>, counters: Arc<Counters>) {
    while let Ok(first) = receiver.recv() {
        let mut batch = Batch::default();
        batch.absorb(first);
        while let Ok(message) = receiver.try_recv() {
            batch.absorb(message);
        }

        if let Some(payload) = batch.latest {
            match storage.write_raw(&payload) {
                Ok(()) => {
                    counters.writes.fetch_add(1, Ordering::SeqCst);
                }
                Err(e) => {
                    counters.failures.fetch_add(1, Ordering::SeqCst);
                    warn!("Failed to persist content cache: {}", e);
                }
            }
        }

        for ack in batch.acks {
            let _ = ack.send(());
        }

        if batch.shutdown {
            break;
        }
    }
}
