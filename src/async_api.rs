//! Async-friendly generation API backed by a dedicated worker thread.
//!
//! The worker thread owns a blocking [`Generator`] and executes requests sent
//! from async tasks, so callers can await enrichment-plus-rendering without
//! blocking their runtime. At most one enrichment call is in flight per
//! session; a failed or slow attempt still completes the request with
//! un-enriched output.

use std::sync::mpsc::{self, Sender};
use std::thread;

use tokio::sync::oneshot;

use crate::pipeline::{GenerateOutcome, Generator};
use crate::{ProviderConfig, RawInput};

enum Command {
    Generate(RawInput, oneshot::Sender<GenerateOutcome>),
    Close,
}

/// A generation session usable from async contexts.
#[derive(Clone)]
pub struct Session {
    cmd_tx: Sender<Command>,
}

impl Session {
    /// Create a new session (spawns a background thread that owns the
    /// pipeline).
    pub fn new(config: ProviderConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();

        thread::spawn(move || {
            let generator = Generator::new(config);
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    Command::Generate(input, resp) => {
                        let _ = resp.send(generator.run(input));
                    }
                    Command::Close => break,
                }
            }
        });

        Self { cmd_tx }
    }

    /// Run one generation request to completion. Always yields an outcome:
    /// enrichment failure degrades to default content rather than an error.
    pub async fn generate(&self, input: RawInput) -> Option<GenerateOutcome> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx.send(Command::Generate(input, tx)).ok()?;
        rx.await.ok()
    }

    /// Shut the worker down. Outstanding requests complete first.
    pub fn close(&self) {
        let _ = self.cmd_tx.send(Command::Close);
    }
}
