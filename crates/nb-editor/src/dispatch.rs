use crate::generation::{GenerationCompletion, GenerationJob};
use nb_gen::ImageGenerator;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Runs generation jobs on the tokio runtime and funnels their completions
/// back to the thread that owns the canvas.
///
/// No queue, no cap, no cancellation: every job is spawned immediately and
/// runs to completion.
pub struct Dispatcher {
    generator: Arc<dyn ImageGenerator>,
    tx: mpsc::UnboundedSender<GenerationCompletion>,
    rx: mpsc::UnboundedReceiver<GenerationCompletion>,
}

impl Dispatcher {
    pub fn new(generator: Arc<dyn ImageGenerator>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { generator, tx, rx }
    }

    /// Spawn `job`. Must be called within a tokio runtime.
    pub fn dispatch(&self, job: GenerationJob) -> JoinHandle<()> {
        let generator = Arc::clone(&self.generator);
        let tx = self.tx.clone();
        log::debug!("dispatch {} token {}", job.node, job.token.value());
        tokio::spawn(async move {
            let completion = job.run(generator.as_ref()).await;
            if tx.send(completion).is_err() {
                log::debug!("dispatcher dropped before completion arrived");
            }
        })
    }

    /// Wait for the next completion.
    pub async fn next_completion(&mut self) -> Option<GenerationCompletion> {
        self.rx.recv().await
    }

    /// A completion that has already arrived, without waiting.
    pub fn try_completion(&mut self) -> Option<GenerationCompletion> {
        self.rx.try_recv().ok()
    }
}
