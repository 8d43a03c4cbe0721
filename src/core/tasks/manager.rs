use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::core::source::DeckSource;

/// Runs the two fetches off the UI thread and hands results back over a
/// channel the app drains once per frame. Fetches are fire-and-forget: no
/// retry, no cancellation, at most one in flight by construction of the UI.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    source: Arc<DeckSource>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new(source: DeckSource) -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, source: Arc::new(source), receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>, Arc<DeckSource>) {
        (self.sender.clone(), self.runtime.clone(), self.source.clone())
    }

    pub fn load_menu(&self) {
        let (sender, runtime, source) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(async { source.fetch_menu().await })
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::MenuLoaded(result));
        });
    }

    pub fn load_deck(&self, set_id: String, title: String) {
        let (sender, runtime, source) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(async { source.fetch_deck(&set_id).await })
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::DeckLoaded { title, result });
        });
    }
}
