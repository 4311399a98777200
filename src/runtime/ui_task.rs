use std::sync::mpsc;
use std::thread;
use crate::core::error::MetadataError;

type UiJob = Box<dyn FnOnce() + Send + 'static>;

/// Однопоточный исполнитель интерактивных задач.
///
/// Все диалоги выполняются на одном выделенном потоке в порядке
/// поступления; вызывающий поток блокируется до завершения своей задачи.
pub struct UiExecutor {
    sender: Option<mpsc::Sender<UiJob>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl UiExecutor {
    pub fn new() -> Result<Self, MetadataError> {
        let (sender, receiver) = mpsc::channel::<UiJob>();
        let handle = thread::Builder::new()
            .name("metagrust-ui".to_string())
            .spawn(move || {
                // Канал закрывается при Drop исполнителя
                while let Ok(job) = receiver.recv() {
                    job();
                }
            })?;
        Ok(Self {
            sender: Some(sender),
            handle: Some(handle),
        })
    }

    /// Выполняет задачу на UI-потоке и блокируется до результата
    pub fn run_task<R, F>(&self, task: F) -> Result<R, MetadataError>
    where
        R: Send + 'static,
        F: FnOnce() -> R + Send + 'static,
    {
        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| MetadataError::Ui("UI executor is shut down".to_string()))?;

        let (reply_sender, reply_receiver) = mpsc::channel();
        sender
            .send(Box::new(move || {
                let _ = reply_sender.send(task());
            }))
            .map_err(|_| MetadataError::Ui("UI thread is not running".to_string()))?;

        reply_receiver
            .recv()
            .map_err(|_| MetadataError::Ui("UI task dropped its result".to_string()))
    }
}

impl Drop for UiExecutor {
    fn drop(&mut self) {
        drop(self.sender.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
