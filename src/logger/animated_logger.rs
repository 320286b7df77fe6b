use std::io::Write;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Terminal spinner shown while the analysis request is in flight. Renders on
/// stderr so the report on stdout stays clean.
pub struct AnimatedLogger {
    stop_sender: mpsc::UnboundedSender<()>,
    task_handle: JoinHandle<()>,
}

impl AnimatedLogger {
    pub fn start(message: &str) -> Self {
        let (stop_sender, mut stop_receiver) = mpsc::unbounded_channel();
        let message = message.to_string();

        let task_handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(150));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{} {} ", message, SPINNER_FRAMES[frame]);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % SPINNER_FRAMES.len();
                    }
                    _ = stop_receiver.recv() => {
                        break;
                    }
                }
            }
        });

        Self {
            stop_sender,
            task_handle,
        }
    }

    pub async fn succeed(self, final_message: &str) {
        self.finish().await;

        eprint!("\r\x1b[K✅ {}\n", final_message);
        let _ = std::io::stderr().flush();
    }

    pub async fn fail(self, error_message: &str) {
        self.finish().await;

        eprint!("\r\x1b[K❌ {}\n", error_message);
        let _ = std::io::stderr().flush();
    }

    async fn finish(self) {
        let _ = self.stop_sender.send(());
        let _ = self.task_handle.await;
    }
}
