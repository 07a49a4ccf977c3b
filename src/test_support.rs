use crate::llm::{ServiceError, TextGenerator};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tempfile::TempDir;

/// Temp directory holding `count` tiny image files named `img{i}.png`.
pub(crate) fn create_image_dir(count: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for i in 1..=count {
        std::fs::write(temp_dir.path().join(format!("img{}.png", i)), b"\x89PNG").unwrap();
    }
    temp_dir
}

enum Reply {
    Text(String),
    Status(u16),
}

struct Rule {
    needle: String,
    reply: Reply,
    delay: Duration,
}

/// In-process `TextGenerator` with canned replies.
///
/// A prompt is answered by the first rule whose needle it contains; prompts
/// with no matching rule get `"reply to: {prompt}"`. Every prompt is recorded.
#[derive(Default)]
pub(crate) struct ScriptedGenerator {
    rules: Vec<Rule>,
    prompts: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl ScriptedGenerator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(mut self, needle: &str, text: &str) -> Self {
        self.rules.push(Rule {
            needle: needle.to_string(),
            reply: Reply::Text(text.to_string()),
            delay: Duration::ZERO,
        });
        self
    }

    pub(crate) fn reply_after(mut self, needle: &str, text: &str, delay: Duration) -> Self {
        self.rules.push(Rule {
            needle: needle.to_string(),
            reply: Reply::Text(text.to_string()),
            delay,
        });
        self
    }

    pub(crate) fn fail(mut self, needle: &str, status: u16) -> Self {
        self.rules.push(Rule {
            needle: needle.to_string(),
            reply: Reply::Status(status),
            delay: Duration::ZERO,
        });
        self
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub(crate) fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, ServiceError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        let rule = self.rules.iter().find(|r| prompt.contains(&r.needle));
        let delay = rule.map(|r| r.delay).unwrap_or_default();
        // Yield at least once so concurrent calls overlap.
        tokio::time::sleep(delay.max(Duration::from_millis(1))).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        match rule.map(|r| &r.reply) {
            Some(Reply::Text(text)) => Ok(text.clone()),
            Some(Reply::Status(status)) => Err(ServiceError::Api {
                status: *status,
                body: "scripted failure".to_string(),
            }),
            None => Ok(format!("reply to: {}", prompt)),
        }
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}
