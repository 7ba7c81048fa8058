// Batch classification: run a list of messages through the relay with
// bounded concurrency.
//
// Each message is still classified independently (one provider call at
// most); the only shared limit is how many are in flight at once.

use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::moderation::Decision;
use crate::relay::Relay;

/// One classified message, tagged with its input position.
#[derive(Debug, Clone)]
pub struct BatchItem {
    pub index: usize,
    pub text: String,
    pub decision: Decision,
}

/// Split file contents into messages: one per non-blank line.
pub fn parse_messages(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classify `messages`, at most `concurrency` at a time.
///
/// Results come back in input order regardless of completion order.
pub async fn run(
    relay: &Relay,
    messages: Vec<String>,
    concurrency: usize,
    show_progress: bool,
) -> Vec<BatchItem> {
    let pb = if show_progress {
        let pb = ProgressBar::new(messages.len() as u64);
        let template = "  Classifying [{bar:30}] {pos}/{len} ({eta})";
        if let Ok(style) = ProgressStyle::default_bar().template(template) {
            pb.set_style(style);
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut items: Vec<BatchItem> = stream::iter(messages.into_iter().enumerate())
        .map(|(index, text)| {
            let pb = &pb;
            async move {
                let decision = relay.evaluate(&text).await;
                pb.inc(1);
                BatchItem {
                    index,
                    text,
                    decision,
                }
            }
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    pb.finish_and_clear();
    items.sort_by_key(|item| item.index);

    info!(count = items.len(), "Batch classification finished");
    items
}
