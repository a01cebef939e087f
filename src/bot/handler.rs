//! Per-message handling and effect execution.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error, info};
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use teloxide::types::InputFile;

use crate::config::REPORT_FILENAME;
use crate::conversation::{messages, step, Effect, Input, State};
use crate::export::{export_report, ExportError, ReportFile};
use crate::listing::DateRange;
use crate::pipeline::{run_pipeline, PipelineContext, PipelineOutcome};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

type ChatDialogue = Dialogue<State, InMemStorage<State>>;

pub(super) async fn handle_message(
    bot: Bot,
    dialogue: ChatDialogue,
    msg: Message,
    ctx: Arc<PipelineContext>,
) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let state = dialogue.get_or_default().await?;
    debug!("Chat {} in state {:?}", msg.chat.id.0, state);

    let transition = step(state, Input::parse(text), ctx.max_days);

    // State is stored before effects run so a failed delivery never replays a session
    if transition.next == State::Idle {
        dialogue.exit().await?;
    } else {
        dialogue.update(transition.next).await?;
    }

    for effect in transition.effects {
        match effect {
            Effect::Reply(reply) => {
                bot.send_message(msg.chat.id, reply).await?;
            }
            Effect::RunPipeline { dates, keywords } => {
                run_and_deliver(&bot, msg.chat.id, &ctx, &dates, keywords.as_deref()).await?;
            }
        }
    }

    Ok(())
}

/// Where a run's replies go.
#[async_trait]
trait ReportSink: Send + Sync {
    async fn send_text(&self, text: &str) -> HandlerResult;
    async fn send_document(&self, path: &Path) -> HandlerResult;
}

/// One Telegram chat.
struct ChatSink<'a> {
    bot: &'a Bot,
    chat_id: ChatId,
}

#[async_trait]
impl ReportSink for ChatSink<'_> {
    async fn send_text(&self, text: &str) -> HandlerResult {
        self.bot.send_message(self.chat_id, text).await?;
        Ok(())
    }

    async fn send_document(&self, path: &Path) -> HandlerResult {
        let document = InputFile::file(path.to_path_buf()).file_name(REPORT_FILENAME);
        self.bot.send_document(self.chat_id, document).await?;
        Ok(())
    }
}

/// Runs the pipeline and delivers its outcome to `chat_id`.
async fn run_and_deliver(
    bot: &Bot,
    chat_id: ChatId,
    ctx: &PipelineContext,
    dates: &DateRange,
    keywords: Option<&[String]>,
) -> HandlerResult {
    info!(
        "Chat {} requested {} (keywords: {:?})",
        chat_id.0, dates, keywords
    );
    let outcome = run_pipeline(ctx, dates, keywords).await;
    let report = export_report(&outcome.records);

    deliver_outcome(&ChatSink { bot, chat_id }, report, &outcome).await
}

/// Sends the report (or a notice), then the keyword summary.
///
/// Export and upload failures become the generic failure message; only a
/// failure to send that message is returned.
async fn deliver_outcome(
    sink: &dyn ReportSink,
    report: Result<Option<ReportFile>, ExportError>,
    outcome: &PipelineOutcome,
) -> HandlerResult {
    match report {
        Ok(Some(report)) => {
            let rows = report.rows();
            let sent = report
                .deliver(|path| {
                    let path = path.to_path_buf();
                    async move { sink.send_document(&path).await }
                })
                .await;
            match sent {
                Ok(()) => info!("Sent report with {} rows", rows),
                Err(e) => {
                    error!("Failed to send report: {}", e);
                    sink.send_text(messages::FAILURE).await?;
                }
            }
        }
        Ok(None) => {
            info!("No records ({} domains found)", outcome.domains_found);
            sink.send_text(messages::NO_RESULTS).await?;
        }
        Err(e) => {
            error!("Failed to build report: {}", e);
            sink.send_text(messages::FAILURE).await?;
        }
    }

    if let Some(tally) = &outcome.tally {
        sink.send_text(&messages::tally_summary(tally)).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::filter_by_keywords;
    use crate::whois::WhoisRecord;
    use std::sync::Mutex;

    #[derive(Debug, PartialEq)]
    enum Sent {
        Text(String),
        Document { existed: bool },
    }

    #[derive(Default)]
    struct RecordingSink {
        sent: Mutex<Vec<Sent>>,
        fail_documents: bool,
    }

    #[async_trait]
    impl ReportSink for RecordingSink {
        async fn send_text(&self, text: &str) -> HandlerResult {
            self.sent.lock().unwrap().push(Sent::Text(text.to_string()));
            Ok(())
        }

        async fn send_document(&self, path: &Path) -> HandlerResult {
            self.sent.lock().unwrap().push(Sent::Document {
                existed: path.exists(),
            });
            if self.fail_documents {
                return Err("upload rejected".into());
            }
            Ok(())
        }
    }

    fn keyword_outcome(domains: &[&str]) -> PipelineOutcome {
        let domains = domains.iter().map(|d| d.to_string()).collect();
        let (filtered, tally) = filter_by_keywords(domains, &["shop".to_string()]);
        PipelineOutcome {
            records: filtered
                .iter()
                .map(|d| WhoisRecord {
                    domain_name: Some(d.clone()),
                    registrar: Some("R".to_string()),
                    ..Default::default()
                })
                .collect(),
            tally: Some(tally),
            domains_found: 2,
        }
    }

    #[tokio::test]
    async fn test_report_sent_before_tally() {
        let sink = RecordingSink::default();
        let outcome = keyword_outcome(&["myshop.com", "other.net"]);
        let report = export_report(&outcome.records);

        deliver_outcome(&sink, report, &outcome).await.unwrap();

        let sent = sink.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], Sent::Document { existed: true });
        assert_eq!(
            sent[1],
            Sent::Text(messages::tally_summary(outcome.tally.as_ref().unwrap()))
        );
    }

    #[tokio::test]
    async fn test_no_records_sends_notice_then_tally() {
        let sink = RecordingSink::default();
        let outcome = keyword_outcome(&["other.net"]);
        let report = export_report(&outcome.records);

        deliver_outcome(&sink, report, &outcome).await.unwrap();

        let sent = sink.sent.lock().unwrap();
        assert_eq!(sent[0], Sent::Text(messages::NO_RESULTS.to_string()));
        assert!(matches!(&sent[1], Sent::Text(t) if t.contains("shop: 0")));
        assert_eq!(sent.len(), 2);
    }

    #[tokio::test]
    async fn test_export_error_sends_failure() {
        let sink = RecordingSink::default();
        let outcome = PipelineOutcome {
            domains_found: 1,
            ..Default::default()
        };
        let report = Err(ExportError::Io(std::io::Error::other("disk full")));

        deliver_outcome(&sink, report, &outcome).await.unwrap();

        // no keywords requested: no summary
        assert_eq!(
            *sink.sent.lock().unwrap(),
            vec![Sent::Text(messages::FAILURE.to_string())]
        );
    }

    #[tokio::test]
    async fn test_failed_upload_sends_failure_and_removes_file() {
        let sink = RecordingSink {
            fail_documents: true,
            ..Default::default()
        };
        let outcome = keyword_outcome(&["myshop.com"]);
        let report = export_report(&outcome.records).unwrap().unwrap();
        let path = report.path().to_path_buf();

        deliver_outcome(&sink, Ok(Some(report)), &outcome)
            .await
            .unwrap();

        let sent = sink.sent.lock().unwrap();
        assert_eq!(sent[0], Sent::Document { existed: true });
        assert_eq!(sent[1], Sent::Text(messages::FAILURE.to_string()));
        assert!(matches!(&sent[2], Sent::Text(t) if t.contains("shop: 1")));
        assert!(!path.exists());
    }
}
