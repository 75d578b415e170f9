//! Office service - routes incoming messages through the brain.
//!
//! Every entry point follows the same shape: build a prompt, ask the brain,
//! relay the decision to wherever the message came from, and log the
//! exchange to memory. Only the brain call is allowed to fail the request;
//! relaying and logging are best-effort and failures are reported as
//! warnings.

use crate::domain::{
    AgentAddress, AgentInvokePayload, AgentReply, MemoryRecord, MemorySource, SlackEventEnvelope,
    TelegramUpdate,
};
use crate::ports::{CoreError, OfficePorts};
use crate::prompts;

/// Number of memory entries fed into the daily report.
pub const REPORT_HISTORY_LIMIT: usize = 200;

/// Context stored for the daily report's own memory entry.
const DAILY_REPORT_CONTEXT: &str = "[system] daily-report";

/// Result of handling a Slack Events API callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlackOutcome {
    /// URL verification handshake; echo the challenge.
    Challenge(String),
    /// Event produced by a bot; nothing was done.
    IgnoredBot,
    /// Message answered with the given decision.
    Answered(String),
}

/// Orchestrates the office's four entry points.
#[derive(Clone)]
pub struct OfficeService {
    ports: OfficePorts,
    ceo_channel: Option<String>,
}

impl OfficeService {
    /// Create a new office service.
    ///
    /// `ceo_channel` is the Slack channel receiving the daily report; `None`
    /// disables posting it.
    pub fn new(ports: OfficePorts, ceo_channel: Option<String>) -> Self {
        Self {
            ports,
            ceo_channel: ceo_channel.filter(|c| !c.is_empty()),
        }
    }

    /// Slack channel receiving the daily report, if any.
    pub fn ceo_channel(&self) -> Option<&str> {
        self.ceo_channel.as_deref()
    }

    /// Handle a Slack Events API callback.
    pub async fn handle_slack_event(
        &self,
        envelope: &SlackEventEnvelope,
    ) -> Result<SlackOutcome, CoreError> {
        if envelope.is_url_verification() {
            tracing::info!("answering slack url verification");
            return Ok(SlackOutcome::Challenge(envelope.challenge().to_string()));
        }

        let message = envelope.message();
        if message.from_bot {
            tracing::debug!("ignoring slack event from bot");
            return Ok(SlackOutcome::IgnoredBot);
        }

        let decision = self.decide(&prompts::ceo_prompt(&message.text)).await?;

        match message.channel.as_deref() {
            Some(channel) => {
                if let Err(e) = self
                    .ports
                    .slack
                    .post_message(channel, &decision, message.thread_ts.as_deref())
                    .await
                {
                    tracing::warn!(channel, error = %e, "failed to post slack reply");
                }
            }
            None => tracing::debug!("slack event has no channel, reply not posted"),
        }

        self.remember(MemoryRecord::new(
            message.text,
            decision.clone(),
            &MemorySource::Slack,
        ))
        .await;

        Ok(SlackOutcome::Answered(decision))
    }

    /// Handle a Telegram webhook update. Returns the decision.
    pub async fn handle_telegram_update(
        &self,
        update: &TelegramUpdate,
    ) -> Result<String, CoreError> {
        let text = update.text();
        let decision = self.decide(&prompts::ceo_prompt(text)).await?;

        if let Some(chat_id) = update.chat_id() {
            if let Err(e) = self.ports.telegram.send_message(chat_id, &decision).await {
                tracing::warn!(chat_id, error = %e, "failed to send telegram reply");
            }
        }

        self.remember(MemoryRecord::new(
            text,
            decision.clone(),
            &MemorySource::Telegram,
        ))
        .await;

        Ok(decision)
    }

    /// Invoke a departmental agent.
    ///
    /// Fails with [`CoreError::Validation`] when `dept`, `role` or `name` is
    /// blank; the brain is not called in that case.
    pub async fn invoke_agent(
        &self,
        address: AgentAddress,
        payload: &AgentInvokePayload,
    ) -> Result<AgentReply, CoreError> {
        for (segment, value) in [
            ("dept", &address.dept),
            ("role", &address.role),
            ("name", &address.name),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::Validation(format!(
                    "agent {segment} must not be empty"
                )));
            }
        }

        let input = payload.input();
        tracing::info!(agent = %address.source_tag(), "invoking agent");
        let decision = self.decide(&prompts::agent_prompt(&address, input)).await?;

        let source = MemorySource::Agent(address.clone());
        self.remember(MemoryRecord::new(input, decision.clone(), &source))
            .await;

        Ok(AgentReply::new(address, decision))
    }

    /// Summarise recent memory into an executive report. Returns the summary.
    pub async fn daily_report(&self) -> Result<String, CoreError> {
        let entries = self.ports.memory.recent(REPORT_HISTORY_LIMIT).await?;
        tracing::info!(entries = entries.len(), "building daily report");

        let summary = self
            .decide(&prompts::daily_report_prompt(&entries))
            .await?;

        if let Some(channel) = self.ceo_channel() {
            let message = prompts::daily_report_message(&summary);
            if let Err(e) = self.ports.slack.post_message(channel, &message, None).await {
                tracing::warn!(channel, error = %e, "failed to post daily report");
            }
        }

        self.remember(MemoryRecord::new(
            DAILY_REPORT_CONTEXT,
            summary.clone(),
            &MemorySource::Cron,
        ))
        .await;

        Ok(summary)
    }

    async fn decide(&self, prompt: &str) -> Result<String, CoreError> {
        self.ports.brain.decide(prompt).await.map_err(|e| {
            tracing::error!(error = %e, "brain call failed");
            CoreError::from(e)
        })
    }

    async fn remember(&self, record: MemoryRecord) {
        if let Err(e) = self.ports.memory.insert(&record).await {
            tracing::warn!(source = %record.source, error = %e, "failed to record memory");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MemoryEntry;
    use crate::ports::brain::MockBrainPort;
    use crate::ports::{
        BrainPort, MemoryStorePort, PortError, SlackMessengerPort, TelegramMessengerPort,
    };
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct FakeMemory {
        inserted: Mutex<Vec<MemoryRecord>>,
        stored: Vec<MemoryEntry>,
        fail_reads: bool,
        fail_writes: bool,
    }

    #[async_trait]
    impl MemoryStorePort for FakeMemory {
        async fn insert(&self, record: &MemoryRecord) -> Result<(), PortError> {
            if self.fail_writes {
                return Err(PortError::Status {
                    service: "supabase",
                    status: 500,
                });
            }
            self.inserted.lock().unwrap().push(record.clone());
            Ok(())
        }

        async fn recent(&self, limit: usize) -> Result<Vec<MemoryEntry>, PortError> {
            if self.fail_reads {
                return Err(PortError::Status {
                    service: "supabase",
                    status: 503,
                });
            }
            Ok(self.stored.iter().take(limit).cloned().collect())
        }
    }

    #[derive(Default)]
    struct FakeSlack {
        posts: Mutex<Vec<(String, String, Option<String>)>>,
        fail: bool,
    }

    #[async_trait]
    impl SlackMessengerPort for FakeSlack {
        async fn post_message(
            &self,
            channel: &str,
            text: &str,
            thread_ts: Option<&str>,
        ) -> Result<(), PortError> {
            if self.fail {
                return Err(PortError::Rejected {
                    service: "slack",
                    message: "not_in_channel".into(),
                });
            }
            self.posts.lock().unwrap().push((
                channel.to_string(),
                text.to_string(),
                thread_ts.map(str::to_string),
            ));
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeTelegram {
        sent: Mutex<Vec<(i64, String)>>,
    }

    #[async_trait]
    impl TelegramMessengerPort for FakeTelegram {
        async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), PortError> {
            self.sent.lock().unwrap().push((chat_id, text.to_string()));
            Ok(())
        }
    }

    struct Harness {
        service: OfficeService,
        memory: Arc<FakeMemory>,
        slack: Arc<FakeSlack>,
        telegram: Arc<FakeTelegram>,
    }

    fn answering_brain(decision: &'static str) -> MockBrainPort {
        let mut brain = MockBrainPort::new();
        brain
            .expect_decide()
            .returning(move |_| Ok(decision.to_string()));
        brain
    }

    fn harness_with(
        brain: impl BrainPort + 'static,
        memory: FakeMemory,
        slack: FakeSlack,
        ceo_channel: Option<&str>,
    ) -> Harness {
        let memory = Arc::new(memory);
        let slack = Arc::new(slack);
        let telegram = Arc::new(FakeTelegram::default());
        let ports = OfficePorts::new(
            Arc::new(brain),
            memory.clone(),
            slack.clone(),
            telegram.clone(),
        );
        Harness {
            service: OfficeService::new(ports, ceo_channel.map(str::to_string)),
            memory,
            slack,
            telegram,
        }
    }

    fn harness(brain: impl BrainPort + 'static) -> Harness {
        harness_with(brain, FakeMemory::default(), FakeSlack::default(), None)
    }

    fn slack_envelope(value: serde_json::Value) -> SlackEventEnvelope {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_slack_url_verification_skips_brain() {
        let mut brain = MockBrainPort::new();
        brain.expect_decide().never();
        let h = harness(brain);

        let outcome = h
            .service
            .handle_slack_event(&slack_envelope(
                json!({"type": "url_verification", "challenge": "abc123"}),
            ))
            .await
            .unwrap();

        assert_eq!(outcome, SlackOutcome::Challenge("abc123".into()));
        assert!(h.memory.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_slack_bot_event_ignored() {
        let mut brain = MockBrainPort::new();
        brain.expect_decide().never();
        let h = harness(brain);

        let outcome = h
            .service
            .handle_slack_event(&slack_envelope(json!({
                "type": "event_callback",
                "event": {"text": "my own reply", "bot_id": "B1", "channel": "C1"}
            })))
            .await
            .unwrap();

        assert_eq!(outcome, SlackOutcome::IgnoredBot);
        assert!(h.slack.posts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_slack_message_answered_in_thread_and_recorded() {
        let mut brain = MockBrainPort::new();
        brain
            .expect_decide()
            .withf(|ctx| ctx == "You are Suzie Q (CEO). Respond concisely. Input: budget?")
            .times(1)
            .returning(|_| Ok("Approve 10k".to_string()));
        let h = harness(brain);

        let outcome = h
            .service
            .handle_slack_event(&slack_envelope(json!({
                "type": "event_callback",
                "event": {"text": "budget?", "channel": "C42", "ts": "171.01"}
            })))
            .await
            .unwrap();

        assert_eq!(outcome, SlackOutcome::Answered("Approve 10k".into()));

        let posts = h.slack.posts.lock().unwrap();
        assert_eq!(
            posts.as_slice(),
            &[(
                "C42".to_string(),
                "Approve 10k".to_string(),
                Some("171.01".to_string())
            )]
        );

        let inserted = h.memory.inserted.lock().unwrap();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].context, "budget?");
        assert_eq!(inserted[0].decision, "Approve 10k");
        assert_eq!(inserted[0].source, "slack");
    }

    #[tokio::test]
    async fn test_slack_failures_after_decision_do_not_fail_request() {
        let h = harness_with(
            answering_brain("ok"),
            FakeMemory {
                fail_writes: true,
                ..Default::default()
            },
            FakeSlack {
                fail: true,
                ..Default::default()
            },
            None,
        );

        let outcome = h
            .service
            .handle_slack_event(&slack_envelope(json!({
                "event": {"text": "hi", "channel": "C1"}
            })))
            .await
            .unwrap();

        assert_eq!(outcome, SlackOutcome::Answered("ok".into()));
    }

    #[tokio::test]
    async fn test_brain_failure_is_external_service_error() {
        let mut brain = MockBrainPort::new();
        brain.expect_decide().returning(|_| {
            Err(PortError::Status {
                service: "brain",
                status: 502,
            })
        });
        let h = harness(brain);

        let err = h
            .service
            .handle_telegram_update(&TelegramUpdate::default())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalService(_)));
        assert!(h.memory.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_telegram_reply_sent_to_chat() {
        let h = harness(answering_brain("On it."));
        let update: TelegramUpdate = serde_json::from_value(json!({
            "update_id": 7,
            "message": {"text": "hello", "chat": {"id": 99}}
        }))
        .unwrap();

        let decision = h.service.handle_telegram_update(&update).await.unwrap();

        assert_eq!(decision, "On it.");
        assert_eq!(
            h.telegram.sent.lock().unwrap().as_slice(),
            &[(99, "On it.".to_string())]
        );
        let inserted = h.memory.inserted.lock().unwrap();
        assert_eq!(inserted[0].source, "telegram");
        assert_eq!(inserted[0].context, "hello");
    }

    #[tokio::test]
    async fn test_telegram_without_chat_still_recorded() {
        let h = harness(answering_brain("noted"));
        let update: TelegramUpdate =
            serde_json::from_value(json!({"message": {"text": "orphan"}})).unwrap();

        h.service.handle_telegram_update(&update).await.unwrap();

        assert!(h.telegram.sent.lock().unwrap().is_empty());
        assert_eq!(h.memory.inserted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_agent_invocation() {
        let mut brain = MockBrainPort::new();
        brain
            .expect_decide()
            .withf(|ctx| {
                ctx.starts_with("You are an AI recruiter for the hr department named holly.")
                    && ctx.ends_with("Input: screen candidates")
            })
            .returning(|_| Ok("Shortlist three".to_string()));
        let h = harness(brain);

        let payload = AgentInvokePayload {
            text: None,
            context: Some("screen candidates".into()),
            metadata: None,
        };
        let reply = h
            .service
            .invoke_agent(AgentAddress::new("hr", "recruiter", "holly"), &payload)
            .await
            .unwrap();

        assert_eq!(reply.agent, "holly");
        assert_eq!(reply.decision, "Shortlist three");

        let inserted = h.memory.inserted.lock().unwrap();
        assert_eq!(inserted[0].source, "hr:recruiter:holly");
        assert_eq!(inserted[0].department.as_deref(), Some("hr"));
        assert_eq!(inserted[0].actor.as_deref(), Some("holly"));
        assert_eq!(inserted[0].context, "screen candidates");
    }

    #[tokio::test]
    async fn test_agent_rejects_blank_segment() {
        let mut brain = MockBrainPort::new();
        brain.expect_decide().never();
        let h = harness(brain);

        let err = h
            .service
            .invoke_agent(
                AgentAddress::new("hr", " ", "holly"),
                &AgentInvokePayload::default(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(ref m) if m.contains("role")));
    }

    #[tokio::test]
    async fn test_daily_report_posts_to_ceo_channel() {
        let memory = FakeMemory {
            stored: vec![MemoryEntry {
                context: Some("hire?".into()),
                decision: Some("yes".into()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let mut brain = MockBrainPort::new();
        brain
            .expect_decide()
            .withf(|ctx| ctx.contains("- Context: hire?\n  Decision: yes\n"))
            .returning(|_| Ok("KPIs green".to_string()));
        let h = harness_with(brain, memory, FakeSlack::default(), Some("CEO1"));

        let summary = h.service.daily_report().await.unwrap();

        assert_eq!(summary, "KPIs green");
        assert_eq!(
            h.slack.posts.lock().unwrap().as_slice(),
            &[(
                "CEO1".to_string(),
                "Daily CEO Report:\nKPIs green".to_string(),
                None
            )]
        );
        let inserted = h.memory.inserted.lock().unwrap();
        assert_eq!(inserted[0].context, "[system] daily-report");
        assert_eq!(inserted[0].source, "cron");
    }

    #[tokio::test]
    async fn test_daily_report_without_ceo_channel_does_not_post() {
        let h = harness_with(
            answering_brain("quiet day"),
            FakeMemory::default(),
            FakeSlack::default(),
            Some(""),
        );

        assert_eq!(h.service.ceo_channel(), None);
        h.service.daily_report().await.unwrap();
        assert!(h.slack.posts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_daily_report_fails_when_memory_unreadable() {
        let mut brain = MockBrainPort::new();
        brain.expect_decide().never();
        let h = harness_with(
            brain,
            FakeMemory {
                fail_reads: true,
                ..Default::default()
            },
            FakeSlack::default(),
            None,
        );

        let err = h.service.daily_report().await.unwrap_err();
        assert!(matches!(err, CoreError::ExternalService(_)));
    }
}
