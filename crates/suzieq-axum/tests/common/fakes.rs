//! Recording port fakes shared by the route tests.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use suzieq_axum::AxumContext;
use suzieq_core::ports::{
    BrainPort, MemoryStorePort, OfficePorts, PortError, SlackMessengerPort, TelegramMessengerPort,
};
use suzieq_core::{MemoryEntry, MemoryRecord, OfficeService};

/// Brain that answers with a fixed decision, or fails when `decision` is `None`.
#[derive(Default)]
pub struct FakeBrain {
    pub decision: Option<String>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeBrain {
    pub fn answering(decision: &str) -> Self {
        Self {
            decision: Some(decision.to_string()),
            prompts: Mutex::default(),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BrainPort for FakeBrain {
    async fn decide(&self, context: &str) -> Result<String, PortError> {
        self.prompts.lock().unwrap().push(context.to_string());
        self.decision.clone().ok_or(PortError::Status {
            service: "brain",
            status: 502,
        })
    }
}

#[derive(Default)]
pub struct FakeMemory {
    pub history: Vec<MemoryEntry>,
    pub inserted: Mutex<Vec<MemoryRecord>>,
    pub fail_reads: bool,
}

#[async_trait]
impl MemoryStorePort for FakeMemory {
    async fn insert(&self, record: &MemoryRecord) -> Result<(), PortError> {
        self.inserted.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<MemoryEntry>, PortError> {
        if self.fail_reads {
            return Err(PortError::Network {
                service: "supabase",
                message: "connection refused".into(),
            });
        }
        Ok(self.history.iter().take(limit).cloned().collect())
    }
}

/// `(channel, text, thread_ts)` per posted message.
pub type SlackPost = (String, String, Option<String>);

#[derive(Default)]
pub struct FakeSlack {
    pub posts: Mutex<Vec<SlackPost>>,
}

#[async_trait]
impl SlackMessengerPort for FakeSlack {
    async fn post_message(
        &self,
        channel: &str,
        text: &str,
        thread_ts: Option<&str>,
    ) -> Result<(), PortError> {
        self.posts.lock().unwrap().push((
            channel.to_string(),
            text.to_string(),
            thread_ts.map(str::to_string),
        ));
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeTelegram {
    pub sent: Mutex<Vec<(i64, String)>>,
}

#[async_trait]
impl TelegramMessengerPort for FakeTelegram {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), PortError> {
        self.sent.lock().unwrap().push((chat_id, text.to_string()));
        Ok(())
    }
}

/// Handles on every fake so tests can inspect side effects after a request.
pub struct Office {
    pub brain: Arc<FakeBrain>,
    pub memory: Arc<FakeMemory>,
    pub slack: Arc<FakeSlack>,
    pub telegram: Arc<FakeTelegram>,
}

impl Office {
    pub fn new(brain: FakeBrain, memory: FakeMemory) -> Self {
        Self {
            brain: Arc::new(brain),
            memory: Arc::new(memory),
            slack: Arc::default(),
            telegram: Arc::default(),
        }
    }

    pub fn context(&self, ceo_channel: Option<&str>) -> AxumContext {
        let ports = OfficePorts::new(
            self.brain.clone(),
            self.memory.clone(),
            self.slack.clone(),
            self.telegram.clone(),
        );
        AxumContext::new(OfficeService::new(ports, ceo_channel.map(str::to_string)))
    }
}
