//! Agent addressing and invocation payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An agent addressed by `/agents/{dept}/{role}/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentAddress {
    pub dept: String,
    pub role: String,
    pub name: String,
}

impl AgentAddress {
    pub fn new(dept: impl Into<String>, role: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            dept: dept.into(),
            role: role.into(),
            name: name.into(),
        }
    }

    /// Memory source tag, `dept:role:name`.
    pub fn source_tag(&self) -> String {
        format!("{}:{}:{}", self.dept, self.role, self.name)
    }
}

/// Body of an agent invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentInvokePayload {
    pub text: Option<String>,
    pub context: Option<String>,
    pub metadata: Option<Map<String, Value>>,
}

impl AgentInvokePayload {
    /// The input to hand the agent: `text`, else `context`, else empty.
    pub fn input(&self) -> &str {
        [self.text.as_deref(), self.context.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or_default()
    }
}

/// Response returned from an agent invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentReply {
    pub agent: String,
    pub role: String,
    pub dept: String,
    pub decision: String,
}

impl AgentReply {
    pub fn new(address: AgentAddress, decision: String) -> Self {
        Self {
            agent: address.name,
            role: address.role,
            dept: address.dept,
            decision,
        }
    }
}
