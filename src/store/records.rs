//! Record models for the hosted store's collections.
//!
//! Shapes mirror the remote tables; everything optional on the wire is
//! optional here so a sparse row never fails the whole collection decode.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// A person in the CRM.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An organization in the CRM.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub industry: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Pipeline stage labels for a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStage {
    New,
    Contacted,
    Qualified,
    Proposal,
    Negotiation,
    Won,
    Lost,
}

impl DealStage {
    pub fn label(self) -> &'static str {
        match self {
            DealStage::New => "new",
            DealStage::Contacted => "contacted",
            DealStage::Qualified => "qualified",
            DealStage::Proposal => "proposal",
            DealStage::Negotiation => "negotiation",
            DealStage::Won => "won",
            DealStage::Lost => "lost",
        }
    }
}

/// A sales opportunity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Deal {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub value: Option<f64>,
    pub stage: DealStage,
    #[serde(default)]
    pub company_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Deal {
    /// Monetary value, treating an absent/null field as zero.
    pub fn value(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl TaskPriority {
    pub fn label(self) -> &'static str {
        match self {
            TaskPriority::High => "high",
            TaskPriority::Medium => "medium",
            TaskPriority::Low => "low",
        }
    }
}

/// Task completion status. Labels the store doesn't recognize fold to
/// `Pending` rather than failing the collection decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    InProgress,
    Completed,
    #[serde(other)]
    Pending,
}

impl TaskStatus {
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Completed => "completed",
        }
    }
}

/// A to-do item, possibly with a due date.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

/// The authenticated user, as reported by the store's session endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserIdentity {
    /// Email-like display field for the header chrome.
    pub fn display(&self) -> &str {
        self.email.as_deref().unwrap_or("signed in")
    }
}
