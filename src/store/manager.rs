//! Fetch orchestration: spawns store queries and reports back to the event
//! loop. A failed collection read is logged and folded to an empty
//! collection so the page proceeds with whatever data succeeded.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::warn;

use crate::app::event::{AppEvent, FetchSeq};
use crate::app::state::Page;
use crate::config::StoreConfig;
use crate::store::aggregate::{self, DashboardData, ACTIVITY_PAGE_LIMIT};
use crate::store::client::{StoreClient, StoreError};

pub struct StoreManager {
    client: Arc<StoreClient>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

fn or_empty<T>(result: Result<Vec<T>, StoreError>, collection: &str) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(e) => {
            warn!(collection, error = %e, "fetch failed, treating collection as empty");
            Vec::new()
        }
    }
}

impl StoreManager {
    pub fn new(
        config: &StoreConfig,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            client: Arc::new(StoreClient::new(config)?),
            event_tx,
        })
    }

    /// Issue the fetch cycle backing `page`, tagged with `seq`.
    pub fn fetch_page(&self, page: Page, seq: FetchSeq) {
        match page {
            Page::Dashboard => self.fetch_dashboard(seq),
            Page::Contacts => self.fetch_contacts(seq),
            Page::Companies => self.fetch_companies(seq),
            Page::Deals => self.fetch_deals(seq),
            Page::Tasks => self.fetch_tasks(seq),
            Page::Activities => self.fetch_activities(seq),
        }
    }

    /// Four concurrent collection reads, aggregated into one dashboard value.
    pub fn fetch_dashboard(&self, seq: FetchSeq) {
        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let (contacts, companies, deals, tasks) = tokio::join!(
                client.contacts(),
                client.companies(),
                client.deals(),
                client.tasks(),
            );
            let contacts = or_empty(contacts, "contacts");
            let companies = or_empty(companies, "companies");
            let deals = or_empty(deals, "deals");
            let tasks = or_empty(tasks, "tasks");

            let data = DashboardData::aggregate(&contacts, &companies, &deals, &tasks);
            let _ = tx.send(AppEvent::DashboardLoaded { seq, data });
        });
    }

    pub fn fetch_contacts(&self, seq: FetchSeq) {
        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let records = or_empty(client.contacts().await, "contacts");
            let _ = tx.send(AppEvent::ContactsLoaded { seq, records });
        });
    }

    pub fn fetch_companies(&self, seq: FetchSeq) {
        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let records = or_empty(client.companies().await, "companies");
            let _ = tx.send(AppEvent::CompaniesLoaded { seq, records });
        });
    }

    pub fn fetch_deals(&self, seq: FetchSeq) {
        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let records = or_empty(client.deals().await, "deals");
            let _ = tx.send(AppEvent::DealsLoaded { seq, records });
        });
    }

    pub fn fetch_tasks(&self, seq: FetchSeq) {
        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let records = or_empty(client.tasks().await, "tasks");
            let _ = tx.send(AppEvent::TasksLoaded { seq, records });
        });
    }

    /// Same four-way read as the dashboard, derived into the wide feed.
    pub fn fetch_activities(&self, seq: FetchSeq) {
        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let (contacts, companies, deals, tasks) = tokio::join!(
                client.contacts(),
                client.companies(),
                client.deals(),
                client.tasks(),
            );
            let contacts = or_empty(contacts, "contacts");
            let companies = or_empty(companies, "companies");
            let deals = or_empty(deals, "deals");
            let tasks = or_empty(tasks, "tasks");

            let entries = aggregate::activity_feed(
                &contacts,
                &companies,
                &deals,
                &tasks,
                ACTIVITY_PAGE_LIMIT,
            );
            let _ = tx.send(AppEvent::ActivitiesLoaded { seq, entries });
        });
    }

    /// Resolve the current user. On failure the identity simply stays unset.
    pub fn fetch_session(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            match client.current_user().await {
                Ok(user) => {
                    let _ = tx.send(AppEvent::SessionResolved { user });
                }
                Err(e) => {
                    warn!(error = %e, "session fetch failed");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(url: String) -> StoreConfig {
        StoreConfig {
            url,
            api_key: "test-key".into(),
            timeout_secs: 5,
        }
    }

    #[tokio::test]
    async fn test_dashboard_fetch_folds_failures_to_empty() {
        let server = MockServer::start().await;
        // Only contacts succeeds; the other three collections 500.
        Mock::given(method("GET"))
            .and(path("/rest/v1/contacts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "c1", "name": "Ada", "created_at": "2024-03-01T10:00:00Z"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (tx, mut rx) = mpsc::unbounded_channel();
        let manager = StoreManager::new(&test_config(server.uri()), tx).unwrap();
        manager.fetch_dashboard(7);

        match rx.recv().await.unwrap() {
            AppEvent::DashboardLoaded { seq, data } => {
                assert_eq!(seq, 7);
                assert_eq!(data.stats.contacts, 1);
                assert_eq!(data.stats.companies, 0);
                assert_eq!(data.stats.deals, 0);
                assert_eq!(data.stats.tasks, 0);
                assert_eq!(data.activities.len(), 1);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_page_fetch_carries_seq() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let (tx, mut rx) = mpsc::unbounded_channel();
        let manager = StoreManager::new(&test_config(server.uri()), tx).unwrap();
        manager.fetch_page(Page::Tasks, 3);

        match rx.recv().await.unwrap() {
            AppEvent::TasksLoaded { seq, records } => {
                assert_eq!(seq, 3);
                assert!(records.is_empty());
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
