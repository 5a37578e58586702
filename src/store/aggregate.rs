//! Client-side aggregation of the four record collections.
//!
//! Pure transforms: given whatever the fetch cycle produced (a failed
//! collection arrives here as an empty slice), build the summary counters,
//! the recent-deals and upcoming-tasks windows, and the unified activity
//! feed. Recomputed wholesale on every fetch; nothing here is persisted.

use chrono::{DateTime, Utc};

use crate::store::records::{Company, Contact, Deal, Task};

/// Dashboard window sizes.
pub const RECENT_DEALS_LIMIT: usize = 5;
pub const UPCOMING_TASKS_LIMIT: usize = 5;
pub const FEED_LIMIT: usize = 10;

/// The Activities page shows a wider window over the same derivation.
pub const ACTIVITY_PAGE_LIMIT: usize = 50;

/// Summary counters across the four collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub contacts: usize,
    pub companies: usize,
    pub deals: usize,
    pub deals_value: f64,
    pub tasks: usize,
    pub completed_tasks: usize,
}

/// Which collection an activity entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Contact,
    Company,
    Deal,
    Task,
}

impl ActivityKind {
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Contact => "contact",
            ActivityKind::Company => "company",
            ActivityKind::Deal => "deal",
            ActivityKind::Task => "task",
        }
    }
}

/// One line of the derived cross-entity timeline. The timestamp is always
/// the source record's creation timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub label: String,
    pub timestamp: DateTime<Utc>,
}

impl ActivityEntry {
    pub fn describe(&self) -> String {
        match self.kind {
            ActivityKind::Contact => format!("New contact: {}", self.label),
            ActivityKind::Company => format!("New company: {}", self.label),
            ActivityKind::Deal => format!("New deal: {}", self.label),
            ActivityKind::Task => format!("New task: {}", self.label),
        }
    }
}

/// Everything the dashboard page renders, built in one pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub recent_deals: Vec<Deal>,
    pub upcoming_tasks: Vec<Task>,
    pub activities: Vec<ActivityEntry>,
}

impl DashboardData {
    pub fn aggregate(
        contacts: &[Contact],
        companies: &[Company],
        deals: &[Deal],
        tasks: &[Task],
    ) -> Self {
        let stats = DashboardStats {
            contacts: contacts.len(),
            companies: companies.len(),
            deals: deals.len(),
            deals_value: deals.iter().map(Deal::value).sum(),
            tasks: tasks.len(),
            completed_tasks: tasks.iter().filter(|t| t.is_completed()).count(),
        };

        let mut recent_deals = deals.to_vec();
        recent_deals.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent_deals.truncate(RECENT_DEALS_LIMIT);

        let mut upcoming_tasks: Vec<Task> = tasks
            .iter()
            .filter(|t| !t.is_completed())
            .cloned()
            .collect();
        // Dateless tasks sort after every dated task.
        upcoming_tasks.sort_by_key(|t| (t.due_date.is_none(), t.due_date));
        upcoming_tasks.truncate(UPCOMING_TASKS_LIMIT);

        let activities = activity_feed(contacts, companies, deals, tasks, FEED_LIMIT);

        Self {
            stats,
            recent_deals,
            upcoming_tasks,
            activities,
        }
    }
}

/// Merge the four collections into a recency-ordered timeline, newest first,
/// truncated to `limit`.
pub fn activity_feed(
    contacts: &[Contact],
    companies: &[Company],
    deals: &[Deal],
    tasks: &[Task],
    limit: usize,
) -> Vec<ActivityEntry> {
    let mut entries =
        Vec::with_capacity(contacts.len() + companies.len() + deals.len() + tasks.len());

    for c in contacts {
        entries.push(ActivityEntry {
            kind: ActivityKind::Contact,
            label: c.name.clone(),
            timestamp: c.created_at,
        });
    }
    for c in companies {
        entries.push(ActivityEntry {
            kind: ActivityKind::Company,
            label: c.name.clone(),
            timestamp: c.created_at,
        });
    }
    for d in deals {
        entries.push(ActivityEntry {
            kind: ActivityKind::Deal,
            label: d.name.clone(),
            timestamp: d.created_at,
        });
    }
    for t in tasks {
        entries.push(ActivityEntry {
            kind: ActivityKind::Task,
            label: t.title.clone(),
            timestamp: t.created_at,
        });
    }

    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::records::{DealStage, TaskPriority, TaskStatus};
    use chrono::{NaiveDate, TimeZone};

    fn ts(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
    }

    fn contact(id: &str, day: u32) -> Contact {
        Contact {
            id: id.into(),
            name: format!("contact {id}"),
            email: None,
            phone: None,
            company_name: None,
            created_at: ts(day, 9),
        }
    }

    fn company(id: &str, day: u32) -> Company {
        Company {
            id: id.into(),
            name: format!("company {id}"),
            industry: None,
            created_at: ts(day, 10),
        }
    }

    fn deal(id: &str, value: Option<f64>, day: u32) -> Deal {
        Deal {
            id: id.into(),
            name: format!("deal {id}"),
            value,
            stage: DealStage::New,
            company_name: None,
            created_at: ts(day, 11),
        }
    }

    fn task(id: &str, status: TaskStatus, due: Option<(i32, u32, u32)>, day: u32) -> Task {
        Task {
            id: id.into(),
            title: format!("task {id}"),
            due_date: due.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()),
            priority: TaskPriority::Medium,
            status,
            created_at: ts(day, 12),
        }
    }

    #[test]
    fn test_deal_value_sum_treats_missing_as_zero() {
        let deals = vec![
            deal("a", Some(100.0), 1),
            deal("b", None, 2),
            deal("c", Some(250.5), 3),
        ];
        let data = DashboardData::aggregate(&[], &[], &deals, &[]);
        assert_eq!(data.stats.deals_value, 350.5);
        assert_eq!(data.stats.deals, 3);
    }

    #[test]
    fn test_completed_task_count() {
        let tasks = vec![
            task("a", TaskStatus::Completed, None, 1),
            task("b", TaskStatus::Pending, None, 2),
            task("c", TaskStatus::InProgress, None, 3),
            task("d", TaskStatus::Completed, None, 4),
        ];
        let data = DashboardData::aggregate(&[], &[], &[], &tasks);
        assert_eq!(data.stats.tasks, 4);
        assert_eq!(data.stats.completed_tasks, 2);
    }

    #[test]
    fn test_recent_deals_sorted_desc_and_capped() {
        let deals: Vec<Deal> = (1..=8).map(|d| deal(&d.to_string(), None, d)).collect();
        let data = DashboardData::aggregate(&[], &[], &deals, &[]);
        assert_eq!(data.recent_deals.len(), RECENT_DEALS_LIMIT);
        for pair in data.recent_deals.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
        // Newest deal first.
        assert_eq!(data.recent_deals[0].id, "8");
    }

    #[test]
    fn test_upcoming_tasks_excludes_completed_and_sorts_dateless_last() {
        let tasks = vec![
            task("done", TaskStatus::Completed, Some((2024, 4, 1)), 1),
            task("late", TaskStatus::Pending, Some((2024, 4, 20)), 2),
            task("none", TaskStatus::Pending, None, 3),
            task("soon", TaskStatus::Pending, Some((2024, 4, 5)), 4),
        ];
        let data = DashboardData::aggregate(&[], &[], &[], &tasks);
        let ids: Vec<&str> = data.upcoming_tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["soon", "late", "none"]);
    }

    #[test]
    fn test_upcoming_tasks_capped_at_five() {
        let tasks: Vec<Task> = (1..=9)
            .map(|d| task(&d.to_string(), TaskStatus::Pending, Some((2024, 4, d)), 1))
            .collect();
        let data = DashboardData::aggregate(&[], &[], &[], &tasks);
        assert_eq!(data.upcoming_tasks.len(), UPCOMING_TASKS_LIMIT);
        assert_eq!(data.upcoming_tasks[0].id, "1");
    }

    #[test]
    fn test_activity_feed_sorted_capped_and_tagged() {
        let contacts: Vec<Contact> = (1..=4).map(|d| contact(&d.to_string(), d)).collect();
        let companies: Vec<Company> = (5..=8).map(|d| company(&d.to_string(), d)).collect();
        let deals: Vec<Deal> = (9..=12).map(|d| deal(&d.to_string(), None, d)).collect();
        let tasks: Vec<Task> = (13..=16)
            .map(|d| task(&d.to_string(), TaskStatus::Pending, None, d))
            .collect();

        let feed = activity_feed(&contacts, &companies, &deals, &tasks, FEED_LIMIT);
        assert_eq!(feed.len(), FEED_LIMIT);
        for pair in feed.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
        // Newest records are tasks (days 13..=16), then deals.
        assert_eq!(feed[0].kind, ActivityKind::Task);
        assert!(feed.iter().any(|e| e.kind == ActivityKind::Deal));
    }

    #[test]
    fn test_activity_timestamp_matches_source_record() {
        let c = contact("x", 7);
        let feed = activity_feed(std::slice::from_ref(&c), &[], &[], &[], FEED_LIMIT);
        assert_eq!(feed[0].timestamp, c.created_at);
        assert_eq!(feed[0].kind, ActivityKind::Contact);
        assert_eq!(feed[0].label, c.name);
    }

    #[test]
    fn test_scenario_mixed_collections() {
        let contacts: Vec<Contact> = (1..=3).map(|d| contact(&d.to_string(), d)).collect();
        let companies: Vec<Company> = (1..=2).map(|d| company(&d.to_string(), d)).collect();
        let deals = vec![deal("only", Some(1000.0), 5)];
        let tasks = vec![
            task("done", TaskStatus::Completed, None, 6),
            task("open", TaskStatus::Pending, None, 7),
        ];

        let data = DashboardData::aggregate(&contacts, &companies, &deals, &tasks);
        assert_eq!(data.stats.contacts, 3);
        assert_eq!(data.stats.companies, 2);
        assert_eq!(data.stats.deals, 1);
        assert_eq!(data.stats.deals_value, 1000.0);
        assert_eq!(data.stats.tasks, 2);
        assert_eq!(data.stats.completed_tasks, 1);
    }

    #[test]
    fn test_scenario_all_empty() {
        let data = DashboardData::aggregate(&[], &[], &[], &[]);
        assert_eq!(data.stats, DashboardStats::default());
        assert!(data.recent_deals.is_empty());
        assert!(data.upcoming_tasks.is_empty());
        assert!(data.activities.is_empty());
    }
}
