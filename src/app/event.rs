use crossterm::event::Event as CrosstermEvent;

use crate::store::aggregate::{ActivityEntry, DashboardData};
use crate::store::records::{Company, Contact, Deal, Task, UserIdentity};

/// Fetch generation number. Every fetch cycle carries the sequence it was
/// issued under; results from a superseded cycle are discarded.
pub type FetchSeq = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Fetch cycle completions from the store manager
    DashboardLoaded {
        seq: FetchSeq,
        data: DashboardData,
    },
    ContactsLoaded {
        seq: FetchSeq,
        records: Vec<Contact>,
    },
    CompaniesLoaded {
        seq: FetchSeq,
        records: Vec<Company>,
    },
    DealsLoaded {
        seq: FetchSeq,
        records: Vec<Deal>,
    },
    TasksLoaded {
        seq: FetchSeq,
        records: Vec<Task>,
    },
    ActivitiesLoaded {
        seq: FetchSeq,
        entries: Vec<ActivityEntry>,
    },

    /// Session endpoint resolved the current user
    SessionResolved {
        user: UserIdentity,
    },

    /// Tick for UI refresh
    Tick,
}
