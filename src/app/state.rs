use std::time::Instant;

use chrono::{DateTime, Local};

use crate::app::event::FetchSeq;
use crate::config::AppConfig;
use crate::store::aggregate::{ActivityEntry, DashboardData};
use crate::store::records::{Company, Contact, Deal, Task, UserIdentity};

/// The navigable pages of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Contacts,
    Companies,
    Deals,
    Tasks,
    Activities,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Contacts,
        Page::Companies,
        Page::Deals,
        Page::Tasks,
        Page::Activities,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Contacts => "Contacts",
            Page::Companies => "Companies",
            Page::Deals => "Deals",
            Page::Tasks => "Tasks",
            Page::Activities => "Activities",
        }
    }

    pub fn index(self) -> usize {
        Page::ALL
            .iter()
            .position(|p| *p == self)
            .unwrap_or_default()
    }
}

/// Per-page view state: a loading marker while a fetch cycle is in flight,
/// otherwise the fetched value. Replaced wholesale on every fetch; render
/// code only ever reads it.
#[derive(Debug, Clone, PartialEq)]
pub enum PageData<T> {
    Loading,
    Ready(T),
}

impl<T> PageData<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageData::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            PageData::Loading => None,
            PageData::Ready(value) => Some(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Sidebar,
    Content,
}

pub struct AppState {
    pub config: AppConfig,
    pub page: Page,
    pub focus: FocusPanel,
    pub sidebar_cursor: usize,
    /// Row selection for the active page's list, if it has one.
    pub selection: usize,
    pub dashboard: PageData<DashboardData>,
    pub contacts: PageData<Vec<Contact>>,
    pub companies: PageData<Vec<Company>>,
    pub deals: PageData<Vec<Deal>>,
    pub tasks: PageData<Vec<Task>>,
    pub activities: PageData<Vec<ActivityEntry>>,
    pub user: Option<UserIdentity>,
    pub fetch_seq: FetchSeq,
    pub last_loaded: Option<DateTime<Local>>,
    pub last_refresh: Instant,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            page: Page::Dashboard,
            focus: FocusPanel::Content,
            sidebar_cursor: 0,
            selection: 0,
            dashboard: PageData::Loading,
            contacts: PageData::Loading,
            companies: PageData::Loading,
            deals: PageData::Loading,
            tasks: PageData::Loading,
            activities: PageData::Loading,
            user: None,
            fetch_seq: 0,
            last_loaded: None,
            last_refresh: Instant::now(),
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    /// Start a new fetch cycle for the active page: bump the generation,
    /// drop the page's previous view state, and return the sequence the
    /// fetch tasks must carry.
    pub fn begin_fetch(&mut self) -> FetchSeq {
        self.fetch_seq += 1;
        self.last_refresh = Instant::now();
        match self.page {
            Page::Dashboard => self.dashboard = PageData::Loading,
            Page::Contacts => self.contacts = PageData::Loading,
            Page::Companies => self.companies = PageData::Loading,
            Page::Deals => self.deals = PageData::Loading,
            Page::Tasks => self.tasks = PageData::Loading,
            Page::Activities => self.activities = PageData::Loading,
        }
        self.dirty = true;
        self.fetch_seq
    }

    /// Whether the active page is still waiting on its fetch cycle.
    pub fn page_loading(&self) -> bool {
        match self.page {
            Page::Dashboard => self.dashboard.is_loading(),
            Page::Contacts => self.contacts.is_loading(),
            Page::Companies => self.companies.is_loading(),
            Page::Deals => self.deals.is_loading(),
            Page::Tasks => self.tasks.is_loading(),
            Page::Activities => self.activities.is_loading(),
        }
    }

    /// Number of selectable rows on the active page.
    pub fn page_rows(&self) -> usize {
        match self.page {
            Page::Dashboard => 0,
            Page::Contacts => self.contacts.ready().map(Vec::len).unwrap_or(0),
            Page::Companies => self.companies.ready().map(Vec::len).unwrap_or(0),
            Page::Deals => self.deals.ready().map(Vec::len).unwrap_or(0),
            Page::Tasks => self.tasks.ready().map(Vec::len).unwrap_or(0),
            Page::Activities => self.activities.ready().map(Vec::len).unwrap_or(0),
        }
    }

    pub fn clamp_selection(&mut self) {
        let rows = self.page_rows();
        if rows == 0 {
            self.selection = 0;
        } else if self.selection >= rows {
            self.selection = rows - 1;
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Sidebar => FocusPanel::Content,
            FocusPanel::Content => FocusPanel::Sidebar,
        };
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if self.page_loading() {
            return format!("Loading {}…", self.page.title().to_lowercase());
        }
        let rows = self.page_rows();
        let loaded = self
            .last_loaded
            .map(|t| t.format(&self.config.ui.timestamp_format).to_string());
        match (self.page, loaded) {
            (Page::Dashboard, Some(at)) => format!("Updated {}", at),
            (Page::Dashboard, None) => "Ready".to_string(),
            (_, Some(at)) => format!("{} records | Updated {}", rows, at),
            (_, None) => format!("{} records", rows),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_selection_to_rows() {
        let mut state = AppState::new(AppConfig::default());
        state.page = Page::Contacts;
        state.contacts = PageData::Ready(Vec::new());
        state.selection = 3;
        state.clamp_selection();
        assert_eq!(state.selection, 0);

        state.page = Page::Dashboard;
        state.selection = 9;
        state.clamp_selection();
        assert_eq!(state.selection, 0);
    }

    #[test]
    fn test_begin_fetch_bumps_seq_and_marks_loading() {
        let mut state = AppState::new(AppConfig::default());
        state.page = Page::Deals;
        state.deals = PageData::Ready(Vec::new());
        let seq = state.begin_fetch();
        assert_eq!(seq, 1);
        assert!(state.deals.is_loading());
        assert!(state.page_loading());
        assert_eq!(state.begin_fetch(), 2);
    }

    #[test]
    fn test_cycle_focus_round_trips() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(state.focus, FocusPanel::Content);
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::Sidebar);
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::Content);
    }

    #[test]
    fn test_page_index_round_trips() {
        for page in Page::ALL {
            assert_eq!(Page::ALL[page.index()], page);
        }
    }
}
