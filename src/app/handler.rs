use std::time::Duration;

use chrono::Local;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::app::action::Action;
use crate::app::event::{AppEvent, FetchSeq};
use crate::app::state::{AppState, FocusPanel, Page, PageData};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::DashboardLoaded { seq, data } => {
            if accept_fetch(state, seq) {
                state.dashboard = PageData::Ready(data);
                finish_load(state);
            }
            vec![]
        }
        AppEvent::ContactsLoaded { seq, records } => {
            if accept_fetch(state, seq) {
                state.contacts = PageData::Ready(records);
                finish_load(state);
            }
            vec![]
        }
        AppEvent::CompaniesLoaded { seq, records } => {
            if accept_fetch(state, seq) {
                state.companies = PageData::Ready(records);
                finish_load(state);
            }
            vec![]
        }
        AppEvent::DealsLoaded { seq, records } => {
            if accept_fetch(state, seq) {
                state.deals = PageData::Ready(records);
                finish_load(state);
            }
            vec![]
        }
        AppEvent::TasksLoaded { seq, records } => {
            if accept_fetch(state, seq) {
                state.tasks = PageData::Ready(records);
                finish_load(state);
            }
            vec![]
        }
        AppEvent::ActivitiesLoaded { seq, entries } => {
            if accept_fetch(state, seq) {
                state.activities = PageData::Ready(entries);
                finish_load(state);
            }
            vec![]
        }
        AppEvent::SessionResolved { user } => {
            state.user = Some(user);
            state.dirty = true;
            vec![]
        }
        AppEvent::Tick => handle_tick(state),
    }
}

/// A fetch result is only applied if it belongs to the current generation;
/// anything else was superseded by a navigation or refresh and is dropped.
fn accept_fetch(state: &AppState, seq: FetchSeq) -> bool {
    if seq == state.fetch_seq {
        true
    } else {
        debug!(seq, current = state.fetch_seq, "dropping stale fetch result");
        false
    }
}

fn finish_load(state: &mut AppState) {
    state.last_loaded = Some(Local::now());
    state.clamp_selection();
    state.dirty = true;
}

/// Switch to `page`, resetting selection and (by default) re-issuing its
/// fetch cycle. Previously fetched state for the page is dropped wholesale.
pub fn navigate(state: &mut AppState, page: Page) -> Vec<Action> {
    state.page = page;
    state.sidebar_cursor = page.index();
    state.selection = 0;
    state.dirty = true;

    if state.config.behavior.refresh_on_navigate || state.page_loading() {
        let seq = state.begin_fetch();
        vec![Action::FetchPage { page, seq }]
    } else {
        vec![]
    }
}

fn refresh(state: &mut AppState) -> Vec<Action> {
    let seq = state.begin_fetch();
    let mut actions = vec![Action::FetchPage {
        page: state.page,
        seq,
    }];
    // Retry the session lookup until an identity sticks.
    if state.user.is_none() {
        actions.push(Action::FetchSession);
    }
    actions
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);

    // Keep the spinner animating while a fetch is in flight.
    if state.page_loading() {
        state.dirty = true;
    }

    let every = state.config.behavior.auto_refresh_secs;
    if every > 0 && state.last_refresh.elapsed() > Duration::from_secs(every) {
        return refresh(state);
    }

    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return vec![Action::Quit],
        KeyCode::Tab => {
            state.cycle_focus();
            return vec![];
        }
        KeyCode::Char('r') => return refresh(state),
        KeyCode::Char(c @ '1'..='6') => {
            let idx = (c as usize) - ('1' as usize);
            return navigate(state, Page::ALL[idx]);
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::Sidebar => handle_sidebar_key(state, key),
        FocusPanel::Content => handle_content_key(state, key),
    }
}

fn handle_sidebar_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.sidebar_cursor = state.sidebar_cursor.saturating_sub(1);
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.sidebar_cursor + 1 < Page::ALL.len() {
                state.sidebar_cursor += 1;
            }
            vec![]
        }
        KeyCode::Enter | KeyCode::Right => {
            let page = Page::ALL[state.sidebar_cursor];
            state.focus = FocusPanel::Content;
            navigate(state, page)
        }
        _ => vec![],
    }
}

fn handle_content_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let rows = state.page_rows();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.selection = state.selection.saturating_sub(1);
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.selection + 1 < rows {
                state.selection += 1;
            }
            vec![]
        }
        KeyCode::PageUp => {
            state.selection = state.selection.saturating_sub(10);
            vec![]
        }
        KeyCode::PageDown => {
            if rows > 0 {
                state.selection = (state.selection + 10).min(rows - 1);
            }
            vec![]
        }
        KeyCode::Home => {
            state.selection = 0;
            vec![]
        }
        KeyCode::End => {
            if rows > 0 {
                state.selection = rows - 1;
            }
            vec![]
        }
        KeyCode::Left => {
            state.focus = FocusPanel::Sidebar;
            vec![]
        }
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::store::aggregate::DashboardData;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn test_navigate_issues_tagged_fetch() {
        let mut state = AppState::new(AppConfig::default());
        let actions = navigate(&mut state, Page::Deals);
        assert_eq!(state.page, Page::Deals);
        assert_eq!(state.sidebar_cursor, Page::Deals.index());
        assert_eq!(
            actions,
            vec![Action::FetchPage {
                page: Page::Deals,
                seq: 1
            }]
        );
    }

    #[test]
    fn test_number_keys_navigate() {
        let mut state = AppState::new(AppConfig::default());
        let actions = handle_event(&mut state, key(KeyCode::Char('4')));
        assert_eq!(state.page, Page::Deals);
        assert_eq!(
            actions,
            vec![Action::FetchPage {
                page: Page::Deals,
                seq: 1
            }]
        );
    }

    #[test]
    fn test_stale_fetch_result_is_dropped() {
        let mut state = AppState::new(AppConfig::default());
        let _ = navigate(&mut state, Page::Dashboard); // seq 1
        let _ = navigate(&mut state, Page::Contacts); // seq 2, supersedes

        let _ = handle_event(
            &mut state,
            AppEvent::DashboardLoaded {
                seq: 1,
                data: DashboardData::default(),
            },
        );
        assert!(state.dashboard.is_loading());

        let _ = handle_event(
            &mut state,
            AppEvent::ContactsLoaded {
                seq: 2,
                records: Vec::new(),
            },
        );
        assert!(!state.contacts.is_loading());
    }

    #[test]
    fn test_current_fetch_result_is_applied() {
        let mut state = AppState::new(AppConfig::default());
        let _ = navigate(&mut state, Page::Dashboard);
        let seq = state.fetch_seq;
        let _ = handle_event(
            &mut state,
            AppEvent::DashboardLoaded {
                seq,
                data: DashboardData::default(),
            },
        );
        assert!(!state.page_loading());
        assert!(state.last_loaded.is_some());
    }

    #[test]
    fn test_quit_keys() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('q'))), vec![Action::Quit]);
        assert_eq!(handle_event(&mut state, key(KeyCode::Esc)), vec![Action::Quit]);
    }

    #[test]
    fn test_refresh_key_bumps_generation() {
        let mut state = AppState::new(AppConfig::default());
        let _ = navigate(&mut state, Page::Tasks); // seq 1
        let actions = handle_event(&mut state, key(KeyCode::Char('r')));
        assert_eq!(
            actions[0],
            Action::FetchPage {
                page: Page::Tasks,
                seq: 2
            }
        );
        // No identity yet, so refresh also retries the session lookup.
        assert!(actions.contains(&Action::FetchSession));
        assert!(state.tasks.is_loading());

        state.user = Some(crate::store::records::UserIdentity {
            id: "u1".into(),
            email: Some("rep@example.com".into()),
        });
        let actions = handle_event(&mut state, key(KeyCode::Char('r')));
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn test_sidebar_enter_navigates_and_focuses_content() {
        let mut state = AppState::new(AppConfig::default());
        state.focus = FocusPanel::Sidebar;
        let _ = handle_event(&mut state, key(KeyCode::Down));
        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(state.page, Page::Contacts);
        assert_eq!(state.focus, FocusPanel::Content);
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn test_content_selection_moves_within_rows() {
        let mut state = AppState::new(AppConfig::default());
        state.page = Page::Activities;
        state.activities = PageData::Ready(Vec::new());
        let _ = handle_event(&mut state, key(KeyCode::Down));
        assert_eq!(state.selection, 0);

        state.activities = PageData::Ready(vec![
            crate::store::aggregate::ActivityEntry {
                kind: crate::store::aggregate::ActivityKind::Task,
                label: "a".into(),
                timestamp: chrono::Utc::now(),
            },
            crate::store::aggregate::ActivityEntry {
                kind: crate::store::aggregate::ActivityKind::Task,
                label: "b".into(),
                timestamp: chrono::Utc::now(),
            },
        ]);
        let _ = handle_event(&mut state, key(KeyCode::Down));
        assert_eq!(state.selection, 1);
        let _ = handle_event(&mut state, key(KeyCode::Down));
        assert_eq!(state.selection, 1);
        let _ = handle_event(&mut state, key(KeyCode::Up));
        assert_eq!(state.selection, 0);
    }
}
