use crate::app::event::FetchSeq;
use crate::app::state::Page;

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    FetchPage { page: Page, seq: FetchSeq },
    FetchSession,
    Quit,
}
