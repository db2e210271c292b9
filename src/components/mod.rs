//! Child units of the home page
//!
//! Each unit draws itself from a read-only [`RenderState`] snapshot and, when
//! focused, turns key presses into [`UiEvent`]s for the store. Units never
//! talk to each other.

pub mod loading_indicator;
pub mod profile_info;
pub mod repository_list;
pub mod search_input;
pub mod sort_control;

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::layout::{HomePage, Slot};
use crate::messages::{Focus, RenderState, UiEvent};

pub use loading_indicator::LoadingIndicator;
pub use profile_info::ProfileInfo;
pub use repository_list::RepositoryList;
pub use search_input::SearchInput;
pub use sort_control::SortControl;

/// A view unit placed in one [`Slot`] of the page
pub trait ChildUnit {
    /// Slot this unit fills
    fn slot(&self) -> Slot;

    fn draw(&self, f: &mut Frame, area: Rect, state: &RenderState);

    /// Translate a key press while this unit has focus
    fn on_key(&self, _key: KeyEvent, _state: &RenderState) -> Option<UiEvent> {
        None
    }
}

static SEARCH_INPUT: SearchInput = SearchInput;
static SORT_CONTROL: SortControl = SortControl;
static PROFILE_INFO: ProfileInfo = ProfileInfo;
static REPOSITORY_LIST: RepositoryList = RepositoryList;
static LOADING_INDICATOR: LoadingIndicator = LoadingIndicator;

/// The unit that fills `slot`
pub fn unit(slot: Slot) -> &'static dyn ChildUnit {
    match slot {
        Slot::Search => &SEARCH_INPUT,
        Slot::SortControl => &SORT_CONTROL,
        Slot::ProfileInfo => &PROFILE_INFO,
        Slot::RepositoryList => &REPOSITORY_LIST,
        Slot::LoadingIndicator => &LOADING_INDICATOR,
    }
}

/// The unit that receives keys for `focus`
pub fn focused_unit(focus: Focus) -> &'static dyn ChildUnit {
    match focus {
        Focus::Search => unit(Slot::Search),
        Focus::SortControl => unit(Slot::SortControl),
        Focus::RepositoryList => unit(Slot::RepositoryList),
    }
}

/// Draw the whole home page into `area`
pub fn draw_page(f: &mut Frame, area: Rect, state: &RenderState) {
    let layout = HomePage::render();
    for (slot, rect) in HomePage::arrange(&layout, area) {
        unit(slot).draw(f, rect, state);
    }
}
