//! Page composition
//!
//! [`HomePage`] decides *which* child units appear and *where*; it owns no
//! state and never looks at the store. Everything a child shows comes from the
//! [`RenderState`](crate::messages::RenderState) snapshot handed to it at draw
//! time.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::WIDE_LAYOUT_MIN_WIDTH;

/// A placeholder for one child unit of the home page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Search,
    SortControl,
    ProfileInfo,
    RepositoryList,
    LoadingIndicator,
}

impl Slot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Search => "Search",
            Slot::SortControl => "SortControl",
            Slot::ProfileInfo => "ProfileInfo",
            Slot::RepositoryList => "RepositoryList",
            Slot::LoadingIndicator => "LoadingIndicator",
        }
    }
}

/// Ordered, immutable list of the page's child placeholders
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLayout([Slot; 5]);

impl PageLayout {
    pub fn slots(&self) -> &[Slot] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Slot> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// The home page view container
pub struct HomePage;

impl HomePage {
    /// Emit the page structure. Pure and infallible: every call returns the
    /// same five slots in the same order.
    pub fn render() -> PageLayout {
        PageLayout([
            Slot::Search,
            Slot::SortControl,
            Slot::ProfileInfo,
            Slot::RepositoryList,
            Slot::LoadingIndicator,
        ])
    }

    /// Assign a screen rectangle to every slot of `layout`, in layout order.
    ///
    /// Search and sort controls stack at the top. Profile and repositories sit
    /// side by side when `area` is wide enough, stacked otherwise. The loading
    /// indicator takes a single line under them.
    pub fn arrange(layout: &PageLayout, area: Rect) -> Vec<(Slot, Rect)> {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search
                Constraint::Length(3), // Sort
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Spinner
            ])
            .split(area);

        let body = if area.width >= WIDE_LAYOUT_MIN_WIDTH {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
                .split(rows[2])
        } else {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(12), Constraint::Min(0)])
                .split(rows[2])
        };

        layout
            .iter()
            .map(|slot| {
                let rect = match slot {
                    Slot::Search => rows[0],
                    Slot::SortControl => rows[1],
                    Slot::ProfileInfo => body[0],
                    Slot::RepositoryList => body[1],
                    Slot::LoadingIndicator => rows[3],
                };
                (slot, rect)
            })
            .collect()
    }
}
