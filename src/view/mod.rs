//! Presentation: UI-local state, the screen model, and text rendering.
//!
//! Rendering is a pure function of the store and [`ViewState`]: a
//! [`Session`] applies one [`ViewEvent`] at a time and the caller rebuilds the
//! [`Screen`] afterwards.

mod render;
mod screen;
mod session;
pub mod time;

pub use render::render;
pub use screen::{DetailPane, Layout, ListRow, NARROW_WIDTH, Screen};
pub use session::{EventOutcome, Session, ViewEvent};

/// Fallback preview for a note with empty content.
pub const NO_CONTENT: &str = "No content";

/// Which pane a narrow viewport shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pane {
    #[default]
    List,
    Detail,
}

/// UI state that lives outside the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Current search box contents.
    pub search: String,
    /// Set right after a note is created; only drives title autofocus.
    pub just_created: bool,
    /// Pane shown on narrow viewports.
    pub pane: Pane,
}

pub(crate) use render::truncate_str;
