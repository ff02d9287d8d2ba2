//! Dashboard composition: grid packing, widget editing, refresh tracking
//!
//! The editor owns one dashboard and mutates it synchronously; the whole
//! widget collection plus the opaque layout blob is persisted atomically on
//! explicit save.

pub mod editor;
pub mod grid;
pub mod refresh;

pub use editor::{DashboardEditor, WidgetTemplate};
pub use grid::GridLayout;
pub use refresh::RefreshSchedule;
