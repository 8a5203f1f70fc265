pub mod actions;
pub mod drag;
pub mod error;
pub mod notify;
pub mod patch;
pub mod store;

pub use actions::board::ColumnEdit;
pub use drag::{DragItem, DragState};
pub use error::{ActionError, ActionResult};
pub use notify::{LogNotifier, Notifier};
pub use store::BoardStore;
