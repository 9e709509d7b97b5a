//! Domain model for the board.

mod card;
mod column;
mod drag;
mod notice;
mod view;

pub use card::{BadgeTone, PriorityBadge, TaskCard, format_date_range};
pub use column::{Column, partition};
pub use drag::{DragEvent, InFlight};
pub use notice::{BoardNotice, FailureKind, NoticeOperation};
pub use view::{BoardView, ColumnView};
