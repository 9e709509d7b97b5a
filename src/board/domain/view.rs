//! Render model for the whole board.

use super::TaskCard;
use crate::task::domain::TaskStatus;

/// One rendered column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    /// Column status label.
    pub status: TaskStatus,
    /// Column accent colour.
    pub accent_color: &'static str,
    /// Number of cards in the column.
    pub count: usize,
    /// Whether a dragged card is hovering over the column.
    pub highlighted: bool,
    /// Cards in collection order.
    pub cards: Vec<TaskCard>,
}

/// What the board shows right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardView {
    /// The task collection has not arrived yet.
    Loading,
    /// The task collection could not be fetched. No columns are shown.
    Failed {
        /// Error shown in place of the board.
        message: String,
    },
    /// Columns built from the authoritative collection.
    Ready {
        /// One entry per status in board order.
        columns: Vec<ColumnView>,
    },
}

impl BoardView {
    /// Returns the columns when the board is ready.
    #[must_use]
    pub fn columns(&self) -> Option<&[ColumnView]> {
        match self {
            Self::Ready { columns } => Some(columns),
            Self::Loading | Self::Failed { .. } => None,
        }
    }

    /// Returns the column for `status` when the board is ready.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Option<&ColumnView> {
        self.columns()?
            .iter()
            .find(|column| column.status == status)
    }
}
