//! Drag gestures and per-task in-flight markers.

use crate::task::domain::{TaskId, TaskStatus};

/// Discrete drag-and-drop events dispatched on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    /// A card was picked up.
    Start {
        /// Dragged task.
        task_id: TaskId,
    },
    /// A dragged card moved over a column.
    Over {
        /// Dragged task.
        task_id: TaskId,
        /// Hovered column.
        target: TaskStatus,
    },
    /// A dragged card was released over a column.
    Drop {
        /// Dragged task.
        task_id: TaskId,
        /// Column the card was released over.
        target: TaskStatus,
    },
    /// A drag ended without a drop.
    Cancel {
        /// Dragged task.
        task_id: TaskId,
    },
}

/// Why a task is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InFlight {
    /// Picked up and not yet released.
    Dragging {
        /// Column currently hovered, if any.
        over: Option<TaskStatus>,
    },
    /// Status update issued and not yet acknowledged.
    Updating {
        /// Requested status.
        target: TaskStatus,
    },
    /// Delete issued and not yet acknowledged.
    Deleting,
}

impl InFlight {
    /// Returns whether a request for the task is outstanding.
    #[must_use]
    pub const fn is_pending_request(self) -> bool {
        matches!(self, Self::Updating { .. } | Self::Deleting)
    }

    /// Returns the hovered column of an active drag.
    #[must_use]
    pub const fn hovered(self) -> Option<TaskStatus> {
        match self {
            Self::Dragging { over } => over,
            Self::Updating { .. } | Self::Deleting => None,
        }
    }
}
