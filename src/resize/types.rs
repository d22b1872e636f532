/// Notification sent to the host around a table resize.
#[derive(Debug, Clone, PartialEq)]
pub enum ResizeNotification<E> {
    /// A resize is about to start. Sizes are the table's rendered size before any change.
    Start { target: E, width: f64, height: f64 },
    /// A resize finished. Sizes are the table's final rendered size.
    End { target: E, width: f64, height: f64 },
}

impl<E> ResizeNotification<E> {
    pub fn target(&self) -> &E {
        match self {
            Self::Start { target, .. } | Self::End { target, .. } => target,
        }
    }
}

/// Edge being dragged during a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// Boundary to the end of the column with this index.
    ///
    /// The boundary after the last column is the table's own trailing edge.
    Column(usize),
    /// Trailing edge of the table.
    TableEdge,
}

impl DragTarget {
    /// Index of the column left of the boundary, if it is an internal one.
    pub fn internal_boundary(self, column_count: usize) -> Option<usize> {
        match self {
            Self::Column(idx) if idx + 1 < column_count => Some(idx),
            _ => None,
        }
    }
}

/// State of a [`ResizeHandler`](super::ResizeHandler).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerState {
    /// Waiting for a resize to start.
    Idle,
    /// A resize session is in progress.
    Dragging,
    /// The handler was torn down and ignores all further events.
    Destroyed,
}
