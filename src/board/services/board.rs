//! Board service: partitioning, drag gestures, and status mutations.

use super::cache::{QueryCache, QueryState, SubscriptionId};
use crate::board::{
    domain::{
        BoardNotice, BoardView, ColumnView, DragEvent, InFlight, NoticeOperation, TaskCard,
        partition,
    },
    ports::{GatewayError, GatewayResult, TaskGateway, UserDirectory},
};
use crate::config::{BoardConfig, RetryPolicy};
use crate::task::domain::{Task, TaskFilter, TaskId, TaskStatus};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Result of releasing a dragged card over a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The task already had the target status; no request was sent.
    Unchanged,
    /// The update was acknowledged; carries the acknowledged task.
    Moved(Task),
    /// The update failed and the task kept its column.
    Failed(BoardNotice),
    /// A request for the task is still unresolved; the drop was dropped.
    Ignored,
    /// The task is not in the current collection.
    UnknownTask,
}

/// Result of pressing a card's delete affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The delete was acknowledged.
    Deleted,
    /// The delete failed and the task stays on the board.
    Failed(BoardNotice),
    /// A request for the task is still unresolved.
    Ignored,
    /// The task is not in the current collection.
    UnknownTask,
}

/// Result of dispatching a [`DragEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event changed the drag state.
    Accepted,
    /// The event did not apply to the task's current state.
    Ignored,
    /// The event was a drop.
    Dropped(DropOutcome),
}

#[derive(Debug, Default)]
struct Session {
    in_flight: HashMap<TaskId, InFlight>,
    notices: Vec<BoardNotice>,
}

/// Kanban board over one project's tasks.
///
/// Column membership comes only from the query cache. Moves and deletes
/// issue requests through the cache's gateway and, once acknowledged,
/// invalidate and re-read the collection. Session state is guarded by a
/// mutex that is never held across an await, so independent drops may be
/// awaited together.
pub struct BoardService<G, U>
where
    G: TaskGateway,
    U: UserDirectory,
{
    filter: TaskFilter,
    cache: Arc<QueryCache<G>>,
    users: Arc<U>,
    config: BoardConfig,
    session: Mutex<Session>,
}

impl<G, U> BoardService<G, U>
where
    G: TaskGateway,
    U: UserDirectory,
{
    /// Creates a board showing the tasks selected by `filter`.
    #[must_use]
    pub fn new(
        filter: TaskFilter,
        cache: Arc<QueryCache<G>>,
        users: Arc<U>,
        config: BoardConfig,
    ) -> Self {
        Self {
            filter,
            cache,
            users,
            config,
            session: Mutex::new(Session::default()),
        }
    }

    /// Returns the filter this board shows.
    #[must_use]
    pub const fn filter(&self) -> TaskFilter {
        self.filter
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reads the collection through the cache and returns the board.
    pub async fn load(&self) -> BoardView {
        let state = self.cache.get(self.filter).await;
        self.prune_markers(&state);
        self.view()
    }

    /// Forces a refetch of the collection and returns the board.
    pub async fn refresh(&self) -> BoardView {
        self.cache.invalidate(self.filter);
        self.load().await
    }

    /// Renders the board from the collection currently in the cache.
    ///
    /// Has no side effects.
    #[must_use]
    pub fn view(&self) -> BoardView {
        match self.cache.peek(self.filter) {
            None | Some(QueryState::Loading) => BoardView::Loading,
            Some(QueryState::Failed(err)) => BoardView::Failed {
                message: format!("An error occurred while fetching tasks: {err}"),
            },
            Some(QueryState::Ready(tasks)) => {
                let in_flight: HashMap<TaskId, InFlight> = self
                    .session()
                    .in_flight
                    .iter()
                    .filter(|(task_id, _)| tasks.iter().any(|task| task.id() == **task_id))
                    .map(|(task_id, marker)| (*task_id, *marker))
                    .collect();
                BoardView::Ready {
                    columns: self.render_columns(&tasks, &in_flight),
                }
            }
        }
    }

    fn render_columns(
        &self,
        tasks: &[Task],
        in_flight: &HashMap<TaskId, InFlight>,
    ) -> Vec<ColumnView> {
        partition(tasks)
            .into_iter()
            .map(|column| {
                let status = column.status();
                let highlighted = in_flight
                    .values()
                    .any(|marker| marker.hovered() == Some(status));
                let cards = column
                    .tasks()
                    .iter()
                    .map(|task| self.render_card(task, in_flight.contains_key(&task.id())))
                    .collect();
                ColumnView {
                    status,
                    accent_color: status.accent_color(),
                    count: column.count(),
                    highlighted,
                    cards,
                }
            })
            .collect()
    }

    fn render_card(&self, task: &Task, in_flight: bool) -> TaskCard {
        let author = self.users.username(task.author_id());
        let assignee = task
            .assignee_id()
            .and_then(|user_id| self.users.username(user_id));
        TaskCard::render(task, author, assignee, &self.config.date_format, in_flight)
    }

    fn current_task(&self, task_id: TaskId) -> Option<Task> {
        match self.cache.peek(self.filter)? {
            QueryState::Ready(tasks) => tasks.iter().find(|task| task.id() == task_id).cloned(),
            QueryState::Loading | QueryState::Failed(_) => None,
        }
    }

    /// Returns the in-flight marker of a task, if any.
    #[must_use]
    pub fn in_flight(&self, task_id: TaskId) -> Option<InFlight> {
        self.session().in_flight.get(&task_id).copied()
    }

    /// Drains the failure notices raised since the last call.
    pub fn take_notices(&self) -> Vec<BoardNotice> {
        std::mem::take(&mut self.session().notices)
    }

    /// Registers `listener` for every refresh of this board's collection.
    pub fn subscribe(
        &self,
        listener: impl Fn(&QueryState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.cache.subscribe(self.filter, listener)
    }

    /// Marks a task as dragged.
    ///
    /// Returns `false`, changing nothing, when the task is not on the board
    /// or is already in flight.
    pub fn begin_drag(&self, task_id: TaskId) -> bool {
        if self.current_task(task_id).is_none() {
            return false;
        }
        let mut session = self.session();
        if session.in_flight.contains_key(&task_id) {
            debug!(%task_id, "drag ignored, task already in flight");
            return false;
        }
        session
            .in_flight
            .insert(task_id, InFlight::Dragging { over: None });
        true
    }

    /// Records the column a dragged card hovers over.
    pub fn drag_over(&self, task_id: TaskId, target: TaskStatus) -> bool {
        let mut session = self.session();
        match session.in_flight.get_mut(&task_id) {
            Some(InFlight::Dragging { over }) => {
                *over = Some(target);
                true
            }
            _ => false,
        }
    }

    /// Ends a drag that was not dropped.
    pub fn cancel_drag(&self, task_id: TaskId) -> bool {
        let mut session = self.session();
        if matches!(
            session.in_flight.get(&task_id),
            Some(InFlight::Dragging { .. })
        ) {
            session.in_flight.remove(&task_id);
            return true;
        }
        false
    }

    /// Releases a card over the `target` column.
    ///
    /// Dropping onto the task's current column sends nothing. Otherwise one
    /// status update is issued; on acknowledgment the collection is
    /// invalidated and re-read, on failure the task keeps its column and a
    /// notice is queued. The column never changes before acknowledgment.
    pub async fn drop_task(&self, task_id: TaskId, target: TaskStatus) -> DropOutcome {
        let Some(task) = self.current_task(task_id) else {
            self.session().in_flight.remove(&task_id);
            return DropOutcome::UnknownTask;
        };

        {
            let mut session = self.session();
            if session
                .in_flight
                .get(&task_id)
                .is_some_and(|marker| marker.is_pending_request())
            {
                debug!(%task_id, "drop ignored, request outstanding");
                return DropOutcome::Ignored;
            }
            if task.status() == target {
                session.in_flight.remove(&task_id);
                return DropOutcome::Unchanged;
            }
            session
                .in_flight
                .insert(task_id, InFlight::Updating { target });
        }

        let gateway = Arc::clone(self.cache.gateway());
        let result = with_retry(self.config.retry, move || {
            let request_gateway = Arc::clone(&gateway);
            async move { request_gateway.update_status(task_id, target).await }
        })
        .await;

        match result {
            Ok(updated) => {
                info!(%task_id, from = %task.status(), to = %target, "task moved");
                self.refresh_collection().await;
                self.session().in_flight.remove(&task_id);
                DropOutcome::Moved(updated)
            }
            Err(err) => {
                let notice = self.fail(task_id, NoticeOperation::StatusUpdate, &err);
                DropOutcome::Failed(notice)
            }
        }
    }

    /// Deletes a task.
    ///
    /// The task stays visible until the delete is acknowledged and the
    /// collection has been re-read. On failure it stays and a notice with the
    /// failure kind is queued and returned.
    pub async fn delete_task(&self, task_id: TaskId) -> DeleteOutcome {
        if self.current_task(task_id).is_none() {
            return DeleteOutcome::UnknownTask;
        }

        {
            let mut session = self.session();
            if session
                .in_flight
                .get(&task_id)
                .is_some_and(|marker| marker.is_pending_request())
            {
                return DeleteOutcome::Ignored;
            }
            session.in_flight.insert(task_id, InFlight::Deleting);
        }

        let gateway = Arc::clone(self.cache.gateway());
        let result = with_retry(self.config.retry, move || {
            let request_gateway = Arc::clone(&gateway);
            async move { request_gateway.delete_task(task_id).await }
        })
        .await;

        match result {
            Ok(()) => {
                info!(%task_id, "task deleted from board");
                self.refresh_collection().await;
                self.session().in_flight.remove(&task_id);
                DeleteOutcome::Deleted
            }
            Err(err) => DeleteOutcome::Failed(self.fail(task_id, NoticeOperation::Delete, &err)),
        }
    }

    /// Applies a drag event.
    pub async fn dispatch(&self, event: DragEvent) -> EventOutcome {
        let accepted = match event {
            DragEvent::Start { task_id } => self.begin_drag(task_id),
            DragEvent::Over { task_id, target } => self.drag_over(task_id, target),
            DragEvent::Cancel { task_id } => self.cancel_drag(task_id),
            DragEvent::Drop { task_id, target } => {
                return EventOutcome::Dropped(self.drop_task(task_id, target).await);
            }
        };
        if accepted {
            EventOutcome::Accepted
        } else {
            EventOutcome::Ignored
        }
    }

    async fn refresh_collection(&self) {
        self.cache.invalidate(self.filter);
        let state = self.cache.get(self.filter).await;
        self.prune_markers(&state);
    }

    /// Drops markers of tasks that are no longer in a ready collection.
    fn prune_markers(&self, state: &QueryState) {
        let QueryState::Ready(tasks) = state else {
            return;
        };
        let mut session = self.session();
        session.in_flight.retain(|task_id, _| {
            let present = tasks.iter().any(|task| task.id() == *task_id);
            if !present {
                debug!(%task_id, "dropping marker of departed task");
            }
            present
        });
    }

    fn fail(&self, task_id: TaskId, operation: NoticeOperation, err: &GatewayError) -> BoardNotice {
        warn!(%task_id, ?operation, kind = %err.kind(), error = %err, "board request failed");
        let notice = BoardNotice {
            task_id,
            operation,
            kind: err.kind(),
            message: err.to_string(),
        };
        let mut session = self.session();
        session.in_flight.remove(&task_id);
        session.notices.push(notice.clone());
        notice
    }
}

/// Runs `request`, repeating it on network failures as `policy` allows.
async fn with_retry<T, F, Fut>(policy: RetryPolicy, request: F) -> GatewayResult<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = GatewayResult<T>>,
{
    let mut remaining = policy.extra_attempts();
    loop {
        match request().await {
            Err(GatewayError::Network(reason)) if remaining > 0 => {
                remaining -= 1;
                debug!(%reason, remaining, "retrying after network failure");
            }
            other => return other,
        }
    }
}
