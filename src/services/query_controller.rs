use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::errors::LookupError;
use crate::models::github_user::GithubUser;
use crate::models::query_state::{QueryState, RequestId};
use crate::models::theme::ThemeState;
use crate::services::github_user_service::ProfileSource;

/// Owns the widget's query lifecycle and theme.
///
/// State is published through `watch` channels; every transition happens inside the
/// channel's write lock, so allocating an id, entering `Loading` and the stale check at
/// resolution never interleave.
#[derive(Clone)]
pub struct QueryController {
    source: Arc<dyn ProfileSource>,
    query: Arc<watch::Sender<QueryState>>,
    theme: Arc<watch::Sender<ThemeState>>,
    last_issued: Arc<AtomicU64>,
}

impl QueryController {
    pub fn new(source: Arc<dyn ProfileSource>) -> Self {
        let (query, _) = watch::channel(QueryState::Idle);
        let (theme, _) = watch::channel(ThemeState::default());
        QueryController {
            source,
            query: Arc::new(query),
            theme: Arc::new(theme),
            last_issued: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Starts a lookup for `username`, superseding whatever came before.
    ///
    /// Returns once the state is `Loading`; the result arrives later as a state change.
    pub fn submit(&self, username: &str) {
        self.dispatch(username);
    }

    fn dispatch(&self, username: &str) -> JoinHandle<()> {
        let mut request_id = 0;
        self.query.send_modify(|state| {
            request_id = self.last_issued.fetch_add(1, Ordering::SeqCst) + 1;
            *state = QueryState::Loading { request_id };
        });
        log::info!("Lookup #{} issued for {:?}", request_id, username);

        let controller = self.clone();
        let username = username.to_string();
        tokio::spawn(async move {
            let result = controller.source.get_by_username(&username).await;
            controller.resolve(request_id, result);
        })
    }

    /// Applies the outcome of request `request_id` if it is still the latest one.
    ///
    /// Returns whether the state changed.
    fn resolve(&self, request_id: RequestId, result: Result<GithubUser, LookupError>) -> bool {
        let applied = self.query.send_if_modified(|state| {
            match state {
                QueryState::Loading { request_id: current } if *current == request_id => {}
                _ => return false,
            }
            *state = match result {
                Ok(profile) => QueryState::Success { request_id, profile },
                Err(e) => QueryState::Failure {
                    request_id,
                    message: e.to_string(),
                },
            };
            true
        });

        if !applied {
            log::debug!("Lookup #{} discarded as stale", request_id);
        }
        applied
    }

    pub fn toggle_theme(&self) {
        self.theme.send_modify(|theme| *theme = theme.toggled());
    }

    pub fn query_state(&self) -> QueryState {
        self.query.borrow().clone()
    }

    pub fn theme(&self) -> ThemeState {
        *self.theme.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<QueryState> {
        self.query.subscribe()
    }
}
