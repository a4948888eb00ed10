use serde::Serialize;

use super::github_user::GithubUser;

pub type RequestId = u64;

/// Lifecycle of the most recently issued lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum QueryState {
    #[default]
    Idle,
    Loading {
        request_id: RequestId,
    },
    Success {
        request_id: RequestId,
        profile: GithubUser,
    },
    Failure {
        request_id: RequestId,
        message: String,
    },
}

impl QueryState {
    /// Id of the request this state belongs to, `None` while idle.
    pub fn request_id(&self) -> Option<RequestId> {
        match self {
            QueryState::Idle => None,
            QueryState::Loading { request_id }
            | QueryState::Success { request_id, .. }
            | QueryState::Failure { request_id, .. } => Some(*request_id),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_has_no_request_id() {
        assert_eq!(QueryState::default(), QueryState::Idle);
        assert_eq!(QueryState::Idle.request_id(), None);
    }

    #[test]
    fn serializes_with_state_tag() {
        let state = QueryState::Failure {
            request_id: 3,
            message: "User not found".into(),
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "state": "failure", "request_id": 3, "message": "User not found" })
        );
    }
}
