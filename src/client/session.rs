use serde::{Deserialize, Serialize};

use crate::models::users::{AuthResult, PublicUser};

/// Who the client is currently acting as.
///
/// Passed explicitly to whatever needs to attach credentials, and
/// serializable so a front end can keep it in storage between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { token: String, user: PublicUser },
}

impl Session {
    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { token, .. } => Some(token),
        }
    }

    pub fn user(&self) -> Option<&PublicUser> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { user, .. } => Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    /// Editing controls are shown only to a logged-in user.
    pub fn can_edit(&self) -> bool {
        self.is_authenticated()
    }

    /// Value for the `Authorization` header, if any.
    pub fn authorization_header(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {}", token))
    }
}

impl From<AuthResult> for Session {
    fn from(result: AuthResult) -> Self {
        Session::Authenticated {
            token: result.token,
            user: result.user,
        }
    }
}
