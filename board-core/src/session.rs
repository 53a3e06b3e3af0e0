use crate::model::UserId;

/// Who is looking at the board. Held in memory only and handed to every view
/// operation explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSession {
    user_id: Option<UserId>,
}

impl UserSession {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    /// Builds a session from optional raw input; blank ids count as anonymous.
    pub fn from_raw(user_id: Option<&str>) -> Self {
        match user_id.map(str::trim).filter(|s| !s.is_empty()) {
            Some(id) => Self::signed_in(UserId::new(id)),
            None => Self::anonymous(),
        }
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn sign_out(&mut self) {
        self.user_id = None;
    }
}
