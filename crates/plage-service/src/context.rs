use plage_core::{AppError, AppResult};
use plage_entity::reservation::Actor;
use plage_entity::user::{User, UserRole};
use uuid::Uuid;

/// Identity of the authenticated caller, carried through every service call.
///
/// Built by the HTTP layer after the token has been verified and the user
/// row has been re-read, so the role here is always the live one.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
}

impl RequestContext {
    pub fn new(user_id: Uuid, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_id,
            email: email.into(),
            role,
        }
    }

    pub fn for_user(user: &User) -> Self {
        Self::new(user.id, user.email.clone(), user.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Refuse the call unless the caller is an administrator.
    pub fn require_admin(&self) -> AppResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::authorization("Administrator access required"))
        }
    }

    /// How this caller relates to a resource owned by `owner_id`.
    pub fn actor_for(&self, owner_id: Uuid) -> Actor {
        if self.is_admin() {
            Actor::Admin
        } else if self.user_id == owner_id {
            Actor::Owner
        } else {
            Actor::Other
        }
    }
}
