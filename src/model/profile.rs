use serenity::all::{Member, UserId};

/// Display information for the user a notification is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub display_name: String,
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// Profile used when the member cannot be fetched (e.g. they left the guild).
    pub fn unknown(user_id: UserId) -> Self {
        Self {
            display_name: format!("User {}", user_id),
            avatar_url: None,
        }
    }
}

impl From<&Member> for UserProfile {
    fn from(member: &Member) -> Self {
        Self {
            display_name: member.display_name().to_string(),
            avatar_url: Some(member.user.face()),
        }
    }
}
