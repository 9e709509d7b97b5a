//! Username lookup for card display.

use crate::task::domain::UserId;

/// Resolves user identifiers to display names.
///
/// The board holds users by identifier only and asks the directory for a
/// name when rendering a card.
pub trait UserDirectory: Send + Sync {
    /// Returns the username for `user_id`, if known.
    fn username(&self, user_id: UserId) -> Option<String>;
}
