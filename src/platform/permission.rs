use async_trait::async_trait;

/// Notification permission as the host reports it.
///
/// `Default` means the user has not decided yet (or dismissed the prompt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Permission {
    Granted,
    Denied,
    #[default]
    Default,
}

impl Permission {
    pub fn is_granted(self) -> bool {
        self == Permission::Granted
    }
}

/// Host capability for notification permission.
#[async_trait]
pub trait NotificationPermission: Send + Sync {
    /// Current permission, without prompting.
    fn query_permission(&self) -> Permission;

    /// Ask the user. Resolves once they answer or dismiss the prompt.
    async fn request_permission(&self) -> Permission;
}
