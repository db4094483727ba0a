use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Permission {
    ManageStory,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ManageStory => "MANAGE_COMMUNITY_STORY",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Permission lookups backed by the client session.
pub trait PermissionChecker {
    /// Network-wide permission of the current user.
    fn has_permission(&self, permission: Permission) -> bool;

    fn has_community_permission(&self, permission: Permission, community_id: &str) -> bool;
}

/// Whether the current user may manage stories, globally or in `community_id`.
///
/// Without a client nothing is permitted.
pub fn check_story_permission(
    client: Option<&dyn PermissionChecker>,
    community_id: Option<&str>,
) -> bool {
    let Some(client) = client else {
        return false;
    };

    if client.has_permission(Permission::ManageStory) {
        return true;
    }

    community_id.is_some_and(|community_id| {
        client.has_community_permission(Permission::ManageStory, community_id)
    })
}

#[cfg(test)]
mod tests {
    use super::{check_story_permission, Permission, PermissionChecker};

    struct FakeClient {
        global: bool,
        communities: Vec<&'static str>,
    }

    impl PermissionChecker for FakeClient {
        fn has_permission(&self, _permission: Permission) -> bool {
            self.global
        }

        fn has_community_permission(&self, _permission: Permission, community_id: &str) -> bool {
            self.communities.contains(&community_id)
        }
    }

    #[test]
    fn no_client_denies() {
        assert!(!check_story_permission(None, Some("c1")));
    }

    #[test]
    fn global_permission_wins_without_community() {
        let client = FakeClient {
            global: true,
            communities: vec![],
        };

        assert!(check_story_permission(Some(&client), None));
    }

    #[test]
    fn community_permission_needs_community_id() {
        let client = FakeClient {
            global: false,
            communities: vec!["c1"],
        };

        assert!(check_story_permission(Some(&client), Some("c1")));
        assert!(!check_story_permission(Some(&client), Some("c2")));
        assert!(!check_story_permission(Some(&client), None));
    }
}
