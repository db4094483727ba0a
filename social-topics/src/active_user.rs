/********************************************************************************
 * Copyright (c) 2024 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

use arc_swap::ArcSwapOption;
use std::sync::Arc;
use tracing::info;

use crate::observability::events;
use crate::User;

const COMPONENT: &str = "active_user";

/// Synchronous accessor for the currently logged-in user.
///
/// Topic builders call [`ActiveUserProvider::active_user`] on every derivation and
/// never keep the result.
pub trait ActiveUserProvider: Send + Sync {
    fn active_user(&self) -> Option<User>;
}

impl ActiveUserProvider for User {
    fn active_user(&self) -> Option<User> {
        Some(self.clone())
    }
}

/// Provider for sessions where nobody is logged in.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoActiveUser;

impl ActiveUserProvider for NoActiveUser {
    fn active_user(&self) -> Option<User> {
        None
    }
}

///
/// [`SharedActiveUser`] holds the active user of a session and can be swapped on
/// login/logout while readers derive topics concurrently.
///
/// # Examples
///
/// ```
/// use social_topics::{marked_message_topic, SharedActiveUser, SubChannelMarker, User};
///
/// let session = SharedActiveUser::default();
/// let marker = SubChannelMarker::new("c1", "s1");
/// assert!(marked_message_topic(&marker, &session).is_err());
///
/// session.login(User::new("u1", "net1/user/u1"));
/// assert_eq!(
///     marked_message_topic(&marker, &session).unwrap(),
///     "net1/marker/channel/c1/message/s1"
/// );
/// ```
#[derive(Clone, Default)]
pub struct SharedActiveUser {
    current: Arc<ArcSwapOption<User>>,
}

impl SharedActiveUser {
    pub fn new(user: Option<User>) -> Self {
        Self {
            current: Arc::new(ArcSwapOption::from(user.map(Arc::new))),
        }
    }

    pub fn login(&self, user: User) {
        info!(
            event = events::ACTIVE_USER_LOGIN,
            component = COMPONENT,
            user_id = %user.id,
            "active user changed"
        );
        self.current.store(Some(Arc::new(user)));
    }

    pub fn logout(&self) {
        info!(
            event = events::ACTIVE_USER_LOGOUT,
            component = COMPONENT,
            "active user cleared"
        );
        self.current.store(None);
    }

    pub fn current(&self) -> Option<Arc<User>> {
        self.current.load_full()
    }
}

impl ActiveUserProvider for SharedActiveUser {
    fn active_user(&self) -> Option<User> {
        self.current().map(|user| User::clone(&user))
    }
}

#[cfg(test)]
mod tests {
    use super::{ActiveUserProvider, NoActiveUser, SharedActiveUser};
    use crate::User;
    use std::thread;

    #[test]
    fn shared_user_reflects_login_and_logout() {
        let session = SharedActiveUser::default();
        assert_eq!(session.active_user(), None);

        session.login(User::new("u1", "net1/user/u1"));
        assert_eq!(session.active_user(), Some(User::new("u1", "net1/user/u1")));

        session.logout();
        assert_eq!(session.active_user(), None);
    }

    #[test]
    fn clones_share_the_same_session() {
        let session = SharedActiveUser::new(Some(User::new("u1", "net1/user/u1")));
        let reader = session.clone();

        session.login(User::new("u2", "net2/user/u2"));

        let handle = thread::spawn(move || reader.active_user());
        let seen = handle.join().expect("reader thread should not panic");
        assert_eq!(seen, Some(User::new("u2", "net2/user/u2")));
    }

    #[test]
    fn fixed_providers() {
        let user = User::new("u1", "net1/user/u1");
        assert_eq!(user.active_user(), Some(user.clone()));
        assert_eq!(NoActiveUser.active_user(), None);
    }
}
