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

//! Topic builders mapping an entity path and a subscription level to the topic
//! the real-time transport subscribes to.
//!
//! Topics use `+` for exactly one segment and `#` for a whole subtree.

use tracing::warn;

use crate::observability::events;
use crate::{
    network_id, ActiveUserProvider, CommunityLevel, PostLevel, SubChannelMarker, Subscribable,
    SubscriptionLevel, TopicError, User, UserLevel,
};

const COMPONENT: &str = "resolver";
const SOCIAL_NAMESPACE: &str = "/social";

/// Shared community/user builder. Levels without a descendant suffix return `path`.
///
/// ```
/// use social_topics::{community_user_topic, SubscriptionLevel};
///
/// let community = "net1/social/community/c1";
/// assert_eq!(community_user_topic(community, None), community);
/// assert_eq!(
///     community_user_topic(community, Some(SubscriptionLevel::PostAndComment)),
///     "net1/social/community/c1/post/#"
/// );
/// ```
pub fn community_user_topic(path: &str, level: Option<SubscriptionLevel>) -> String {
    match level {
        Some(SubscriptionLevel::Post) => format!("{path}/post/+"),
        Some(SubscriptionLevel::Comment) => format!("{path}/post/+/comment/+"),
        Some(SubscriptionLevel::PostAndComment) => format!("{path}/post/#"),
        Some(SubscriptionLevel::User) | Some(SubscriptionLevel::Community) | None => {
            path.to_string()
        }
    }
}

pub fn community_topic<S: Subscribable + ?Sized>(community: &S, level: CommunityLevel) -> String {
    community_user_topic(community.path(), Some(level.into()))
}

/// User topic. Any level below `User` is redirected into the user's social feed.
pub fn user_topic<S: Subscribable + ?Sized>(user: &S, level: UserLevel) -> String {
    let level = SubscriptionLevel::from(level);
    match level {
        SubscriptionLevel::User => community_user_topic(user.path(), Some(level)),
        _ => community_user_topic(&social_feed_path(user.path()), Some(level)),
    }
}

/// Inserts `/social` after the leading `[A-Za-z0-9_]*` token of `path`.
pub(crate) fn social_feed_path(path: &str) -> String {
    let token_end = path
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(path.len());
    let (token, rest) = path.split_at(token_end);
    format!("{token}{SOCIAL_NAMESPACE}{rest}")
}

pub fn post_topic<S: Subscribable + ?Sized>(post: &S, level: PostLevel) -> String {
    match level {
        PostLevel::Comment => format!("{}/comment/+", post.path()),
        PostLevel::Post => post.path().to_string(),
    }
}

pub fn comment_topic<S: Subscribable + ?Sized>(comment: &S) -> String {
    comment.path().to_string()
}

/// Membership edges where `user` is the followed side.
pub fn followers_topic(user: &User) -> String {
    format!("{}/membership/{}/+/+", network_id(&user.path), user.id)
}

/// Membership edges where `user` is the follower.
pub fn followings_topic(user: &User) -> String {
    format!("{}/membership/+/{}/+", network_id(&user.path), user.id)
}

/// Every event under the channel, sub-channels and messages included.
pub fn channel_topic<S: Subscribable + ?Sized>(channel: &S) -> String {
    format!("{}/#", channel.path())
}

pub fn sub_channel_topic<S: Subscribable + ?Sized>(sub_channel: &S) -> String {
    format!("{}/#", sub_channel.path())
}

pub fn message_topic<S: Subscribable + ?Sized>(message: &S) -> String {
    message.path().to_string()
}

/// Read-marker topic for a sub-channel, scoped to the active user's network.
///
/// The active user is read from `active_user` on every call.
pub fn marked_message_topic(
    marker: &SubChannelMarker,
    active_user: &dyn ActiveUserProvider,
) -> Result<String, TopicError> {
    let Some(user) = active_user.active_user() else {
        warn!(
            event = events::ACTIVE_USER_MISSING,
            component = COMPONENT,
            channel_id = %marker.channel_id,
            sub_channel_id = %marker.sub_channel_id,
            "cannot derive marker topic without an active user"
        );
        return Err(TopicError::MissingActiveUser);
    };

    Ok(format!(
        "{}/marker/channel/{}/message/{}",
        network_id(&user.path),
        marker.channel_id,
        marker.sub_channel_id
    ))
}
