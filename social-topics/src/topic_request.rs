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

//! Declarative "subscribe to entity X at level Y" requests.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::observability::events;
use crate::resolver::social_feed_path;
use crate::{
    channel_topic, comment_topic, community_topic, community_user_topic, followers_topic,
    followings_topic, marked_message_topic, message_topic, post_topic, sub_channel_topic,
    user_topic, ActiveUserProvider, CommunityLevel, EntityPath, PostLevel, SubChannelMarker,
    Subscribable, SubscriptionLevel, TopicError, User, UserLevel,
};

const COMPONENT: &str = "topic_request";

/// One topic to derive, as read from configuration.
///
/// `level` stays a free string: an unknown value, or one the entity kind does not
/// accept, resolves to the entity's raw path. User requests are the exception: any
/// explicit level other than `user` still moves the path into the social feed.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TopicRequest {
    Community {
        path: EntityPath,
        #[serde(default)]
        level: Option<String>,
    },
    User {
        path: EntityPath,
        #[serde(default)]
        level: Option<String>,
    },
    Post {
        path: EntityPath,
        #[serde(default)]
        level: Option<String>,
    },
    Comment {
        path: EntityPath,
    },
    Followers {
        user: User,
    },
    Followings {
        user: User,
    },
    Channel {
        path: EntityPath,
    },
    SubChannel {
        path: EntityPath,
    },
    Message {
        path: EntityPath,
    },
    MarkedMessage {
        #[serde(rename = "channelId")]
        channel_id: String,
        #[serde(rename = "subChannelId")]
        sub_channel_id: String,
    },
}

impl TopicRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            TopicRequest::Community { .. } => "community",
            TopicRequest::User { .. } => "user",
            TopicRequest::Post { .. } => "post",
            TopicRequest::Comment { .. } => "comment",
            TopicRequest::Followers { .. } => "followers",
            TopicRequest::Followings { .. } => "followings",
            TopicRequest::Channel { .. } => "channel",
            TopicRequest::SubChannel { .. } => "sub_channel",
            TopicRequest::Message { .. } => "message",
            TopicRequest::MarkedMessage { .. } => "marked_message",
        }
    }

    pub fn resolve(&self, active_user: &dyn ActiveUserProvider) -> Result<String, TopicError> {
        let topic = match self {
            TopicRequest::Community { path, level } => {
                match narrow::<CommunityLevel>(level.as_deref()) {
                    Some(level) => community_topic(path, level),
                    None => community_user_topic(path.path(), None),
                }
            }
            TopicRequest::User { path, level } => match level.as_deref() {
                None => path.path().to_string(),
                Some(raw) => match narrow::<UserLevel>(Some(raw)) {
                    Some(level) => user_topic(path, level),
                    None => social_feed_path(path.path()),
                },
            },
            TopicRequest::Post { path, level } => match narrow::<PostLevel>(level.as_deref()) {
                Some(level) => post_topic(path, level),
                None => path.path().to_string(),
            },
            TopicRequest::Comment { path } => comment_topic(path),
            TopicRequest::Followers { user } => followers_topic(user),
            TopicRequest::Followings { user } => followings_topic(user),
            TopicRequest::Channel { path } => channel_topic(path),
            TopicRequest::SubChannel { path } => sub_channel_topic(path),
            TopicRequest::Message { path } => message_topic(path),
            TopicRequest::MarkedMessage {
                channel_id,
                sub_channel_id,
            } => marked_message_topic(
                &SubChannelMarker::new(channel_id, sub_channel_id),
                active_user,
            )?,
        };

        debug!(
            event = events::TOPIC_REQUEST_RESOLVED,
            component = COMPONENT,
            kind = self.kind(),
            topic = %topic,
            "resolved topic request"
        );
        Ok(topic)
    }
}

/// Lenient parse followed by narrowing; anything that does not fit yields `None`.
fn narrow<L: TryFrom<SubscriptionLevel>>(level: Option<&str>) -> Option<L> {
    let level = SubscriptionLevel::parse_lenient(level?)?;
    L::try_from(level).ok()
}
