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

//! # social-topics
//!
//! `social-topics` derives the topic strings a real-time subscription transport
//! uses to receive live updates for users, communities, posts, comments, channels,
//! sub-channels and messages of a social/chat network.
//!
//! Every builder is a pure function of an entity's hierarchical `path`, an optional
//! subscription level and, where needed, identifiers. Topics follow MQTT-style
//! matching: `+` is exactly one segment and `#` is a whole subtree.
//!
//! ## Social topics
//!
//! ```
//! use social_topics::{
//!     community_topic, followers_topic, post_topic, user_topic, CommunityLevel, PostLevel,
//!     User, UserLevel,
//! };
//!
//! let community = "net1/social/community/c1";
//! assert_eq!(community_topic(community, CommunityLevel::default()), community);
//! assert_eq!(
//!     community_topic(community, CommunityLevel::Post),
//!     "net1/social/community/c1/post/+"
//! );
//!
//! let post = "net1/social/community/c1/post/p1";
//! assert_eq!(
//!     post_topic(post, PostLevel::Comment),
//!     "net1/social/community/c1/post/p1/comment/+"
//! );
//!
//! let user = User::new("u1", "net1/user/u1");
//! assert_eq!(user_topic(&user, UserLevel::User), "net1/user/u1");
//! assert_eq!(user_topic(&user, UserLevel::Post), "net1/social/user/u1/post/+");
//! assert_eq!(followers_topic(&user), "net1/membership/u1/+/+");
//! ```
//!
//! ## Chat topics
//!
//! Read-marker topics are scoped to the network of the active user, which is
//! injected through [`ActiveUserProvider`] and read at call time.
//!
//! ```
//! use social_topics::{
//!     channel_topic, marked_message_topic, NoActiveUser, SubChannelMarker, TopicError, User,
//! };
//!
//! assert_eq!(channel_topic("net1/chat/channel/c1"), "net1/chat/channel/c1/#");
//!
//! let marker = SubChannelMarker::new("c1", "s1");
//! let active_user = User::new("u1", "net1/user/u1");
//! assert_eq!(
//!     marked_message_topic(&marker, &active_user).unwrap(),
//!     "net1/marker/channel/c1/message/s1"
//! );
//! assert_eq!(
//!     marked_message_topic(&marker, &NoActiveUser),
//!     Err(TopicError::MissingActiveUser)
//! );
//! ```
//!
//! ## Observability model
//!
//! The workspace uses `tracing` for logs/events.
//! Library code emits events and does not initialize a global subscriber.
//! Binaries and tests are responsible for one-time `tracing_subscriber`
//! initialization at process boundaries.

mod active_user;
pub use active_user::{ActiveUserProvider, NoActiveUser, SharedActiveUser};

#[doc(hidden)]
pub mod benchmark_support;

pub mod helpers;

mod network_id;
pub use network_id::{network_id, try_network_id};

#[doc(hidden)]
pub mod observability;

mod resolver;
pub use resolver::{
    channel_topic, comment_topic, community_topic, community_user_topic, followers_topic,
    followings_topic, marked_message_topic, message_topic, post_topic, sub_channel_topic,
    user_topic,
};

mod subscribable;
pub use subscribable::{EntityPath, SubChannelMarker, Subscribable, User};

mod subscription_level;
pub use subscription_level::{CommunityLevel, PostLevel, SubscriptionLevel, UserLevel};

mod topic_error;
pub use topic_error::TopicError;

mod topic_filter;
pub use topic_filter::{topic_matches, TopicFilter};

mod topic_request;
pub use topic_request::TopicRequest;
