/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
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

//! Deterministic benchmark fixtures for the Criterion harness.

use crate::{
    channel_topic, community_topic, followers_topic, CommunityLevel, TopicError, TopicFilter,
    TopicRequest, User,
};

fn network(index: usize) -> String {
    format!("net{}", index % 8)
}

fn community_path(index: usize) -> String {
    format!("{}/social/community/c{index}", network(index))
}

fn channel_path(index: usize) -> String {
    format!("{}/chat/channel/ch{index}", network(index))
}

fn user(index: usize) -> User {
    let id = format!("u{index}");
    let path = format!("{}/user/{id}", network(index));
    User { id, path }
}

/// Fixed fixture for `topic_derivation/*` benchmark IDs.
pub struct TopicDerivationFixture {
    communities: Vec<String>,
    channels: Vec<String>,
    users: Vec<User>,
    requests: Vec<TopicRequest>,
    active_user: User,
}

impl TopicDerivationFixture {
    pub fn new(rows: usize) -> Self {
        let rows = rows.max(1);
        let communities: Vec<String> = (0..rows).map(community_path).collect();
        let channels: Vec<String> = (0..rows).map(channel_path).collect();
        let users: Vec<User> = (0..rows).map(user).collect();

        let requests = (0..rows)
            .map(|index| match index % 4 {
                0 => TopicRequest::Community {
                    path: communities[index].clone().into(),
                    level: Some("post_and_comment".to_string()),
                },
                1 => TopicRequest::User {
                    path: users[index].path.clone().into(),
                    level: Some("post".to_string()),
                },
                2 => TopicRequest::Channel {
                    path: channels[index].clone().into(),
                },
                _ => TopicRequest::MarkedMessage {
                    channel_id: format!("ch{index}"),
                    sub_channel_id: format!("s{index}"),
                },
            })
            .collect();

        Self {
            communities,
            channels,
            users,
            requests,
            active_user: user(0),
        }
    }

    /// Derives one topic per fixture row across builders and returns the total length.
    pub fn derive_topics_len(&self) -> usize {
        let community_len: usize = self
            .communities
            .iter()
            .map(|path| community_topic(path, CommunityLevel::Comment).len())
            .sum();
        let channel_len: usize = self
            .channels
            .iter()
            .map(|path| channel_topic(path).len())
            .sum();
        let follower_len: usize = self.users.iter().map(|u| followers_topic(u).len()).sum();

        community_len + channel_len + follower_len
    }

    pub fn resolve_requests_count(&self) -> Result<usize, TopicError> {
        let mut resolved = 0;
        for request in &self.requests {
            request.resolve(&self.active_user)?;
            resolved += 1;
        }
        Ok(resolved)
    }
}

/// Fixed fixture for `topic_matching/*` benchmark IDs.
pub struct TopicMatchingFixture {
    filters: Vec<TopicFilter>,
    event_topics: Vec<String>,
}

impl TopicMatchingFixture {
    pub fn new(rows: usize) -> Result<Self, TopicError> {
        let rows = rows.max(1);
        let mut filters = Vec::with_capacity(rows);
        let mut event_topics = Vec::with_capacity(rows);

        for index in 0..rows {
            let community = community_path(index);
            filters.push(TopicFilter::parse(&community_topic(
                &community,
                CommunityLevel::PostAndComment,
            ))?);
            event_topics.push(format!("{community}/post/p{index}/comment/m{index}"));
        }

        Ok(Self {
            filters,
            event_topics,
        })
    }

    /// Number of (filter, event topic) pairs that match.
    pub fn match_count(&self) -> usize {
        self.event_topics
            .iter()
            .map(|topic| {
                self.filters
                    .iter()
                    .filter(|filter| filter.matches(topic))
                    .count()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::{TopicDerivationFixture, TopicMatchingFixture};

    #[test]
    fn derivation_fixture_resolves_every_request() {
        let fixture = TopicDerivationFixture::new(16);

        assert_eq!(fixture.resolve_requests_count(), Ok(16));
        assert!(fixture.derive_topics_len() > 0);
    }

    #[test]
    fn matching_fixture_matches_each_event_once() {
        let fixture = TopicMatchingFixture::new(32).expect("fixture should build");

        assert_eq!(fixture.match_count(), 32);
    }
}
