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

use social_topics::observability::events;
use social_topics::{TopicError, TopicFilter};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

const COMPONENT: &str = "topic_subscription_cache";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubscribeOutcome {
    /// First reference; the transport subscription must be opened.
    Opened,
    Shared { ref_count: usize },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnsubscribeOutcome {
    /// Last reference dropped; the transport subscription must be closed.
    Closed,
    Retained { ref_count: usize },
}

struct TopicSubscription {
    filter: TopicFilter,
    ref_count: usize,
}

/// A [`TopicSubscriptionCache`] tracks which topic filters are currently open on the
/// real-time transport and how many consumers hold each one. Several screens asking
/// for the same topic share one transport subscription.
#[derive(Default)]
pub struct TopicSubscriptionCache {
    subscriptions: Mutex<HashMap<String, TopicSubscription>>,
}

impl TopicSubscriptionCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, TopicSubscription>> {
        self.subscriptions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn subscribe(&self, topic: &str) -> Result<SubscribeOutcome, TopicError> {
        let filter = TopicFilter::parse(topic).map_err(|err| {
            warn!(
                event = events::TOPIC_SUBSCRIPTION_REJECTED,
                component = COMPONENT,
                topic,
                err = %err,
                "rejecting malformed topic"
            );
            err
        })?;

        let mut subscriptions = self.lock();
        match subscriptions.get_mut(topic) {
            Some(subscription) => {
                subscription.ref_count += 1;
                debug!(
                    event = events::TOPIC_SUBSCRIPTION_SHARED,
                    component = COMPONENT,
                    topic,
                    ref_count = subscription.ref_count,
                    "sharing open topic subscription"
                );
                Ok(SubscribeOutcome::Shared {
                    ref_count: subscription.ref_count,
                })
            }
            None => {
                subscriptions.insert(
                    topic.to_string(),
                    TopicSubscription {
                        filter,
                        ref_count: 1,
                    },
                );
                info!(
                    event = events::TOPIC_SUBSCRIPTION_OPENED,
                    component = COMPONENT,
                    topic,
                    "opened topic subscription"
                );
                Ok(SubscribeOutcome::Opened)
            }
        }
    }

    pub fn unsubscribe(&self, topic: &str) -> Result<UnsubscribeOutcome, TopicError> {
        let mut subscriptions = self.lock();
        let Some(subscription) = subscriptions.get_mut(topic) else {
            warn!(
                event = events::TOPIC_SUBSCRIPTION_MISSING,
                component = COMPONENT,
                topic,
                "unsubscribe for unknown topic"
            );
            return Err(TopicError::NotSubscribed {
                topic: topic.to_string(),
            });
        };

        subscription.ref_count -= 1;
        if subscription.ref_count > 0 {
            let ref_count = subscription.ref_count;
            debug!(
                event = events::TOPIC_SUBSCRIPTION_RETAINED,
                component = COMPONENT,
                topic,
                ref_count,
                "topic subscription still referenced"
            );
            return Ok(UnsubscribeOutcome::Retained { ref_count });
        }

        subscriptions.remove(topic);
        info!(
            event = events::TOPIC_SUBSCRIPTION_CLOSED,
            component = COMPONENT,
            topic,
            "closed topic subscription"
        );
        Ok(UnsubscribeOutcome::Closed)
    }

    /// Open filters that deliver an event published on `event_topic`, sorted.
    pub fn matching_filters(&self, event_topic: &str) -> Vec<String> {
        let mut matched: Vec<String> = self
            .lock()
            .values()
            .filter(|subscription| subscription.filter.matches(event_topic))
            .map(|subscription| subscription.filter.to_string())
            .collect();
        matched.sort();

        debug!(
            event = events::TOPIC_EVENT_MATCHED,
            component = COMPONENT,
            event_topic,
            matched = matched.len(),
            "matched event topic against open subscriptions"
        );
        matched
    }

    pub fn ref_count(&self, topic: &str) -> usize {
        self.lock()
            .get(topic)
            .map_or(0, |subscription| subscription.ref_count)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn fetch_cache(&self) -> HashMap<String, usize> {
        self.lock()
            .iter()
            .map(|(topic, subscription)| (topic.clone(), subscription.ref_count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{SubscribeOutcome, TopicSubscriptionCache, UnsubscribeOutcome};
    use social_topics::{
        channel_topic, community_topic, followers_topic, CommunityLevel, TopicError, User,
    };
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn shared_topic_opens_once_and_closes_on_last_release() {
        let _ = tracing_subscriber::fmt::try_init();
        let cache = TopicSubscriptionCache::new();
        let topic = channel_topic("net1/chat/channel/c1");

        assert_eq!(cache.subscribe(&topic), Ok(SubscribeOutcome::Opened));
        assert_eq!(
            cache.subscribe(&topic),
            Ok(SubscribeOutcome::Shared { ref_count: 2 })
        );
        assert_eq!(cache.ref_count(&topic), 2);

        assert_eq!(
            cache.unsubscribe(&topic),
            Ok(UnsubscribeOutcome::Retained { ref_count: 1 })
        );
        assert_eq!(cache.unsubscribe(&topic), Ok(UnsubscribeOutcome::Closed));
        assert!(cache.is_empty());
    }

    #[test]
    fn unsubscribe_unknown_topic_fails() {
        let cache = TopicSubscriptionCache::new();

        assert_eq!(
            cache.unsubscribe("net1/user/u1"),
            Err(TopicError::NotSubscribed {
                topic: "net1/user/u1".to_string()
            })
        );
    }

    #[test]
    fn malformed_topic_is_rejected_without_entry() {
        let cache = TopicSubscriptionCache::new();

        assert!(matches!(
            cache.subscribe("net1/#/post"),
            Err(TopicError::InvalidFilter { .. })
        ));
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn matching_filters_returns_every_open_filter_hit() {
        let cache = TopicSubscriptionCache::new();
        let community = "net1/social/community/c1";
        let user = User::new("u1", "net1/user/u1");

        let subtree = community_topic(community, CommunityLevel::PostAndComment);
        let comments = community_topic(community, CommunityLevel::Comment);
        let followers = followers_topic(&user);
        for topic in [&subtree, &comments, &followers] {
            cache.subscribe(topic).expect("valid topic");
        }

        let hits = cache.matching_filters("net1/social/community/c1/post/p1/comment/m1");
        let mut expected = vec![comments.clone(), subtree.clone()];
        expected.sort();
        assert_eq!(hits, expected);

        assert_eq!(
            cache.matching_filters("net1/membership/u1/u2/accepted"),
            vec![followers]
        );
        assert!(cache.matching_filters("net2/user/u1").is_empty());
    }

    #[test]
    fn concurrent_subscribers_share_one_entry() {
        let cache = Arc::new(TopicSubscriptionCache::new());
        let topic = "net1/chat/channel/c1/#";

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = cache.clone();
                thread::spawn(move || cache.subscribe(topic).expect("valid topic"))
            })
            .collect();
        for handle in handles {
            handle.join().expect("subscriber thread should not panic");
        }

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.fetch_cache().get(topic), Some(&8));
    }
}
