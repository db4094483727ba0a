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

//! Subscription levels and the narrowed level sets accepted by each topic builder.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::observability::events;
use crate::TopicError;

const COMPONENT: &str = "subscription_level";

/// How deep into an entity's descendant tree a subscription listens.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionLevel {
    User,
    Community,
    Post,
    Comment,
    PostAndComment,
}

impl SubscriptionLevel {
    pub const ALL: [SubscriptionLevel; 5] = [
        SubscriptionLevel::User,
        SubscriptionLevel::Community,
        SubscriptionLevel::Post,
        SubscriptionLevel::Comment,
        SubscriptionLevel::PostAndComment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionLevel::User => "user",
            SubscriptionLevel::Community => "community",
            SubscriptionLevel::Post => "post",
            SubscriptionLevel::Comment => "comment",
            SubscriptionLevel::PostAndComment => "post_and_comment",
        }
    }

    /// Parses a wire level, returning `None` for anything unrecognized.
    ///
    /// Topic builders treat `None` as the default level and return the raw path,
    /// so an unknown string degrades to the entity's own topic instead of failing.
    pub fn parse_lenient(level: &str) -> Option<Self> {
        match level.parse::<SubscriptionLevel>() {
            Ok(level) => Some(level),
            Err(_) => {
                debug!(
                    event = events::LEVEL_FALLBACK,
                    component = COMPONENT,
                    level,
                    "unrecognized subscription level, using default"
                );
                None
            }
        }
    }
}

impl fmt::Display for SubscriptionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionLevel {
    type Err = TopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubscriptionLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| TopicError::InvalidLevel {
                level: s.to_string(),
                scope: "any",
            })
    }
}

/// Levels accepted by community topics (everything except `User`).
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunityLevel {
    #[default]
    Community,
    Post,
    Comment,
    PostAndComment,
}

/// Levels accepted by user topics (everything except `Community`).
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserLevel {
    #[default]
    User,
    Post,
    Comment,
    PostAndComment,
}

/// Levels accepted by post topics.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PostLevel {
    #[default]
    Post,
    Comment,
}

impl From<CommunityLevel> for SubscriptionLevel {
    fn from(level: CommunityLevel) -> Self {
        match level {
            CommunityLevel::Community => SubscriptionLevel::Community,
            CommunityLevel::Post => SubscriptionLevel::Post,
            CommunityLevel::Comment => SubscriptionLevel::Comment,
            CommunityLevel::PostAndComment => SubscriptionLevel::PostAndComment,
        }
    }
}

impl From<UserLevel> for SubscriptionLevel {
    fn from(level: UserLevel) -> Self {
        match level {
            UserLevel::User => SubscriptionLevel::User,
            UserLevel::Post => SubscriptionLevel::Post,
            UserLevel::Comment => SubscriptionLevel::Comment,
            UserLevel::PostAndComment => SubscriptionLevel::PostAndComment,
        }
    }
}

impl From<PostLevel> for SubscriptionLevel {
    fn from(level: PostLevel) -> Self {
        match level {
            PostLevel::Post => SubscriptionLevel::Post,
            PostLevel::Comment => SubscriptionLevel::Comment,
        }
    }
}

fn excluded(level: SubscriptionLevel, scope: &'static str) -> TopicError {
    TopicError::InvalidLevel {
        level: level.to_string(),
        scope,
    }
}

impl TryFrom<SubscriptionLevel> for CommunityLevel {
    type Error = TopicError;

    fn try_from(level: SubscriptionLevel) -> Result<Self, Self::Error> {
        match level {
            SubscriptionLevel::Community => Ok(CommunityLevel::Community),
            SubscriptionLevel::Post => Ok(CommunityLevel::Post),
            SubscriptionLevel::Comment => Ok(CommunityLevel::Comment),
            SubscriptionLevel::PostAndComment => Ok(CommunityLevel::PostAndComment),
            SubscriptionLevel::User => Err(excluded(level, "community")),
        }
    }
}

impl TryFrom<SubscriptionLevel> for UserLevel {
    type Error = TopicError;

    fn try_from(level: SubscriptionLevel) -> Result<Self, Self::Error> {
        match level {
            SubscriptionLevel::User => Ok(UserLevel::User),
            SubscriptionLevel::Post => Ok(UserLevel::Post),
            SubscriptionLevel::Comment => Ok(UserLevel::Comment),
            SubscriptionLevel::PostAndComment => Ok(UserLevel::PostAndComment),
            SubscriptionLevel::Community => Err(excluded(level, "user")),
        }
    }
}

impl TryFrom<SubscriptionLevel> for PostLevel {
    type Error = TopicError;

    fn try_from(level: SubscriptionLevel) -> Result<Self, Self::Error> {
        match level {
            SubscriptionLevel::Post => Ok(PostLevel::Post),
            SubscriptionLevel::Comment => Ok(PostLevel::Comment),
            other => Err(excluded(other, "post")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CommunityLevel, PostLevel, SubscriptionLevel, UserLevel};
    use crate::TopicError;

    #[test]
    fn wire_names_parse_back_to_the_same_level() {
        for level in SubscriptionLevel::ALL {
            assert_eq!(level.as_str().parse::<SubscriptionLevel>(), Ok(level));
        }
    }

    #[test]
    fn strict_parse_rejects_unknown_level() {
        let err = "posts".parse::<SubscriptionLevel>().unwrap_err();

        assert_eq!(
            err,
            TopicError::InvalidLevel {
                level: "posts".to_string(),
                scope: "any",
            }
        );
    }

    #[test]
    fn lenient_parse_maps_unknown_level_to_none() {
        assert_eq!(SubscriptionLevel::parse_lenient("POST"), None);
        assert_eq!(SubscriptionLevel::parse_lenient(""), None);
        assert_eq!(
            SubscriptionLevel::parse_lenient("post_and_comment"),
            Some(SubscriptionLevel::PostAndComment)
        );
    }

    #[test]
    fn narrowed_levels_have_expected_defaults() {
        assert_eq!(CommunityLevel::default(), CommunityLevel::Community);
        assert_eq!(UserLevel::default(), UserLevel::User);
        assert_eq!(PostLevel::default(), PostLevel::Post);
    }

    #[test]
    fn narrowing_rejects_excluded_levels() {
        assert!(CommunityLevel::try_from(SubscriptionLevel::User).is_err());
        assert!(UserLevel::try_from(SubscriptionLevel::Community).is_err());
        assert!(PostLevel::try_from(SubscriptionLevel::PostAndComment).is_err());
        assert_eq!(
            PostLevel::try_from(SubscriptionLevel::Comment),
            Ok(PostLevel::Comment)
        );
    }

    #[test]
    fn narrowed_levels_serialize_with_wire_names() {
        let json = serde_json::to_string(&CommunityLevel::PostAndComment).unwrap();
        assert_eq!(json, r#""post_and_comment""#);

        let level: UserLevel = serde_json::from_str(r#""comment""#).unwrap();
        assert_eq!(SubscriptionLevel::from(level), SubscriptionLevel::Comment);
    }
}
