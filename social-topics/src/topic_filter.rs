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

//! MQTT-style topic filters: `+` matches exactly one segment, `#` matches zero or
//! more trailing segments and must be last.

use std::fmt;
use std::str::FromStr;

use crate::TopicError;

const SEPARATOR: char = '/';
const SINGLE_LEVEL: &str = "+";
const MULTI_LEVEL: &str = "#";

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
enum FilterSegment {
    Literal(String),
    SingleLevel,
    MultiLevel,
}

///
/// [`TopicFilter`] is a validated subscription filter such as the topics produced by
/// the builders in this crate.
///
/// # Examples
///
/// ```
/// use social_topics::{channel_topic, TopicFilter};
///
/// let filter = TopicFilter::parse(&channel_topic("net1/chat/channel/c1")).unwrap();
/// assert!(filter.matches("net1/chat/channel/c1/subchannel/s1/message/m1"));
/// assert!(filter.matches("net1/chat/channel/c1"));
/// assert!(!filter.matches("net1/chat/channel/c2"));
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TopicFilter {
    raw: String,
    segments: Vec<FilterSegment>,
}

impl TopicFilter {
    pub fn parse(filter: &str) -> Result<Self, TopicError> {
        let invalid = |reason: &'static str| TopicError::InvalidFilter {
            filter: filter.to_string(),
            reason,
        };

        if filter.is_empty() {
            return Err(invalid("filter is empty"));
        }

        let parts: Vec<&str> = filter.split(SEPARATOR).collect();
        let last = parts.len() - 1;
        let mut segments = Vec::with_capacity(parts.len());

        for (index, part) in parts.into_iter().enumerate() {
            let segment = match part {
                SINGLE_LEVEL => FilterSegment::SingleLevel,
                MULTI_LEVEL if index == last => FilterSegment::MultiLevel,
                MULTI_LEVEL => return Err(invalid("'#' must be the last segment")),
                literal if literal.contains(['+', '#']) => {
                    return Err(invalid("wildcards must occupy a whole segment"))
                }
                literal => FilterSegment::Literal(literal.to_string()),
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: filter.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_wildcard(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| !matches!(segment, FilterSegment::Literal(_)))
    }

    /// Returns `true` when the concrete `topic` falls under this filter.
    ///
    /// Wildcard characters inside `topic` are compared literally.
    pub fn matches(&self, topic: &str) -> bool {
        let mut levels = topic.split(SEPARATOR);

        for segment in &self.segments {
            match segment {
                FilterSegment::MultiLevel => return true,
                FilterSegment::SingleLevel => {
                    if levels.next().is_none() {
                        return false;
                    }
                }
                FilterSegment::Literal(expected) => match levels.next() {
                    Some(level) if level == expected => {}
                    _ => return false,
                },
            }
        }

        levels.next().is_none()
    }
}

impl FromStr for TopicFilter {
    type Err = TopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TopicFilter::parse(s)
    }
}

impl fmt::Display for TopicFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parses `filter` and tests `topic` against it.
pub fn topic_matches(filter: &str, topic: &str) -> Result<bool, TopicError> {
    Ok(TopicFilter::parse(filter)?.matches(topic))
}
