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

//! Network id extraction shared by every network-scoped topic builder.

use tracing::warn;

use crate::observability::events;
use crate::TopicError;

const COMPONENT: &str = "network_id";
const USER_SEGMENT: &str = "/user/";

/// Returns everything before the first `/user/` segment of `path`.
///
/// A path without a `/user/` segment is returned whole. Subscription matching on
/// the transport is prefix based, so this rule must stay identical for every
/// builder that uses it.
///
/// ```
/// use social_topics::network_id;
///
/// assert_eq!(network_id("net1/user/u1"), "net1");
/// assert_eq!(network_id("net1/social/community/c1"), "net1/social/community/c1");
/// ```
pub fn network_id(path: &str) -> &str {
    match path.split_once(USER_SEGMENT) {
        Some((network_id, _)) => network_id,
        None => {
            warn!(
                event = events::NETWORK_ID_MISSING_USER_SEGMENT,
                component = COMPONENT,
                path,
                "path has no user segment, using whole path as network id"
            );
            path
        }
    }
}

/// Strict form of [`network_id`] that rejects paths without a `/user/` segment.
pub fn try_network_id(path: &str) -> Result<&str, TopicError> {
    path.split_once(USER_SEGMENT)
        .map(|(network_id, _)| network_id)
        .ok_or_else(|| TopicError::InvalidPath {
            path: path.to_string(),
            reason: format!("missing '{USER_SEGMENT}' segment"),
        })
}

#[cfg(test)]
mod tests {
    use super::{network_id, try_network_id};
    use crate::TopicError;

    #[test]
    fn splits_on_first_user_segment() {
        assert_eq!(network_id("net1/user/u1"), "net1");
        assert_eq!(network_id("net1/user/u1/user/u2"), "net1");
        assert_eq!(network_id("a/b/user/c"), "a/b");
    }

    #[test]
    fn empty_network_prefix_is_kept_empty() {
        assert_eq!(network_id("/user/u1"), "");
        assert_eq!(try_network_id("/user/u1"), Ok(""));
    }

    #[test]
    fn lenient_rule_returns_whole_path_without_user_segment() {
        assert_eq!(network_id("net1/users/u1"), "net1/users/u1");
        assert_eq!(network_id(""), "");
    }

    #[test]
    fn strict_rule_rejects_path_without_user_segment() {
        let err = try_network_id("net1/users/u1").unwrap_err();

        assert!(matches!(err, TopicError::InvalidPath { ref path, .. } if path == "net1/users/u1"));
    }
}
