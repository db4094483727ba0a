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

use serde::{Deserialize, Serialize};
use std::fmt;

///
/// [`Subscribable`] is anything that exposes a hierarchical, slash-separated `path`
/// such as `<networkId>/social/community/<id>/post/<id>` or
/// `<networkId>/chat/channel/<id>/subchannel/<id>/message/<id>`.
///
/// The path is owned by the caller and only ever read.
///
/// # Examples
///
/// ```
/// use social_topics::{EntityPath, Subscribable};
///
/// let post = EntityPath::from("net1/social/community/c1/post/p1");
/// assert_eq!(post.path(), "net1/social/community/c1/post/p1");
/// assert_eq!("net1/user/u1".path(), "net1/user/u1");
/// ```
pub trait Subscribable {
    fn path(&self) -> &str;
}

impl Subscribable for str {
    fn path(&self) -> &str {
        self
    }
}

impl Subscribable for String {
    fn path(&self) -> &str {
        self.as_str()
    }
}

impl<T: Subscribable + ?Sized> Subscribable for &T {
    fn path(&self) -> &str {
        (**self).path()
    }
}

/// Owned path of a community, post, comment, channel, sub-channel or message.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EntityPath(String);

impl Subscribable for EntityPath {
    fn path(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for EntityPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl fmt::Display for EntityPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A user as delivered by the social SDK: `_id` plus `<networkId>/user/<id>` path.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub path: String,
}

impl User {
    pub fn new(id: &str, path: &str) -> Self {
        Self {
            id: id.to_string(),
            path: path.to_string(),
        }
    }
}

impl Subscribable for User {
    fn path(&self) -> &str {
        &self.path
    }
}

/// Channel and sub-channel identifiers addressing a read marker.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubChannelMarker {
    pub channel_id: String,
    pub sub_channel_id: String,
}

impl SubChannelMarker {
    pub fn new(channel_id: &str, sub_channel_id: &str) -> Self {
        Self {
            channel_id: channel_id.to_string(),
            sub_channel_id: sub_channel_id.to_string(),
        }
    }
}
