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

use thiserror::Error;

/// Failures surfaced by topic derivation, topic filters and the subscription cache.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum TopicError {
    #[error("invalid entity path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("no active user available to derive a network-scoped topic")]
    MissingActiveUser,

    #[error("subscription level '{level}' is not allowed for {scope} topics")]
    InvalidLevel { level: String, scope: &'static str },

    #[error("invalid topic filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: &'static str },

    #[error("topic '{topic}' has no open subscription")]
    NotSubscribed { topic: String },
}
