/********************************************************************************
 * Copyright (c) 2025 Contributors to the Eclipse Foundation
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

use anyhow::Context;
use serde::{Deserialize, Serialize};
use social_topics::{TopicRequest, User};
use std::path::Path;

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub(crate) active_user: Option<User>,
    pub(crate) requests: Vec<TopicRequest>,
}

impl Config {
    pub fn from_json5(contents: &str) -> anyhow::Result<Self> {
        json5::from_str(contents).context("Unable to parse config file")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read config file: {}", path.display()))?;
        Self::from_json5(&contents)
    }
}
