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

//! Small helpers used next to topic derivation by feed and story surfaces.

mod http_url;
mod story_permission;
mod time_ago;

pub use http_url::is_valid_http_url;
pub use story_permission::{check_story_permission, Permission, PermissionChecker};
pub use time_ago::{format_time_ago, format_time_ago_from_now};
