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

mod config;

use crate::config::Config;
use anyhow::bail;
use clap::Parser;
use social_topics::observability::events;
use social_topics::{ActiveUserProvider, NoActiveUser};
use std::path::PathBuf;
use topic_subscription_cache::TopicSubscriptionCache;
use tracing::{error, info};

const COMPONENT: &str = "social_topics_cli";

#[derive(Parser)]
#[command()]
struct TopicArgs {
    #[arg(short, long, value_name = "FILE")]
    config: PathBuf,

    /// Report which resolved topics deliver an event published on this topic.
    #[arg(short, long, value_name = "TOPIC")]
    event_topic: Option<String>,
}

/// Output lines and failure count of one pass over the configured requests.
#[derive(Debug, Default)]
struct TopicReport {
    lines: Vec<String>,
    failed: usize,
}

fn resolve_requests(config: &Config, cache: &TopicSubscriptionCache) -> TopicReport {
    let active_user: Box<dyn ActiveUserProvider> = match &config.active_user {
        Some(user) => Box::new(user.clone()),
        None => Box::new(NoActiveUser),
    };

    let mut report = TopicReport::default();

    for (index, request) in config.requests.iter().enumerate() {
        let topic = match request.resolve(active_user.as_ref()) {
            Ok(topic) => topic,
            Err(err) => {
                error!(
                    event = events::TOPIC_REQUEST_FAILED,
                    component = COMPONENT,
                    index,
                    kind = request.kind(),
                    err = %err,
                    "unable to resolve topic request"
                );
                report.failed += 1;
                continue;
            }
        };

        if let Err(err) = cache.subscribe(&topic) {
            error!(
                event = events::TOPIC_REQUEST_FAILED,
                component = COMPONENT,
                index,
                kind = request.kind(),
                topic = %topic,
                err = %err,
                "resolved topic is not a valid subscription filter"
            );
            report.failed += 1;
            continue;
        }

        report
            .lines
            .push(format!("{index}\t{}\t{topic}", request.kind()));
    }

    report
}

fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt::try_init();

    info!("Started social-topics-cli");

    let args = TopicArgs::parse();
    let config = Config::load(&args.config)?;

    let cache = TopicSubscriptionCache::new();
    let report = resolve_requests(&config, &cache);
    for line in &report.lines {
        println!("{line}");
    }

    if let Some(event_topic) = args.event_topic {
        for filter in cache.matching_filters(&event_topic) {
            println!("match\t{filter}");
        }
    }

    if report.failed > 0 {
        bail!("{} topic request(s) could not be resolved", report.failed);
    }

    Ok(())
}
