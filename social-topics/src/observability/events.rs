//! Canonical structured event names used across the social-topics workspace.

// Topic derivation events.
pub const NETWORK_ID_MISSING_USER_SEGMENT: &str = "network_id_missing_user_segment";
pub const LEVEL_FALLBACK: &str = "level_fallback";
pub const ACTIVE_USER_MISSING: &str = "active_user_missing";
pub const TOPIC_REQUEST_RESOLVED: &str = "topic_request_resolved";
pub const TOPIC_REQUEST_FAILED: &str = "topic_request_failed";

// Active user lifecycle events.
pub const ACTIVE_USER_LOGIN: &str = "active_user_login";
pub const ACTIVE_USER_LOGOUT: &str = "active_user_logout";

// Subscription cache events.
pub const TOPIC_SUBSCRIPTION_OPENED: &str = "topic_subscription_opened";
pub const TOPIC_SUBSCRIPTION_SHARED: &str = "topic_subscription_shared";
pub const TOPIC_SUBSCRIPTION_RETAINED: &str = "topic_subscription_retained";
pub const TOPIC_SUBSCRIPTION_CLOSED: &str = "topic_subscription_closed";
pub const TOPIC_SUBSCRIPTION_REJECTED: &str = "topic_subscription_rejected";
pub const TOPIC_SUBSCRIPTION_MISSING: &str = "topic_subscription_missing";
pub const TOPIC_EVENT_MATCHED: &str = "topic_event_matched";
