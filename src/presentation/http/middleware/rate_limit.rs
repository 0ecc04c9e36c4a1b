// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type AuthRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Replenish one credential attempt every this many seconds per client IP.
const REPLENISH_SECONDS: u64 = 2;
const BURST: u32 = 10;

/// Per-IP limiter for the credential endpoints. `None` when the limiter
/// configuration is rejected, in which case the routes run unthrottled.
pub fn auth_rate_limit_layer() -> Option<AuthRateLimitLayer> {
    static RATE_LIMITER: OnceLock<Option<AuthRateLimitLayer>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(REPLENISH_SECONDS);
            builder.burst_size(BURST);
            let Some(config) = builder.key_extractor(SmartIpKeyExtractor).finish() else {
                tracing::warn!("invalid rate limit configuration, auth routes are not throttled");
                return None;
            };

            Some(GovernorLayer::new(config))
        })
        .clone()
}
