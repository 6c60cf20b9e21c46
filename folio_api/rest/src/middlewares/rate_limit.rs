//! Per-client rate limiting for the whole API

use std::{collections::HashMap, net::IpAddr, sync::Arc, time::Instant};

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{from_fn, Next},
    Router,
};
use tokio::sync::Mutex;

use crate::{middlewares::client_ip::ClientIp, routes::failure};

/// Token bucket parameters, applied per client address.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub capacity: f64,
    pub refill_per_sec: f64,
}

#[derive(Debug, Clone)]
struct Bucket {
    tokens: f64,
    last_refill: Instant,
}

#[derive(Debug)]
pub struct RateLimiter {
    buckets: Mutex<HashMap<IpAddr, Bucket>>,
    config: RateLimitConfig,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            buckets: Mutex::new(HashMap::new()),
            config,
        }
    }

    async fn allow(&self, key: IpAddr) -> bool {
        let now = Instant::now();
        let mut buckets = self.buckets.lock().await;
        let bucket = buckets.entry(key).or_insert_with(|| Bucket {
            tokens: self.config.capacity,
            last_refill: now,
        });
        let elapsed = now.duration_since(bucket.last_refill).as_secs_f64();
        bucket.last_refill = now;
        bucket.tokens =
            (bucket.tokens + elapsed * self.config.refill_per_sec).min(self.config.capacity);
        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

pub fn add<S: Clone + Send + Sync + 'static>(
    router: Router<S>,
    limiter: Arc<RateLimiter>,
) -> Router<S> {
    router.layer(from_fn(move |request: Request, next: Next| {
        let limiter = Arc::clone(&limiter);
        async move {
            let ClientIp(client_ip) = *request.extensions().get::<ClientIp>().unwrap();
            if !limiter.allow(client_ip).await {
                tracing::warn!(%client_ip, "rate limit exceeded");
                return failure(
                    StatusCode::TOO_MANY_REQUESTS,
                    "Too many requests. Try again later.",
                    Vec::new(),
                );
            }
            next.run(request).await
        }
    }))
}
