//! Client-side rate limiting for the KuCoin API
//!
//! KuCoin meters requests by *weight* against per-pool quotas that reset
//! on a 30-second window (spot, futures, management, public, earn). Each
//! endpoint consumes a documented weight from its pool. This module
//! provides weight buckets approximating those windows so callers can
//! throttle before the exchange answers 429000.

use std::time::{Duration, Instant};

/// Length of KuCoin's quota window
const WINDOW_SECS: f64 = 30.0;

/// Weight bucket over a refilling quota
///
/// Weights are consumed when making requests and refill continuously at
/// `capacity / 30s`, approximating the exchange's windowed reset.
#[derive(Debug)]
pub struct WeightBucket {
    /// Maximum weight (pool quota per window)
    capacity: u32,
    /// Currently available weight
    available: f64,
    /// Weight restored per second
    refill_rate: f64,
    /// Last time the bucket was refilled
    last_refill: Instant,
}

impl WeightBucket {
    /// Create a bucket for a pool quota, refilling over the 30s window
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            available: capacity as f64,
            refill_rate: capacity as f64 / WINDOW_SECS,
            last_refill: Instant::now(),
        }
    }

    /// Try to consume `weight` from the bucket
    ///
    /// Returns `Ok(())` if the weight was available, or `Err(Duration)`
    /// with the time to wait until it will be.
    pub fn try_consume(&mut self, weight: u32) -> Result<(), Duration> {
        self.refill();

        let needed = weight as f64;
        if self.available >= needed {
            self.available -= needed;
            Ok(())
        } else {
            let deficit = needed - self.available;
            Err(Duration::from_secs_f64(deficit / self.refill_rate))
        }
    }

    /// Check availability without consuming
    pub fn check_available(&mut self, weight: u32) -> bool {
        self.refill();
        self.available >= weight as f64
    }

    /// Get currently available weight
    pub fn available(&mut self) -> u32 {
        self.refill();
        self.available.floor() as u32
    }

    /// Get the pool quota
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Reset to full quota (e.g., after a confirmed window rollover)
    pub fn reset(&mut self) {
        self.available = self.capacity as f64;
        self.last_refill = Instant::now();
    }

    fn refill(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill);
        let restored = elapsed.as_secs_f64() * self.refill_rate;
        self.available = (self.available + restored).min(self.capacity as f64);
        self.last_refill = now;
    }
}

/// Configuration for a single pool
#[derive(Debug, Clone, Copy)]
pub struct WeightBucketConfig {
    /// Pool quota per 30-second window
    pub capacity: u32,
}

impl WeightBucketConfig {
    /// Create a new pool configuration
    pub const fn new(capacity: u32) -> Self {
        Self { capacity }
    }

    /// Create a weight bucket from this configuration
    pub fn create_bucket(&self) -> WeightBucket {
        WeightBucket::new(self.capacity)
    }
}

/// Per-pool quotas for a KuCoin account tier
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Spot + margin private endpoints
    pub spot: WeightBucketConfig,
    /// Futures private endpoints
    pub futures: WeightBucketConfig,
    /// Account management endpoints (sub-accounts, transfers, API keys)
    pub management: WeightBucketConfig,
    /// Public endpoints (shared per IP)
    pub public: WeightBucketConfig,
    /// Earn endpoints
    pub earn: WeightBucketConfig,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self::vip0()
    }
}

impl RateLimitConfig {
    /// Quotas documented for a VIP0 account
    pub fn vip0() -> Self {
        Self {
            spot: WeightBucketConfig::new(4000),
            futures: WeightBucketConfig::new(2000),
            management: WeightBucketConfig::new(2000),
            public: WeightBucketConfig::new(2000),
            earn: WeightBucketConfig::new(2000),
        }
    }

    /// Quotas for a mid-tier (VIP5) account
    pub fn vip5() -> Self {
        Self {
            spot: WeightBucketConfig::new(16000),
            futures: WeightBucketConfig::new(8000),
            management: WeightBucketConfig::new(6000),
            public: WeightBucketConfig::new(2000),
            earn: WeightBucketConfig::new(6000),
        }
    }

    /// A very permissive configuration (for testing)
    pub fn permissive() -> Self {
        Self {
            spot: WeightBucketConfig::new(1_000_000),
            futures: WeightBucketConfig::new(1_000_000),
            management: WeightBucketConfig::new(1_000_000),
            public: WeightBucketConfig::new(1_000_000),
            earn: WeightBucketConfig::new(1_000_000),
        }
    }
}

/// Resource pool an endpoint is metered against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateLimitPool {
    /// Spot/margin private endpoints
    Spot,
    /// Futures private endpoints
    Futures,
    /// Management endpoints
    Management,
    /// Public endpoints
    Public,
    /// Earn endpoints
    Earn,
}

impl RateLimitPool {
    /// Get the configuration for this pool
    pub fn get_config(self, config: &RateLimitConfig) -> WeightBucketConfig {
        match self {
            Self::Spot => config.spot,
            Self::Futures => config.futures,
            Self::Management => config.management,
            Self::Public => config.public,
            Self::Earn => config.earn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_consume() {
        let mut bucket = WeightBucket::new(100);

        assert!(bucket.try_consume(40).is_ok());
        assert!(bucket.try_consume(60).is_ok());

        let wait = bucket.try_consume(10);
        assert!(wait.is_err());
    }

    #[test]
    fn test_bucket_wait_hint() {
        let mut bucket = WeightBucket::new(30);
        bucket.try_consume(30).unwrap();

        // Refill rate is 1 weight/sec for a 30-quota pool
        let wait = bucket.try_consume(2).unwrap_err();
        assert!(wait >= Duration::from_millis(1500));
        assert!(wait <= Duration::from_millis(2500));
    }

    #[test]
    fn test_bucket_refill() {
        let mut bucket = WeightBucket::new(3000);
        bucket.try_consume(3000).unwrap();
        assert_eq!(bucket.available(), 0);

        // 3000 / 30s = 100 weight/sec, so 20ms restores ~2
        std::thread::sleep(Duration::from_millis(25));
        assert!(bucket.available() >= 1);
    }

    #[test]
    fn test_bucket_reset() {
        let mut bucket = WeightBucket::new(100);
        bucket.try_consume(100).unwrap();
        bucket.reset();
        assert_eq!(bucket.available(), 100);
    }

    #[test]
    fn test_vip0_defaults() {
        let config = RateLimitConfig::vip0();
        assert_eq!(config.spot.capacity, 4000);
        assert_eq!(config.public.capacity, 2000);
    }

    #[test]
    fn test_pool_lookup() {
        let config = RateLimitConfig::vip0();
        assert_eq!(RateLimitPool::Futures.get_config(&config).capacity, 2000);
        assert_eq!(RateLimitPool::Spot.get_config(&config).capacity, 4000);
    }
}
