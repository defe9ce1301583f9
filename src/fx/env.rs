//! Host environment collaborators: clock, codec, and signed transactions

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::codec::{Codec, TypeRegistry};

/// Source of the current time, in Unix seconds
pub trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        // pre-epoch system time reads as 0
        Utc::now().timestamp().max(0) as u64
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn new(now: u64) -> Self {
        Self {
            now: AtomicU64::new(now),
        }
    }

    pub fn at(time: DateTime<Utc>) -> Self {
        let clock = Self::default();
        clock.set_datetime(time);
        clock
    }

    pub fn set(&self, now: u64) {
        self.now.store(now, Ordering::SeqCst);
    }

    pub fn set_datetime(&self, time: DateTime<Utc>) {
        self.set(time.timestamp().max(0) as u64);
    }

    pub fn advance(&self, seconds: u64) {
        self.now.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// What the engine needs from its host
pub trait Environment: Send + Sync {
    fn clock(&self) -> Arc<dyn Clock>;
    fn codec(&self) -> &dyn Codec;
}

/// An environment made of a clock and an in-memory [`TypeRegistry`]
pub struct StaticEnvironment {
    clock: Arc<dyn Clock>,
    registry: TypeRegistry,
}

impl StaticEnvironment {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            registry: TypeRegistry::new(),
        }
    }

    /// Environment on the wall clock
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock))
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }
}

impl fmt::Debug for StaticEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticEnvironment")
            .field("now", &self.clock.now())
            .field("registry", &self.registry)
            .finish()
    }
}

impl Environment for StaticEnvironment {
    fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    fn codec(&self) -> &dyn Codec {
        &self.registry
    }
}

/// A transaction that can produce the canonical bytes its signers signed
pub trait UnsignedTx {
    fn unsigned_bytes(&self) -> Vec<u8>;
}

impl UnsignedTx for Vec<u8> {
    fn unsigned_bytes(&self) -> Vec<u8> {
        self.clone()
    }
}
