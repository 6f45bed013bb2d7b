// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide, content-addressed memoization.
//!
//! Caching never changes results: a disabled cache (capacity 0) computes
//! every value afresh.

use crate::env;
use crate::tokenizer::Token;
use parking_lot::Mutex;
use std::borrow::Borrow;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::sync::{Arc, LazyLock};

/// Key of a memoized sub-sequence: source text and logical range.
pub type SliceKey = (Arc<str>, usize, usize);

static TOKENS: LazyLock<MemoCache<Arc<str>, Arc<[Token]>>> =
    LazyLock::new(|| MemoCache::new("tokens", env::cache_capacity()));

static SLICES: LazyLock<MemoCache<SliceKey, String>> =
    LazyLock::new(|| MemoCache::new("slices", env::cache_capacity()));

/// Tokenization results keyed by source text.
///
/// Keys share their buffer with the [`AnsiString`](crate::AnsiString) that
/// inserted them.
pub fn tokens() -> &'static MemoCache<Arc<str>, Arc<[Token]>> {
    &TOKENS
}

/// Rendered sub-sequences keyed by source text and range.
pub fn slices() -> &'static MemoCache<SliceKey, String> {
    &SLICES
}

/// Bounded memoization map with first-in, first-out eviction.
pub struct MemoCache<K, V> {
    name: &'static str,
    capacity: usize,
    entries: Mutex<Entries<K, V>>,
}

struct Entries<K, V> {
    map: HashMap<K, V>,
    order: VecDeque<K>,
}

impl<K, V> MemoCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(name: &'static str, capacity: usize) -> Self {
        tracing::debug!(cache = name, capacity, "memoization cache created");
        Self {
            name,
            capacity,
            entries: Mutex::new(Entries {
                map: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    ///
    /// `compute` runs without the lock held.
    pub fn get_or_insert_with<Q, F>(&self, key: &Q, compute: F) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
        F: FnOnce() -> V,
    {
        if self.capacity == 0 {
            return compute();
        }

        if let Some(value) = self.entries.lock().map.get(key) {
            tracing::trace!(cache = self.name, "hit");
            return value.clone();
        }

        tracing::trace!(cache = self.name, "miss");
        let value = compute();

        let mut entries = self.entries.lock();
        if !entries.map.contains_key(key) {
            while entries.map.len() >= self.capacity {
                let Some(oldest) = entries.order.pop_front() else {
                    break;
                };
                entries.map.remove::<K>(&oldest);
                tracing::trace!(cache = self.name, "evicted oldest entry");
            }
            let owned = key.to_owned();
            entries.order.push_back(owned.clone());
            entries.map.insert(owned, value.clone());
        }
        value
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().map.is_empty()
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.lock().map.contains_key(key)
    }

    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        entries.map.clear();
        entries.order.clear();
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
