//! Garbage collector
//!
//! Stop-the-world mark and sweep over the object heap, triggered when the
//! number of registered instances reaches a threshold.

pub mod heap;

pub use heap::{Handle, ObjectHeap};

use std::collections::HashSet;
use tracing::debug;

/// Default collection threshold
pub const DEFAULT_GC_THRESHOLD: usize = 1000;

/// GC configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GcConfig {
    /// Heap size that triggers a collection
    pub threshold: usize,
}

impl Default for GcConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_GC_THRESHOLD,
        }
    }
}

/// Mark-sweep collector
#[derive(Debug, Default)]
pub struct Collector {
    config: GcConfig,
    collections: usize,
    freed: usize,
}

impl Collector {
    pub fn new(config: GcConfig) -> Self {
        Self {
            config,
            collections: 0,
            freed: 0,
        }
    }

    pub fn config(&self) -> GcConfig {
        self.config
    }

    /// Check if the heap has reached the threshold
    pub fn should_collect(
        &self,
        heap: &ObjectHeap,
    ) -> bool {
        heap.size() >= self.config.threshold
    }

    /// Mark everything reachable from `roots`, then sweep.
    ///
    /// Returns the number of freed instances.
    pub fn collect(
        &mut self,
        heap: &mut ObjectHeap,
        roots: impl IntoIterator<Item = Handle>,
    ) -> usize {
        debug!("*Mark-Sweep GC* total object size: {}", heap.size());

        // 标记阶段：未注册的根只遍历一次
        let mut worklist: Vec<Handle> = Vec::new();
        let mut seen_unregistered: HashSet<Handle> = HashSet::new();
        for root in roots {
            if heap.is_registered(root) {
                if !heap.is_reached(root) {
                    heap.mark(root);
                    worklist.push(root);
                }
            } else if seen_unregistered.insert(root) {
                worklist.push(root);
            }
        }

        let mut reachable = 0;
        while let Some(handle) = worklist.pop() {
            if heap.is_registered(handle) {
                reachable += 1;
            }
            let Some(instance) = heap.get(handle) else {
                continue;
            };
            let children: Vec<Handle> = instance
                .children()
                .filter(|child| !heap.is_reached(*child))
                .collect();
            for child in children {
                if !heap.is_reached(child) {
                    heap.mark(child);
                    worklist.push(child);
                }
            }
        }
        debug!("*Mark-Sweep GC* reachable object size: {}", reachable);

        // 清除阶段
        let freed = heap.sweep();
        self.collections += 1;
        self.freed += freed;
        debug!("*Mark-Sweep GC* freed {} object(s)", freed);
        freed
    }

    /// Number of completed collections
    pub fn collections(&self) -> usize {
        self.collections
    }

    /// Total instances freed so far
    pub fn total_freed(&self) -> usize {
        self.freed
    }
}

#[cfg(test)]
mod tests;
