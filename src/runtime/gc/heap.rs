//! Object heap with handle-based allocation
//!
//! Instances live in an arena addressed by `Handle`. An instance occupies a
//! slot from allocation on, but only counts towards the heap size, and only
//! becomes a collection target, once it is registered.

use crate::runtime::value::Instance;
use std::collections::HashMap;
use std::fmt;

/// Stable reference to a heap instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(pub usize);

impl fmt::Display for Handle {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "handle@{}", self.0)
    }
}

/// Arena of class instances plus the registered set with reachability flags
#[derive(Debug, Clone, Default)]
pub struct ObjectHeap {
    next_handle: usize,
    objects: HashMap<Handle, Instance>,
    free_list: Vec<Handle>,
    /// Registered instances and whether the current cycle reached them
    marks: HashMap<Handle, bool>,
}

impl ObjectHeap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an instance without registering it
    pub fn allocate(
        &mut self,
        instance: Instance,
    ) -> Handle {
        let handle = match self.free_list.pop() {
            Some(h) => h,
            None => {
                let h = Handle(self.next_handle);
                self.next_handle += 1;
                h
            }
        };
        self.objects.insert(handle, instance);
        handle
    }

    /// Add an allocated instance to the registered set, unmarked
    pub fn register(
        &mut self,
        handle: Handle,
    ) {
        if self.objects.contains_key(&handle) {
            self.marks.insert(handle, false);
        }
    }

    pub fn get(
        &self,
        handle: Handle,
    ) -> Option<&Instance> {
        self.objects.get(&handle)
    }

    pub fn get_mut(
        &mut self,
        handle: Handle,
    ) -> Option<&mut Instance> {
        self.objects.get_mut(&handle)
    }

    /// Number of registered instances
    pub fn size(&self) -> usize {
        self.marks.len()
    }

    /// Number of occupied arena slots, registered or not
    pub fn live_slots(&self) -> usize {
        self.objects.len()
    }

    pub fn is_registered(
        &self,
        handle: Handle,
    ) -> bool {
        self.marks.contains_key(&handle)
    }

    /// Reached in the current cycle. Unregistered handles count as reached.
    pub fn is_reached(
        &self,
        handle: Handle,
    ) -> bool {
        self.marks.get(&handle).copied().unwrap_or(true)
    }

    pub fn mark(
        &mut self,
        handle: Handle,
    ) {
        if let Some(flag) = self.marks.get_mut(&handle) {
            *flag = true;
        }
    }

    /// Free every registered instance left unmarked, then clear the marks.
    ///
    /// Returns the number of freed instances.
    pub fn sweep(&mut self) -> usize {
        let dead: Vec<Handle> = self
            .marks
            .iter()
            .filter(|(_, reached)| !**reached)
            .map(|(handle, _)| *handle)
            .collect();
        for handle in &dead {
            self.marks.remove(handle);
            self.objects.remove(handle);
            self.free_list.push(*handle);
        }
        for reached in self.marks.values_mut() {
            *reached = false;
        }
        dead.len()
    }
}
