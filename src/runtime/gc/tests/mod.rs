//! GC unit tests

use crate::runtime::gc::{Collector, GcConfig, Handle, ObjectHeap};
use crate::runtime::value::{Instance, Value};

fn registered(heap: &mut ObjectHeap) -> Handle {
    let handle = heap.allocate(Instance::new("A"));
    heap.register(handle);
    handle
}

fn link(
    heap: &mut ObjectHeap,
    from: Handle,
    field: &str,
    to: Handle,
) {
    heap.get_mut(from)
        .unwrap()
        .fields
        .add_id(field, Value::Object(to));
}

#[cfg(test)]
mod heap_tests {
    use super::*;

    #[test]
    fn test_allocate_is_unregistered() {
        let mut heap = ObjectHeap::new();
        let handle = heap.allocate(Instance::new("A"));
        assert_eq!(heap.size(), 0);
        assert_eq!(heap.live_slots(), 1);
        assert!(heap.is_reached(handle));

        heap.register(handle);
        assert_eq!(heap.size(), 1);
        assert!(!heap.is_reached(handle));
    }

    #[test]
    fn test_sweep_frees_unmarked_and_resets_marks() {
        let mut heap = ObjectHeap::new();
        let kept = registered(&mut heap);
        let dropped = registered(&mut heap);
        heap.mark(kept);

        assert_eq!(heap.sweep(), 1);
        assert!(heap.get(dropped).is_none());
        assert!(heap.get(kept).is_some());
        assert!(!heap.is_reached(kept));
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut heap = ObjectHeap::new();
        let first = registered(&mut heap);
        heap.sweep();
        let second = heap.allocate(Instance::new("B"));
        assert_eq!(first, second);
        assert_eq!(heap.get(second).map(|i| i.class.as_str()), Some("B"));
    }
}

#[cfg(test)]
mod collector_tests {
    use super::*;

    #[test]
    fn test_threshold() {
        let mut heap = ObjectHeap::new();
        let collector = Collector::new(GcConfig { threshold: 2 });
        registered(&mut heap);
        assert!(!collector.should_collect(&heap));
        registered(&mut heap);
        assert!(collector.should_collect(&heap));
        assert_eq!(GcConfig::default().threshold, 1000);
    }

    #[test]
    fn test_only_reachable_survive() {
        let mut heap = ObjectHeap::new();
        let mut collector = Collector::new(GcConfig { threshold: 1 });
        let root = registered(&mut heap);
        let child = registered(&mut heap);
        let grandchild = registered(&mut heap);
        link(&mut heap, root, "next", child);
        link(&mut heap, child, "next", grandchild);
        let garbage: Vec<Handle> = (0..10).map(|_| registered(&mut heap)).collect();

        let freed = collector.collect(&mut heap, [root]);
        assert_eq!(freed, garbage.len());
        assert_eq!(heap.size(), 3);
        assert!(heap.get(grandchild).is_some());
        assert!(garbage.iter().all(|h| heap.get(*h).is_none()));
        assert_eq!(collector.collections(), 1);
        assert_eq!(collector.total_freed(), 10);
    }

    #[test]
    fn test_self_cycle_is_kept_and_terminates() {
        let mut heap = ObjectHeap::new();
        let mut collector = Collector::new(GcConfig::default());
        let x = registered(&mut heap);
        link(&mut heap, x, "me", x);
        let other = registered(&mut heap);
        link(&mut heap, other, "me", other);

        collector.collect(&mut heap, [x]);
        assert!(heap.get(x).is_some());
        assert!(heap.get(other).is_none());

        // A second cycle starts from clean marks.
        collector.collect(&mut heap, [x]);
        assert!(heap.get(x).is_some());
    }

    #[test]
    fn test_unreferenced_cycle_collected() {
        let mut heap = ObjectHeap::new();
        let mut collector = Collector::new(GcConfig::default());
        let a = registered(&mut heap);
        let b = registered(&mut heap);
        link(&mut heap, a, "peer", b);
        link(&mut heap, b, "peer", a);

        assert_eq!(collector.collect(&mut heap, []), 2);
        assert_eq!(heap.size(), 0);
    }

    #[test]
    fn test_unregistered_root_is_traversed() {
        let mut heap = ObjectHeap::new();
        let mut collector = Collector::new(GcConfig::default());
        let building = heap.allocate(Instance::new("A"));
        let field = registered(&mut heap);
        link(&mut heap, building, "f", field);

        assert_eq!(collector.collect(&mut heap, [building]), 0);
        assert!(heap.get(building).is_some());
        assert!(heap.get(field).is_some());
    }
}
