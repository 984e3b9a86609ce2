use super::*;

fn keys(c: &LruCache<&'static str, u32>) -> Vec<&'static str> {
    c.keys().copied().collect()
}

#[test]
fn set_beyond_capacity_evicts_oldest() {
    let mut c = LruCache::new(2);
    assert!(c.set("a", 1).is_none());
    assert!(c.set("b", 2).is_none());
    assert_eq!(c.set("c", 3), Some(("a", 1)));
    assert_eq!(c.len(), 2);
    assert!(!c.contains(&"a"));
    assert_eq!(keys(&c), vec!["b", "c"]);
}

#[test]
fn get_refreshes_recency() {
    let mut c = LruCache::new(2);
    c.set("a", 1);
    c.set("b", 2);
    assert_eq!(c.get(&"a"), Some(&1));
    assert_eq!(c.set("c", 3), Some(("b", 2)));
    assert_eq!(keys(&c), vec!["a", "c"]);
}

#[test]
fn peek_does_not_refresh() {
    let mut c = LruCache::new(2);
    c.set("a", 1);
    c.set("b", 2);
    assert_eq!(c.peek(&"a"), Some(&1));
    assert_eq!(c.set("c", 3), Some(("a", 1)));
}

#[test]
fn set_existing_key_refreshes_without_eviction() {
    let mut c = LruCache::new(2);
    c.set("a", 1);
    c.set("b", 2);
    assert!(c.set("a", 10).is_none());
    assert_eq!(keys(&c), vec!["b", "a"]);
    assert_eq!(c.peek(&"a"), Some(&10));
}

#[test]
fn size_never_exceeds_max_under_churn() {
    let mut c: LruCache<u32, u32> = LruCache::new(8);
    for i in 0..1000u32 {
        c.set(i % 37, i);
        if i % 3 == 0 {
            let _ = c.get(&(i % 11));
        }
        assert!(c.len() <= 8);
    }
}

#[test]
fn miss_reports_absence() {
    let mut c: LruCache<&str, u32> = LruCache::new(1);
    assert_eq!(c.get(&"nope"), None);
}

#[test]
fn clear_empties() {
    let mut c = LruCache::new(3);
    c.set("a", 1);
    c.set("b", 2);
    c.clear();
    assert!(c.is_empty());
    assert_eq!(c.max_size(), 3);
}

#[test]
fn zero_capacity_is_clamped_to_one() {
    let mut c = LruCache::new(0);
    c.set("a", 1);
    c.set("b", 2);
    assert_eq!(c.len(), 1);
    assert!(c.contains(&"b"));
}
