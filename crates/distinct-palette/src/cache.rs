//! Assignment cache: key -> color, for the lifetime of one engine.

use std::collections::HashMap;

use crate::color::HexColor;

/// Colors already handed out, keyed by canonical input key.
///
/// Entries are never evicted. The miss counter doubles as the number of
/// colors assigned so far, which the dynamic strategy uses as its cursor.
#[derive(Debug, Default, Clone)]
pub struct AssignmentCache {
    assigned: HashMap<String, HexColor>,
    used: usize,
}

impl AssignmentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the color stored for `key`, or run `assign` with the current
    /// miss count, store its result and bump the count.
    ///
    /// A failed `assign` leaves the cache untouched.
    pub fn get_or_assign<E>(
        &mut self,
        key: &str,
        assign: impl FnOnce(usize) -> Result<HexColor, E>,
    ) -> Result<HexColor, E> {
        if let Some(&color) = self.assigned.get(key) {
            return Ok(color);
        }

        let color = assign(self.used)?;
        self.assigned.insert(key.to_string(), color);
        self.used += 1;
        Ok(color)
    }

    /// Color previously assigned to `key`.
    pub fn get(&self, key: &str) -> Option<HexColor> {
        self.assigned.get(key).copied()
    }

    /// Number of cache misses so far.
    #[inline]
    pub fn used(&self) -> usize {
        self.used
    }

    /// Number of distinct keys with a color.
    #[inline]
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[test]
    fn test_hit_skips_assign_and_counter() {
        let mut cache = AssignmentCache::new();
        let red = HexColor::from_rgb24(0xFF0000);

        let first = cache.get_or_assign::<Infallible>("a", |_| Ok(red)).unwrap();
        assert_eq!(first, red);
        assert_eq!(cache.used(), 1);

        let second = cache
            .get_or_assign::<Infallible>("a", |_| panic!("cache hit must not reassign"))
            .unwrap();
        assert_eq!(second, red);
        assert_eq!(cache.used(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_counter_passed_to_assign() {
        let mut cache = AssignmentCache::new();
        for (i, key) in ["a", "b", "c"].iter().enumerate() {
            cache
                .get_or_assign::<Infallible>(key, |used| {
                    assert_eq!(used, i);
                    Ok(HexColor::from_rgb24(used as u32))
                })
                .unwrap();
        }
        assert_eq!(cache.get("c"), Some(HexColor::from_rgb24(2)));
    }

    #[test]
    fn test_failed_assign_is_not_cached() {
        let mut cache = AssignmentCache::new();
        let result = cache.get_or_assign("a", |_| Err("boom"));
        assert_eq!(result, Err("boom"));
        assert!(cache.is_empty());
        assert_eq!(cache.used(), 0);
    }
}
