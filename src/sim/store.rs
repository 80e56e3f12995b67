// store.rs - Ordered particle storage
//
// Insertion order is iteration order. Retirement compacts in place with a
// read/write cursor, so removing an entry never skips the one after it.

pub struct ParticleStore<P> {
    items: Vec<P>,
    cap: Option<usize>,
}

impl<P: Copy> ParticleStore<P> {
    /// Store that drops spawns past `cap`
    pub fn bounded(cap: usize) -> Self {
        Self {
            items: Vec::with_capacity(cap),
            cap: Some(cap),
        }
    }

    /// Store sized by its spawner
    pub fn unbounded() -> Self {
        Self { items: Vec::new(), cap: None }
    }

    /// Returns false if the store is full
    pub fn add(&mut self, p: P) -> bool {
        if self.is_full() { return false; }
        self.items.push(p);
        true
    }

    pub fn remove_expired(&mut self, mut expired: impl FnMut(&P) -> bool) {
        let mut write = 0;

        for read in 0..self.items.len() {
            let p = self.items[read];
            if expired(&p) { continue; }
            self.items[write] = p;
            write += 1;
        }

        self.items.truncate(write);
    }

    pub fn for_each(&self, visit: impl FnMut(&P)) {
        self.items.iter().for_each(visit);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, P> {
        self.items.iter_mut()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
    pub fn capacity(&self) -> Option<usize> { self.cap }

    pub fn is_full(&self) -> bool {
        self.cap.is_some_and(|c| self.items.len() >= c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_stops_at_capacity() {
        let mut s = ParticleStore::bounded(3);
        assert!(s.add(1));
        assert!(s.add(2));
        assert!(s.add(3));
        assert!(!s.add(4));
        assert_eq!(s.len(), 3);
        assert!(s.is_full());
    }

    #[test]
    fn unbounded_never_full() {
        let mut s = ParticleStore::unbounded();
        for i in 0..500 {
            assert!(s.add(i));
        }
        assert_eq!(s.len(), 500);
        assert_eq!(s.capacity(), None);
    }

    #[test]
    fn adjacent_expired_all_removed() {
        let mut s = ParticleStore::bounded(8);
        for life in [1, 1, 1] {
            s.add(life);
        }
        s.remove_expired(|&life| life <= 1);
        assert!(s.is_empty());
    }

    #[test]
    fn removal_keeps_order() {
        let mut s = ParticleStore::unbounded();
        for i in 0..10 {
            s.add(i);
        }
        s.remove_expired(|&i| i % 3 == 0);
        let left: Vec<i32> = s.iter().copied().collect();
        assert_eq!(left, vec![1, 2, 4, 5, 7, 8]);
    }

    #[test]
    fn predicate_sees_each_entry_once() {
        let mut s = ParticleStore::unbounded();
        for i in 0..6 {
            s.add(i);
        }
        let mut seen = Vec::new();
        s.remove_expired(|&i| {
            seen.push(i);
            i < 3
        });
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);

        let mut visited = Vec::new();
        s.for_each(|&i| visited.push(i));
        assert_eq!(visited, vec![3, 4, 5]);
    }

    #[test]
    fn freed_slots_reusable() {
        let mut s = ParticleStore::bounded(2);
        s.add(1);
        s.add(2);
        s.remove_expired(|&i| i == 1);
        assert!(s.add(3));
        assert!(!s.add(4));
    }
}
