use std::collections::BTreeMap;

/// Keyed collection with its own id counter.
///
/// Ids start at 1 and only ever grow, so iteration order over the map is
/// insertion order. Reads hand out clones; the map itself never leaves.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: BTreeMap<u64, T>,
    next_id: u64,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { records: BTreeMap::new(), next_id: 1 }
    }
}

impl<T: Clone> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next id, build the record with it and store it.
    pub fn insert_with<F>(&mut self, build: F) -> T
    where
        F: FnOnce(u64) -> T,
    {
        let id = self.next_id;
        self.next_id += 1;
        let record = build(id);
        self.records.insert(id, record.clone());
        record
    }

    pub fn get(&self, id: u64) -> Option<T> {
        self.records.get(&id).cloned()
    }

    pub fn list(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    pub fn filter<P>(&self, pred: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records.values().filter(|&r| pred(r)).cloned().collect()
    }

    /// First match in id order.
    pub fn find<P>(&self, pred: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records.values().find(|&r| pred(r)).cloned()
    }

    pub fn any<P>(&self, pred: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.records.values().any(pred)
    }

    /// Mutate the record in place and return the result; `None` if `id` is unknown.
    pub fn update<F>(&mut self, id: u64, mutate: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let record = self.records.get_mut(&id)?;
        mutate(record);
        Some(record.clone())
    }

    /// Like [`Collection::update`], addressing the first record matching `pred`.
    pub fn update_first<P, F>(&mut self, pred: P, mutate: F) -> Option<T>
    where
        P: Fn(&T) -> bool,
        F: FnOnce(&mut T),
    {
        let record = self.records.values_mut().find(|r| pred(&**r))?;
        mutate(record);
        Some(record.clone())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
