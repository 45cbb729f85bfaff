//! In-memory record store.

use super::Record;

/// Ordered, append-only collection of records.
///
/// The store performs no validation; admission decisions belong to
/// [`crate::admission`].
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    /// Records in insertion order, seed records first
    records: Vec<Record>,
}

impl RecordStore {
    /// Create a store pre-populated with trusted seed records.
    pub fn new(seed: Vec<Record>) -> Self {
        Self { records: seed }
    }

    /// Create a store seeded with the built-in default records.
    pub fn with_default_seed() -> Self {
        Self::new(super::default_seed())
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    /// Find the first record with the given phone.
    pub fn find_by_phone(&self, phone: &str) -> Option<(usize, &Record)> {
        self.records.iter().enumerate().find(|(_, r)| r.phone == phone)
    }

    /// Find the first record with the given mail.
    pub fn find_by_mail(&self, mail: &str) -> Option<(usize, &Record)> {
        self.records.iter().enumerate().find(|(_, r)| r.mail == mail)
    }

    /// Append a record to the end of the store.
    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Number of stored records.
    pub fn count(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: u8) -> Record {
        Record::new(
            format!("user{n}"),
            format!("555000000{n}"),
            format!("user{n}@example.com"),
            "secret",
        )
    }

    #[test]
    fn test_store_list_keeps_insertion_order() {
        let mut store = RecordStore::new(vec![sample(1)]);
        store.append(sample(2));
        store.append(sample(3));

        let users: Vec<&str> = store.list().iter().map(|r| r.user.as_str()).collect();
        assert_eq!(users, vec!["user1", "user2", "user3"]);
    }

    #[test]
    fn test_store_list_is_idempotent() {
        let store = RecordStore::new(vec![sample(1), sample(2)]);

        assert_eq!(store.list(), store.list());
    }

    #[test]
    fn test_store_find_by_phone() {
        let store = RecordStore::new(vec![sample(1), sample(2)]);

        let (index, record) = store.find_by_phone("5550000002").unwrap();
        assert_eq!(index, 1);
        assert_eq!(record.user, "user2");
        assert!(store.find_by_phone("5559999999").is_none());
    }

    #[test]
    fn test_store_find_by_mail() {
        let store = RecordStore::new(vec![sample(1), sample(2)]);

        let (index, _) = store.find_by_mail("user1@example.com").unwrap();
        assert_eq!(index, 0);
        assert!(store.find_by_mail("nobody@example.com").is_none());
    }

    #[test]
    fn test_store_append_accepts_anything() {
        let mut store = RecordStore::default();
        store.append(Record::default());
        store.append(Record::default());

        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_store_default_seed() {
        let store = RecordStore::with_default_seed();

        assert_eq!(store.count(), 2);
        assert!(store.find_by_phone("4422602875").is_some());
        assert!(store.find_by_mail("alexisleon@gmail.com").is_some());
    }
}
