use feruca::Collator;
use tracing::instrument;
use uuid::Uuid;

use crate::domain::{Customer, NewCustomer, Query};

/// The customer collection.
///
/// The directory exclusively owns its customers. They can only be added or
/// deleted; listings are computed on demand by [`Directory::visible`] and
/// never change the collection.
///
/// Customers are kept in insertion order, which is not meaningful to users.
/// The visible order is always derived from the names.
#[derive(Debug, Default, Clone)]
pub struct Directory {
    customers: Vec<Customer>,
}

impl Directory {
    /// Creates an empty directory.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            customers: Vec::new(),
        }
    }

    /// Adds a customer to the directory.
    ///
    /// A fresh identifier and creation timestamp are assigned. The caller is
    /// responsible for validating the details beforehand.
    #[instrument(level = "debug", skip_all)]
    pub fn add(&mut self, details: NewCustomer) -> &Customer {
        let customer = Customer::new(details);
        tracing::info!("Added customer: {} ({})", customer.name(), customer.id());

        let index = self.customers.len();
        self.customers.push(customer);
        &self.customers[index]
    }

    /// Deletes the customer with the given identifier.
    ///
    /// Returns the removed customer, or `None` if no customer has that
    /// identifier. Deleting an unknown identifier leaves the directory
    /// unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, id: Uuid) -> Option<Customer> {
        let Some(index) = self.customers.iter().position(|c| c.id() == id) else {
            tracing::debug!("No customer with id {id}");
            return None;
        };

        let customer = self.customers.remove(index);
        tracing::info!("Deleted customer: {} ({id})", customer.name());
        Some(customer)
    }

    /// The customers matching a query, ordered by name.
    ///
    /// Names are compared with the Unicode Collation Algorithm using the CLDR
    /// root order, so accented and non-Latin-alphabet letters sort beside
    /// their base letters and lowercase sorts before uppercase.
    ///
    /// Customers with equal names keep their insertion order in both
    /// directions, so repeated calls on an unchanged directory return the
    /// same sequence.
    #[must_use]
    pub fn visible(&self, query: &Query) -> Vec<&Customer> {
        let mut visible: Vec<&Customer> = self
            .customers
            .iter()
            .filter(|customer| query.matches(customer))
            .collect();

        let direction = query.direction();
        let mut collator = Collator::default();
        visible.sort_by(|a, b| direction.apply(collator.collate(a.name(), b.name())));

        visible
    }

    /// Finds a customer by identifier.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id() == id)
    }

    /// Iterates over all customers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }

    /// The number of customers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Whether the directory has no customers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;
    use uuid::Uuid;

    use super::Directory;
    use crate::{Candidate, Query, SortDirection};

    fn add(directory: &mut Directory, name: &str, phone: &str) -> Uuid {
        let details = Candidate::new(name)
            .with_phone_number(phone)
            .validate()
            .unwrap();
        directory.add(details).id()
    }

    fn names(directory: &Directory, text: &str, direction: SortDirection) -> Vec<String> {
        directory
            .visible(&Query::new(text, direction))
            .into_iter()
            .map(|c| c.name().to_string())
            .collect()
    }

    #[test]
    fn add_grows_directory_by_one() {
        let mut directory = Directory::new();
        add(&mut directory, "Alice", "");
        assert_eq!(directory.len(), 1);

        add(&mut directory, "Alice", "");
        assert_eq!(directory.len(), 2);
        assert_eq!(
            names(&directory, "", SortDirection::Ascending),
            ["Alice", "Alice"]
        );
    }

    #[test]
    fn added_customer_is_retrievable() {
        let mut directory = Directory::new();
        let id = add(&mut directory, "Alice", "555-1234");

        let customer = directory.get(id).unwrap();
        assert_eq!(customer.name(), "Alice");
        assert_eq!(customer.phone_number(), "555-1234");
    }

    #[test]
    fn delete_removes_only_matching_customer() {
        let mut directory = Directory::new();
        let alice = add(&mut directory, "Alice", "");
        let bob = add(&mut directory, "Bob", "");

        let removed = directory.delete(alice).unwrap();

        assert_eq!(removed.id(), alice);
        assert_eq!(directory.len(), 1);
        assert!(directory.get(alice).is_none());
        assert!(directory.get(bob).is_some());
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let mut directory = Directory::new();
        add(&mut directory, "Alice", "");

        assert!(directory.delete(Uuid::new_v4()).is_none());
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn delete_twice_is_noop() {
        let mut directory = Directory::new();
        let alice = add(&mut directory, "Alice", "");

        assert!(directory.delete(alice).is_some());
        assert!(directory.delete(alice).is_none());
        assert!(directory.is_empty());
    }

    #[test]
    fn sorts_by_name_ignoring_case() {
        let mut directory = Directory::new();
        add(&mut directory, "Bob", "");
        add(&mut directory, "alice", "");
        add(&mut directory, "Carol", "");

        assert_eq!(
            names(&directory, "", SortDirection::Ascending),
            ["alice", "Bob", "Carol"]
        );
        assert_eq!(
            names(&directory, "", SortDirection::Descending),
            ["Carol", "Bob", "alice"]
        );
    }

    #[test_case("alice", "Bob"; "case does not dominate letters")]
    #[test_case("alice", "Alice"; "lowercase before uppercase")]
    #[test_case("resume", "résumé"; "unaccented before accented")]
    #[test_case("résumé", "resumes"; "accents are secondary to letters")]
    #[test_case("Zoë", "zz"; "diaeresis ignored at primary level")]
    #[test_case("10 Downing", "Abbey"; "digits before letters")]
    #[test_case("Øyvind", "Pat"; "slashed o beside o")]
    #[test_case("Łukasz", "Mark"; "stroked l beside l")]
    #[test_case("Æsop", "Bob"; "ash beside a")]
    #[test_case("Đorđe", "Eve"; "stroked d beside d")]
    #[test_case("Straße", "Strasz"; "sharp s as ss")]
    fn orders_names(first: &str, second: &str) {
        for insertion in [[second, first], [first, second]] {
            let mut directory = Directory::new();
            for name in insertion {
                add(&mut directory, name, "");
            }

            assert_eq!(
                names(&directory, "", SortDirection::Ascending),
                [first, second]
            );
            assert_eq!(
                names(&directory, "", SortDirection::Descending),
                [second, first]
            );
        }
    }

    #[test]
    fn composed_and_decomposed_names_sort_together() {
        let mut directory = Directory::new();
        add(&mut directory, "cafe\u{301}", "");
        add(&mut directory, "cafes", "");
        add(&mut directory, "caf\u{e9}", "");

        let sorted = names(&directory, "", SortDirection::Ascending);
        assert_eq!(sorted[2], "cafes");
    }

    #[test]
    fn equal_names_keep_insertion_order_in_both_directions() {
        let mut directory = Directory::new();
        let first = add(&mut directory, "Sam", "1");
        add(&mut directory, "Zed", "");
        let second = add(&mut directory, "Sam", "2");

        let ascending: Vec<_> = directory
            .visible(&Query::new("", SortDirection::Ascending))
            .into_iter()
            .map(|c| c.id())
            .collect();
        assert_eq!(ascending[..2], [first, second]);

        let descending: Vec<_> = directory
            .visible(&Query::new("", SortDirection::Descending))
            .into_iter()
            .map(|c| c.id())
            .collect();
        assert_eq!(descending[1..], [first, second]);
    }

    #[test]
    fn filters_on_phone_substring() {
        let mut directory = Directory::new();
        add(&mut directory, "Alice", "555-1234");
        add(&mut directory, "Bob", "555-9999");

        assert_eq!(
            names(&directory, "1234", SortDirection::Ascending),
            ["Alice"]
        );
        assert_eq!(
            names(&directory, "555", SortDirection::Ascending),
            ["Alice", "Bob"]
        );
    }

    #[test]
    fn filter_ignores_case() {
        let mut directory = Directory::new();
        add(&mut directory, "alice", "");
        add(&mut directory, "Bob", "");

        assert_eq!(
            names(&directory, "ALICE", SortDirection::Ascending),
            ["alice"]
        );
    }

    #[test]
    fn visible_is_idempotent_and_pure() {
        let mut directory = Directory::new();
        add(&mut directory, "Carol", "");
        add(&mut directory, "alice", "");
        add(&mut directory, "Bob", "");
        let query = Query::new("o", SortDirection::Descending);

        let first: Vec<_> = directory.visible(&query).into_iter().map(|c| c.id()).collect();
        let second: Vec<_> = directory.visible(&query).into_iter().map(|c| c.id()).collect();
        assert_eq!(first, second);

        let insertion_order: Vec<_> = directory.iter().map(|c| c.name().to_string()).collect();
        assert_eq!(insertion_order, ["Carol", "alice", "Bob"]);
    }

    #[test]
    fn empty_directory_has_empty_projection() {
        let directory = Directory::new();
        assert!(directory.visible(&Query::all()).is_empty());
    }

    #[test]
    fn deleted_customer_disappears_from_projection() {
        let mut directory = Directory::new();
        let alice = add(&mut directory, "Alice", "");
        add(&mut directory, "Bob", "");

        directory.delete(alice);

        assert_eq!(names(&directory, "", SortDirection::Ascending), ["Bob"]);
    }
}
