//! The static table catalog.
//!
//! The restaurant rents three kinds of beach tables. The catalog is fixed
//! at build time; reservations reference an entry by its exact name.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde::Serialize;

/// One rentable table kind.
#[derive(Debug, Clone, Serialize)]
pub struct TableType {
    /// Catalog name, referenced by reservations.
    pub name: &'static str,
    /// Smallest party the table accepts.
    pub min_capacity: i32,
    /// Largest party the table accepts.
    pub max_capacity: i32,
    /// Rental price per hour.
    pub price_per_hour: Decimal,
}

impl TableType {
    /// Check a party size against the capacity range (inclusive).
    pub fn fits(&self, num_people: i32) -> bool {
        num_people >= self.min_capacity && num_people <= self.max_capacity
    }
}

static CATALOG: LazyLock<[TableType; 3]> = LazyLock::new(|| {
    [
        TableType {
            name: "Parasol",
            min_capacity: 1,
            max_capacity: 4,
            price_per_hour: Decimal::new(1500, 2),
        },
        TableType {
            name: "Mini Cabane",
            min_capacity: 1,
            max_capacity: 5,
            price_per_hour: Decimal::new(2500, 2),
        },
        TableType {
            name: "Cabane",
            min_capacity: 6,
            max_capacity: 20,
            price_per_hour: Decimal::new(3500, 2),
        },
    ]
});

/// All table types, in catalog order.
pub fn all() -> &'static [TableType] {
    &*CATALOG
}

/// Look up a table type by its exact name.
pub fn find(name: &str) -> Option<&'static TableType> {
    CATALOG.iter().find(|t| t.name == name)
}
