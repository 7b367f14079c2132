//! Seeded Catalog
//!
//! The fixed set of postings the board starts with.

use crate::item::{Item, ItemType};

fn seed(
    id: &str,
    title: &str,
    description: &str,
    item_type: ItemType,
    location: &str,
    date: &str,
    contact_name: &str,
) -> Item {
    Item {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        item_type,
        location: location.to_string(),
        date: date.to_string(),
        image: None,
        contact_name: contact_name.to_string(),
    }
}

/// Demo postings, in display order
pub fn seed_catalog() -> Vec<Item> {
    vec![
        seed(
            "1",
            "Blue iPhone 13",
            "Lost my blue iPhone 13 with a clear case. Last seen in the library on the second floor.",
            ItemType::Lost,
            "Main Library - 2nd Floor",
            "2 days ago",
            "Sarah Johnson",
        ),
        seed(
            "2",
            "Black Backpack",
            "Found a black Jansport backpack near the science building. Contains textbooks and notebooks.",
            ItemType::Found,
            "Science Building Entrance",
            "1 day ago",
            "Mike Chen",
        ),
        seed(
            "3",
            "Silver MacBook Pro",
            "Lost silver MacBook Pro 13-inch. Has stickers on the lid. Very important for my thesis work.",
            ItemType::Lost,
            "Student Union - Study Area",
            "3 days ago",
            "Emily Rodriguez",
        ),
        seed(
            "4",
            "Red Water Bottle",
            "Found a red Hydro Flask water bottle in the gym locker room.",
            ItemType::Found,
            "Recreation Center",
            "4 hours ago",
            "Alex Thompson",
        ),
        seed(
            "5",
            "Calculator TI-84",
            "Lost my graphing calculator during math exam. Name \"Jessica\" written on the back.",
            ItemType::Lost,
            "Mathematics Building - Room 204",
            "1 week ago",
            "Jessica Williams",
        ),
        seed(
            "6",
            "Car Keys",
            "Found a set of car keys with a Honda keychain near the parking lot.",
            ItemType::Found,
            "Parking Lot B",
            "6 hours ago",
            "David Park",
        ),
    ]
}
