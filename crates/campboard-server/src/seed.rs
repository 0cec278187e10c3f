//! Store seeding with generated campgrounds

use campboard_core::{Campground, CampgroundAttrs, DomainResult, MemoryStore, Price};
use rand::{RngExt, seq::IndexedRandom};
use tracing::debug;

const DESCRIPTORS: &[&str] = &[
    "Forest", "Ancient", "Petrified", "Roaring", "Cascade", "Tumbling", "Silent", "Redwood",
    "Bullfrog", "Maple", "Misty", "Elk", "Grizzly", "Ocean", "Sky", "Dusty", "Diamond",
];

const PLACES: &[&str] = &[
    "Flats",
    "Village",
    "Canyon",
    "Pond",
    "Group Camp",
    "Horse Camp",
    "Ghost Town",
    "Camp",
    "Dispersed Camp",
    "Backcountry",
    "River",
    "Creek",
    "Creekside",
    "Bay",
    "Spring",
    "Bayshore",
    "Sands",
    "Mule Camp",
    "Hunting Camp",
    "Cliffs",
    "Hollow",
];

const CITIES: &[(&str, &str)] = &[
    ("Bend", "Oregon"),
    ("Moab", "Utah"),
    ("Asheville", "North Carolina"),
    ("Bozeman", "Montana"),
    ("Flagstaff", "Arizona"),
    ("Duluth", "Minnesota"),
    ("Port Angeles", "Washington"),
    ("Stowe", "Vermont"),
    ("Gunnison", "Colorado"),
    ("Marquette", "Michigan"),
    ("Bar Harbor", "Maine"),
    ("Truckee", "California"),
];

const IMAGE_URL: &str = "https://source.unsplash.com/collection/483251";

const DESCRIPTION: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
    eiusmod tempor incididunt ut labore et dolore magna aliqua. Quis ipsum suspendisse vitae \
    velit dignissim sodales ut eu sem integer vitae.";

/// Replace the store contents with `count` generated campgrounds
pub fn seed_store(store: &MemoryStore, count: usize) -> DomainResult<()> {
    let mut rng = rand::rng();
    store.clear();

    for _ in 0..count {
        let descriptor = DESCRIPTORS.choose(&mut rng).copied().unwrap_or("Forest");
        let place = PLACES.choose(&mut rng).copied().unwrap_or("Camp");
        let (city, state) = CITIES
            .choose(&mut rng)
            .copied()
            .unwrap_or(("Bend", "Oregon"));
        let price = Price::new(f64::from(rng.random_range(10_u32..30)))?;

        let campground = Campground::new(CampgroundAttrs {
            title: format!("{descriptor} {place}"),
            price,
            image: IMAGE_URL.to_string(),
            description: DESCRIPTION.to_string(),
            location: format!("{city}, {state}"),
        });
        debug!(title = campground.title(), "seeded campground");
        store.put_campground(campground);
    }
    Ok(())
}
