//! End-to-end storefront behaviour over real stores.

use assert_matches::assert_matches;
use chrono::{TimeZone, Utc};
use voyage_commerce::prelude::*;
use voyage_store::{Collection, FileStore, KeyValueStore, MemoryStore, Repository};

fn customer() -> CustomerDetails {
    let mut customer = CustomerDetails::new("Ada", "ada@example.com", "1 Main St", "Lisbon");
    customer.last_name = "Lovelace".to_string();
    customer.country = "Portugal".to_string();
    customer
}

#[test]
fn repeated_tour_adds_collapse_into_one_line() {
    let shop = Storefront::with_builtin_catalog(MemoryStore::new());
    let deltas = [1, 3, 2, 7, 1];

    for delta in deltas {
        shop.cart().add_tour_line(&TourId::new("4"), delta).unwrap();
    }

    let lines = shop.cart().lines().unwrap();
    assert_eq!(lines.len(), 1);
    assert_matches!(&lines[0], CartLine::Tour(line) if line.quantity == deltas.iter().sum::<i64>());
}

#[test]
fn totals_follow_line_prices() {
    let shop = Storefront::with_builtin_catalog(MemoryStore::new());
    let cart = shop.cart();
    cart.add_tour_line(&TourId::new("2"), 3).unwrap();
    cart.add_tour_line(&TourId::new("6"), 1).unwrap();
    cart.add_vehicle_line(&VehicleId::new("v5"), Rental::days(5)).unwrap();
    cart.add_vehicle_line(&VehicleId::new("v4"), Rental::days(2)).unwrap();

    let catalog = shop.catalog();
    let tour_part: i64 = [("2", 3), ("6", 1)]
        .iter()
        .map(|(id, qty)| catalog.tour(&TourId::new(*id)).unwrap().price.amount() * qty)
        .sum();
    let vehicle_part: i64 = [("v5", 5), ("v4", 2)]
        .iter()
        .map(|(id, days)| catalog.vehicle(&VehicleId::new(*id)).unwrap().price_per_day.amount() * days)
        .sum();
    let subtotal = tour_part + vehicle_part;

    let summary = cart.summary().unwrap();
    assert_eq!(summary.subtotal, Money::new(subtotal));
    assert_eq!(summary.tax, Money::new(subtotal / 10));
    assert_eq!(summary.total, Money::new(subtotal + subtotal / 10));
}

#[test]
fn safari_for_two_prices_out() {
    let shop = Storefront::with_builtin_catalog(MemoryStore::new());
    shop.cart().add_tour_line(&TourId::new("1"), 2).unwrap();

    assert_eq!(shop.cart().subtotal().unwrap(), Money::new(4998));
    assert_eq!(shop.cart().tax().unwrap(), Money::new(499));
    assert_eq!(shop.cart().total().unwrap(), Money::new(5497));
}

#[test]
fn collections_survive_a_file_store_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();

    let (cart_before, booking, inquiry) = {
        let shop = Storefront::with_builtin_catalog(FileStore::open(dir.path()).unwrap());
        shop.cart().add_tour_line(&TourId::new("3"), 2).unwrap();
        let pickup = "2024-07-01".parse().unwrap();
        let dropoff = "2024-07-04".parse().unwrap();
        shop.cart()
            .add_vehicle_line(&VehicleId::new("v1"), Rental::days(3).with_dates(pickup, dropoff))
            .unwrap();
        let booking = shop.checkout_at(customer(), &now).unwrap();

        shop.cart().add_tour_line(&TourId::new("7"), 1).unwrap();
        let inquiry = shop
            .submit_inquiry_at(ContactForm::new("Ada", "ada@example.com", "Visa?"), now)
            .unwrap();
        (shop.cart().lines().unwrap(), booking, inquiry)
    };

    let shop = Storefront::with_builtin_catalog(FileStore::open(dir.path()).unwrap());
    assert_eq!(shop.cart().lines().unwrap(), cart_before);
    assert_eq!(shop.bookings().list().unwrap(), vec![booking]);
    assert_eq!(shop.inquiries().list().unwrap(), vec![inquiry]);
}

#[test]
fn blank_first_name_blocks_checkout() {
    let shop = Storefront::with_builtin_catalog(MemoryStore::new());
    shop.cart().add_tour_line(&TourId::new("1"), 1).unwrap();
    shop.checkout(customer()).unwrap();
    shop.cart().add_tour_line(&TourId::new("2"), 1).unwrap();
    let before = shop.bookings().len().unwrap();

    let mut details = customer();
    details.first_name = String::new();
    let err = shop.checkout(details).unwrap_err();

    assert_matches!(err, CommerceError::Validation(ref v) if v.missing == vec!["firstName"]);
    assert_eq!(shop.bookings().len().unwrap(), before);
    assert_eq!(shop.cart().lines().unwrap().len(), 1);
}

#[test]
fn checkout_snapshots_and_clears_the_cart() {
    let shop = Storefront::with_builtin_catalog(MemoryStore::new());
    shop.cart().add_tour_line(&TourId::new("8"), 2).unwrap();
    shop.cart()
        .add_vehicle_line(&VehicleId::new("v6"), Rental::days(4))
        .unwrap();
    let snapshot = shop.cart().lines().unwrap();
    let expected_total = shop.cart().total().unwrap();
    let before = shop.bookings().len().unwrap();

    let booking = shop.checkout(customer()).unwrap();

    assert_eq!(shop.bookings().len().unwrap(), before + 1);
    assert_eq!(booking.items, snapshot);
    assert_eq!(booking.total, expected_total);
    assert_eq!(booking.guest_name(), "Ada Lovelace");
    assert!(shop.cart().lines().unwrap().is_empty());

    // Later cart activity never reaches the stored booking.
    shop.cart().add_tour_line(&TourId::new("8"), 5).unwrap();
    let stored = shop.bookings().get(booking.id).unwrap().unwrap();
    assert_eq!(stored.items, snapshot);
}

#[test]
fn beach_tours_in_price_window() {
    let catalog = Catalog::builtin();
    let filter = TourFilter::new()
        .with_category(TourCategory::Beach)
        .with_price_range(Money::new(1000), Money::new(2000))
        .with_sort(TourSort::Featured);

    let found = catalog.list_tours(&filter);
    let expected: Vec<&Tour> = catalog
        .tours()
        .iter()
        .filter(|t| {
            t.category == TourCategory::Beach
                && t.price >= Money::new(1000)
                && t.price <= Money::new(2000)
        })
        .collect();

    assert!(!found.is_empty());
    assert_eq!(found, expected);
}

#[test]
fn deleting_a_booking_keeps_the_rest() {
    let shop = Storefront::with_builtin_catalog(MemoryStore::new());
    for tour in ["1", "2", "3", "4"] {
        shop.cart().add_tour_line(&TourId::new(tour), 1).unwrap();
        shop.checkout(customer()).unwrap();
    }
    let all = shop.bookings().list().unwrap();

    assert!(shop.bookings().delete(all[1].id).unwrap());

    let remaining = shop.bookings().list().unwrap();
    assert_eq!(remaining, vec![all[0].clone(), all[2].clone(), all[3].clone()]);
    assert!(!shop.bookings().delete(all[1].id).unwrap());
}

#[test]
fn corrupt_blobs_read_as_empty() {
    let store = MemoryStore::new();
    store.set("cart", "{not json").unwrap();
    store.set("bookings", "42").unwrap();

    let shop = Storefront::with_builtin_catalog(store.clone());
    assert!(shop.cart().lines().unwrap().is_empty());
    assert!(shop.bookings().list().unwrap().is_empty());

    // The next write replaces the bad blob.
    shop.cart().add_tour_line(&TourId::new("5"), 1).unwrap();
    let lines: Vec<CartLine> = Collection::new(&store, "cart").load().unwrap();
    assert_eq!(lines.len(), 1);
}

#[test]
fn non_utf8_files_read_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.json"), [0xff, 0xfe, 0x00]).unwrap();
    std::fs::write(dir.path().join("bookings.json"), [0xc3, 0x28]).unwrap();

    let shop = Storefront::with_builtin_catalog(FileStore::open(dir.path()).unwrap());
    assert!(shop.bookings().list().unwrap().is_empty());
    shop.cart().add_tour_line(&TourId::new("1"), 1).unwrap();
    assert_eq!(shop.cart().lines().unwrap().len(), 1);
}

#[test]
fn unknown_sort_name_is_rejected() {
    assert_eq!("price-low".parse::<TourSort>().unwrap(), TourSort::PriceLow);
    assert_matches!(
        "cheapest".parse::<TourSort>(),
        Err(CommerceError::UnknownOption { .. })
    );
}
