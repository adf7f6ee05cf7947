//! Built-in catalog shipped with the storefront.

use chrono::NaiveDate;

use crate::catalog::{
    Difficulty, FuelType, Review, Tour, TourCategory, Transmission, Vehicle, VehicleType,
};
use crate::ids::{ReviewId, TourId, VehicleId};
use crate::money::Money;

const SAFARI_IMAGE: &str =
    "https://images.unsplash.com/photo-1516426122078-c23e76319801?w=800&h=600&fit=crop";
const PEAKS_IMAGE: &str =
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&h=600&fit=crop";
const PERU_IMAGE: &str =
    "https://images.unsplash.com/photo-1587595431973-160a0d59ed4b?w=800&h=600&fit=crop";
const COAST_IMAGE: &str =
    "https://images.unsplash.com/photo-1559827260-dc66d52bef19?w=800&h=600&fit=crop";
const AURORA_IMAGE: &str =
    "https://images.unsplash.com/photo-1504681869696-d977e0a4a435?w=800&h=600&fit=crop";
const COMPACT_IMAGE: &str =
    "https://images.unsplash.com/photo-1552820728-8ac41f1ce891?w=800&h=600&fit=crop";
const SUV_IMAGE: &str =
    "https://images.unsplash.com/photo-1606611013016-969c19d14311?w=800&h=600&fit=crop";
const SEDAN_IMAGE: &str =
    "https://images.unsplash.com/photo-1552519507-da3b142c6e3d?w=800&h=600&fit=crop";
const BIKE_IMAGE: &str =
    "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800&h=600&fit=crop";
const VAN_IMAGE: &str =
    "https://images.unsplash.com/photo-1464207687429-7505649dae38?w=800&h=600&fit=crop";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// The eight tours in featured order.
pub fn tours() -> Vec<Tour> {
    vec![
        Tour {
            id: TourId::new("1"),
            title: "African Safari Adventure".to_string(),
            category: TourCategory::Wildlife,
            price: Money::new(2499),
            duration: "7 days".to_string(),
            group_size: "2-8 people".to_string(),
            location: "Kenya & Tanzania".to_string(),
            image: SAFARI_IMAGE.to_string(),
            description: "Experience the thrill of an African safari with wildlife viewing, expert guides, and luxury accommodations. Witness the great migration and encounter Africa's most iconic animals.".to_string(),
            highlights: strings(&["Big Five viewing", "Hot air balloon ride", "Masai village visit", "Professional guides", "Luxury tents"]),
            difficulty: Difficulty::Easy,
            rating: 4.8,
            reviews: 127,
        },
        Tour {
            id: TourId::new("2"),
            title: "Mountain Trek to Kilimanjaro".to_string(),
            category: TourCategory::Mountain,
            price: Money::new(1899),
            duration: "6 days".to_string(),
            group_size: "4-12 people".to_string(),
            location: "Tanzania".to_string(),
            image: PEAKS_IMAGE.to_string(),
            description: "Climb Africa's highest peak with experienced mountaineers. Challenge yourself with this rewarding expedition featuring stunning views and unique ecosystems.".to_string(),
            highlights: strings(&["Summit attempt", "Expert porters", "Altitude acclimatization", "Camping experience", "Scenic viewpoints"]),
            difficulty: Difficulty::Hard,
            rating: 4.7,
            reviews: 98,
        },
        Tour {
            id: TourId::new("3"),
            title: "Cultural Heritage Tour".to_string(),
            category: TourCategory::Cultural,
            price: Money::new(1299),
            duration: "5 days".to_string(),
            group_size: "2-10 people".to_string(),
            location: "Peru".to_string(),
            image: PERU_IMAGE.to_string(),
            description: "Explore ancient civilizations with visits to iconic historical sites, local communities, and cultural experiences that bring history to life.".to_string(),
            highlights: strings(&["Machu Picchu", "Local guides", "Traditional meals", "Sacred Valley", "Indigenous communities"]),
            difficulty: Difficulty::Moderate,
            rating: 4.9,
            reviews: 156,
        },
        Tour {
            id: TourId::new("4"),
            title: "Tropical Beach Paradise".to_string(),
            category: TourCategory::Beach,
            price: Money::new(1599),
            duration: "4 days".to_string(),
            group_size: "Couples & Families".to_string(),
            location: "Maldives".to_string(),
            image: COAST_IMAGE.to_string(),
            description: "Relax in paradise with pristine beaches, crystal-clear waters, water sports, and luxury island resorts.".to_string(),
            highlights: strings(&["Private beach", "Snorkeling", "Water sports", "Spa treatments", "Sunset dinner"]),
            difficulty: Difficulty::Easy,
            rating: 4.9,
            reviews: 203,
        },
        Tour {
            id: TourId::new("5"),
            title: "Amazon Rainforest Expedition".to_string(),
            category: TourCategory::Adventure,
            price: Money::new(1799),
            duration: "5 days".to_string(),
            group_size: "3-8 people".to_string(),
            location: "Ecuador".to_string(),
            image: PEAKS_IMAGE.to_string(),
            description: "Journey into the world's largest rainforest. Spot exotic wildlife, meet indigenous tribes, and discover biodiversity in its purest form.".to_string(),
            highlights: strings(&["Canopy walks", "Wildlife spotting", "River expeditions", "Indigenous guides", "Night hikes"]),
            difficulty: Difficulty::Moderate,
            rating: 4.8,
            reviews: 112,
        },
        Tour {
            id: TourId::new("6"),
            title: "Swiss Alps Hiking".to_string(),
            category: TourCategory::Mountain,
            price: Money::new(1399),
            duration: "6 days".to_string(),
            group_size: "2-10 people".to_string(),
            location: "Switzerland".to_string(),
            image: PEAKS_IMAGE.to_string(),
            description: "Hike through the stunning alpine scenery of Switzerland with scenic valleys, pristine lakes, and charming mountain villages.".to_string(),
            highlights: strings(&["Alpine trails", "Mountain lodges", "Scenic viewpoints", "Traditional meals", "Photography opportunities"]),
            difficulty: Difficulty::Moderate,
            rating: 4.7,
            reviews: 89,
        },
        Tour {
            id: TourId::new("7"),
            title: "Iceland Northern Lights".to_string(),
            category: TourCategory::Adventure,
            price: Money::new(1999),
            duration: "4 days".to_string(),
            group_size: "2-15 people".to_string(),
            location: "Iceland".to_string(),
            image: AURORA_IMAGE.to_string(),
            description: "Witness the magical Northern Lights while exploring Iceland's geothermal wonders, waterfalls, and black sand beaches.".to_string(),
            highlights: strings(&["Northern Lights hunting", "Geysers & hot springs", "Waterfall tours", "Glacier walks", "Blue Lagoon"]),
            difficulty: Difficulty::Easy,
            rating: 4.9,
            reviews: 178,
        },
        Tour {
            id: TourId::new("8"),
            title: "Mediterranean Sailing".to_string(),
            category: TourCategory::Beach,
            price: Money::new(2199),
            duration: "7 days".to_string(),
            group_size: "4-10 people".to_string(),
            location: "Greece".to_string(),
            image: COAST_IMAGE.to_string(),
            description: "Sail through the Greek islands exploring charming villages, ancient ruins, and hidden beaches with luxury yacht accommodations.".to_string(),
            highlights: strings(&["Yacht sailing", "Island hopping", "Beach days", "Local cuisine", "Sunset views"]),
            difficulty: Difficulty::Easy,
            rating: 4.8,
            reviews: 134,
        },
    ]
}

/// One review per tour.
pub fn reviews() -> Vec<Review> {
    let review = |id: &str, name: &str, rating: u8, text: &str, tour: &str, on: NaiveDate| Review {
        id: ReviewId::new(id),
        name: name.to_string(),
        rating,
        text: text.to_string(),
        tour: TourId::new(tour),
        date: on,
    };

    vec![
        review("1", "Sarah Johnson", 5, "The African Safari was absolutely incredible! Our guide was knowledgeable and friendly, and we saw all the big five. A truly life-changing experience.", "1", date(2024, 1, 15)),
        review("2", "Michael Chen", 5, "Climbing Kilimanjaro was challenging but rewarding. The team took great care of us and the views were spectacular.", "2", date(2024, 1, 20)),
        review("3", "Emma Wilson", 5, "The Peru cultural tour was enlightening. We learned so much about the history and had wonderful interactions with local communities.", "3", date(2024, 1, 25)),
        review("4", "David Martinez", 4, "Maldives was beautiful! The resort was luxurious and the snorkeling was amazing. Highly recommend for a romantic getaway.", "4", date(2024, 2, 1)),
        review("5", "Lisa Anderson", 5, "The Amazon expedition exceeded all my expectations. Saw incredible wildlife and learned about the ecosystem from expert guides.", "5", date(2024, 2, 5)),
        review("6", "James Taylor", 5, "Swiss Alps hiking was breathtaking. The trails were well-maintained and the mountain lodges were cozy and welcoming.", "6", date(2024, 2, 10)),
        review("7", "Sophie Laurent", 5, "Saw the Northern Lights in Iceland! An unforgettable experience. The guides were experienced and the accommodations were great.", "7", date(2024, 2, 12)),
        review("8", "Robert Johnson", 5, "The Mediterranean sailing trip was perfect. Beautiful islands, excellent service, and amazing food. Will definitely book again!", "8", date(2024, 2, 15)),
    ]
}

/// The rental fleet in featured order.
pub fn vehicles() -> Vec<Vehicle> {
    #[allow(clippy::too_many_arguments)]
    fn vehicle(
        id: &str,
        name: &str,
        vehicle_type: VehicleType,
        price_per_day: i64,
        capacity: u32,
        transmission: Transmission,
        fuel_type: FuelType,
        image: &str,
        features: &[&str],
        rating: f64,
        reviews: u32,
    ) -> Vehicle {
        Vehicle {
            id: VehicleId::new(id),
            name: name.to_string(),
            vehicle_type,
            price_per_day: Money::new(price_per_day),
            capacity,
            transmission,
            fuel_type,
            image: image.to_string(),
            features: strings(features),
            rating,
            reviews,
        }
    }

    use FuelType::*;
    use Transmission::*;

    vec![
        vehicle("v1", "Toyota Corolla", VehicleType::Economy, 45, 5, Automatic, Petrol, COMPACT_IMAGE,
            &["Air conditioning", "GPS Navigation", "Bluetooth", "USB charging"], 4.6, 89),
        vehicle("v2", "Honda CRV SUV", VehicleType::Suv, 75, 7, Automatic, Petrol, SUV_IMAGE,
            &["AWD", "Roof rails", "Panoramic sunroof", "Rear camera", "Cruise control"], 4.8, 156),
        vehicle("v3", "Mercedes-Benz E-Class", VehicleType::Luxury, 180, 5, Automatic, Diesel, SEDAN_IMAGE,
            &["Leather seats", "Climate control", "Premium sound system", "Parking assist", "Adaptive suspension"], 4.9, 134),
        vehicle("v4", "Royal Enfield Bike", VehicleType::Motorcycle, 35, 2, Manual, Petrol, BIKE_IMAGE,
            &["Classic design", "Comfortable seating", "Good mileage", "Low maintenance", "Adventure-ready"], 4.7, 98),
        vehicle("v5", "Ford Transit Minibus", VehicleType::Minibus, 120, 12, Automatic, Diesel, VAN_IMAGE,
            &["Large luggage", "Comfortable seats", "Air conditioning", "Wheelchair accessible", "USB ports in seats"], 4.7, 67),
        vehicle("v6", "Maruti Swift", VehicleType::Economy, 40, 5, Manual, Petrol, COMPACT_IMAGE,
            &["Fuel efficient", "Easy to drive", "Power steering", "Air conditioning", "Central locking"], 4.5, 102),
        vehicle("v7", "BMW X5 SUV", VehicleType::Suv, 150, 7, Automatic, Diesel, SUV_IMAGE,
            &["Luxury interior", "All-wheel drive", "Navigation system", "Panoramic roof", "Premium entertainment"], 4.8, 121),
        vehicle("v8", "Harley-Davidson", VehicleType::Motorcycle, 85, 2, Manual, Petrol, BIKE_IMAGE,
            &["Iconic design", "Powerful engine", "Windscreen", "Storage bags", "Leather seats"], 4.9, 145),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique() {
        let tour_ids: HashSet<_> = tours().into_iter().map(|t| t.id).collect();
        assert_eq!(tour_ids.len(), 8);
        let vehicle_ids: HashSet<_> = vehicles().into_iter().map(|v| v.id).collect();
        assert_eq!(vehicle_ids.len(), 8);
    }

    #[test]
    fn test_every_review_points_at_a_tour() {
        let tour_ids: HashSet<_> = tours().into_iter().map(|t| t.id).collect();
        for review in reviews() {
            assert!(tour_ids.contains(&review.tour), "dangling review {}", review.id);
            assert!((1..=5).contains(&review.rating));
            assert_ne!(review.date, NaiveDate::MIN);
        }
    }
}
