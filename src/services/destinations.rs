//! Built-in destination catalog.
//!
//! Affinities, base weather and base crowd levels are recorded on a 0-10
//! scale and expanded into normalized monthly tables when the catalog is
//! built.

use crate::models::{Category, Destination, DimensionVector, Interest, MonthlyTable, Season};

use Season::*;

const ALL_YEAR: &[Season] = &[Winter, Spring, Summer, Fall];

/// Months with the heaviest tourist traffic
const PEAK_MONTHS: [u32; 4] = [6, 7, 8, 12];
/// Months between peak and off-season
const SHOULDER_MONTHS: [u32; 5] = [4, 5, 9, 10, 11];

struct Seed {
    id: &'static str,
    name: &'static str,
    country: &'static str,
    category: Category,
    description: &'static str,
    cost: f64,
    seasons: &'static [Season],
    highlights: &'static [&'static str],
    weather: f64,
    crowd: f64,
    /// adventure, comfort, culture, luxury, nature, urban, social
    dna: [f64; 7],
    interests: &'static [Interest],
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "queenstown_nz",
        name: "Queenstown",
        country: "New Zealand",
        category: Category::Adventure,
        description: "World's adventure capital with bungee jumping, skiing, and stunning Southern Alps scenery.",
        cost: 3500.0,
        seasons: &[Spring, Summer, Fall],
        highlights: &["Bungee Jumping", "Milford Sound", "Ski Resorts", "Wine Tours"],
        weather: 7.5,
        crowd: 6.8,
        dna: [9.2, 6.0, 4.0, 5.5, 8.5, 3.5, 6.5],
        interests: &[Interest::Adventure, Interest::Mountains, Interest::Nature, Interest::Food],
    },
    Seed {
        id: "interlaken_ch",
        name: "Interlaken",
        country: "Switzerland",
        category: Category::Adventure,
        description: "Alpine paradise between two lakes, offering paragliding, skiing, and mountain expeditions.",
        cost: 4200.0,
        seasons: &[Summer, Winter],
        highlights: &["Jungfrau Region", "Paragliding", "Lake Thun", "Winter Sports"],
        weather: 7.0,
        crowd: 7.2,
        dna: [8.8, 7.5, 4.5, 6.0, 9.0, 3.0, 5.0],
        interests: &[Interest::Adventure, Interest::Mountains, Interest::Nature],
    },
    Seed {
        id: "kyoto_jp",
        name: "Kyoto",
        country: "Japan",
        category: Category::Cultural,
        description: "Ancient capital with 2000+ temples, traditional tea ceremonies, and seasonal beauty.",
        cost: 3200.0,
        seasons: &[Spring, Fall],
        highlights: &["Golden Pavilion", "Geisha District", "Bamboo Forest", "Cherry Blossoms"],
        weather: 8.0,
        crowd: 8.5,
        dna: [3.0, 8.0, 9.5, 5.0, 7.5, 6.5, 5.0],
        interests: &[Interest::History, Interest::Culture, Interest::Food, Interest::Nature],
    },
    Seed {
        id: "rome_it",
        name: "Rome",
        country: "Italy",
        category: Category::Cultural,
        description: "Eternal city blending ancient history with vibrant modern life and culinary excellence.",
        cost: 2800.0,
        seasons: &[Spring, Fall],
        highlights: &["Colosseum", "Vatican City", "Roman Forum", "Italian Cuisine"],
        weather: 8.5,
        crowd: 9.0,
        dna: [3.5, 7.0, 9.2, 6.8, 3.0, 8.0, 7.0],
        interests: &[Interest::History, Interest::Culture, Interest::Food, Interest::Cities],
    },
    Seed {
        id: "maldives",
        name: "Maldives",
        country: "Maldives",
        category: Category::Luxury,
        description: "Tropical paradise with overwater villas, crystal-clear lagoons, and exclusive resorts.",
        cost: 8500.0,
        seasons: &[Winter, Spring],
        highlights: &["Overwater Bungalows", "Snorkeling", "Spa Retreats", "Private Islands"],
        weather: 9.0,
        crowd: 4.0,
        dna: [3.0, 9.5, 2.5, 9.8, 8.0, 1.0, 3.0],
        interests: &[Interest::Beaches, Interest::Wellness, Interest::Nature],
    },
    Seed {
        id: "santorini_gr",
        name: "Santorini",
        country: "Greece",
        category: Category::Luxury,
        description: "Stunning volcanic island with white-washed buildings, sunset views, and premium amenities.",
        cost: 4500.0,
        seasons: &[Spring, Summer, Fall],
        highlights: &["Caldera Views", "Wine Tasting", "Sunset Cruises", "Luxury Hotels"],
        weather: 9.2,
        crowd: 8.5,
        dna: [3.5, 8.8, 7.5, 9.0, 6.5, 3.5, 5.5],
        interests: &[Interest::Beaches, Interest::Food, Interest::History, Interest::Wellness],
    },
    Seed {
        id: "banff_ca",
        name: "Banff",
        country: "Canada",
        category: Category::Nature,
        description: "Mountain wilderness in Canadian Rockies with turquoise lakes, glaciers, and wildlife.",
        cost: 3000.0,
        seasons: &[Summer, Fall],
        highlights: &["Lake Louise", "Wildlife Viewing", "Hiking Trails", "Hot Springs"],
        weather: 7.8,
        crowd: 7.0,
        dna: [8.5, 6.5, 3.0, 5.0, 9.5, 2.0, 4.0],
        interests: &[Interest::Mountains, Interest::Nature, Interest::Adventure],
    },
    Seed {
        id: "costa_rica",
        name: "Costa Rica",
        country: "Costa Rica",
        category: Category::Nature,
        description: "Biodiversity hotspot with rainforests, volcanoes, beaches, and eco-friendly tourism.",
        cost: 2800.0,
        seasons: &[Winter, Spring],
        highlights: &["Arenal Volcano", "Monteverde Cloud Forest", "Wildlife Sanctuaries", "Eco-Lodges"],
        weather: 8.5,
        crowd: 6.5,
        dna: [8.0, 7.0, 6.0, 4.0, 9.3, 2.0, 5.5],
        interests: &[Interest::Nature, Interest::Adventure, Interest::Beaches, Interest::Wellness],
    },
    Seed {
        id: "tokyo_jp",
        name: "Tokyo",
        country: "Japan",
        category: Category::Urban,
        description: "Ultra-modern metropolis blending cutting-edge technology with traditional culture.",
        cost: 3800.0,
        seasons: &[Spring, Fall],
        highlights: &["Shibuya Crossing", "Tsukiji Market", "Traditional Temples", "Robot Restaurants"],
        weather: 7.5,
        crowd: 9.5,
        dna: [4.5, 8.0, 8.5, 7.5, 2.5, 9.8, 7.0],
        interests: &[Interest::Cities, Interest::Food, Interest::Shopping, Interest::Culture],
    },
    Seed {
        id: "new_york_us",
        name: "New York City",
        country: "USA",
        category: Category::Urban,
        description: "The city that never sleeps, with world-class museums, Broadway, and diverse neighborhoods.",
        cost: 4200.0,
        seasons: &[Spring, Fall],
        highlights: &["Broadway Shows", "Central Park", "Metropolitan Museum", "Times Square"],
        weather: 7.0,
        crowd: 9.8,
        dna: [4.0, 7.0, 9.0, 8.0, 2.0, 9.5, 8.0],
        interests: &[Interest::Cities, Interest::Culture, Interest::Shopping, Interest::Food],
    },
    Seed {
        id: "bali_id",
        name: "Bali",
        country: "Indonesia",
        category: Category::Beach,
        description: "Island of gods with beautiful beaches, spiritual culture, and luxurious resorts.",
        cost: 2500.0,
        seasons: &[Summer, Fall],
        highlights: &["Ubud Rice Terraces", "Beach Clubs", "Water Temples", "Surfing Spots"],
        weather: 8.8,
        crowd: 7.5,
        dna: [6.0, 8.5, 7.5, 7.0, 8.0, 3.0, 7.5],
        interests: &[Interest::Beaches, Interest::Culture, Interest::Wellness, Interest::Nature],
    },
    Seed {
        id: "tulum_mx",
        name: "Tulum",
        country: "Mexico",
        category: Category::Beach,
        description: "Bohemian beach town with Mayan ruins, cenotes, and eco-chic accommodations.",
        cost: 2200.0,
        seasons: &[Winter, Spring],
        highlights: &["Mayan Ruins", "Cenotes", "Beach Clubs", "Eco-Resorts"],
        weather: 9.0,
        crowd: 7.0,
        dna: [6.5, 8.0, 7.0, 5.5, 8.5, 2.5, 7.0],
        interests: &[Interest::Beaches, Interest::History, Interest::Nature],
    },
    Seed {
        id: "ubud_id",
        name: "Ubud",
        country: "Indonesia",
        category: Category::Wellness,
        description: "Spiritual and wellness center in Bali with yoga retreats, healing centers, and organic cuisine.",
        cost: 2000.0,
        seasons: ALL_YEAR,
        highlights: &["Yoga Retreats", "Organic Farms", "Healing Centers", "Monkey Forest"],
        weather: 8.5,
        crowd: 6.0,
        dna: [4.0, 9.0, 7.0, 6.0, 8.5, 2.0, 5.5],
        interests: &[Interest::Wellness, Interest::Nature, Interest::Culture, Interest::Food],
    },
    Seed {
        id: "sedona_us",
        name: "Sedona",
        country: "USA",
        category: Category::Wellness,
        description: "Desert town famous for red rock formations, spiritual energy vortices, and wellness retreats.",
        cost: 1800.0,
        seasons: &[Spring, Fall],
        highlights: &["Vortex Sites", "Jeep Tours", "Spa Retreats", "Hiking Trails"],
        weather: 8.0,
        crowd: 5.5,
        dna: [7.0, 8.8, 5.5, 5.0, 8.5, 1.5, 3.5],
        interests: &[Interest::Wellness, Interest::Nature, Interest::Mountains],
    },
    Seed {
        id: "cape_town_za",
        name: "Cape Town",
        country: "South Africa",
        category: Category::Adventure,
        description: "Coastal city with Table Mountain, wildlife safaris, and world-class vineyards.",
        cost: 3200.0,
        seasons: &[Spring, Fall],
        highlights: &["Table Mountain", "Wine Lands", "Penguin Colony", "Safari Tours"],
        weather: 8.5,
        crowd: 6.5,
        dna: [8.0, 6.5, 7.0, 6.5, 8.5, 6.0, 6.5],
        interests: &[Interest::Adventure, Interest::Mountains, Interest::Beaches, Interest::Food, Interest::Nature],
    },
    Seed {
        id: "istanbul_tr",
        name: "Istanbul",
        country: "Turkey",
        category: Category::Cultural,
        description: "City straddling two continents with Byzantine and Ottoman heritage, bustling bazaars.",
        cost: 1800.0,
        seasons: &[Spring, Fall],
        highlights: &["Hagia Sophia", "Grand Bazaar", "Bosphorus Cruise", "Turkish Baths"],
        weather: 7.5,
        crowd: 7.8,
        dna: [4.5, 6.5, 9.2, 5.5, 2.5, 8.0, 7.5],
        interests: &[Interest::History, Interest::Culture, Interest::Shopping, Interest::Food, Interest::Cities],
    },
    Seed {
        id: "dubai_ae",
        name: "Dubai",
        country: "UAE",
        category: Category::Luxury,
        description: "Ultra-modern city with luxury shopping, futuristic architecture, and desert adventures.",
        cost: 5000.0,
        seasons: &[Winter, Spring],
        highlights: &["Burj Khalifa", "Luxury Malls", "Desert Safaris", "Palm Islands"],
        weather: 8.0,
        crowd: 7.0,
        dna: [6.0, 8.0, 4.5, 9.5, 3.0, 8.5, 6.0],
        interests: &[Interest::Shopping, Interest::Cities, Interest::Beaches, Interest::Adventure],
    },
    Seed {
        id: "iceland",
        name: "Iceland",
        country: "Iceland",
        category: Category::Nature,
        description: "Land of fire and ice with glaciers, volcanoes, waterfalls, and Northern Lights.",
        cost: 3800.0,
        seasons: &[Summer, Winter],
        highlights: &["Northern Lights", "Blue Lagoon", "Waterfalls", "Glacier Hiking"],
        weather: 6.5,
        crowd: 5.5,
        dna: [8.5, 5.0, 4.0, 4.5, 9.8, 2.0, 3.5],
        interests: &[Interest::Nature, Interest::Adventure, Interest::Mountains, Interest::Wellness],
    },
    Seed {
        id: "london_uk",
        name: "London",
        country: "UK",
        category: Category::Urban,
        description: "Historic global capital with royal heritage, world-class museums, and diverse culture.",
        cost: 3500.0,
        seasons: &[Spring, Summer, Fall],
        highlights: &["British Museum", "West End Shows", "Historical Sites", "Royal Parks"],
        weather: 6.5,
        crowd: 8.5,
        dna: [3.5, 7.5, 9.2, 7.0, 3.0, 9.0, 7.5],
        interests: &[Interest::Cities, Interest::History, Interest::Culture, Interest::Shopping],
    },
    Seed {
        id: "marrakech_ma",
        name: "Marrakech",
        country: "Morocco",
        category: Category::Cultural,
        description: "Red city of souks, riads and palaces at the edge of the Atlas Mountains.",
        cost: 1600.0,
        seasons: &[Spring, Fall],
        highlights: &["Jemaa el-Fnaa", "Majorelle Garden", "Medina Souks", "Atlas Day Trips"],
        weather: 8.0,
        crowd: 7.0,
        dna: [6.0, 6.0, 9.0, 5.5, 4.5, 7.0, 8.0],
        interests: &[Interest::Culture, Interest::History, Interest::Shopping, Interest::Food, Interest::Mountains],
    },
    Seed {
        id: "barcelona_es",
        name: "Barcelona",
        country: "Spain",
        category: Category::Urban,
        description: "Mediterranean city of Gaudi architecture, late-night tapas, and lively beaches.",
        cost: 2600.0,
        seasons: &[Spring, Summer, Fall],
        highlights: &["Sagrada Familia", "Gothic Quarter", "Barceloneta Beach", "Tapas Bars"],
        weather: 8.5,
        crowd: 8.8,
        dna: [5.0, 7.0, 8.5, 6.5, 3.5, 9.0, 9.5],
        interests: &[Interest::Cities, Interest::Beaches, Interest::Food, Interest::Culture],
    },
    Seed {
        id: "patagonia_ar",
        name: "Patagonia",
        country: "Argentina",
        category: Category::Adventure,
        description: "Windswept frontier of granite peaks, glaciers and multi-day treks.",
        cost: 3600.0,
        seasons: &[Summer, Fall],
        highlights: &["Fitz Roy", "Perito Moreno Glacier", "Torres del Paine", "Estancia Stays"],
        weather: 6.0,
        crowd: 4.0,
        dna: [9.8, 4.0, 3.5, 3.5, 9.5, 1.0, 4.0],
        interests: &[Interest::Adventure, Interest::Mountains, Interest::Nature],
    },
    Seed {
        id: "phuket_th",
        name: "Phuket",
        country: "Thailand",
        category: Category::Beach,
        description: "Island of limestone bays, night markets and easygoing beach resorts.",
        cost: 1900.0,
        seasons: &[Winter, Spring],
        highlights: &["Phang Nga Bay", "Old Town", "Island Hopping", "Night Markets"],
        weather: 8.5,
        crowd: 8.0,
        dna: [6.0, 8.5, 5.0, 6.0, 7.0, 4.5, 8.5],
        interests: &[Interest::Beaches, Interest::Food, Interest::Wellness, Interest::Shopping],
    },
    Seed {
        id: "tuscany_it",
        name: "Tuscany",
        country: "Italy",
        category: Category::Wellness,
        description: "Rolling hills, hilltop villages and thermal springs among the vineyards.",
        cost: 3300.0,
        seasons: &[Spring, Fall],
        highlights: &["Chianti Vineyards", "Saturnia Hot Springs", "Siena", "Cooking Classes"],
        weather: 8.2,
        crowd: 6.5,
        dna: [3.0, 9.2, 8.0, 7.5, 7.5, 3.0, 5.0],
        interests: &[Interest::Wellness, Interest::Food, Interest::History, Interest::Nature],
    },
    Seed {
        id: "lisbon_pt",
        name: "Lisbon",
        country: "Portugal",
        category: Category::Urban,
        description: "Hillside capital of trams, fado houses and Atlantic sunsets.",
        cost: 2100.0,
        seasons: &[Spring, Summer, Fall],
        highlights: &["Alfama", "Belem Tower", "Tram 28", "Sintra Day Trip"],
        weather: 8.3,
        crowd: 7.5,
        dna: [4.5, 7.0, 8.0, 5.0, 4.0, 8.5, 8.8],
        interests: &[Interest::Cities, Interest::History, Interest::Food, Interest::Beaches, Interest::Culture],
    },
];

/// Build the built-in catalog destinations
pub fn builtin_destinations() -> Vec<Destination> {
    SEEDS.iter().map(Seed::to_destination).collect()
}

impl Seed {
    fn to_destination(&self) -> Destination {
        Destination {
            id: self.id.to_string(),
            name: self.name.to_string(),
            country: self.country.to_string(),
            category: self.category,
            description: self.description.to_string(),
            highlights: self.highlights.iter().map(|h| h.to_string()).collect(),
            typical_cost: self.cost,
            best_seasons: self.seasons.to_vec(),
            weather_by_month: weather_table(self.weather, self.seasons),
            crowd_by_month: crowd_table(self.crowd),
            interests: self.interests.iter().copied().collect(),
            dna: DimensionVector::from_array(self.dna.map(|v| v / 10.0)).clamped(),
        }
    }
}

/// Expand a 0-10 weather score into monthly suitability
///
/// Full value in a best season, 80% in a neighbouring season, 60% otherwise.
pub fn weather_table(base: f64, best_seasons: &[Season]) -> MonthlyTable {
    std::array::from_fn(|index| {
        let season = Season::from_month(index as u32 + 1);
        let factor = if best_seasons.contains(&season) {
            1.0
        } else if season
            .neighbours()
            .iter()
            .any(|neighbour| best_seasons.contains(neighbour))
        {
            0.8
        } else {
            0.6
        };
        (base / 10.0 * factor).clamp(0.0, 1.0)
    })
}

/// Expand a 0-10 crowd score into monthly density
///
/// Full value in peak months, 85% in shoulder months, 70% off-season.
pub fn crowd_table(base: f64) -> MonthlyTable {
    std::array::from_fn(|index| {
        let month = index as u32 + 1;
        let factor = if PEAK_MONTHS.contains(&month) {
            1.0
        } else if SHOULDER_MONTHS.contains(&month) {
            0.85
        } else {
            0.7
        };
        (base / 10.0 * factor).clamp(0.0, 1.0)
    })
}
