//! Fixed category taxonomy for business listings.

use serde::Serialize;

/// One entry of the category catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub slug: &'static str,
    pub name: &'static str,
}

const fn entry(slug: &'static str, name: &'static str) -> CategoryEntry {
    CategoryEntry { slug, name }
}

pub const CATEGORY_CATALOG: &[CategoryEntry] = &[
    entry("accessories", "Accessories"),
    entry("accomodations_lodging", "Accommodation & Lodging"),
    entry("accounting_tax", "Accounting & Tax"),
    entry("activities_tours", "Activities & Tours"),
    entry("administration_services", "Administration & Services"),
    entry("adult_entertainment", "Adult Entertainment"),
    entry("african_pacific_cuisine", "African & Pacific Cuisine"),
    entry("agriculture_produce", "Agriculture & Produce"),
    entry("air_water_transport", "Air & Water Transport"),
    entry("airlines_air_travel", "Airlines & Air Travel"),
    entry("airports_parking", "Airports & Parking"),
    entry("animal_health", "Animal Health"),
    entry("animal_parks_zoo", "Animal Parks & Zoo"),
    entry("animals_pets", "Animals & Pets"),
    entry("appliances_electronics", "Appliances & Electronics"),
    entry("architects_engineers", "Architects & Engineers"),
    entry("art_handicraft", "Art & Handicraft"),
    entry("asian_grocery_stores", "Asian Grocery Stores"),
    entry("associations_centers", "Associations & Centers"),
    entry("astrology_numerology", "Astrology & Numerology"),
    entry("audio_visual", "Audio & Visual"),
    entry("auto_parts_wheels", "Auto Parts & Wheels"),
    entry("bakery_pastry", "Bakery & Pastry"),
    entry("ball_games", "Ball Games"),
    entry("banking_money", "Banking & Money"),
    entry("bank", "Bank"),
    entry("bars_cafes", "Bars & Cafes"),
    entry("bat-and-ball_games", "Bat-and-ball Games"),
    entry("bathroom_kitchen", "Bathroom & Kitchen"),
    entry("beauty_wellbeing", "Beauty & Well-being"),
    entry("beer_wine", "Beer & Wine"),
    entry("beverages_liquor", "Beverages & Liquor"),
    entry("bicycles", "Bicycles"),
    entry("books_magazines", "Books & Magazines"),
    entry("bowls_lawn_sports", "Bowls & Lawn Sports"),
    entry("building_materials", "Building Materials"),
    entry("business_services", "Business Services"),
    entry("candy_chocolate", "Candy & Chocolate"),
    entry("cars_trucks", "Cars & Trucks"),
    entry("cats_dogs", "Cats & Dogs"),
    entry("chemicals_plastic", "Chemicals & Plastic"),
    entry("childrens_entertainment", "Children's Entertainment"),
    entry("chinese_korean_cuisine", "Chinese & Korean Cuisine"),
    entry("cleaning_service_providers", "Cleaning Service Providers"),
    entry("clinics", "Clinics"),
    entry("clothing_underwear", "Clothing & Underwear"),
    entry("clothing_rental_repair", "Clothing Rental & Repair"),
    entry("clubbing_nightlife", "Clubbing & Nightlife"),
    entry("coffee_tea", "Coffee & Tea"),
    entry("colleges_universities", "Colleges & Universities"),
    entry("computers_phones", "Computers & Phones"),
    entry("construction_manufactoring", "Construction & Manufacturing"),
    entry("construction_services", "Construction Services"),
    entry("contractors_consultants", "Contractors & Consultants"),
    entry("cosmetics_makeup", "Cosmetics & Makeup"),
    entry("costume_wedding", "Costume & Wedding"),
    entry("courses_classes", "Courses & Classes"),
    entry("craftsman", "Craftsman"),
    entry("credit_debt_services", "Credit & Debt Services"),
    entry("cultural_goods", "Cultural Goods"),
    entry("customs_toll", "Customs & Toll"),
    entry("dancing_gymnastics", "Dancing & Gymnastics"),
    entry("decoration_interior", "Decoration & Interior"),
    entry("dental_services", "Dental Services"),
    entry("diagnostics_testing", "Diagnostics & Testing"),
    entry("doctors_surgeons", "Doctors & Surgeons"),
    entry("education_training", "Education & Training"),
    entry("education_services", "Education Services"),
    entry("electronics_technology", "Electronics & Technology"),
    entry("employment_career", "Employment & Career"),
    entry("energy_heating", "Energy & Heating"),
    entry("energy_power", "Energy & Power"),
    entry("equipment_associations", "Equipment & Associations"),
    entry("european_cuisine", "European Cuisine"),
    entry("events_entertainment", "Events & Entertainment"),
    entry("events_venues", "Events & Venues"),
    entry("extreme_sports", "Extreme Sports"),
    entry("fabric_stationary", "Fabric & Stationery"),
    entry("factory_equipment", "Factory Equipment"),
    entry("fishing_hunting", "Fishing & Hunting"),
    entry("fitness_weight_lifting", "Fitness & Weight Lifting"),
    entry("food_production", "Food Production"),
    entry("food_beverages_tobacco", "Food, Beverages & Tobacco"),
    entry("fruits_vegetables", "Fruits & Vegetables"),
    entry("funeral_memorial", "Funeral & Memorial"),
    entry("furniture_stores", "Furniture Stores"),
    entry("gambling", "Gambling"),
    entry("gaming", "Gaming"),
    entry("garden_landscaping", "Garden & Landscaping"),
    entry("garden_pond", "Garden & Pond"),
    entry("general_restaurants", "General Restaurants"),
    entry("golf_ultimate", "Golf & Ultimate"),
    entry("government_department", "Government Department"),
    entry("grocery_stores_markets", "Grocery Stores & Markets"),
    entry("hair_care_styling", "Hair Care & Styling"),
    entry("health_medical", "Health & Medical"),
    entry("health_equipment", "Health Equipment"),
    entry("hobbies", "Hobbies"),
    entry("hobbies_crafts", "Hobbies & Crafts"),
    entry("hockey_ice_skating", "Hockey & Ice Skating"),
    entry("home_garden", "Home & Garden"),
    entry("home_garden_services", "Home & Garden Services"),
    entry("home_goods_stores", "Home Goods Stores"),
    entry("home_improvements", "Home Improvements"),
    entry("home_services", "Home Services"),
    entry("horses_riding", "Horses & Riding"),
    entry("hospital_emergency", "Hospital & Emergency"),
    entry("hotels", "Hotels"),
    entry("house_services", "House Services"),
    entry("house_sitting_security", "House Sitting & Security"),
    entry("housing_associations", "Housing Associations"),
    entry("hr_recruiting", "HR & Recruiting"),
    entry("import_export", "Import & Export"),
    entry("industrial_supplies", "Industrial Supplies"),
    entry("insurance", "Insurance"),
    entry("internet_software", "Internet & Software"),
    entry("investments_wealth", "Investments & Wealth"),
    entry("it_communication", "IT & Communication"),
    entry("japanese_cuisine", "Japanese Cuisine"),
    entry("jewelry_watches", "Jewelry & Watches"),
    entry("kids_family", "Kids & Family"),
    entry("language_learning", "Language Learning"),
    entry("law_enforcement", "Law Enforcement"),
    entry("lawyers_attorneys", "Lawyers & Attorneys"),
    entry("legal_service_providers", "Legal Service Providers"),
    entry("legal_services_government", "Legal Services & Government"),
    entry("libraries_archives", "Libraries & Archives"),
    entry("lunch_catering", "Lunch & Catering"),
    entry("malls_marketplaces", "Malls & Marketplaces"),
    entry("manufacturing", "Manufacturing"),
    entry("martial_arts_wrestling", "Martial arts & Wrestling"),
    entry("meat_seafood_eggs", "Meat, Seafood & Eggs"),
    entry("media_information", "Media & Information"),
    entry("media_publishing", "Media & Publishing"),
    entry("medical_specialists", "Medical Specialists"),
    entry("mediterranean_cuisine", "Mediterranean Cuisine"),
    entry("mental_health", "Mental Health"),
    entry("metal_stone_glass_work", "Metal, Stone & Glass Work"),
    entry("middle_eastern_cuisine", "Middle Eastern Cuisine"),
    entry("military_veteran", "Military & Veteran"),
    entry("money_insurance", "Money & Insurance"),
    entry("motorcycle_powersports", "Motorcycle & Powersports"),
    entry("moving_storage", "Moving & Storage"),
    entry("municipal_department", "Municipal Department"),
    entry("museums_exibits", "Museums & Exhibits"),
    entry("music_instruments", "Music & Instruments"),
    entry("music_movies", "Music & Movies"),
    entry("music_theater_classes", "Music & Theater Classes"),
    entry("nature_environment", "Nature & Environment"),
    entry("needlework_knitting", "Needlework & Knitting"),
    entry("north_south_american_cuisine", "North & South American Cuisine"),
    entry("office_space_supplies", "Office Space & Supplies"),
    entry("oil_fuel", "Oil & Fuel"),
    entry("other_vehicles_trailers", "Other Vehicles & Trailers"),
    entry("outdoor_winter_sports", "Outdoor & Winter Sports"),
    entry("outdoor_activities", "Outdoor Activities"),
    entry("painting_paper", "Painting & Paper"),
    entry("personal_care", "Personal Care"),
    entry("pet_services", "Pet Services"),
    entry("pet_stores", "Pet Stores"),
    entry("pharmacy_medicine", "Pharmacy & Medicine"),
    entry("photography", "Photography"),
    entry("physical_aids", "Physical Aids"),
    entry("plumbing_sanitation", "Plumbing & Sanitation"),
    entry("pregnancy_children", "Pregnancy & Children"),
    entry("print_graphic_design", "Print & Graphic Design"),
    entry("production_services", "Production Services"),
    entry("professional_organizations", "Professional Organizations"),
    entry("public_local_services", "Public & Local Services"),
    entry("public_services_welfare", "Public Services & Welfare"),
    entry("real_estate", "Real Estate"),
    entry("registration_services", "Registration Services"),
    entry("religious_institutions", "Religious Institutions"),
    entry("repair_services", "Repair & Services"),
    entry("repair_service_providers", "Repair Service Providers"),
    entry("research_development", "Research & Development"),
    entry("restaurants_bars", "Restaurants & Bars"),
    entry("sales_marketing", "Sales & Marketing"),
    entry("salons_clinics", "Salons & Clinics"),
    entry("school_high_school", "School & High School"),
    entry("shelters_homes", "Shelters & Homes"),
    entry("shipping_logistics", "Shipping & Logistics"),
    entry("shooting_target_sports", "Shooting & Target Sports"),
    entry("shopping_fashion", "Shopping & Fashion"),
    entry("smoking_tobacco", "Smoking & Tobacco"),
    entry("southeast_asian_cuisine", "Southeast Asian Cuisine"),
    entry("specials_schools", "Specials Schools"),
    entry("sports", "Sports"),
    entry("swimming_water_sports", "Swimming & Water Sports"),
    entry("takeaway", "Takeaway"),
    entry("tattoos_piercings", "Tattoos & Piercings"),
    entry("taxis_public_transport", "Taxis & Public Transport"),
    entry("tennis_racquet_sports", "Tennis & Racquet Sports"),
    entry("theater_opera", "Theater & Opera"),
    entry("therapy_senior_health", "Therapy & Senior Health"),
    entry("tools_equipment", "Tools & Equipment"),
    entry("travel_vacation", "Travel & Vacation"),
    entry("travel_agencies", "Travel Agencies"),
    entry("utilities", "Utilities"),
    entry("vegetarian_diet", "Vegetarian & Diet"),
    entry("vehical_rental", "Vehicle Rental"),
    entry("vehicle_repair_fuel", "Vehicle Repair & Fuel"),
    entry("vehicles_transportation", "Vehicles & Transportation"),
    entry("video_sound", "Video & Sound"),
    entry("vision_hearing", "Vision & Hearing"),
    entry("vocational_training", "Vocational Training"),
    entry("waste_management", "Waste Management"),
    entry("water_utilities", "Water Utilities"),
    entry("wedding_party", "Wedding & Party"),
    entry("wellness_spa", "Wellness & Spa"),
    entry("wholesale", "Wholesale"),
    entry("yoga_meditation", "Yoga & Meditation"),
];

#[must_use]
pub fn category_by_slug(slug: &str) -> Option<&'static CategoryEntry> {
    CATEGORY_CATALOG.iter().find(|c| c.slug == slug)
}

#[must_use]
pub fn category_by_name(name: &str) -> Option<&'static CategoryEntry> {
    CATEGORY_CATALOG.iter().find(|c| c.name == name)
}

/// The family a category belongs to: the text before the first `&`, else
/// before the first `,`, else the first word. Empty for blank input.
#[must_use]
pub fn category_family(name: &str) -> &str {
    let normalized = name.trim();
    if normalized.is_empty() {
        return "";
    }
    let head = if let Some((head, _)) = normalized.split_once('&') {
        head
    } else if let Some((head, _)) = normalized.split_once(',') {
        head
    } else {
        normalized.split(' ').next().unwrap_or(normalized)
    };
    head.trim()
}

/// Catalog categories sharing `name`'s family, compared case-insensitively.
#[must_use]
pub fn related_categories(name: &str) -> Vec<&'static CategoryEntry> {
    let family = category_family(name).to_lowercase();
    if family.is_empty() {
        return Vec::new();
    }
    CATEGORY_CATALOG
        .iter()
        .filter(|c| category_family(c.name).to_lowercase() == family)
        .collect()
}
