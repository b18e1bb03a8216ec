use std::sync::OnceLock;

use crate::vehicle::{Category, Vehicle};

static VEHICLES: OnceLock<Vec<Vehicle>> = OnceLock::new();
static CATEGORIES: OnceLock<Vec<Category>> = OnceLock::new();

fn vehicle(
    id: &str,
    name: &str,
    year: i32,
    category: &str,
    price_per_day: u32,
    images: &[&str],
    description: &str,
    features: &[&str],
) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        name: name.to_string(),
        year,
        category: category.to_string(),
        price_per_day,
        images: images.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
        features: features.iter().map(|s| s.to_string()).collect(),
    }
}

/// The full vehicle table. Built on first access, immutable afterwards.
pub fn vehicles() -> &'static [Vehicle] {
    VEHICLES.get_or_init(|| {
        vec![
            vehicle(
                "cayenne-turbo-ehybrid",
                "Porsche Cayenne Turbo E-Hybrid Coupe",
                2025,
                "SUV",
                2500,
                &["/images/cars/cayenne.jpg"],
                "Le nouveau Porsche Cayenne Turbo E-Hybrid Coupe combine performance et écologie avec une puissance exceptionnelle et un design élégant.",
                &["Hybride", "680 ch", "Transmission intégrale", "Intérieur cuir luxe"],
            ),
            vehicle(
                "range-rover-sport",
                "Range Rover Sport",
                2024,
                "SUV",
                2200,
                &["/images/cars/range-rover-sport.jpg"],
                "Le Range Rover Sport 2024 offre une expérience de conduite raffinée avec une technologie de pointe et un confort incomparable.",
                &["Diesel/Essence", "350 ch", "Transmission intégrale", "Système audio Meridian"],
            ),
            vehicle(
                "renault-clio",
                "Renault Clio 5",
                2024,
                "Citadine",
                650,
                &["/images/cars/clio.webp"],
                "La Renault Clio 5 2024 est compacte mais spacieuse, parfaite pour explorer les rues étroites des médinas marocaines.",
                &["Essence", "130 ch", "Écran tactile", "Caméra de recul"],
            ),
            vehicle(
                "cupra-formentor",
                "Cupra Formentor",
                2024,
                "SUV",
                1700,
                &["/images/cars/cupra-formentor.jpg"],
                "Le Cupra Formentor 2024 allie sportivité et praticité dans un SUV compact au caractère affirmé.",
                &["Essence", "310 ch", "Mode Sport", "Intérieur Alcantara"],
            ),
            vehicle(
                "golf-8",
                "Volkswagen Golf 8",
                2025,
                "Compacte",
                800,
                &["/images/cars/S5-gamme--cupra-formentor.jpg"],
                "La Golf 8 2025 représente l'évolution d'une icône, avec sa technologie avancée et son design épuré.",
                &["Essence/Diesel", "150 ch", "Cockpit numérique", "Aide à la conduite"],
            ),
            vehicle(
                "bmw-520d",
                "BMW 520d",
                2024,
                "Berline",
                1900,
                &["/images/cars/520d.jpg"],
                "La BMW 520d 2024 est l'incarnation de l'élégance et du dynamisme pour vos déplacements professionnels au Maroc.",
                &["Diesel", "190 ch", "Intérieur cuir", "Technologie BMW iDrive"],
            ),
            vehicle(
                "range-rover-evoque",
                "Range Rover Evoque",
                2024,
                "SUV",
                1800,
                &["/images/cars/evoque.webp"],
                "Le Range Rover Evoque 2024 combine design avant-gardiste et capacités tout-terrain pour une expérience de conduite unique.",
                &["Essence", "250 ch", "Toit panoramique", "Système Terrain Response"],
            ),
            vehicle(
                "range-rover-vogue",
                "Range Rover Vogue",
                2024,
                "SUV",
                2800,
                &["/images/cars/vogue.webp"],
                "Le Range Rover Vogue 2024 représente le summum du luxe automobile, alliant confort suprême et technologie de pointe.",
                &["Diesel/Essence", "400 ch", "Cuir Windsor", "Suspension pneumatique"],
            ),
            vehicle(
                "g63-mercedes",
                "Mercedes G63 AMG",
                2024,
                "SUV",
                3500,
                &["/images/cars/g63.jpg"],
                "Le Mercedes G63 AMG 2024 est une icône du luxe tout-terrain, avec une puissance impressionnante et un prestige inégalé.",
                &["Essence V8", "585 ch", "Échappement Sport", "Intérieur AMG Exclusive"],
            ),
            vehicle(
                "mercedes-cla",
                "Mercedes CLA",
                2024,
                "Coupé",
                1600,
                &["/images/cars/cla.jpg"],
                "La Mercedes CLA 2024 séduit par son design coupé élégant et ses performances dynamiques.",
                &["Essence", "224 ch", "MBUX", "Éclairage d'ambiance"],
            ),
        ]
    })
}

/// The category lookup table.
pub fn categories() -> &'static [Category] {
    CATEGORIES.get_or_init(|| {
        [
            ("suv", "SUV", "Véhicules spacieux et polyvalents"),
            ("berline", "Berline", "Confort et élégance pour vos déplacements"),
            ("citadine", "Citadine", "Compactes et agiles pour la ville"),
            ("coupe", "Coupé", "Design sportif et performances"),
            ("cabriolet", "Cabriolet", "Profitez du soleil marocain"),
        ]
        .iter()
        .map(|(id, name, description)| Category {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        })
        .collect()
    })
}

/// Slug lookup used by the vehicle detail endpoint.
pub fn vehicle_by_id(id: &str) -> Option<&'static Vehicle> {
    vehicles().iter().find(|v| v.id == id)
}
