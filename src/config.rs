use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_SEED_PATH: &str = "data/reviews.csv";

/// Locations accepted for new review submissions. Matching is exact and
/// case-sensitive; seed data is exempt from this list.
pub const ALLOWED_LOCATIONS: [&str; 18] = [
    "Albuquerque, New Mexico",
    "Carlsbad, California",
    "Chula Vista, California",
    "Colorado Springs, Colorado",
    "Denver, Colorado",
    "El Cajon, California",
    "El Paso, Texas",
    "Escondido, California",
    "Fresno, California",
    "La Mesa, California",
    "Las Vegas, Nevada",
    "Los Angeles, California",
    "Oceanside, California",
    "Phoenix, Arizona",
    "Sacramento, California",
    "Salt Lake City, Utah",
    "San Diego, California",
    "Tucson, Arizona",
];

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub seed_path: PathBuf,
}

impl Config {
    /// Reads `PORT` and `REVIEWS_CSV` from the environment, falling back to
    /// defaults when unset or unparseable.
    pub fn from_env() -> Self {
        let port = parse_port(env::var("PORT").ok());
        let seed_path = env::var("REVIEWS_CSV")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SEED_PATH));

        Self { port, seed_path }
    }
}

pub fn is_allowed_location(location: &str) -> bool {
    ALLOWED_LOCATIONS.contains(&location)
}

fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|port| port.parse().ok()).unwrap_or(DEFAULT_PORT)
}
