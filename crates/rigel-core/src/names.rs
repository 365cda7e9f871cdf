//! Procedural naming for generated bodies.

use rand::Rng;

/// Compose a planet name: Bayer-style prefix plus a star catalog name.
pub fn planet_name(rng: &mut impl Rng) -> String {
    let prefix = PREFIXES[rng.random_range(0..PREFIXES.len())];
    let star = STAR_NAMES[rng.random_range(0..STAR_NAMES.len())];
    format!("{prefix} {star}")
}

/// Compose a station name: a star catalog name plus a facility suffix.
pub fn station_name(rng: &mut impl Rng) -> String {
    let star = STAR_NAMES[rng.random_range(0..STAR_NAMES.len())];
    let suffix = STATION_SUFFIXES[rng.random_range(0..STATION_SUFFIXES.len())];
    format!("{star} {suffix}")
}

// Sample name lists - would be loaded from data files in production
static PREFIXES: &[&str] = &[
    // Greek letters, Bayer designation style
    "Alpha",
    "Beta",
    "Gamma",
    "Delta",
    "Epsilon",
    "Zeta",
    "Eta",
    "Theta",
    "Iota",
    "Kappa",
    "Lambda",
    "Mu",
    "Nu",
    "Xi",
    "Omicron",
    "Pi",
    "Rho",
    "Sigma",
    "Tau",
    "Upsilon",
    "Phi",
    "Chi",
    "Psi",
    "Omega",
    // Survey prefixes
    "Nova",
    "Proxima",
    "Ultima",
];

static STAR_NAMES: &[&str] = &[
    // Genitive constellation names
    "Ceti",
    "Eridani",
    "Cygni",
    "Draconis",
    "Lyrae",
    "Aquilae",
    "Orionis",
    "Persei",
    "Tauri",
    "Leonis",
    "Librae",
    "Scorpii",
    "Serpentis",
    "Herculis",
    "Pegasi",
    "Andromedae",
    "Cassiopeiae",
    "Carinae",
    "Velorum",
    "Centauri",
    "Crucis",
    "Pavonis",
    "Gruis",
    "Phoenicis",
    "Reticuli",
    "Doradus",
    "Hydrae",
    "Corvi",
    "Virginis",
    "Bootis",
    // Named stars
    "Vega",
    "Altair",
    "Deneb",
    "Rigel",
    "Antares",
    "Arcturus",
    "Capella",
    "Procyon",
    "Castor",
    "Pollux",
    "Mirach",
    "Alcyone",
];

static STATION_SUFFIXES: &[&str] = &[
    "Station",
    "Depot",
    "Outpost",
    "Anchorage",
    "Terminal",
    "Platform",
    "Waypoint",
    "Yards",
];

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn planet_names_have_two_parts() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let name = planet_name(&mut rng);
            assert_eq!(name.split(' ').count(), 2);
        }
    }

    #[test]
    fn station_names_end_in_facility_suffix() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let name = station_name(&mut rng);
            let suffix = name.rsplit(' ').next().unwrap();
            assert!(STATION_SUFFIXES.contains(&suffix), "unexpected suffix in {name}");
        }
    }

    #[test]
    fn same_seed_same_names() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            assert_eq!(planet_name(&mut a), planet_name(&mut b));
        }
    }
}
