// City Coordinate Heuristic
//
// Maps free-text locations to fixed coordinates for the map markers. Pure
// lookup, deliberately outside the filter pipeline.

/// German city coordinates keyed by lowercase name fragments.
///
/// Both the English and local spellings appear where they differ.
pub const GERMAN_CITIES: &[(&str, (f64, f64))] = &[
    ("berlin", (52.5200, 13.4050)),
    ("hamburg", (53.5500, 10.0000)),
    ("munich", (48.1375, 11.5750)),
    ("münchen", (48.1375, 11.5750)),
    ("cologne", (50.9364, 6.9528)),
    ("köln", (50.9364, 6.9528)),
    ("frankfurt", (50.1106, 8.6822)),
    ("frankfurt am main", (50.1106, 8.6822)),
    ("stuttgart", (48.7775, 9.1800)),
    ("düsseldorf", (51.2333, 6.7833)),
    ("leipzig", (51.3400, 12.3750)),
    ("dortmund", (51.5139, 7.4653)),
    ("essen", (51.4508, 7.0131)),
    ("bremen", (53.0758, 8.8072)),
    ("dresden", (51.0500, 13.7400)),
    ("hannover", (52.3744, 9.7386)),
    ("nuremberg", (49.4528, 11.0778)),
    ("nürnberg", (49.4528, 11.0778)),
    ("duisburg", (51.4333, 6.7667)),
    ("bochum", (51.4819, 7.2169)),
    ("wuppertal", (51.2500, 7.1833)),
    ("bielefeld", (52.0167, 8.5333)),
    ("bonn", (50.7333, 7.1000)),
    ("münster", (51.9625, 7.6253)),
    ("karlsruhe", (49.0097, 8.4047)),
    ("mannheim", (49.4875, 8.4661)),
    ("augsburg", (48.3717, 10.8983)),
    ("wiesbaden", (50.0833, 8.2500)),
    ("gelsenkirchen", (51.5167, 7.1000)),
    ("mönchengladbach", (51.1967, 6.4417)),
    ("braunschweig", (52.2667, 10.5167)),
    ("chemnitz", (50.8333, 12.9167)),
    ("kiel", (54.3233, 10.1394)),
    ("aachen", (50.7756, 6.0836)),
    ("halle", (51.4833, 11.9667)),
    ("magdeburg", (52.1333, 11.6167)),
    ("freiburg", (47.9961, 7.8494)),
    ("krefeld", (51.3333, 6.5667)),
    ("mainz", (50.0000, 8.2667)),
    ("lübeck", (53.8667, 10.6833)),
    ("oberhausen", (51.4667, 6.8667)),
    ("rostock", (54.0833, 12.1333)),
    ("kassel", (51.3167, 9.5000)),
    ("hagen", (51.3500, 7.4667)),
    ("hamm", (51.6833, 7.8167)),
    ("saarbrücken", (49.2333, 7.0000)),
    ("potsdam", (52.4000, 13.0667)),
    ("ludwigshafen", (49.4833, 8.4333)),
    ("oldenburg", (53.1333, 8.2167)),
    ("leverkusen", (51.0333, 6.9833)),
    ("osnabrück", (52.2667, 8.0500)),
    ("solingen", (51.1667, 7.0833)),
    ("heidelberg", (49.4122, 8.7094)),
    ("darmstadt", (49.8728, 8.6511)),
];

/// Find a known city in a free-text location.
///
/// Longer keys are tried first so "frankfurt am main" wins over
/// "frankfurt"; either Frankfurt spelling normalizes to "frankfurt".
pub fn find_city_in_location(location: &str) -> Option<&'static str> {
    let location_lower = location.to_lowercase();

    let mut keys: Vec<&'static str> = GERMAN_CITIES.iter().map(|(name, _)| *name).collect();
    keys.sort_by_key(|name| std::cmp::Reverse(name.len()));

    for name in keys {
        if location_lower.contains(name) {
            if name.contains("frankfurt") {
                return Some("frankfurt");
            }
            return Some(name);
        }
    }

    None
}

/// Coordinates for a city key returned by [`find_city_in_location`].
pub fn city_coords(city: &str) -> Option<(f64, f64)> {
    GERMAN_CITIES
        .iter()
        .find(|(name, _)| *name == city)
        .map(|(_, coords)| *coords)
}
