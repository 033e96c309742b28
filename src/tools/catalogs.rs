//! Canned text the bureau tools draw from.
//!
//! Keyword tables are scanned in declaration order and the first keyword
//! contained in the (lowercased) query wins, so the order here is part of
//! the tools' observable behaviour.

/// Demogorgon reactions, each quoting the complaint.
pub fn demogorgon_quips(complaint: &str) -> [String; 3] {
    [
        format!(
            "The Demogorgon tilts its head at '{complaint}'. Perhaps you're assuming reality should be consistent?"
        ),
        format!(
            "The Demogorgon clicks approvingly. It suggests time flows sideways where the complaint originated: '{complaint}'."
        ),
        format!(
            "The Demogorgon seems distracted by snacks. It communicates that 'consistency' is an Earth-only hobby: '{complaint}'."
        ),
    ]
}

/// Hawkins historical records, keyed by topic keyword.
pub const HAWKINS_RECORDS: [(&str, &str); 4] = [
    (
        "portal",
        "Records show portals have opened on various dates with no clear pattern. Weather, electromagnetic activity, and unknown factors seem involved.",
    ),
    (
        "monsters",
        "Historical records indicate creatures behave differently based on environmental factors, time of day, and proximity to certain individuals.",
    ),
    (
        "psychics",
        "Records show psychic abilities vary greatly. Some can move objects but not see visions; others see visions but can't move objects.",
    ),
    (
        "electricity",
        "Hawkins has a history of electrical anomalies. Records suggest a connection between interdimensional activity and electromagnetic fields.",
    ),
];

/// Record text used when no keyword matches.
pub fn hawkins_fallback(query: &str) -> String {
    format!(
        "Records don't contain specific information about '{query}', but they note many unexplained events over the years."
    )
}

/// Interdimensional spells, each aimed at the problem.
pub fn spells(problem: &str) -> [String; 4] {
    [
        format!(
            "Chant 'Becma Becma Becma' three times while holding a Walkman to recalibrate frequencies around: {problem}"
        ),
        format!(
            "Draw a salt circle, place a compass in the center, and wait for the needle to twitch\u{2014}then address: {problem}"
        ),
        format!(
            "Play 'Running Up That Hill' backwards at the exact location of the glitch to induce temporal resonance for: {problem}"
        ),
        format!(
            "Gather a lighter, a compass, and something personal; form a triangle and focus intensely on: {problem}"
        ),
    ]
}

/// Party answers, keyed by topic keyword.
pub const PARTY_RESPONSES: [(&str, &str); 4] = [
    (
        "portal",
        "Mike: 'Portals open near strong emotional events or electromagnetic disturbances.' Dustin: 'Also tied to Mind Flayer patterns.'",
    ),
    (
        "monsters",
        "Lucas: 'They\u{2019}re territorial but opportunistic.' Will: 'They sense fear and strong emotions\u{2014}behavior shifts with the vibe.'",
    ),
    (
        "psychics",
        "Mike: 'Powers connect to emotional state.' Dustin: 'Physical and mental energy limit what they can do.'",
    ),
    (
        "electricity",
        "Lucas: 'Interdimensional stuff interferes with power lines.' Dustin: 'But it also creates weird feedback loops.'",
    ),
];

/// Party answer used when no keyword matches.
pub const PARTY_FALLBACK: &str = "The party huddles. Mike: 'Tough one.' Dustin: 'We need more info.' Lucas: 'Let\u{2019}s list what we know.' Will: 'Consult other sources?'";

/// First entry whose keyword occurs in `query`, compared case-insensitively.
pub fn lookup<'a>(table: &[(&'a str, &'a str)], query: &str) -> Option<&'a str> {
    let q = query.to_lowercase();
    table
        .iter()
        .find(|(keyword, _)| q.contains(keyword))
        .map(|(_, text)| *text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_first_match_wins() {
        // "portal" is declared before "monsters"
        let text = lookup(&HAWKINS_RECORDS, "monsters came through the portal");
        assert_eq!(text, Some(HAWKINS_RECORDS[0].1));
    }

    #[test]
    fn test_lookup_no_match() {
        assert_eq!(lookup(&PARTY_RESPONSES, "why is the sky red?"), None);
        assert_eq!(lookup(&PARTY_RESPONSES, ""), None);
    }

    #[test]
    fn test_templates_interpolate() {
        for quip in demogorgon_quips("slime") {
            assert!(quip.contains("'slime'"));
        }
        for spell in spells("slime") {
            assert!(spell.ends_with(": slime"));
        }
        assert!(hawkins_fallback("slime").contains("'slime'"));
    }
}
