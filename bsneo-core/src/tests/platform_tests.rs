use super::*;

#[test]
fn ids_round_trip() {
    for &platform in Platform::all() {
        let parsed: Platform = platform.id().parse().unwrap();
        assert_eq!(parsed, platform, "round-trip failed for {:?}", platform);
    }
}

#[test]
fn ids_are_unique() {
    let mut ids: Vec<_> = Platform::all().iter().map(|p| p.id()).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn case_insensitive_parsing() {
    let parsed: Platform = "SNES".parse().unwrap();
    assert_eq!(parsed.id(), "snes");
    let parsed: Platform = " Psx ".parse().unwrap();
    assert_eq!(parsed.display_name(), "Sony Playstation");
}

#[test]
fn unknown_string_returns_err() {
    let result: Result<Platform, _> = "commodore65".parse();
    assert!(result.is_err());
}

#[test]
fn display_returns_display_name() {
    let nes = Platform::from_id("nes").unwrap();
    assert_eq!(nes.to_string(), "Nintendo Entertainment System");
    let genesis = Platform::from_id("genesis").unwrap();
    assert_eq!(genesis.to_string(), "Sega Genesis");
}
