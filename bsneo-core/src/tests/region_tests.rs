use super::*;

#[test]
fn base_list_for_unbroadened_region() {
    assert_eq!(preferred_regions("jp"), vec!["jp", "world", "none"]);
}

#[test]
fn north_america_broadening() {
    assert_eq!(preferred_regions("us"), vec!["us", "na", "world", "none"]);
    assert_eq!(preferred_regions("ca"), vec!["ca", "na", "world", "none"]);
}

#[test]
fn europe_broadening() {
    for code in ["uk", "es", "fr", "it", "de", "nl", "ru"] {
        assert_eq!(
            preferred_regions(code),
            vec![code, "eu", "world", "none"],
            "wrong preferences for {}",
            code
        );
    }
}

#[test]
fn unknown_code_gets_base_list() {
    assert_eq!(preferred_regions("xx"), vec!["xx", "world", "none"]);
}

#[test]
fn world_is_not_repeated() {
    assert_eq!(preferred_regions("world"), vec!["world", "none"]);
}

#[test]
fn none_lists_every_known_region_once() {
    let prefs = preferred_regions("none");
    assert_eq!(&prefs[..2], &["world", "none"]);
    assert_eq!(prefs.len(), Region::all().len());
    for region in Region::all() {
        let count = prefs.iter().filter(|p| *p == region.code()).count();
        assert_eq!(count, 1, "{} should appear exactly once", region.code());
    }
    // Remaining regions keep catalog order
    assert_eq!(prefs[2], "na");
    assert_eq!(prefs.last().map(String::as_str), Some("cn"));
}

#[test]
fn preferences_are_case_insensitive() {
    assert_eq!(preferred_regions("US"), preferred_regions("us"));
}

#[test]
fn codes_round_trip() {
    for &region in Region::all() {
        let parsed: Region = region.code().parse().unwrap();
        assert_eq!(parsed, region);
    }
}

#[test]
fn unknown_code_fails_to_parse() {
    assert!("atlantis".parse::<Region>().is_err());
}

#[test]
fn serde_uses_short_codes() {
    let json = serde_json::to_string(&Region::Unspecified).unwrap();
    assert_eq!(json, "\"none\"");
    let parsed: Region = serde_json::from_str("\"eu\"").unwrap();
    assert_eq!(parsed, Region::Eu);
}

#[test]
fn region_from_file_name_takes_last_segment() {
    assert_eq!(region_from_file_name("boxFront_us.png"), "us");
    assert_eq!(region_from_file_name("box_back_eu.jpg"), "eu");
    assert_eq!(region_from_file_name("screenshot_world.tar.gz"), "world");
}

#[test]
fn region_from_file_name_defaults_to_none() {
    assert_eq!(region_from_file_name("video.mp4"), "none");
    assert_eq!(region_from_file_name("trailing_.png"), "none");
}
