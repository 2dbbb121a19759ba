use super::*;

const SAMPLE: &str = r#"{
    "name": "The Legend of Zelda",
    "clean_name": "THE_LEGEND_OF_ZELDA",
    "filename": "Legend of Zelda, The (USA).nes",
    "desc": "Link must rescue Zelda.",
    "release": "1986-02-21",
    "genres": ["Action", "Adventure"],
    "developers": ["Nintendo"],
    "publishers": ["Nintendo"],
    "rating": 0.9,
    "imgs": {
        "boxFront": ["/data/nes/media/ZELDA/boxFront_us.png", "/data/nes/media/ZELDA/boxFront_jp.png"],
        "screenshot": [["/data/nes/media/ZELDA/screenshot.png", "EU"]]
    },
    "platform": "nes",
    "scraped_with": "lb",
    "players": "1"
}"#;

#[test]
fn parses_full_entry() {
    let entry = ScrapeEntry::from_json(SAMPLE).unwrap();
    assert_eq!(entry.name, "The Legend of Zelda");
    assert_eq!(entry.filename, "Legend of Zelda, The (USA).nes");
    assert_eq!(entry.genres, vec!["Action", "Adventure"]);
    assert_eq!(entry.rating, Some(0.9));
    assert_eq!(entry.scraped_with.as_deref(), Some("lb"));
    assert_eq!(entry.imgs.len(), 2);
    assert_eq!(
        entry.extra.get("players"),
        Some(&serde_json::Value::String("1".into()))
    );
    assert!(!entry.extra.contains_key("name"));
}

#[test]
fn key_is_normalized_name() {
    let entry = ScrapeEntry::from_json(SAMPLE).unwrap();
    assert_eq!(entry.key(), "THE_LEGEND_OF_ZELDA");
}

#[test]
fn media_folder_prefers_clean_name() {
    let mut entry = ScrapeEntry::from_json(SAMPLE).unwrap();
    entry.clean_name = "ZELDA_1".into();
    assert_eq!(entry.media_folder(), "ZELDA_1");
    entry.clean_name.clear();
    assert_eq!(entry.media_folder(), "THE_LEGEND_OF_ZELDA");
}

#[test]
fn empty_image_list_is_accepted() {
    let entry = ScrapeEntry::from_json(r#"{"name": "Tetris", "imgs": []}"#).unwrap();
    assert!(entry.imgs.is_empty());
    assert!(entry.media_candidates().is_empty());
}

#[test]
fn missing_optional_fields_default() {
    let entry = ScrapeEntry::from_json(r#"{"name": "Tetris"}"#).unwrap();
    assert!(entry.desc.is_none());
    assert!(entry.genres.is_empty());
    assert!(entry.imgs.is_empty());
}

#[test]
fn missing_name_is_an_error() {
    assert!(ScrapeEntry::from_json(r#"{"clean_name": "TETRIS"}"#).is_err());
}

#[test]
fn unslotted_image_list_is_ignored() {
    let entry =
        ScrapeEntry::from_json(r#"{"name": "Tetris", "imgs": ["/data/boxFront_us.png"]}"#).unwrap();
    assert!(entry.imgs.is_empty());
    assert!(ScrapeEntry::from_json(r#"{"name": "Tetris", "imgs": "none"}"#).is_err());
}

#[test]
fn empty_region_tag_means_none() {
    let entry = ScrapeEntry::from_json(
        r#"{"name": "Tetris", "imgs": {"logo": [["/data/logo_us.png", "  "]]}}"#,
    )
    .unwrap();
    let candidates = entry.media_candidates();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].region, "none");
}

#[test]
fn candidates_carry_slot_and_region() {
    let entry = ScrapeEntry::from_json(SAMPLE).unwrap();
    let candidates = entry.media_candidates();
    assert_eq!(candidates.len(), 3);

    assert_eq!(candidates[0].slot, "boxFront");
    assert_eq!(candidates[0].region, "us");
    assert_eq!(candidates[1].region, "jp");

    // Explicit pair wins over the (untagged) file name
    assert_eq!(candidates[2].slot, "screenshot");
    assert_eq!(candidates[2].region, "eu");
}

#[test]
fn local_video_becomes_candidate() {
    let dir = tempfile::tempdir().unwrap();
    let video = dir.path().join("video.mp4");
    std::fs::write(&video, b"not really a video").unwrap();

    let mut entry = ScrapeEntry::from_json(r#"{"name": "Tetris"}"#).unwrap();
    entry.video = Some(video.display().to_string());

    let candidates = entry.media_candidates();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].slot, VIDEO_SLOT);
    assert_eq!(candidates[0].region, "none");
    assert_eq!(candidates[0].path, video);
}

#[test]
fn remote_video_is_not_a_candidate() {
    let mut entry = ScrapeEntry::from_json(r#"{"name": "Tetris"}"#).unwrap();
    entry.video = Some("https://www.youtube.com/watch?v=abc".into());
    assert!(entry.media_candidates().is_empty());
}
