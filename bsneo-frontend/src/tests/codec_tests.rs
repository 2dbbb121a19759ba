use super::*;

fn text(s: &str) -> FieldValue {
    FieldValue::Text(s.to_string())
}

fn list(items: &[&str]) -> FieldValue {
    FieldValue::List(items.iter().map(|s| s.to_string()).collect())
}

const SAMPLE: &str = "\
collection: Nintendo Entertainment System
shortname: nes
launch: \"Insert Launch Command Here!\"

game: Super Mario Bros.
file:
  Super Mario Bros. (World).nes
description: Mario must rescue the princess.
  .
  Bowser awaits.
genres:
  Platform
  Action
";

#[test]
fn test_list_field_classification() {
    for name in ["file", "files", "genre", "genres", "developerList", "ignore-files", "extensions", "tags", "directors"] {
        assert!(is_list_field(name), "{name} should be list-kind");
    }
    for name in ["game", "description", "release", "players", "rating", "assets.boxFront", "collection", "launch"] {
        assert!(!is_list_field(name), "{name} should be scalar");
    }
}

#[test]
fn test_parse_sample() {
    let blocks = parse_catalog(SAMPLE).unwrap();
    assert_eq!(blocks.len(), 2);

    assert_eq!(blocks[0].text("shortname"), Some("nes"));
    assert_eq!(blocks[0].text("launch"), Some("\"Insert Launch Command Here!\""));

    let game = &blocks[1];
    assert_eq!(game.game(), Some("Super Mario Bros."));
    assert_eq!(game.get("file"), Some(&list(&["Super Mario Bros. (World).nes"])));
    assert_eq!(
        game.text("description"),
        Some("Mario must rescue the princess.\n\nBowser awaits.")
    );
    assert_eq!(game.get("genres"), Some(&list(&["Platform", "Action"])));
    assert_eq!(
        game.names().collect::<Vec<_>>(),
        vec!["game", "file", "description", "genres"]
    );
}

#[test]
fn test_continuations_concatenate_without_separator() {
    let blocks = parse_catalog("game: A\ndescription: one\n  two\n").unwrap();
    assert_eq!(blocks[0].text("description"), Some("onetwo"));
}

#[test]
fn test_blank_line_runs_collapse() {
    let blocks = parse_catalog("\n\n  \ngame: A\n\n\n\n \t\ngame: B\n\n").unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].game(), Some("A"));
    assert_eq!(blocks[1].game(), Some("B"));
}

#[test]
fn test_comments_are_transparent() {
    let input = "# header comment\ngame: A\ndescription: one\n# inside a field\n  .\n  two\n";
    let blocks = parse_catalog(input).unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].text("description"), Some("one\n\ntwo"));
}

#[test]
fn test_comment_does_not_split_blocks() {
    let blocks = parse_catalog("game: A\n# note\nplayers: 2\n").unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].text("players"), Some("2"));
}

#[test]
fn test_repeated_paragraph_breaks_collapse() {
    let blocks = parse_catalog("game: A\ndescription: one\n  .\n  .\n  two\n").unwrap();
    assert_eq!(blocks[0].text("description"), Some("one\n\ntwo"));
}

#[test]
fn test_dot_is_an_item_on_list_fields() {
    let blocks = parse_catalog("game: A\ntags:\n  .\n").unwrap();
    assert_eq!(blocks[0].get("tags"), Some(&list(&["."])));
}

#[test]
fn test_list_header_value_is_first_item() {
    let blocks = parse_catalog("game: A\ngenre: Action\n  Puzzle\ngenres:\n").unwrap();
    assert_eq!(blocks[0].get("genre"), Some(&list(&["Action", "Puzzle"])));
    assert_eq!(blocks[0].get("genres"), Some(&list(&[])));
}

#[test]
fn test_repeated_field_accumulates() {
    let blocks = parse_catalog("game: A\ngenres: Action\ngenres: RPG\nplayers: 1\nplayers: -2\n").unwrap();
    assert_eq!(blocks[0].get("genres"), Some(&list(&["Action", "RPG"])));
    assert_eq!(blocks[0].text("players"), Some("1-2"));
    assert_eq!(blocks[0].len(), 3);
}

#[test]
fn test_crlf_and_missing_final_newline() {
    let blocks = parse_catalog("game: A\r\ndescription: x\r\n  .\r\n  y").unwrap();
    assert_eq!(blocks[0].text("game"), Some("A"));
    assert_eq!(blocks[0].text("description"), Some("x\n\ny"));
}

#[test]
fn test_value_keeps_later_colons() {
    let blocks = parse_catalog("game: Metroid: Zero Mission\n").unwrap();
    assert_eq!(blocks[0].game(), Some("Metroid: Zero Mission"));
}

#[test]
fn test_line_without_colon_is_malformed() {
    let err = parse_catalog("game: A\nnot a field\n").unwrap_err();
    assert!(matches!(err, FrontendError::MalformedCatalog { line: 2, .. }));
}

#[test]
fn test_orphan_continuation_is_malformed() {
    let err = parse_catalog("game: A\n\n  stray\n").unwrap_err();
    assert!(matches!(err, FrontendError::MalformedCatalog { line: 3, .. }));
}

#[test]
fn test_empty_input_has_no_blocks() {
    assert!(parse_catalog("").unwrap().is_empty());
    assert!(parse_catalog("# only a comment\n\n").unwrap().is_empty());
}

#[test]
fn test_serialize_format() {
    let collection: FieldBlock = vec![
        ("collection", text("Nintendo Entertainment System")),
        ("shortname", text("nes")),
    ]
    .into_iter()
    .collect();
    let game: FieldBlock = vec![
        ("game", text("Zelda")),
        ("file", list(&["zelda.nes", "  ", " padded.nes "])),
        ("description", text("one\n\ntwo")),
        ("players", text("")),
    ]
    .into_iter()
    .collect();

    let out = serialize_catalog(&[collection, game]);
    assert_eq!(
        out,
        "\
collection: Nintendo Entertainment System
shortname: nes

game: Zelda
file:
  zelda.nes
  padded.nes
description: one
  .
  two
players:
"
    );
}

#[test]
fn test_field_names() {
    for name in ["game", "assets.boxFront", "desc-note", "x-my field"] {
        assert!(is_field_name(name), "{name:?} should be writable");
    }
    for name in ["", " note", "note ", "#hidden", "a:b", "two\nlines", "cr\r"] {
        assert!(!is_field_name(name), "{name:?} should be rejected");
    }
}

#[test]
fn test_serialize_never_writes_bare_lines() {
    let game: FieldBlock = vec![
        ("game", text("Tetris")),
        ("developers", list(&["Nintendo\nR&D1", "Bullet-Proof\r\nSoftware"])),
        ("description", text("one\n   \ntwo")),
        (" note", text("dropped")),
        ("players", text("2")),
    ]
    .into_iter()
    .collect();

    let out = serialize_catalog(&[FieldBlock::new(), game]);
    let blocks = parse_catalog(&out).unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(
        blocks[0].get("developers"),
        Some(&list(&["Nintendo", "R&D1", "Bullet-Proof", "Software"]))
    );
    assert_eq!(blocks[0].text("description"), Some("one\n\ntwo"));
    assert_eq!(blocks[0].text("players"), Some("2"));
    assert!(!blocks[0].contains("note"));
}

#[test]
fn test_lone_dot_paragraph_is_lossy() {
    // A scalar paragraph that is only "." cannot be told apart from a
    // paragraph break; built blocks never contain one.
    let game: FieldBlock = vec![("game", text("A")), ("description", text("one\n\n."))]
        .into_iter()
        .collect();
    let blocks = parse_catalog(&serialize_catalog(&[FieldBlock::new(), game])).unwrap();
    assert_eq!(blocks[0].text("description"), Some("one\n\n"));
}

#[test]
fn test_serialize_sorts_games_after_collection() {
    let collection: FieldBlock = vec![("collection", text("X")), ("shortname", text("x"))]
        .into_iter()
        .collect();
    let b: FieldBlock = vec![("game", text("B"))].into_iter().collect();
    let a: FieldBlock = vec![("game", text("A"))].into_iter().collect();
    let untitled: FieldBlock = vec![("collection", text("Extra"))].into_iter().collect();

    let out = serialize_catalog(&[collection, b, a, untitled]);
    let blocks = parse_catalog(&out).unwrap();
    let order: Vec<_> = blocks
        .iter()
        .map(|b| b.game().or(b.text("collection")).unwrap_or_default().to_string())
        .collect();
    assert_eq!(order, vec!["X", "Extra", "A", "B"]);
}

#[test]
fn test_serialize_empty_catalog() {
    assert_eq!(serialize_catalog(&[]), "");
}

#[test]
fn test_round_trip() {
    let blocks = parse_catalog(SAMPLE).unwrap();
    let reparsed = parse_catalog(&serialize_catalog(&blocks)).unwrap();
    assert_eq!(reparsed, blocks);
}

#[test]
fn test_round_trip_edge_values() {
    let input = "game: A\ndescription:\n  .\n  starts after a break\nsummary: ends with a break\n  .\n";
    let blocks = parse_catalog(input).unwrap();
    assert_eq!(blocks[0].text("description"), Some("\n\nstarts after a break"));
    assert_eq!(blocks[0].text("summary"), Some("ends with a break\n\n"));
    let reparsed = parse_catalog(&serialize_catalog(&blocks)).unwrap();
    assert_eq!(reparsed, blocks);
}

#[test]
fn test_block_editing() {
    let mut block: FieldBlock = vec![("game", text("A")), ("players", text("1"))]
        .into_iter()
        .collect();
    block.set("players", text("2"));
    block.set("release", text("1990-01-01"));
    block.insert(1, "file", list(&["a.nes"]));
    assert_eq!(
        block.names().collect::<Vec<_>>(),
        vec!["game", "file", "players", "release"]
    );
    assert_eq!(block.remove("players"), Some(text("2")));
    assert!(!block.contains("players"));
}

#[test]
fn test_read_catalog_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(read_catalog(&dir.path().join("metadata.pegasus.txt")).unwrap().is_none());
}

#[test]
fn test_read_catalog_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metadata.pegasus.txt");
    std::fs::write(&path, "").unwrap();
    assert_eq!(read_catalog(&path).unwrap(), Some(Vec::new()));
}
