use dotai_fs::NormalizedPath;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_backslashes_are_normalized() {
    let path = NormalizedPath::new("a\\b\\c.md");
    assert_eq!(path.as_str(), "a/b/c.md");
}

#[test]
fn test_join_adds_single_separator() {
    let root = NormalizedPath::new("/project");
    assert_eq!(root.join(".claude/settings.json").as_str(), "/project/.claude/settings.json");

    let root = NormalizedPath::new("/project/");
    assert_eq!(root.join("CLAUDE.md").as_str(), "/project/CLAUDE.md");
}

#[test]
fn test_join_empty_segment_is_identity() {
    let root = NormalizedPath::new("/project");
    assert_eq!(root.join(""), root);
    assert_eq!(root.join("."), root);
}

#[rstest]
#[case("/project/.cursor/rules/style.mdc", Some("style.mdc"))]
#[case("/project/.claude/", Some(".claude"))]
#[case("CLAUDE.md", Some("CLAUDE.md"))]
#[case("/", None)]
fn test_file_name(#[case] input: &str, #[case] expected: Option<&str>) {
    assert_eq!(NormalizedPath::new(input).file_name(), expected);
}

#[test]
fn test_is_file_only_for_existing_files() {
    let temp = tempfile::TempDir::new().unwrap();
    let dir = NormalizedPath::new(temp.path());
    std::fs::write(temp.path().join("a.md"), "a").unwrap();

    assert!(dir.join("a.md").is_file());
    assert!(!dir.join("missing.md").is_file());
    assert!(!dir.is_file());
}

#[rstest]
#[case(".mcp.json", Some("json"))]
#[case(".codex/config.toml", Some("toml"))]
#[case("CLAUDE.md", Some("md"))]
#[case(".gitignore", None)]
#[case(".github/copilot-instructions.md", Some("md"))]
#[case("rules.d/README", None)]
#[case("Makefile", None)]
#[case("archive.tar.gz", Some("gz"))]
fn test_extension(#[case] input: &str, #[case] expected: Option<&str>) {
    assert_eq!(NormalizedPath::new(input).extension(), expected);
}

#[test]
fn test_ordering_follows_string_order() {
    let mut paths = vec![
        NormalizedPath::new("b.md"),
        NormalizedPath::new(".mcp.json"),
        NormalizedPath::new("A.md"),
    ];
    paths.sort();
    let sorted: Vec<&str> = paths.iter().map(|p| p.as_str()).collect();
    assert_eq!(sorted, vec![".mcp.json", "A.md", "b.md"]);
}
