use dotai_fs::{NormalizedPath, io};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("test.txt"));

    io::write_atomic(&path, b"hello world").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "hello world");
}

#[test]
fn test_write_atomic_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path()).join(".claude/rules/style.md");

    io::write_atomic(&path, b"# Style").unwrap();

    assert!(temp.path().join(".claude/rules/style.md").is_file());
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("test.txt");
    fs::write(&file_path, "original").unwrap();

    let path = NormalizedPath::new(&file_path);
    io::write_atomic(&path, b"updated").unwrap();

    let content = fs::read_to_string(&file_path).unwrap();
    assert_eq!(content, "updated");
}

#[test]
fn test_write_atomic_leaves_no_temp_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("state.json"));

    io::write_atomic(&path, b"{}").unwrap();

    let entries: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(entries, vec!["state.json".to_string()]);
}

#[test]
fn test_failed_write_removes_temp_file() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("CLAUDE.md");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep.txt"), "x").unwrap();

    let result = io::write_atomic(&NormalizedPath::new(&target), b"content");
    assert!(result.is_err());

    let entries: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(entries, vec!["CLAUDE.md".to_string()]);
    assert!(target.join("keep.txt").is_file());
}

#[test]
fn test_read_text_existing_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("test.txt");
    fs::write(&file_path, "hello").unwrap();

    let path = NormalizedPath::new(&file_path);
    let content = io::read_text(&path).unwrap();
    assert_eq!(content, "hello");
}

#[test]
fn test_read_text_nonexistent_file() {
    let path = NormalizedPath::new("/nonexistent/file.txt");
    let result = io::read_text(&path);
    assert!(result.is_err());
}

#[test]
fn test_read_if_exists_missing_is_none() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("missing.txt"));

    assert!(io::read_text_if_exists(&path).unwrap().is_none());
    assert!(io::read_bytes_if_exists(&path).unwrap().is_none());
}

#[test]
fn test_read_bytes_if_exists_returns_exact_bytes() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("data.bin");
    fs::write(&file_path, [0xde, 0xad, 0xbe, 0xef]).unwrap();

    let bytes = io::read_bytes_if_exists(&NormalizedPath::new(&file_path))
        .unwrap()
        .unwrap();
    assert_eq!(bytes, vec![0xde, 0xad, 0xbe, 0xef]);
}

#[test]
fn test_write_text_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("test.txt"));

    io::write_text(&path, "hello world").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "hello world");
}
