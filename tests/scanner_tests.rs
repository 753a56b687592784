use std::fs;
use tempfile::TempDir;
use hashwatch::hasher::hash_bytes;
use hashwatch::scanner::scan_directory;

#[test]
fn test_scan_empty_directory() {
    let temp = TempDir::new().unwrap();
    let hashes = scan_directory(temp.path()).unwrap();

    assert!(hashes.is_empty());
}

#[test]
fn test_scan_with_files() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "hello").unwrap();
    fs::write(temp.path().join("b.txt"), "world").unwrap();

    let hashes = scan_directory(temp.path()).unwrap();

    assert_eq!(hashes.len(), 2);
    assert_eq!(hashes["a.txt"], Some(hash_bytes(b"hello")));
    assert_eq!(hashes["b.txt"], Some(hash_bytes(b"world")));
}

#[test]
fn test_scan_nested_directories() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("subdir/deeper")).unwrap();
    fs::write(temp.path().join("subdir/file.txt"), "content").unwrap();
    fs::write(temp.path().join("subdir/deeper/leaf.txt"), "leaf").unwrap();

    let hashes = scan_directory(temp.path()).unwrap();

    // Directories themselves are not entries
    let keys: Vec<&str> = hashes.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["subdir/deeper/leaf.txt", "subdir/file.txt"]);
}

#[test]
fn test_scan_empty_subdirectory_not_recorded() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("empty")).unwrap();

    assert!(scan_directory(temp.path()).unwrap().is_empty());
}

#[test]
fn test_scan_same_tree_same_map() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("etc")).unwrap();
    fs::write(temp.path().join("etc/app.conf"), "port = 80").unwrap();

    let first = scan_directory(temp.path()).unwrap();
    let second = scan_directory(temp.path()).unwrap();
    assert_eq!(first, second);
}

#[cfg(unix)]
#[test]
fn test_scan_symlinks() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("real.txt"), "content").unwrap();
    fs::create_dir(temp.path().join("dir")).unwrap();
    fs::write(temp.path().join("dir/inner.txt"), "inner").unwrap();

    std::os::unix::fs::symlink(temp.path().join("real.txt"), temp.path().join("link.txt")).unwrap();
    std::os::unix::fs::symlink(temp.path().join("dir"), temp.path().join("dirlink")).unwrap();
    std::os::unix::fs::symlink(temp.path().join("missing"), temp.path().join("dangling")).unwrap();

    let hashes = scan_directory(temp.path()).unwrap();

    // File link hashed through, directory link not followed, dangling link has no hash
    assert_eq!(hashes["link.txt"], hashes["real.txt"]);
    assert!(!hashes.keys().any(|k| k.starts_with("dirlink")));
    assert_eq!(hashes["dangling"], None);
    assert_eq!(hashes.len(), 4);
}

#[test]
fn test_scan_missing_root_fails() {
    let temp = TempDir::new().unwrap();
    assert!(scan_directory(&temp.path().join("absent")).is_err());
}

#[cfg(unix)]
fn make_fifo(path: &std::path::Path) {
    let status = std::process::Command::new("mkfifo").arg(path).status().unwrap();
    assert!(status.success());
}

#[cfg(unix)]
#[test]
fn test_scan_non_utf8_names_stay_distinct() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(OsStr::from_bytes(b"\xff")), "one").unwrap();
    fs::write(temp.path().join(OsStr::from_bytes(b"\xfe")), "two").unwrap();

    let hashes = scan_directory(temp.path()).unwrap();

    assert_eq!(hashes.len(), 2);
    assert_eq!(hashes["%FF"], Some(hash_bytes(b"one")));
    assert_eq!(hashes["%FE"], Some(hash_bytes(b"two")));
}

#[cfg(unix)]
#[test]
fn test_scan_skips_fifo() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "hello").unwrap();
    make_fifo(&temp.path().join("pipe"));

    let hashes = scan_directory(temp.path()).unwrap();

    let keys: Vec<&str> = hashes.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a.txt"]);
}

#[cfg(unix)]
#[test]
fn test_scan_skips_link_to_fifo() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("root");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.txt"), "hello").unwrap();
    make_fifo(&temp.path().join("pipe"));
    std::os::unix::fs::symlink(temp.path().join("pipe"), root.join("link")).unwrap();

    // Opening the fifo would block; returning at all means it was not hashed
    let hashes = scan_directory(&root).unwrap();

    assert!(!hashes.contains_key("link"));
    assert_eq!(hashes.len(), 1);
}

#[cfg(unix)]
#[test]
fn test_scan_skips_unreadable_subdirectory() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("top.txt"), "top").unwrap();
    fs::create_dir(temp.path().join("locked")).unwrap();
    fs::write(temp.path().join("locked/hidden.txt"), "hidden").unwrap();
    fs::create_dir(temp.path().join("open")).unwrap();
    fs::write(temp.path().join("open/seen.txt"), "seen").unwrap();

    let locked = temp.path().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    // Root can still list the directory, nothing to observe then
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let hashes = scan_directory(temp.path()).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let keys: Vec<&str> = hashes.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["open/seen.txt", "top.txt"]);
}
