// Tests for candidate enumeration

use osu_sweep::sweep::{enumerate, FileTypePattern};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use super::common::write_file;

#[test]
fn test_enumerate_nested_beatmaps() {
    let dir = TempDir::new().unwrap();
    let a = write_file(dir.path(), "1 Artist - Song/a.osu", b"");
    let b = write_file(dir.path(), "2 Artist - Song/deep/er/b.osu", b"");
    write_file(dir.path(), "1 Artist - Song/audio.mp3", b"");
    write_file(dir.path(), "1 Artist - Song/bg.mp4", b"");

    let mut files = enumerate(dir.path(), &FileTypePattern::beatmaps());
    files.sort();

    let mut expected = vec![a, b];
    expected.sort();
    assert_eq!(files, expected);
}

#[test]
fn test_enumerate_videos() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "s1/bg.mp4", b"");
    write_file(dir.path(), "s2/intro.flv", b"");
    write_file(dir.path(), "s3/old.AVI", b"");
    write_file(dir.path(), "s3/map.osu", b"");
    write_file(dir.path(), "s3/clip.mkv", b"");

    let files = enumerate(dir.path(), &FileTypePattern::videos());
    assert_eq!(files.len(), 3);
    assert!(files.iter().all(|p| !p.to_string_lossy().ends_with(".osu")));
}

#[test]
fn test_enumerate_missing_root_is_empty() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");
    assert!(enumerate(&missing, &FileTypePattern::beatmaps()).is_empty());
}

#[test]
fn test_enumerate_file_root_is_empty() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "lonely.osu", b"Mode: 2");
    assert!(enumerate(&file, &FileTypePattern::beatmaps()).is_empty());
}

#[test]
fn test_directories_are_never_returned() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("weird.osu")).unwrap();
    let inner = write_file(dir.path(), "weird.osu/real.osu", b"");

    let files = enumerate(dir.path(), &FileTypePattern::beatmaps());
    assert_eq!(files, vec![inner]);
}

#[test]
fn test_each_file_appears_once() {
    let dir = TempDir::new().unwrap();
    for i in 0..50 {
        write_file(dir.path(), &format!("set{}/diff{}.osu", i % 7, i), b"");
    }

    let mut files: Vec<PathBuf> = enumerate(dir.path(), &FileTypePattern::beatmaps());
    assert_eq!(files.len(), 50);
    files.sort();
    files.dedup();
    assert_eq!(files.len(), 50);
}

#[cfg(unix)]
#[test]
fn test_symlinked_beatmap_is_enumerated() {
    use std::os::unix::fs::symlink;

    let dir = TempDir::new().unwrap();
    let root = dir.path().join("Songs");
    fs::create_dir_all(root.join("song")).unwrap();
    let target = write_file(dir.path(), "outside.txt", b"Mode: 3");
    let link = root.join("song/link.osu");
    symlink(&target, &link).unwrap();
    // Dangling links and links to directories are not files
    symlink(dir.path().join("missing.osu"), root.join("song/dangling.osu")).unwrap();
    fs::create_dir_all(dir.path().join("folder")).unwrap();
    symlink(dir.path().join("folder"), root.join("song/folder.osu")).unwrap();

    let files = enumerate(&root, &FileTypePattern::beatmaps());
    assert_eq!(files, vec![link]);
}
