// Tests for full passes through SweepEngine

use osu_sweep::sweep::{BeatmapPolicy, DeletionCriteria, FileTypePattern, SweepEngine};
use tempfile::TempDir;

use super::common::{beatmap, write_file};

fn quiet_engine(workers: usize) -> SweepEngine {
    SweepEngine::new().with_workers(workers).with_progress(false)
}

#[test]
fn test_end_to_end_all_but_standard() {
    let dir = TempDir::new().unwrap();
    let x = write_file(dir.path(), "A/song1/x.osu", &beatmap("Mode: 1"));
    let y = write_file(dir.path(), "A/song2/y.osu", &beatmap("Mode: 3"));

    let criteria = DeletionCriteria::for_beatmaps(BeatmapPolicy::AllButStandard, FileTypePattern::beatmaps());
    let summary = quiet_engine(4).run(dir.path(), &criteria);

    assert_eq!(summary.files_scanned, 2);
    assert_eq!(summary.files_deleted, 1);
    assert_eq!(summary.dirs_removed, 1);
    assert!(x.exists());
    assert!(dir.path().join("A/song1").exists());
    assert!(!y.exists());
    assert!(!dir.path().join("A/song2").exists());
    assert!(dir.path().join("A").exists());
}

#[test]
fn test_missing_root_gives_empty_summary() {
    let dir = TempDir::new().unwrap();
    let criteria = DeletionCriteria::extension(FileTypePattern::videos());

    let summary = quiet_engine(2).run(&dir.path().join("nope"), &criteria);

    assert_eq!(summary.files_scanned, 0);
    assert_eq!(summary.files_deleted, 0);
    assert_eq!(summary.bytes_reclaimed, 0);
}

#[test]
fn test_video_pass_leaves_other_files() {
    let dir = TempDir::new().unwrap();
    let video = write_file(dir.path(), "s1/bg.mp4", b"0123456789");
    let flv = write_file(dir.path(), "s2/bg.flv", b"0123456789");
    let map = write_file(dir.path(), "s1/map.osu", &beatmap("Mode: 2"));
    let image = write_file(dir.path(), "s2/bg.jpg", b"jpeg");

    let criteria = DeletionCriteria::extension(FileTypePattern::videos());
    let summary = quiet_engine(3).run(dir.path(), &criteria);

    assert_eq!(summary.files_scanned, 2);
    assert_eq!(summary.files_deleted, 2);
    assert_eq!(summary.bytes_reclaimed, 20);
    assert!(!video.exists());
    assert!(!flv.exists());
    assert!(map.exists());
    assert!(image.exists());
}

#[test]
fn test_many_files_across_workers() {
    let dir = TempDir::new().unwrap();
    let mut expected_deleted = 0;
    for i in 0..103 {
        let mode = i % 4 + 1;
        if mode != 1 {
            expected_deleted += 1;
        }
        // One beatmap per set so every deletion empties its folder
        write_file(
            dir.path(),
            &format!("{} Artist - Title/diff.osu", i),
            &beatmap(&format!("Mode: {}", mode)),
        );
    }

    let criteria = DeletionCriteria::for_beatmaps(BeatmapPolicy::AllButStandard, FileTypePattern::beatmaps());
    let summary = quiet_engine(7).run(dir.path(), &criteria);

    assert_eq!(summary.files_scanned, 103);
    assert_eq!(summary.files_deleted, expected_deleted);
    assert_eq!(summary.dirs_removed, expected_deleted);
    assert_eq!(summary.workers, 7);

    let remaining = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(remaining, 103 - expected_deleted);
}

#[test]
fn test_more_workers_than_files() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "only/one.osu", &beatmap("Mode: 4"));

    let criteria = DeletionCriteria::for_beatmaps(BeatmapPolicy::ManiaOnly, FileTypePattern::beatmaps());
    let summary = quiet_engine(16).run(dir.path(), &criteria);

    assert_eq!(summary.files_scanned, 1);
    assert_eq!(summary.files_deleted, 1);
}

#[test]
fn test_same_directory_split_across_workers() {
    let dir = TempDir::new().unwrap();
    for i in 0..12 {
        write_file(dir.path(), &format!("shared/diff{}.osu", i), &beatmap("Mode: 2"));
    }

    let criteria = DeletionCriteria::for_beatmaps(BeatmapPolicy::TaikoOnly, FileTypePattern::beatmaps());
    let summary = quiet_engine(4).run(dir.path(), &criteria);

    // Races on the shared folder never cost a file deletion
    assert_eq!(summary.files_deleted, 12);
    assert!(summary.dirs_removed <= 1);
    assert!(!dir.path().join("shared").exists());
}

#[test]
fn test_dry_run_pass() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "s/bg.avi", b"abc");

    let criteria = DeletionCriteria::extension(FileTypePattern::videos());
    let summary = quiet_engine(2).with_dry_run(true).run(dir.path(), &criteria);

    assert!(summary.dry_run);
    assert_eq!(summary.files_deleted, 1);
    assert!(file.exists());
}

#[test]
fn test_summary_report_mentions_totals() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "s/a.osu", &beatmap("Mode: 1"));

    let criteria = DeletionCriteria::for_beatmaps(BeatmapPolicy::StandardOnly, FileTypePattern::beatmaps());
    let summary = quiet_engine(1).run(dir.path(), &criteria);

    let mut out = Vec::new();
    summary.write_report(&mut out).unwrap();
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("Total files read"));
    assert!(text.contains("Total files deleted"));
    assert!(text.contains("Mode: 1"));
    assert!(text.contains("elapsed time"));
}

#[test]
fn test_status_lines_go_to_writer_even_without_bars() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "s/bg.mp4", b"abc");

    let criteria = DeletionCriteria::extension(FileTypePattern::videos());
    let mut out = Vec::new();
    let summary = quiet_engine(2).run_with_status(dir.path(), &criteria, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let reading = text.find("File reading in progress...").unwrap();
    let processing = text.find("File processing in progress...").unwrap();
    assert!(reading < processing);
    assert_eq!(summary.files_deleted, 1);
}
