use blockmesh::{FrameRange, ObjIo, TempFolder};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::Path;

/// Build a 13-field record line; fields 3, 7, 8 and 12 are fillers that the
/// converter must ignore.
fn record_line(channel: &str, frame: i64, kind: &str, corners: [&str; 6]) -> String {
    format!(
        "'{}' {} {} 0.9 {} {} {} 640 480 {} {} {} 1.0",
        channel, frame, kind, corners[0], corners[1], corners[2], corners[3], corners[4], corners[5]
    )
}

fn write_input(dir: &Path, lines: &[String]) -> std::path::PathBuf {
    let path = dir.join("blocks.txt");
    fs::write(&path, lines.join("\n")).expect("Failed to write input");
    path
}

#[test]
fn test_single_record_output() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let input = write_input(
        tmp.path(),
        &[record_line(
            "cam0",
            12,
            "prediction",
            ["0", "0", "0", "65536", "65536", "65536"],
        )],
    );

    let stats = ObjIo::export_file(&input, FrameRange::new(0, 100), tmp.path(), None)
        .expect("Export failed");
    assert_eq!(stats.boxes_written, 1);
    assert_eq!(stats.boxes_skipped, 0);
    assert_eq!(stats.files.len(), 1);

    let output = tmp.path().join("cam0_predictions.f12.obj");
    let text = fs::read_to_string(&output).expect("Output file missing");

    let expected = "\
mtllib colormaps.mtl
o cam0.predictions

# ---- box 0 ----
usemtl mtl_red_0
v 0 0 0
v 65536 0 0
v 0 65536 0
v 65536 65536 0
v 0 0 65536
v 65536 0 65536
v 0 65536 65536
v 65536 65536 65536

g box_0
f 1 2 3
f 2 4 3
f 5 6 7
f 6 8 7
f 1 5 3
f 5 7 3
f 2 6 4
f 6 8 4
f 3 4 7
f 4 8 7
f 1 2 5
f 2 6 5

";
    assert_eq!(text, expected);
}

#[test]
fn test_grouping_and_colors() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let corners = ["0", "0", "0", "10", "10", "10"];
    let input = write_input(
        tmp.path(),
        &[
            record_line("cam0", 1, "prediction", corners),
            record_line("cam1", 1, "prediction", corners),
            record_line("cam0", 2, "prediction", corners),
            record_line("cam0", 1, "truth", corners),
            record_line("cam0", 1, "prediction", corners),
        ],
    );

    let stats = ObjIo::export_file(&input, FrameRange::new(0, 100), tmp.path(), None)
        .expect("Export failed");
    assert_eq!(stats.boxes_written, 5);
    assert_eq!(stats.files.len(), 4);

    // one file per channel/type/frame combination
    for name in [
        "cam0_predictions.f1.obj",
        "cam1_predictions.f1.obj",
        "cam0_predictions.f2.obj",
        "cam0_truths.f1.obj",
    ] {
        assert!(tmp.path().join(name).exists(), "missing {}", name);
    }

    // first-seen channel color assignment: cam0 red, cam1 green
    assert_eq!(
        stats.channels,
        vec![
            ("cam0".to_string(), "red".to_string()),
            ("cam1".to_string(), "green".to_string()),
        ]
    );
    let cam0 = fs::read_to_string(tmp.path().join("cam0_predictions.f1.obj")).unwrap();
    let cam1 = fs::read_to_string(tmp.path().join("cam1_predictions.f1.obj")).unwrap();
    assert!(cam0.contains("usemtl mtl_red_0"));
    assert!(cam1.contains("usemtl mtl_green_0"));

    // two boxes in the same stream: second box starts at vertex 9
    assert!(cam0.contains("usemtl mtl_red_1"));
    assert!(cam0.contains("g box_1"));
    assert!(cam0.contains("f 9 10 11"));
}

#[test]
fn test_frame_filter_skips_without_counting() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let corners = ["0", "0", "0", "10", "10", "10"];
    let input = write_input(
        tmp.path(),
        &[
            record_line("cam0", 5, "prediction", corners),
            record_line("cam0", 99, "prediction", corners),
            record_line("cam0", 5, "prediction", corners),
        ],
    );

    let stats = ObjIo::export_file(&input, FrameRange::new(0, 10), tmp.path(), None)
        .expect("Export failed");
    assert_eq!(stats.boxes_written, 2);
    assert_eq!(stats.boxes_skipped, 1);
    assert_eq!(stats.files.len(), 1);

    // the skipped record opened no stream and advanced no counter
    assert!(!tmp.path().join("cam0_predictions.f99.obj").exists());
    let text = fs::read_to_string(tmp.path().join("cam0_predictions.f5.obj")).unwrap();
    assert!(text.contains("g box_0"));
    assert!(text.contains("g box_1"));
    assert!(!text.contains("g box_2"));
}

#[test]
fn test_malformed_line_aborts_keeping_earlier_output() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let corners = ["0", "0", "0", "10", "10", "10"];
    let input = write_input(
        tmp.path(),
        &[
            record_line("cam0", 1, "prediction", corners),
            "'cam0' 2 prediction not-enough-fields".to_string(),
            record_line("cam0", 3, "prediction", corners),
        ],
    );

    let err = ObjIo::export_file(&input, FrameRange::new(0, 100), tmp.path(), None).unwrap_err();
    assert!(err.to_string().contains("line 2"), "got: {}", err);

    // the first stream was already written; the third line never ran
    assert!(tmp.path().join("cam0_predictions.f1.obj").exists());
    assert!(!tmp.path().join("cam0_predictions.f3.obj").exists());
}

#[test]
fn test_more_than_seven_channels_is_an_error() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let corners = ["0", "0", "0", "10", "10", "10"];
    let lines: Vec<String> = (0..8)
        .map(|i| record_line(&format!("cam{}", i), 1, "prediction", corners))
        .collect();
    let input = write_input(tmp.path(), &lines);

    let err = ObjIo::export_file(&input, FrameRange::new(0, 100), tmp.path(), None).unwrap_err();
    assert!(err.to_string().contains("palette exhausted"), "got: {}", err);
}

#[test]
#[serial]
fn test_export_into_current_directory() {
    let tmp = TempFolder::new().expect("Failed to create temp folder");
    let corners = ["0", "0", "0", "10", "10", "10"];
    let input = write_input(tmp.path(), &[record_line("cam0", 1, "prediction", corners)]);

    let previous = env::current_dir().expect("Failed to get current dir");
    env::set_current_dir(tmp.path()).expect("Failed to change dir");

    let result = ObjIo::export_file(&input, FrameRange::new(0, 100), ".", None);

    env::set_current_dir(previous).expect("Failed to restore dir");

    let stats = result.expect("Export failed");
    assert_eq!(stats.files.len(), 1);
    assert!(tmp.path().join("cam0_predictions.f1.obj").exists());
}
