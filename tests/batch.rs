mod common;

use common::synthetic_image::{write_checkerboard, write_solid_rgb};
use gray_binarizer::batch::{list_images, process_directory};
use gray_binarizer::{AdaptiveOptions, Error, LoadError, ThresholdMethod};
use std::fs;
use tempfile::tempdir;

#[test]
fn one_bad_file_does_not_stop_the_batch() {
    let _ = env_logger::builder().is_test(true).try_init();
    let input = tempdir().unwrap();
    write_checkerboard(&input.path().join("a_board.png"), 24, 24, 6);
    fs::write(input.path().join("b_broken.png"), b"not an image").unwrap();
    write_solid_rgb(&input.path().join("c_white.bmp"), 5, 5, [255, 255, 255]);
    fs::write(input.path().join("notes.txt"), b"ignored").unwrap();

    let output = tempdir().unwrap();
    let out_dir = output.path().join("out");
    let report =
        process_directory(input.path(), &out_dir, &ThresholdMethod::default()).unwrap();

    assert_eq!(report.total(), 3);
    assert_eq!(report.processed.len(), 2);
    assert_eq!(report.failures.len(), 1);

    let (failed, err) = &report.failures[0];
    assert!(failed.ends_with("b_broken.png"));
    assert!(matches!(err, Error::Load(LoadError::Decode { .. })));

    for name in [
        "a_board_grayscale.png",
        "a_board_binary.png",
        "c_white_grayscale.bmp",
        "c_white_binary.bmp",
    ] {
        assert!(out_dir.join(name).is_file(), "missing {name}");
    }

    let white = &report.processed[1];
    assert!(white.input.ends_with("c_white.bmp"));
    assert_eq!(white.output.stats.binary_white_percentage, Some(100.0));
}

#[test]
fn files_are_processed_in_name_order() {
    let input = tempdir().unwrap();
    for name in ["z.png", "m.png", "a.png"] {
        write_checkerboard(&input.path().join(name), 8, 8, 2);
    }
    let files = list_images(input.path()).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["a.png", "m.png", "z.png"]);
}

#[test]
fn adaptive_errors_are_per_file() {
    let input = tempdir().unwrap();
    write_checkerboard(&input.path().join("board.png"), 8, 8, 2);
    let output = tempdir().unwrap();

    let method = ThresholdMethod::Adaptive(AdaptiveOptions::new(4, 2.0));
    let report = process_directory(input.path(), output.path(), &method).unwrap();
    assert!(report.processed.is_empty());
    assert!(matches!(
        report.failures[0].1,
        Error::Processing(gray_binarizer::ProcessingError::InvalidBlockSize(4))
    ));
}

#[test]
fn missing_input_directory_is_reported() {
    let dir = tempdir().unwrap();
    let err = process_directory(
        &dir.path().join("absent"),
        dir.path(),
        &ThresholdMethod::default(),
    )
    .unwrap_err();
    assert!(matches!(err, LoadError::NotFound(_)));
}
