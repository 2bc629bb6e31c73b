use assert_cmd::Command;

mod common;
use common::write_category_images;

#[test]
fn runs() {
    let mut cmd = Command::cargo_bin("yoloprep").unwrap();
    cmd.assert().success();
}

#[test]
fn outputs_tool_name() {
    let mut cmd = Command::cargo_bin("yoloprep").unwrap();
    cmd.arg("-V");
    cmd.assert().success().stdout("yoloprep 0.3.0\n");
}

// Init subcommand tests

#[test]
fn init_creates_category_and_split_dirs() {
    let temp = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("yoloprep").unwrap();
    cmd.current_dir(temp.path());
    cmd.args(["init", "--categories", "cardboard,metal"]);
    cmd.assert().success();

    assert!(temp.path().join("dataset/cardboard").is_dir());
    assert!(temp.path().join("dataset/metal").is_dir());
    assert!(temp.path().join("yolo_dataset/train/images").is_dir());
    assert!(temp.path().join("yolo_dataset/test/labels").is_dir());
}

// Scan subcommand tests

#[test]
fn scan_reports_counts_and_missing_categories() {
    let temp = tempfile::tempdir().unwrap();
    write_category_images(&temp.path().join("dataset"), "cardboard", 3);

    let mut cmd = Command::cargo_bin("yoloprep").unwrap();
    cmd.current_dir(temp.path());
    cmd.args(["scan", "--categories", "cardboard,metal"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Total images: 3"))
        .stdout(predicates::str::contains("cardboard: 3 image(s)"))
        .stdout(predicates::str::contains("metal: 0 image(s) (directory missing)"));
}

#[test]
fn scan_json_output_format() {
    let temp = tempfile::tempdir().unwrap();
    write_category_images(&temp.path().join("dataset"), "cardboard", 2);

    let mut cmd = Command::cargo_bin("yoloprep").unwrap();
    cmd.current_dir(temp.path());
    cmd.args(["scan", "--categories", "cardboard", "--output", "json"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("\"total_images\": 2"))
        .stdout(predicates::str::contains("\"name\": \"cardboard\""));
}

#[test]
fn scan_rejects_duplicate_categories() {
    let temp = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("yoloprep").unwrap();
    cmd.current_dir(temp.path());
    cmd.args(["scan", "--categories", "metal,metal"]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("duplicate category"));
}

// Convert subcommand tests

#[test]
fn convert_writes_dataset_and_manifest() {
    let temp = tempfile::tempdir().unwrap();
    write_category_images(&temp.path().join("dataset"), "cardboard", 10);

    let mut cmd = Command::cargo_bin("yoloprep").unwrap();
    cmd.current_dir(temp.path());
    cmd.args(["convert", "--categories", "cardboard,glass"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains(
            "Converted 10 image(s) (train 7, val 2, test 1)",
        ))
        .stdout(predicates::str::contains("Verification passed"))
        .stdout(predicates::str::contains(
            "Manifest written to waste_classification.yaml",
        ));

    let manifest = std::fs::read_to_string(temp.path().join("waste_classification.yaml")).unwrap();
    assert!(manifest.contains("nc: 2"));
    assert!(manifest.contains("- cardboard"));
    assert!(manifest.contains("- glass"));
}

#[test]
fn convert_missing_source_fails() {
    let temp = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("yoloprep").unwrap();
    cmd.current_dir(temp.path());
    cmd.arg("convert");
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Source directory does not exist"));
}

#[test]
fn convert_rejects_out_of_range_fractions() {
    let temp = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("yoloprep").unwrap();
    cmd.current_dir(temp.path());
    cmd.args(["convert", "--train-size", "1.5"]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("SIZE must be between 0.0 and 1.0"));
}

#[test]
fn convert_rejects_fractions_summing_over_one() {
    let temp = tempfile::tempdir().unwrap();
    write_category_images(&temp.path().join("dataset"), "cardboard", 1);

    let mut cmd = Command::cargo_bin("yoloprep").unwrap();
    cmd.current_dir(temp.path());
    cmd.args(["convert", "--train-size", "0.8", "--val-size", "0.3"]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("must not exceed 1.0"));
}

// Verify subcommand tests

#[test]
fn verify_clean_tree_passes() {
    let temp = tempfile::tempdir().unwrap();
    write_category_images(&temp.path().join("dataset"), "cardboard", 5);

    let mut convert = Command::cargo_bin("yoloprep").unwrap();
    convert.current_dir(temp.path());
    convert.args(["convert", "--categories", "cardboard"]);
    convert.assert().success();

    let mut cmd = Command::cargo_bin("yoloprep").unwrap();
    cmd.current_dir(temp.path());
    cmd.arg("verify");
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Verification passed"));
}

#[test]
fn verify_reports_missing_split_dirs() {
    let temp = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("yoloprep").unwrap();
    cmd.current_dir(temp.path());
    cmd.arg("verify");
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("MissingSplitDirs"));
}

#[test]
fn verify_reports_count_mismatch() {
    let temp = tempfile::tempdir().unwrap();
    write_category_images(&temp.path().join("dataset"), "cardboard", 4);

    let mut convert = Command::cargo_bin("yoloprep").unwrap();
    convert.current_dir(temp.path());
    convert.args(["convert", "--categories", "cardboard"]);
    convert.assert().success();

    // Remove one label file to break the 1:1 invariant.
    let labels = temp.path().join("yolo_dataset/train/labels");
    let victim = std::fs::read_dir(&labels)
        .unwrap()
        .next()
        .expect("at least one label")
        .unwrap()
        .path();
    std::fs::remove_file(victim).unwrap();

    let mut cmd = Command::cargo_bin("yoloprep").unwrap();
    cmd.current_dir(temp.path());
    cmd.arg("verify");
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("CountMismatch"))
        .stdout(predicates::str::contains("ImageWithoutLabel"));
}

// Extract subcommand tests

#[test]
fn extract_rejects_non_zip_input() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("bogus.zip"), b"not a zip").unwrap();

    let mut cmd = Command::cargo_bin("yoloprep").unwrap();
    cmd.current_dir(temp.path());
    cmd.args(["extract", "bogus.zip"]);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Failed to read archive"));
}
