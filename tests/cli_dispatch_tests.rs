use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_petviz")
}

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("datasets")
        .join(name)
}

fn unique_temp_dir(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("petviz-{name}-{stamp}"));
    fs::create_dir_all(dir.join("datasets")).expect("temp dir should be created");
    dir
}

/// Working directory laid out like a checkout: `datasets/` with the stock file names.
fn workspace(name: &str, regions_fixture: &str) -> PathBuf {
    let dir = unique_temp_dir(name);
    let datasets = dir.join("datasets");
    for (fixture, target) in [
        ("pet_ownership.csv", "2024_pet_ownership_full.csv"),
        (regions_fixture, "data-VJH4o.csv"),
        ("breeds.csv", "dog_breeds_2015_2024.csv"),
    ] {
        fs::copy(fixture_path(fixture), datasets.join(target)).expect("fixture should be copied");
    }
    dir
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("petviz should run")
}

#[test]
fn unknown_command_prints_usage() {
    let output = Command::new(bin())
        .arg("plot")
        .output()
        .expect("petviz should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: petviz"));
}

#[test]
fn map_command_writes_page_with_comparison_overlay() {
    let dir = workspace("map", "regions.csv");
    let output = run_in(&dir, &["map"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Visualization 2 saved to"));
    assert!(stdout.contains("with State Comparison Mode"));

    let page = fs::read_to_string(dir.join("viz2_regional_map.html")).expect("map written");
    assert!(page.contains("petvizComparison"));
    assert!(page.contains("comparison-panel"));
    assert!(!dir.join("viz1_pet_ownership.html").exists());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn failed_step_writes_nothing_and_exits_non_zero() {
    let dir = workspace("bad-map", "regions_bad_percent.csv");
    let output = run_in(&dir, &["map"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to generate visualization 2"));
    assert!(stderr.contains("about a fifth"));
    assert!(!dir.join("viz2_regional_map.html").exists());
    assert!(!dir.join("viz2_regional_map.html.tmp").exists());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn all_command_generates_every_visualization() {
    let dir = workspace("all", "regions.csv");
    let output = run_in(&dir, &["all"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in [
        "1. Generating Pet Ownership Bar Chart...",
        "2. Generating Regional Devotion Map...",
        "3. Generating Breed Rankings Bump Chart...",
        "✓ Visualization 3 created successfully",
        "All visualizations generated successfully!",
    ] {
        assert!(stdout.contains(line), "missing '{line}' in:\n{stdout}");
    }
    for file in [
        "viz1_pet_ownership.html",
        "viz2_regional_map.html",
        "viz3_bump_chart.html",
    ] {
        assert!(dir.join(file).exists(), "{file} not written");
    }

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn all_command_stops_at_first_failing_step() {
    let dir = workspace("all-fail", "regions_bad_percent.csv");
    let output = run_in(&dir, &["all"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Visualization 1 created successfully"));
    assert!(stdout.contains("✗ Error generating Visualization 2"));
    assert!(!stdout.contains("3. Generating"));
    assert!(!stdout.contains("All visualizations generated successfully!"));

    assert!(dir.join("viz1_pet_ownership.html").exists());
    assert!(!dir.join("viz2_regional_map.html").exists());
    assert!(!dir.join("viz3_bump_chart.html").exists());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn config_file_redirects_output() {
    let dir = workspace("config", "regions.csv");
    fs::write(dir.join("petviz.yaml"), "output_dir: site\n").expect("config should be written");
    let output = run_in(&dir, &["bump"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(dir.join("site").join("viz3_bump_chart.html").exists());
    assert!(!dir.join("viz3_bump_chart.html").exists());

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn step_binary_matches_subcommand() {
    let dir = workspace("step-bin", "regions.csv");
    let output = Command::new(env!("CARGO_BIN_EXE_viz1_pet_ownership"))
        .current_dir(&dir)
        .output()
        .expect("step binary should run");

    assert_eq!(output.status.code(), Some(0));
    let page = fs::read_to_string(dir.join("viz1_pet_ownership.html")).expect("chart written");
    assert!(page.contains("Small mammals"));
    assert!(!page.contains("gerbils"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn validate_command_reports_dataset_problems() {
    let good = workspace("validate-ok", "regions.csv");
    let output = run_in(&good, &["validate"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("validation passed (0 warning(s))"));
    assert!(stdout.contains("[info] "));
    assert!(stdout.contains("'Boxer' ranked in fewer than 3 years"));

    let bad = workspace("validate-bad", "regions_duplicate_id.csv");
    let output = run_in(&bad, &["validate"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("duplicate region identifier 'CA'"));
    assert!(stderr.contains("validation failed"));

    let _ = fs::remove_dir_all(good);
    let _ = fs::remove_dir_all(bad);
}
