use std::fs;

use tempfile::tempdir;

use glint_cli::{Args, run};

fn base_args(output: String) -> Args {
    Args {
        input: None,
        output,
        config: None,
        width: 1200.0,
        height: 800.0,
        margin: 40.0,
        seed: Some(7),
        count: 12,
        jitter_ticks: 0,
        query: String::new(),
        hide_small_changes: false,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_generated_catalog_to_svg() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("field.svg");

    let args = base_args(output_path.to_string_lossy().to_string());
    run(&args).expect("run should succeed on a generated catalog");

    let svg = fs::read_to_string(&output_path).expect("output file exists");
    assert!(svg.starts_with("<svg"));
    // Halo and body circle per bubble
    assert_eq!(svg.matches("<circle").count(), 24);
}

#[test]
fn e2e_items_file_to_svg() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let items_path = temp_dir.path().join("items.toml");
    let output_path = temp_dir.path().join("field.svg");

    fs::write(
        &items_path,
        r#"
[[items]]
id = "plush_pepe"
name = "Plush Pepe"
price = 1250.0
percent_change = 4.2
volume = 870.0
rarity = "legendary"

[[items]]
id = "berry_box"
name = "Berry Box"
price = 42.5
percent_change = -1.3
volume = 210.0
rarity = "common"
"#,
    )
    .expect("items file written");

    let mut args = base_args(output_path.to_string_lossy().to_string());
    args.input = Some(items_path.to_string_lossy().to_string());

    run(&args).expect("run should succeed on an items file");

    let svg = fs::read_to_string(&output_path).expect("output file exists");
    assert!(svg.contains("Plush Pepe"));
    assert!(svg.contains("Berry Box"));
}

#[test]
fn e2e_query_filters_items() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("field.svg");

    let mut args = base_args(output_path.to_string_lossy().to_string());
    args.query = "pepe".to_string();

    run(&args).expect("run should succeed with a query");

    let svg = fs::read_to_string(&output_path).expect("output file exists");
    assert!(svg.contains("Plush Pepe"));
    assert_eq!(svg.matches("<circle").count(), 2);
}

#[test]
fn e2e_degenerate_field_fails_cleanly() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("field.svg");

    let mut args = base_args(output_path.to_string_lossy().to_string());
    args.width = 0.0;

    assert!(run(&args).is_err());
    assert!(!output_path.exists());
}
