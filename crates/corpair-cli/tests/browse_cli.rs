mod common;
use common::TestFixture;
use std::fs;

fn built_fixture(pairs: &[&str]) -> TestFixture {
    let fixture = TestFixture::new();
    for base in pairs {
        fixture.write_sample_pair(base);
    }
    assert!(fixture.build().status.success());
    fixture
}

#[test]
fn test_browse_quits_on_q() {
    let fixture = built_fixture(&["a"]);

    let output = fixture
        .command()
        .arg("browse")
        .write_stdin("q\n")
        .output()
        .expect("Failed to run corpair browse");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Entry 1/1"), "{stdout}");
    assert!(stdout.contains("[n]ext, [p]rev"), "{stdout}");
}

#[test]
fn test_browse_next_wraps_around() {
    let fixture = built_fixture(&["a"]);

    let output = fixture
        .command()
        .arg("browse")
        .write_stdin("n\nq\n")
        .output()
        .expect("Failed to run corpair browse");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Entry 1/1").count(), 2, "{stdout}");
}

#[test]
fn test_browse_out_of_range_jump_keeps_position() {
    let fixture = built_fixture(&["a", "b", "c"]);

    let output = fixture
        .command()
        .arg("browse")
        .write_stdin("5\nq\n")
        .output()
        .expect("Failed to run corpair browse");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("error: index 5 out of range (valid: 1-3)"),
        "{stdout}"
    );
    assert_eq!(stdout.matches("Entry 1/3").count(), 2, "{stdout}");
}

#[test]
fn test_browse_jump_moves_cursor() {
    let fixture = built_fixture(&["a", "b", "c"]);

    let output = fixture
        .command()
        .arg("browse")
        .write_stdin("3\nq\n")
        .output()
        .expect("Failed to run corpair browse");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Entry 3/3"), "{stdout}");
}

#[test]
fn test_browse_end_of_input_exits_cleanly() {
    let fixture = built_fixture(&["a", "b"]);

    let output = fixture
        .command()
        .arg("browse")
        .write_stdin("")
        .output()
        .expect("Failed to run corpair browse");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Entry 1/2").count(), 1, "{stdout}");
}

#[test]
fn test_browse_inlined_regions_view() {
    let fixture = built_fixture(&["a"]);

    let output = fixture
        .command()
        .arg("browse")
        .write_stdin("i\n\nq\n")
        .output()
        .expect("Failed to run corpair browse");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Inlined regions in: a.c"), "{stdout}");
    assert!(stdout.contains("Press Enter to continue..."), "{stdout}");
}

#[test]
fn test_browse_empty_dataset_exits_with_notice() {
    let fixture = TestFixture::new();
    fs::create_dir_all(fixture.root().join("dataset")).expect("Failed to create dataset dir");
    fs::write(fixture.dataset_path("json"), "[]").expect("Failed to write dataset");

    let output = fixture
        .command()
        .arg("browse")
        .write_stdin("n\n")
        .output()
        .expect("Failed to run corpair browse");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Dataset is empty; nothing to browse."),
        "{stdout}"
    );
}
