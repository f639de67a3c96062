//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    root: PathBuf,
    generated_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let generated_dir = root.join("generated");

        fs::create_dir_all(&generated_dir).expect("Failed to create generated dir");

        Self {
            _temp_dir: temp_dir,
            root,
            generated_dir,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn generated_dir(&self) -> &Path {
        &self.generated_dir
    }

    pub fn dataset_path(&self, extension: &str) -> PathBuf {
        self.root.join(format!("dataset/c_programs.{extension}"))
    }

    /// Command with the working directory inside the fixture, so relative
    /// defaults like `generated` and `dataset/` resolve into the temp dir.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("corpair").expect("Failed to find corpair binary");
        cmd.current_dir(&self.root);
        cmd
    }

    pub fn write_file(&self, name: &str, content: &str) {
        fs::write(self.generated_dir.join(name), content).expect("Failed to write artifact");
    }

    /// Write the standard sample pair under `<base>.c` / `<base>_noinline.c`.
    pub fn write_sample_pair(&self, base: &str) {
        self.write_file(&format!("{base}.c"), &sample_inline_program());
        self.write_file(&format!("{base}_noinline.c"), &sample_noinline_program());
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.root.join("corpair.toml"), content).expect("Failed to write config");
    }

    /// Run `corpair build` with the standard locations.
    pub fn build(&self) -> std::process::Output {
        self.command()
            .args(["build", "--input-dir", "generated", "--output", "dataset/c_programs"])
            .output()
            .expect("Failed to run corpair build")
    }

    pub fn read_dataset_json(&self) -> serde_json::Value {
        let text =
            fs::read_to_string(self.dataset_path("json")).expect("Failed to read dataset JSON");
        serde_json::from_str(&text).expect("Dataset JSON did not parse")
    }
}

/// Inlined sample: two inline-expanded operators, one variant comment,
/// three lines longer than its non-inlined counterpart.
pub fn sample_inline_program() -> String {
    [
        "#include <stdio.h>",
        "#include \"ops.h\"",
        "",
        "int main(void) {",
        "    float a[4] = {1.0f, 2.0f, 3.0f, 4.0f};",
        "    float b[4] = {5.0f, 6.0f, 7.0f, 8.0f};",
        "    float t0[4];",
        "    /* INLINED */ /* variant 2 */",
        "    for (int i = 0; i < 4; i++) t0[i] = a[i] + b[i];",
        "",
        "    float t1[4];",
        "    /* INLINED */",
        "    for (int i = 0; i < 4; i++) t1[i] = t0[i] * a[i];",
        "    printf(\"%f\\n\", t1[0]);",
        "    return 0;",
        "}",
        "",
    ]
    .join("\n")
}

/// Non-inlined counterpart of [`sample_inline_program`].
pub fn sample_noinline_program() -> String {
    [
        "#include <stdio.h>",
        "#include \"ops.h\"",
        "",
        "int main(void) {",
        "    float a[4] = {1.0f, 2.0f, 3.0f, 4.0f};",
        "    float b[4] = {5.0f, 6.0f, 7.0f, 8.0f};",
        "    float t0[4];",
        "    op_add(a, b, t0, 4);",
        "    float t1[4];",
        "    op_mul(t0, a, t1, 4);",
        "    printf(\"%f\\n\", t1[0]);",
        "    return 0;",
        "}",
        "",
    ]
    .join("\n")
}
