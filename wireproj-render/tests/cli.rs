use std::fs;
use std::path::PathBuf;
use std::process::Command;

const EDGE: &str = r#"{
    "Model": { "VertexTable": [[0, 0, 0], [1, 1, 1]], "EdgeTable": [[0, 1]] },
    "Parameters": { "Resolution": 200, "XMin": -1, "XMax": 1, "YMin": -1, "YMax": 1 }
}"#;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("wireproj-cli-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn wireproj() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_wireproj"));
    command.env_remove("RUST_LOG");
    command
}

#[test]
fn default_paths_print_shape_then_success_line() {
    let dir = scratch_dir("defaults");
    fs::write(dir.join("input.json"), EDGE).unwrap();

    let output = wireproj().current_dir(&dir).output().unwrap();
    assert!(output.status.success());

    let expected = "\
Points:
  [0] (0.0000, 0.0000)
  [1] (0.8333, 0.8333)
Lines:
  [0] 0 -> 1
Image generated successfully: output.jpg
";
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);

    let image = image::open(dir.join("output.jpg")).unwrap();
    assert_eq!((image.width(), image.height()), (200, 200));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn explicit_paths_are_used() {
    let dir = scratch_dir("explicit");
    let input = dir.join("model.json");
    let output_path = dir.join("render.jpg");
    fs::write(&input, EDGE).unwrap();

    let output = wireproj()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output_path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with(&format!(
        "Image generated successfully: {}\n",
        output_path.display()
    )));
    assert!(output_path.is_file());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_input_fails_without_output() {
    let dir = scratch_dir("missing");

    let output = wireproj().current_dir(&dir).output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("load input"));
    assert!(!dir.join("output.jpg").exists());

    fs::remove_dir_all(&dir).ok();
}
