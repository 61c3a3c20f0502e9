use assert_cmd::{crate_name, Command};
use std::io::Write;
use svgclip::cli::{run, Config};
use tempfile::NamedTempFile;

#[test]
fn test_cmdline_help() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let output = String::from_utf8(cmd.arg("-h").assert().success().get_output().stdout.clone())
        .expect("non-UTF8");
    assert!(output.contains("Usage"));
    assert!(output.contains("--quality"));
}

#[test]
fn test_cmdline_stdin() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.write_stdin("M 10 10 L 90 10 L 90 90 L 10 90 Z")
        .assert()
        .success()
        .stdout(
            "clip-path: path('M 10 10 L 90 10 L 90 90 L 10 90 Z');\n\
             clip-path: polygon(0% 0%, 100% 0%, 100% 100%, 0% 100%, 0% 0%);\n",
        );
}

#[test]
fn test_cmdline_partial_failure() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let assert = cmd.write_stdin("M10,10Z").assert().success();
    let output = assert.get_output();
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "clip-path: path('M10,10Z');\n"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("insufficient points"));
}

#[test]
fn test_cmdline_failure() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.write_stdin("1 2 3").assert().failure();

    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.args(["--quality", "extreme"]).assert().failure().code(2);
}

#[test]
fn test_cmdline_config() {
    let config = Config::from_cmdline(&format!("{} --help", crate_name!()));
    assert!(config.is_err());

    let mut tmpfile = NamedTempFile::new().expect("could not create tmpfile");
    write!(tmpfile, "M0 0 Q 50 100 100 0 Z").expect("tmpfile write failed");
    let outfile = NamedTempFile::new().expect("could not create outfile");
    let config = Config::from_cmdline(&format!(
        "{} -q low -f polygon {} -o {}",
        crate_name!(),
        tmpfile.path().to_str().unwrap(),
        outfile.path().to_str().unwrap()
    ))
    .expect("cmdline should be valid");
    run(config).expect("run failed");
    assert_eq!(
        std::fs::read_to_string(outfile.path()).unwrap(),
        "clip-path: polygon(0% 0%, 25% 75%, 50% 100%, 75% 75%, 100% 0%, 0% 0%);\n"
    );

    // Refuse to overwrite the input
    let path = tmpfile.path().to_str().unwrap();
    assert!(Config::from_cmdline(&format!("{} {path} -o {path}", crate_name!())).is_err());
}

#[test]
fn test_cmdline_svg() {
    let mut tmpfile = NamedTempFile::new().expect("could not create tmpfile");
    write!(
        tmpfile,
        r#"<svg><path d="M0 0 H 4 V 4 Z"/><path d="M0 0 L 1 1"/></svg>"#
    )
    .expect("tmpfile write failed");
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let assert = cmd
        .arg("--svg")
        .arg(tmpfile.path())
        .args(["--format", "polygon"])
        .assert()
        .success();
    let output = assert.get_output();
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "clip-path: polygon(0% 0%, 100% 0%, 100% 100%, 0% 0%);\n"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("path 2: polygon conversion failed"));
}
