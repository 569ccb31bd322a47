use std::fs;
use std::process::{Command, Output};

fn flex(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_flex"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("FLEX_LOG")
        .output()
        .expect("failed to run flex")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn help_spellings_print_usage_and_succeed() {
    for spelling in ["--help", "-h", "-?"] {
        let output = flex(&[spelling]);

        assert!(output.status.success(), "{spelling} should exit 0");
        let text = stdout(&output);
        assert!(text.starts_with("Usage: flex [OPTIONS] [FILE]...\n"), "{text}");
        assert!(text.contains("Generates programs that perform pattern-matching on text\n"));
        for section in [
            "Table Compression:",
            "Debugging:",
            "Files:",
            "Scanner behavior:",
            "Generated code:",
            "Miscellaneous:",
        ] {
            assert!(text.contains(&format!("\n{section}\n")), "missing {section}");
        }
        assert!(text.contains("-o, --outfile=NAME"));
        assert!(text.contains("-?, -h, --help"));
        assert!(stderr(&output).is_empty());
    }
}

#[test]
fn help_after_other_arguments_still_wins() {
    let output = flex(&["-d", "scan.l", "--prefix", "--help"]);

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Usage: flex"));
}

#[test]
fn sections_appear_in_declaration_order() {
    let text = stdout(&flex(&["--help"]));

    let positions: Vec<usize> = ["Table Compression:", "Debugging:", "Files:", "Miscellaneous:"]
        .iter()
        .map(|section| text.find(section).expect("section present"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(text.find("--version").unwrap() > positions[3]);
}

#[test]
fn missing_option_value_is_an_error() {
    let output = flex(&["scan.l", "-o"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: option '--outfile' requires a value"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn version_flag_reports_package_version() {
    for spelling in ["--version", "-V"] {
        let output = flex(&[spelling]);

        assert!(output.status.success());
        assert_eq!(
            stdout(&output),
            format!("flex {}\n", env!("CARGO_PKG_VERSION"))
        );
    }
}

#[test]
fn input_files_are_accepted() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let scanner = dir.path().join("scan.l");
    fs::write(&scanner, "%%\n.|\\n ECHO;\n%%\n").expect("failed to write scanner");

    let output = flex(&[
        "-Cem",
        scanner.to_str().unwrap(),
        "-o",
        dir.path().join("scan.cpp").to_str().unwrap(),
        "-i",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(!stderr(&output).contains("Warning:"));
}

#[test]
fn no_input_files_warns_unless_nowarn() {
    let output = flex(&["-d"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("Warning: no input files given, reading standard input"));

    let output = flex(&["-d", "-w"]);
    assert!(output.status.success());
    assert!(!stderr(&output).contains("Warning:"));
}

#[test]
fn debug_log_includes_bindings_json() {
    let output = Command::new(env!("CARGO_BIN_EXE_flex"))
        .args(["-t", "scan.l"])
        .env("NO_COLOR", "1")
        .env("FLEX_LOG", "debug")
        .output()
        .expect("failed to run flex");

    assert!(output.status.success());
    assert!(stderr(&output).contains(r#"{"--stdout":null,"files":["scan.l"]}"#));
}

#[cfg(unix)]
#[test]
fn non_utf8_argument_is_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let output = Command::new(env!("CARGO_BIN_EXE_flex"))
        .arg("-t")
        .arg(OsStr::from_bytes(b"sc\xffan.l"))
        .env("NO_COLOR", "1")
        .env_remove("FLEX_LOG")
        .output()
        .expect("failed to run flex");

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Error: invalid UTF-8 in argument sc"), "{err}");
    assert!(stdout(&output).is_empty());
}
