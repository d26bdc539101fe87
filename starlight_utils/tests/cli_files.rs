use std::io::Write;

use clap::Parser;
use starlight_utils::cli::{Cli, run};
use tempfile::NamedTempFile;

#[test]
fn strip_html_reads_file() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "<html>\n<body>\n<h1>Title</h1>\n\n<p>Body <em>text</em></p>\n</body>\n</html>").expect("write html");

    let path = file.path().to_str().expect("utf8 path").to_string();
    let cli = Cli::try_parse_from(["starlight", "strip-html", "--file", path.as_str()]).expect("valid args");
    let mut out = Vec::new();
    run(&cli.command, &mut "ignored".as_bytes(), &mut out).expect("strip-html runs");

    assert_eq!(String::from_utf8(out).expect("utf8"), "Title\nBody text\n");
}

#[test]
fn strip_html_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope.html");
    let cli = Cli::try_parse_from(["starlight", "strip-html", "--file", missing.to_str().expect("utf8 path")])
        .expect("valid args");
    let mut out = Vec::new();
    let err = run(&cli.command, &mut "".as_bytes(), &mut out).unwrap_err();
    assert!(format!("{err:#}").contains("nope.html"));
}
