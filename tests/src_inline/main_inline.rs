use super::*;

#[test]
fn test_cli_defaults_to_opening_browser() {
    let cli = Cli::try_parse_from(["evalsummary"]).unwrap();
    assert!(!cli.no_open);
}

#[test]
fn test_cli_no_open_flag() {
    let cli = Cli::try_parse_from(["evalsummary", "--no-open"]).unwrap();
    assert!(cli.no_open);
}

#[test]
fn test_cli_rejects_unknown_argument() {
    assert!(Cli::try_parse_from(["evalsummary", "--out", "elsewhere"]).is_err());
}

#[test]
fn test_output_dir_is_fixed() {
    assert_eq!(OUTPUT_DIR, "evaluation_reports");
}
