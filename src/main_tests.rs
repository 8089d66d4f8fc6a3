use super::*;

use drs_guard::cli::CheckArgs;
use drs_guard::output::OutputFormat;

fn check_args(root: &str) -> CheckArgs {
    CheckArgs {
        root: root.into(),
        config: None,
        vocab_dir: None,
        authority: None,
        mip_era: None,
        ext: None,
        exclude: Vec::new(),
        format: OutputFormat::Text,
        output: None,
    }
}

#[test]
fn cli_overrides_replace_config_values() {
    let mut config = Config::default();
    let mut args = check_args(".");
    args.vocab_dir = Some("vocab".into());
    args.mip_era = Some("cmip6".to_string());
    args.ext = Some("nc4".to_string());
    args.exclude.push("**/tmp/**".to_string());

    apply_cli_overrides(&mut config, &args);

    assert_eq!(config.vocabulary.dir, std::path::PathBuf::from("vocab"));
    assert_eq!(config.dataset.mip_era, "cmip6");
    assert_eq!(config.dataset.extension, "nc4");
    assert_eq!(config.dataset.exclude, vec!["**/tmp/**".to_string()]);
}

#[test]
fn no_config_skips_file_loading() {
    let config = load_config(Some(std::path::Path::new("does-not-exist.toml")), true).unwrap();
    assert_eq!(config.dataset.extension, "nc");
}

#[test]
fn config_template_round_trips_through_the_parser() {
    let template = generate_config_template();
    let config: Config = toml::from_str(&template).unwrap();

    assert_eq!(config.dataset.extension, "nc");
    assert_eq!(config.dataset.mip_era, "CMIP6");
    assert_eq!(config.vocabulary.authority, "wcrp");
}
