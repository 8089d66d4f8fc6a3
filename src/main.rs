use std::fs;
use std::path::Path;

use clap::Parser;

use drs_guard::attributes::SidecarReader;
use drs_guard::checker::{run_checks, setup_vocabulary};
use drs_guard::cli::{CheckArgs, Cli, Commands, InitArgs};
use drs_guard::config::Config;
use drs_guard::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use drs_guard::scanner::StructuredDataset;
use drs_guard::vocabulary::JsonVocabularyStore;
use drs_guard::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> drs_guard::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);

    // 3. Enumerate the dataset
    let dataset = StructuredDataset::discover(
        &args.root,
        &config.dataset.extension,
        &config.dataset.exclude,
    )?;

    // 4. Load controlled vocabularies (fatal on failure, before any file is
    //    processed)
    let store = JsonVocabularyStore::new(&config.vocabulary.dir);
    let vocab = setup_vocabulary(&store, &config.vocabulary.authority)?;

    // 5. Run the filename and directory-structure checks
    let report = run_checks(&dataset, &vocab, SidecarReader, &config.dataset.mip_era)?;

    // 6. Format output
    let output = match args.format {
        OutputFormat::Text => TextFormatter.format(&report)?,
        OutputFormat::Json => JsonFormatter.format(&report)?,
    };

    // 7. Write output
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 8. Determine exit code
    if report.has_failures() {
        Ok(EXIT_VIOLATIONS_FOUND)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> drs_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    config_path.map_or_else(Config::load, Config::load_from_path)
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(dir) = &args.vocab_dir {
        config.vocabulary.dir.clone_from(dir);
    }

    if let Some(authority) = &args.authority {
        config.vocabulary.authority.clone_from(authority);
    }

    if let Some(mip_era) = &args.mip_era {
        config.dataset.mip_era.clone_from(mip_era);
    }

    if let Some(ext) = &args.ext {
        config.dataset.extension.clone_from(ext);
    }

    config.dataset.exclude.extend(args.exclude.iter().cloned());
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> drs_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> drs_guard::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(drs_guard::DrsGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    let template = generate_config_template();
    fs::write(output_path, template)?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn generate_config_template() -> String {
    r#"# drs-guard configuration file

[dataset]
# Extension of recognized data files
extension = "nc"

# Literal first path segment of the directory template
mip_era = "CMIP6"

# Glob patterns excluded from enumeration
exclude = [
    "**/tmp/**",
]

[vocabulary]
# Root directory of the controlled-vocabulary store; one JSON term list per
# collection at <dir>/<authority>/<collection>.json
dir = "cv"

# Authority namespace within the store
authority = "wcrp"
"#
    .to_string()
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
