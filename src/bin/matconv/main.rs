//! matconv CLI - classify and convert material records from the command line.

use std::collections::BTreeMap;
use std::env;
use std::path::Path;

use matconv::prelude::*;
use serde::Deserialize;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable overriding the log filter.
const LOG_ENV: &str = "MATCONV_LOG";

/// `convert` input: a bare request array, or requests plus a texture table.
#[derive(Deserialize)]
#[serde(untagged)]
enum ConvertInput {
    Batch {
        requests: Vec<ConversionRequest>,
        #[serde(default)]
        textures: BTreeMap<String, String>,
    },
    Requests(Vec<ConversionRequest>),
}

fn main() {
    let args: Vec<String> = env::args().collect();

    // Parse global flags
    let mut level = "info";
    let mut config_path: Option<&str> = None;
    let mut filtered_args: Vec<&str> = Vec::new();
    let mut iter = args[1..].iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-v" | "--verbose" => level = "debug",
            "-vv" | "--trace" => level = "trace",
            "-q" | "--quiet" => level = "error",
            "-c" | "--config" => match iter.next() {
                Some(path) => config_path = Some(path),
                None => {
                    eprintln!("Error: --config needs a file argument");
                    std::process::exit(1);
                }
            },
            "-V" | "--version" => {
                print_version();
                return;
            }
            _ => filtered_args.push(arg),
        }
    }

    init_logging(level);

    if filtered_args.is_empty() {
        print_help();
        return;
    }

    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let result = match filtered_args[0] {
        "convert" | "c" => {
            if filtered_args.len() < 2 {
                eprintln!("Error: missing file argument");
                eprintln!("Usage: matconv-cli convert <requests.json>");
                std::process::exit(1);
            }
            cmd_convert(filtered_args[1], config)
        }
        "detect" | "d" => {
            if filtered_args.len() < 2 {
                eprintln!("Error: missing material name");
                eprintln!("Usage: matconv-cli detect <name> [shader_ref]");
                std::process::exit(1);
            }
            cmd_detect(filtered_args[1], filtered_args.get(2).copied(), config)
        }
        "placeholder" | "p" => {
            if filtered_args.len() < 2 {
                eprintln!("Error: missing material name");
                eprintln!("Usage: matconv-cli placeholder <name>");
                std::process::exit(1);
            }
            cmd_placeholder(filtered_args[1], config)
        }
        "summary" | "s" => cmd_summary(config),
        "help" | "h" | "-h" | "--help" => {
            print_help();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!();
            print_help();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

fn load_config(path: Option<&str>) -> Result<Config> {
    match path {
        Some(p) => Config::load(p),
        None => Ok(Config::default()),
    }
}

fn print_version() {
    println!(
        "matconv-cli {} (built {} {})",
        env!("CARGO_PKG_VERSION"),
        env!("MATCONV_BUILD_DATE"),
        env!("MATCONV_BUILD_TIME"),
    );
}

fn print_help() {
    println!("matconv - material shader classification and property mapping");
    println!();
    println!("USAGE:");
    println!("    matconv-cli [OPTIONS] <COMMAND> [ARGS]");
    println!();
    println!("COMMANDS:");
    println!("    c, convert     <file.json>           Convert requests, print mapped materials as JSON");
    println!("    d, detect      <name> [shader_ref]   Classify a material name");
    println!("    p, placeholder <name>                Synthesize a placeholder material");
    println!("    s, summary                           Show rule table sizes");
    println!("    h, help                              Show this help");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <file>  Load engine settings from JSON");
    println!("    -v, --verbose        Show debug output");
    println!("    -vv, --trace         Show trace output (very verbose)");
    println!("    -q, --quiet          Only show errors");
    println!("    -V, --version        Show version and build date");
    println!();
    println!("ENVIRONMENT:");
    println!("    {}    Log filter, overrides -v/-q (e.g. matconv=debug)", LOG_ENV);
    println!();
    println!("EXAMPLES:");
    println!("    matconv-cli detect Crystal_Blue_01");
    println!("    matconv-cli detect Rock_01 0730dae39bc73f34796280af9875ce14");
    println!("    matconv-cli -v convert materials.json > mapped.json");
}

fn cmd_convert(path: &str, config: Config) -> Result<()> {
    if !Path::new(path).exists() {
        return Err(Error::FileNotFound(path.into()));
    }
    let text = std::fs::read_to_string(path)?;
    let (requests, textures) = match serde_json::from_str::<ConvertInput>(&text)? {
        ConvertInput::Batch { requests, textures } => (requests, textures),
        ConvertInput::Requests(requests) => (requests, BTreeMap::new()),
    };
    if requests.is_empty() {
        return Err(Error::other(format!("no conversion requests in {}", path)));
    }
    tracing::info!(path, requests = requests.len(), textures = textures.len(), "converting");

    let converter = Converter::with_config(config)?;
    let results = converter.convert_batch(&requests, &textures);
    let materials: Vec<&MappedMaterial> = results.iter().map(|c| &c.material).collect();
    println!("{}", serde_json::to_string_pretty(&materials)?);

    let stats = converter.stats();
    eprintln!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

fn cmd_detect(name: &str, shader_ref: Option<&str>, config: Config) -> Result<()> {
    let rules = RuleTable::with_config(&config)?;
    let detector = Detector::with_config(&rules, &config);
    let record = MaterialRecord::new(name, shader_ref.unwrap_or_default());
    let detection = detector.detect(&record);

    println!("Material: {}", name);
    println!("Kind:     {} ({})", detection.kind, detection.kind.shader_file());
    println!("Matched:  {}", detection.matched);
    println!("Tier:     {:?}", detection.tier);
    let board = detector.score_record(&record);
    if !board.is_empty() {
        println!("Scores:");
        for (kind, score) in board.iter().filter(|(_, s)| *s > 0) {
            println!("  {:<13} {}", kind.name(), score);
        }
    }
    Ok(())
}

fn cmd_placeholder(name: &str, config: Config) -> Result<()> {
    let rules = RuleTable::with_config(&config)?;
    let material = PlaceholderSynthesizer::with_config(&rules, &config).synthesize(name);
    println!("{}", serde_json::to_string_pretty(&material)?);
    Ok(())
}

fn cmd_summary(config: Config) -> Result<()> {
    let summary = RuleTable::with_config(&config)?.summary();
    println!("Identifiers:          {}", summary.identifiers);
    for (kind, count) in &summary.identifiers_per_kind {
        println!("  {:<18} {}", kind.name(), count);
    }
    println!("Name rules:           {}", summary.name_rules);
    println!("Signatures:           {}", summary.signatures);
    println!("Alpha-fix properties: {}", summary.alpha_fix_properties);
    println!("Boolean properties:   {}", summary.boolean_properties);
    Ok(())
}
