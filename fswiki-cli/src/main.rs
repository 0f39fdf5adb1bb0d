// Command-line interface for fswiki-fmt
//
// This binary formats FreeStyleWiki files into their canonical layout, and can dump the parsed
// event stream for debugging the parser.
//
// Usage:
//  fswikifmt [<input>] [-w | -o <file>]         - Format a file, or stdin (default)
//  fswikifmt format [<input>] [-w | -o <file>]  - Same as above (explicit)
//  fswikifmt inspect [<input>] [<transform>]     - Dump the event stream (defaults to "events-treeviz")
//  fswikifmt --list-formats                      - List registered formats
//
// An input of "-" (or none at all) reads stdin. Output goes to stdout unless -w rewrites the input
// file in place or -o names a file. The whole input is read before anything is written, so -w is
// safe on the file being read.
//
// Table layout comes from the configuration (embedded defaults, then ./fswiki.toml, then
// --config <path>) and can be overridden per run with --table-align / --table-space.
//
// Extra Parameters:
//
// Format parameters can also be passed using --extra-<parameter-name> <value>, as in
//  fswikifmt page.wiki --extra-table-align left --extra-table-space

mod transforms;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use fswiki_config::{ConfigError, FswikiConfig, Loader, LOCAL_CONFIG_FILE};
use fswiki_fmt::formats::fswiki::parser::parse_reader;
use fswiki_fmt::formats::fswiki::rules_with_options;
use fswiki_fmt::ir::events::Event;
use fswiki_fmt::{format_reader, FormatError, FormatRegistry, FormattingRules};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["format", "inspect", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

/// Puts `format` in front of the arguments when no subcommand was named.
fn inject_default_subcommand(args: &[String]) -> Vec<String> {
    let mut injected = Vec::with_capacity(args.len() + 1);
    injected.extend(args.iter().take(1).cloned());
    injected.push("format".to_string());
    injected.extend(args.iter().skip(1).cloned());
    injected
}

fn names_subcommand(args: &[String]) -> bool {
    args.iter()
        .skip(1)
        .any(|arg| SUBCOMMANDS.contains(&arg.as_str()))
}

fn build_cli() -> Command {
    Command::new("fswikifmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Formatter for FreeStyleWiki markup")
        .long_about(
            "fswikifmt rewrites FreeStyleWiki pages into one canonical layout:\n\
            one blank line between blocks, one space after heading and list markers,\n\
            and tables padded into aligned columns.\n\n\
            Commands:\n  \
            - format:  Format a page (default command)\n  \
            - inspect: View the parsed event stream\n\n\
            Examples:\n  \
            fswikifmt page.wiki                      # Formatted page on stdout\n  \
            fswikifmt -w page.wiki                   # Rewrite the page in place\n  \
            cat page.wiki | fswikifmt                # Read stdin\n  \
            fswikifmt page.wiki --table-align left   # Left-aligned table cells\n  \
            fswikifmt inspect page.wiki events-json  # Parsed events as JSON",
        )
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List registered formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a fswiki.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("table-align")
                .long("table-align")
                .value_name("ALIGN")
                .help("Align table cells to the left or right of their column")
                .value_parser(["left", "right"])
                .global(true),
        )
        .arg(
            Arg::new("table-space")
                .long("table-space")
                .help("Put a space after every non-final table cell")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr (RUST_LOG takes precedence)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("format")
                .about("Format a FreeStyleWiki page (default command)")
                .long_about(
                    "Parse the page and write it back in canonical form.\n\n\
                    Output goes to stdout unless --write or --output is given.\n\n\
                    Examples:\n  \
                    fswikifmt format page.wiki              # Format to stdout\n  \
                    fswikifmt format -w page.wiki           # Rewrite in place\n  \
                    fswikifmt format page.wiki -o out.wiki  # Write to another file",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path ('-' or nothing reads stdin)")
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("write")
                        .long("write")
                        .short('w')
                        .help("Write the result back to the input file instead of stdout")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("output"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect the parsed event stream of a page")
                .long_about(
                    "View the flat event stream the parser produces.\n\n\
                    Transforms:\n  \
                    - events-treeviz: Indented tree visualization (default)\n  \
                    - events-json:    The raw stream as JSON\n\n\
                    Examples:\n  \
                    fswikifmt inspect page.wiki              # Tree visualization\n  \
                    fswikifmt inspect page.wiki events-json  # JSON",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path ('-' or nothing reads stdin)")
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'events-treeviz'")
                        .index(2)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if names_subcommand(&cleaned_args) {
                e.exit();
            }
            // Something like `fswikifmt -w page.wiki`: retry as the format command
            match cli.try_get_matches_from(inject_default_subcommand(&cleaned_args)) {
                Ok(m) => m,
                Err(_) => e.exit(),
            }
        }
    };

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let input = sub_matches.get_one::<String>("input").map(|s| s.as_str());
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(input, transform, &extra_params);
        }
        Some(("format", sub_matches)) => {
            let config = load_cli_config(&matches);
            let rules = formatting_rules(&config, &extra_params);
            let input = sub_matches.get_one::<String>("input").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let write = sub_matches.get_flag("write");
            handle_format_command(input, write, output, &rules);
        }
        None => {
            let config = load_cli_config(&matches);
            let rules = formatting_rules(&config, &extra_params);
            handle_format_command(None, false, None, &rules);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries the formatted page, so logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn formatting_rules(config: &FswikiConfig, extra_params: &HashMap<String, String>) -> FormattingRules {
    rules_with_options(config.formatting_rules(), extra_params).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

/// Handle the format command
fn handle_format_command(
    input: Option<&str>,
    write: bool,
    output: Option<&str>,
    rules: &FormattingRules,
) {
    let path = input.filter(|path| *path != "-");
    if write && path.is_none() {
        eprintln!("Error: --write needs an input file; stdin cannot be rewritten");
        std::process::exit(1);
    }

    debug!(input = path.unwrap_or("<stdin>"), ?rules, "formatting");
    let formatted = match path {
        Some(path) => open_input(path).and_then(|reader| format_reader(reader, rules)),
        None => format_reader(io::stdin().lock(), rules),
    }
    .unwrap_or_else(|e| {
        eprintln!("Error reading '{}': {e}", path.unwrap_or("<stdin>"));
        std::process::exit(1);
    });

    let target = if write { path } else { output };
    match target {
        Some(target) => {
            fs::write(target, formatted).unwrap_or_else(|e| {
                eprintln!("Error writing file '{target}': {e}");
                std::process::exit(1);
            });
            info!(file = target, "wrote formatted page");
        }
        None => print!("{formatted}"),
    }
}

/// Handle the inspect command
fn handle_inspect_command(
    input: Option<&str>,
    transform: &str,
    extra_params: &HashMap<String, String>,
) {
    let path = input.filter(|path| *path != "-");
    let events = read_events(path).unwrap_or_else(|e| {
        eprintln!("Error reading '{}': {e}", path.unwrap_or("<stdin>"));
        std::process::exit(1);
    });
    let output =
        transforms::execute_transform(&events, transform, extra_params).unwrap_or_else(|e| {
            eprintln!("Execution error: {e}");
            std::process::exit(1);
        });
    print!("{output}");
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    let registry = FormatRegistry::default();
    for name in registry.list_formats() {
        let description = registry
            .get(&name)
            .map(|format| format.description().to_string())
            .unwrap_or_default();
        println!("  {name:<16}{description}");
    }
}

fn open_input(path: &str) -> Result<BufReader<File>, FormatError> {
    Ok(BufReader::new(File::open(path)?))
}

fn read_events(path: Option<&str>) -> Result<Vec<Event>, FormatError> {
    match path {
        Some(path) => parse_reader(open_input(path)?),
        None => parse_reader(io::stdin().lock()),
    }
}

fn load_cli_config(matches: &ArgMatches) -> FswikiConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = matches.get_one::<String>("config") {
        loader.with_file(path)
    } else {
        loader
    };

    apply_table_flags(loader, matches)
        .and_then(Loader::build)
        .unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        })
}

/// `--table-align` / `--table-space` go on top of every configuration file.
fn apply_table_flags(mut loader: Loader, matches: &ArgMatches) -> Result<Loader, ConfigError> {
    if let Some(align) = matches.get_one::<String>("table-align") {
        loader = loader.set_override("formatting.table.align", align.as_str())?;
    }
    if matches.get_flag("table-space") {
        loader = loader.set_override("formatting.table.insert_trailing_space", true)?;
    }
    Ok(loader)
}
