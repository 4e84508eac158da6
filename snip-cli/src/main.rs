// Command-line interface for snip
//
// This binary is a thin host around the snip-engine library: it reads snippet
// definition files, lists them, expands single placeholder specs and renders
// whole snippets. All parsing and expansion lives in snip-engine; this crate
// only does I/O, argument handling and configuration.
//
// Usage:
//  snip list <file> [--language <lang>] [--json]                     - List snippets in a file
//  snip expand <spec> [--bind TOKEN=VALUE]... [--strict]             - Expand one placeholder spec
//  snip render <file> <trigger> [--language <lang>] [--bind ...]     - Render a whole snippet
//  snip filters                                                      - List available filters
//
// Configuration:
//
// `snip.toml` in the working directory is layered over the built-in defaults
// when present; `--config <path>` layers an explicit file on top.
//
// Logging:
//
// Engine diagnostics go to stderr through tracing at `warn` and above. Set
// SNIP_LOG (e.g. `SNIP_LOG=debug`) to change the level.

mod bindings;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use snip_config::{Loader, SnipConfig};
use snip_engine::{ExpansionContext, FilterRegistry, ParseReport, Snippet, SnippetIndex, Unresolved};
use std::fs;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SNIP_LOG";

fn build_cli() -> Command {
    Command::new("snip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and expanding snippet definitions")
        .long_about(
            "snip reads snippet definition files and expands their placeholders.\n\n\
            Commands:\n  \
            - list:    Show the snippets a definition file provides\n  \
            - expand:  Expand one placeholder spec against bindings\n  \
            - render:  Expand every chunk of one snippet\n  \
            - filters: Show the filters usable after '|'\n\n\
            Examples:\n  \
            snip list c.snippets                          # language, trigger, description\n  \
            snip expand 'some_func|camelize'              # SomeFunc\n  \
            snip expand '$1|functify|upper' -b 1=SomeFunc # SOME_FUNC\n  \
            snip render c.snippets gobj --language c -b 1=my_widget",
        )
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a snip.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("list")
                .about("List the snippets defined in a file")
                .long_about(
                    "Parse a snippet definition file and list its snippets.\n\n\
                    Blocks that fail to parse are reported on stderr and skipped;\n\
                    the remaining snippets are still listed.\n\n\
                    Output columns: language (* for global), trigger, description.",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the snippet definition file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(language_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the parsed snippets as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("expand")
                .about("Expand a placeholder spec")
                .long_about(
                    "Expand a single placeholder spec such as '$1 $2|functify|upper'.\n\n\
                    '$' followed by digits is replaced with its binding. '\\' escapes the\n\
                    next character. Each '|name' applies a filter, left to right.\n\n\
                    Examples:\n  \
                    snip expand '$1\\|$2' -b 1=a -b 2=b     # a|b\n  \
                    snip expand 'SomeFunc|functify|upper'  # SOME_FUNC",
                )
                .arg(
                    Arg::new("spec")
                        .help("Placeholder spec to expand")
                        .required(true)
                        .index(1)
                        .allow_hyphen_values(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(bind_arg())
                .arg(strict_arg()),
        )
        .subcommand(
            Command::new("render")
                .about("Render a whole snippet with its placeholders expanded")
                .arg(
                    Arg::new("path")
                        .help("Path to the snippet definition file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("trigger")
                        .help("Trigger of the snippet to render")
                        .required(true)
                        .index(2)
                        .value_hint(ValueHint::Other),
                )
                .arg(language_arg())
                .arg(bind_arg())
                .arg(strict_arg()),
        )
        .subcommand(Command::new("filters").about("List available filters"))
}

fn language_arg() -> Arg {
    Arg::new("language")
        .long("language")
        .short('l')
        .value_name("LANG")
        .help("Language scope (defaults to parser.default_language)")
        .value_hint(ValueHint::Other)
}

fn bind_arg() -> Arg {
    Arg::new("bind")
        .long("bind")
        .short('b')
        .value_name("TOKEN=VALUE")
        .help("Bind a token, e.g. -b 1=abcd or -b '$1=abcd' (repeatable)")
        .action(ArgAction::Append)
}

fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .help("Fail on tokens without a binding instead of passing them through")
        .action(ArgAction::SetTrue)
}

fn main() {
    init_logging();

    let matches = build_cli().get_matches();
    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("list", sub_matches)) => handle_list_command(sub_matches, &config),
        Some(("expand", sub_matches)) => handle_expand_command(sub_matches, &config),
        Some(("render", sub_matches)) => handle_render_command(sub_matches, &config),
        Some(("filters", _)) => handle_filters_command(),
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_cli_config(explicit_path: Option<&str>) -> SnipConfig {
    let loader = Loader::new().with_optional_file("snip.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Read and parse a definition file, reporting bad blocks as warnings.
fn load_definitions(path: &str, config: &SnipConfig) -> ParseReport {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let report = config.parser.parser().parse(&source);
    debug!(
        path = path,
        snippets = report.snippets.len(),
        errors = report.errors.len(),
        "loaded definitions"
    );
    for err in &report.errors {
        eprintln!("warning: {path}: {err}");
    }
    report
}

fn language_for<'a>(sub_matches: &'a ArgMatches, config: &'a SnipConfig) -> &'a str {
    sub_matches
        .get_one::<String>("language")
        .map(|s| s.as_str())
        .unwrap_or(&config.parser.default_language)
}

fn context_for(sub_matches: &ArgMatches, config: &SnipConfig) -> ExpansionContext {
    let policy = if sub_matches.get_flag("strict") {
        Unresolved::Strict
    } else {
        config.expansion.policy()
    };
    let mut ctx =
        ExpansionContext::with_registry(Arc::new(FilterRegistry::with_defaults())).with_policy(policy);

    let raw = sub_matches.get_many::<String>("bind").into_iter().flatten();
    if let Err(err) = bindings::bind_all(&mut ctx, raw) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
    ctx
}

/// Handle the list command
fn handle_list_command(sub_matches: &ArgMatches, config: &SnipConfig) {
    let path = sub_matches
        .get_one::<String>("path")
        .expect("path is required");
    let report = load_definitions(path, config);

    match sub_matches.get_one::<String>("language") {
        Some(language) => {
            let mut index = SnippetIndex::new();
            for err in index.extend(report) {
                eprintln!("warning: {path}: {err}");
            }
            print_snippets(&index.for_language(language), sub_matches, config);
        }
        None => {
            let snippets: Vec<&Snippet> = report.snippets.iter().collect();
            print_snippets(&snippets, sub_matches, config);
        }
    }
}

fn print_snippets(snippets: &[&Snippet], sub_matches: &ArgMatches, config: &SnipConfig) {
    if sub_matches.get_flag("json") || config.output.json {
        match serde_json::to_string_pretty(snippets) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("JSON serialization failed: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    for snippet in snippets {
        println!("{}", describe(snippet));
    }
}

fn describe(snippet: &Snippet) -> String {
    let language = if snippet.language().is_empty() {
        "*"
    } else {
        snippet.language()
    };
    format!(
        "{language}\t{}\t{}",
        snippet.trigger(),
        snippet.description().unwrap_or("")
    )
}

/// Handle the expand command
fn handle_expand_command(sub_matches: &ArgMatches, config: &SnipConfig) {
    let spec = sub_matches
        .get_one::<String>("spec")
        .expect("spec is required");
    let ctx = context_for(sub_matches, config);

    match ctx.expand(spec) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Expansion error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the render command
fn handle_render_command(sub_matches: &ArgMatches, config: &SnipConfig) {
    let path = sub_matches
        .get_one::<String>("path")
        .expect("path is required");
    let trigger = sub_matches
        .get_one::<String>("trigger")
        .expect("trigger is required");
    let language = language_for(sub_matches, config);

    let mut index = SnippetIndex::new();
    for err in index.extend(load_definitions(path, config)) {
        eprintln!("warning: {path}: {err}");
    }

    let Some(snippet) = index.find(language, trigger) else {
        eprintln!("Error: no snippet '{trigger}' for language '{language}'");
        std::process::exit(1);
    };

    let ctx = context_for(sub_matches, config);
    match snippet.expand(&ctx) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Expansion error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle the filters command
fn handle_filters_command() {
    let registry = FilterRegistry::with_defaults();
    for name in registry.list_filters() {
        let description = registry.get(&name).map(|f| f.description()).unwrap_or("");
        println!("{name:<14}{description}");
    }
}
