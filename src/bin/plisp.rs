//! Command-line interface for plisp
//! This binary parses, prints, compares, and grafts Lisp-style planning files.
//!
//! Usage:
//!   plisp show `<path>` [--format `<format>`]             - Parse a file and print it in a format
//!   plisp diff `<baseline>` `<generated>` [--json]        - Token-level windowed diff of two files
//!   plisp align `<baseline>` `<generated>` [--matrix]     - Exact minimum-penalty token alignment
//!   plisp graft `<domain>` `<problem>` `<translator-out>` - Splice translator output into both files
//!   plisp list-formats                                    - List available output formats

use clap::{Arg, ArgAction, Command};

use plisp::plisp::diff::{align, windowed_diff_sources, AlignmentConfig, WindowedOptions};
use plisp::plisp::diff::alignment::penalty_matrix;
use plisp::plisp::formats::{default_registry, to_canonical_str};
use plisp::plisp::grafting::{graft_domain, graft_problem, partition_marker_output};
use plisp::plisp::lexing::tokenize;
use plisp::plisp::parsing::parse_source;

fn main() {
    let matches = Command::new("plisp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing, printing, and diffing Lisp-style planning files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("show")
                .about("Parse a file and print it in an output format")
                .arg(
                    Arg::new("path")
                        .help("Path to the planning file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'canonical', 'treeviz', 'dict')")
                        .default_value("canonical"),
                ),
        )
        .subcommand(
            Command::new("diff")
                .about("Compare two files token by token with the windowed scan")
                .arg(
                    Arg::new("baseline")
                        .help("Path to the baseline file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("generated")
                        .help("Path to the generated file")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Emit the report as JSON instead of text")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("align")
                .about("Compute the exact minimum-penalty token alignment of two files")
                .arg(
                    Arg::new("baseline")
                        .help("Path to the baseline file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("generated")
                        .help("Path to the generated file")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("matrix")
                        .long("matrix")
                        .help("Also print the penalty matrix")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("graft")
                .about("Split translator output and graft it onto domain and problem files")
                .arg(
                    Arg::new("domain")
                        .help("Path to the domain file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("problem")
                        .help("Path to the problem file")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("translator-output")
                        .help("Path to the translator output file")
                        .required(true)
                        .index(3),
                )
                .arg(
                    Arg::new("problem-number")
                        .long("problem-number")
                        .short('n')
                        .help("Number used in the output file names")
                        .default_value("1"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("show", show_matches)) => {
            let path = show_matches.get_one::<String>("path").unwrap();
            let format = show_matches.get_one::<String>("format").unwrap();
            handle_show_command(path, format);
        }
        Some(("diff", diff_matches)) => {
            let baseline = diff_matches.get_one::<String>("baseline").unwrap();
            let generated = diff_matches.get_one::<String>("generated").unwrap();
            let json = diff_matches.get_flag("json");
            handle_diff_command(baseline, generated, json);
        }
        Some(("align", align_matches)) => {
            let baseline = align_matches.get_one::<String>("baseline").unwrap();
            let generated = align_matches.get_one::<String>("generated").unwrap();
            let matrix = align_matches.get_flag("matrix");
            handle_align_command(baseline, generated, matrix);
        }
        Some(("graft", graft_matches)) => {
            let domain = graft_matches.get_one::<String>("domain").unwrap();
            let problem = graft_matches.get_one::<String>("problem").unwrap();
            let translator = graft_matches.get_one::<String>("translator-output").unwrap();
            let number = graft_matches.get_one::<String>("problem-number").unwrap();
            handle_graft_command(domain, problem, translator, number);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Read a file whole, exiting on failure.
fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        std::process::exit(1);
    })
}

/// Handle the show command
fn handle_show_command(path: &str, format: &str) {
    let source = read_source(path);
    let tree = parse_source(&source).unwrap_or_else(|e| {
        eprintln!("Parse error in '{}': {}", path, e);
        std::process::exit(1);
    });

    let registry = default_registry();
    let output = registry
        .serialize(format, &tree, tree.root())
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    println!("{}", output);
}

/// Handle the diff command
fn handle_diff_command(baseline_path: &str, generated_path: &str, json: bool) {
    let baseline = read_source(baseline_path);
    let generated = read_source(generated_path);

    println!("==> Input:");
    println!("Baseline File -> {}", baseline_path);
    println!("Generated File -> {}", generated_path);

    let report = windowed_diff_sources(&baseline, &generated, &WindowedOptions::default());

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("report always serializes")
        );
    } else {
        print!("{}", report);
    }

    if report.identical() {
        println!("Files are identical");
    } else {
        println!("ERROR: files are different");
        std::process::exit(1);
    }
}

/// Handle the align command
fn handle_align_command(baseline_path: &str, generated_path: &str, show_matrix: bool) {
    let baseline = tokenize(&read_source(baseline_path));
    let generated = tokenize(&read_source(generated_path));
    let config = AlignmentConfig::default();

    if show_matrix {
        print!("{}", penalty_matrix(&baseline, &generated, &config));
    }

    let alignment = align(&baseline, &generated, &config);
    let (row_a, row_b) = alignment.rows_with("_", " ");
    println!("a = {}", row_a);
    println!("b = {}", row_b);
    println!("==> penalty = {}", alignment.penalty);
}

/// Handle the graft command
fn handle_graft_command(domain_path: &str, problem_path: &str, translator_path: &str, number: &str) {
    println!("==> Input:");
    println!("Domain File -> {}", domain_path);
    println!("Problem File -> {}", problem_path);
    println!("Translator Output File -> {}", translator_path);

    let fragments = partition_marker_output(&read_source(translator_path));

    let parse = |label: &str, source: &str| {
        parse_source(source).unwrap_or_else(|e| {
            eprintln!("Parse error in {}: {}", label, e);
            std::process::exit(1);
        })
    };

    let mut domain = parse(domain_path, &read_source(domain_path));
    let mut problem = parse(problem_path, &read_source(problem_path));
    let init_states = parse("initial-state fragment", &fragments.init_states);
    let add_effects = parse("add-effects fragment", &fragments.add_effects);
    let del_effects = parse("delete-effects fragment", &fragments.del_effects);
    let axioms = parse("axioms fragment", &fragments.axioms);

    graft_domain(&mut domain, &add_effects, &del_effects, &axioms).unwrap_or_else(|e| {
        eprintln!("Error grafting domain: {}", e);
        std::process::exit(1);
    });
    graft_problem(&mut problem, &init_states, &axioms).unwrap_or_else(|e| {
        eprintln!("Error grafting problem: {}", e);
        std::process::exit(1);
    });

    let domain_out = format!("Domain{}.lisp", number);
    let problem_out = format!("Problem{}.lisp", number);
    write_tree(&domain_out, &domain);
    println!("==> Wrote new domain file to {}", domain_out);
    write_tree(&problem_out, &problem);
    println!("==> Wrote new problem file to {}", problem_out);
}

fn write_tree(path: &str, tree: &plisp::plisp::ast::Tree) {
    let text = to_canonical_str(tree, tree.root());
    std::fs::write(path, text).unwrap_or_else(|e| {
        eprintln!("Error writing file '{}': {}", path, e);
        std::process::exit(1);
    });
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = default_registry();
    println!("Available output formats:\n");
    for (name, description) in registry.list() {
        println!("  {}", name);
        println!("    {}", description);
    }
}
