use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use marklex_core::{Op, classify, is_valid_scheme, schemes};

fn main() {
    let mut input: Option<String> = None;
    let mut op = Op::Nul;
    let mut per_line = false;
    let mut classify_mode = false;
    let mut list_schemes = false;
    let mut scheme_names: Vec<String> = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--lines" => per_line = true,
            "--classify" => classify_mode = true,
            "--list-schemes" => list_schemes = true,
            "--op" => {
                let name = args.next().unwrap_or_default();
                op = name.parse().unwrap_or_else(|err| {
                    eprintln!("{}", err);
                    print_usage();
                    process::exit(2);
                });
            }
            "--scheme" => match args.next() {
                Some(name) => scheme_names.push(name),
                None => {
                    eprintln!("--scheme expects a scheme name");
                    print_usage();
                    process::exit(2);
                }
            },
            _ => {
                if arg.starts_with("--") {
                    eprintln!("unknown option: {}", arg);
                    print_usage();
                    process::exit(2);
                }
                if input.is_none() {
                    input = Some(arg);
                } else {
                    eprintln!("unexpected argument: {}", arg);
                    print_usage();
                    process::exit(2);
                }
            }
        }
    }

    if list_schemes {
        for name in schemes() {
            println!("{}", name);
        }
        return;
    }

    if !scheme_names.is_empty() {
        let mut all_valid = true;
        for name in &scheme_names {
            let valid = is_valid_scheme(name);
            all_valid &= valid;
            println!("{}: {}", name, if valid { "valid" } else { "invalid" });
        }
        if !all_valid {
            process::exit(1);
        }
        return;
    }

    let source = match input {
        Some(path) => fs::read_to_string(&path).unwrap_or_else(|err| {
            eprintln!("failed to read {}: {}", path, err);
            process::exit(1);
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .unwrap_or_else(|err| {
                    eprintln!("failed to read stdin: {}", err);
                    process::exit(1);
                });
            buffer
        }
    };

    if classify_mode {
        for ch in source.chars() {
            println!("{}", classify_line(ch));
        }
        return;
    }

    let output = if per_line {
        op.apply_lines(&source)
    } else {
        op.apply(&source)
    };
    print!("{}", output);
}

fn print_usage() {
    eprintln!(
        "Usage: marklex [--op collapse|strip|strip-newlines|atx|detab|nul|label|unescape] [--lines] [--classify] [--scheme NAME]... [--list-schemes] [input]"
    );
}

fn classify_line(ch: char) -> String {
    let names: Vec<&str> = classify(ch).into_iter().map(|class| class.name()).collect();
    if names.is_empty() {
        format!("U+{:04X}", ch as u32)
    } else {
        format!("U+{:04X} {}", ch as u32, names.join(" "))
    }
}
