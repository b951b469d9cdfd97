use std::{env, fs, process};

use tim_taskfile::{LogDiagnostics, ResetMode, reset_file};

/// Restores a task file from its pristine template.
///
/// Run it with:
/// `cargo run --example reset-task answer.py template.py [--non-editable-only] [output.py]`
///
/// Without `--non-editable-only` the whole file is reset to the template;
/// with it, only the scaffold outside the editable region is restored and
/// in-progress work is kept. Without an output file the result is printed.
fn main() {
    let mut paths = Vec::new();
    let mut mode = ResetMode::Full;

    for arg in env::args().skip(1) {
        if arg == "--non-editable-only" {
            mode = ResetMode::NonEditableOnly;
        } else {
            paths.push(arg);
        }
    }

    if paths.len() < 2 || paths.len() > 3 {
        eprintln!("Usage: reset-task <answer> <template> [--non-editable-only] [output]");
        process::exit(1);
    }

    let answer_file = &paths[0];
    let template_file = &paths[1];
    let output_file = paths.get(2);

    let answer_content = fs::read_to_string(answer_file).unwrap_or_else(|e| {
        eprintln!("Error reading {answer_file}: {e}");
        process::exit(1);
    });

    let template_content = fs::read_to_string(template_file).unwrap_or_else(|e| {
        eprintln!("Error reading {template_file}: {e}");
        process::exit(1);
    });

    let result = reset_file(&answer_content, &template_content, mode, &LogDiagnostics);

    if let Some(output_path) = output_file {
        if let Err(e) = fs::write(output_path, result) {
            eprintln!("Error writing to {output_path}: {e}");
            process::exit(1);
        }
    } else {
        print!("{result}");
    }
}
