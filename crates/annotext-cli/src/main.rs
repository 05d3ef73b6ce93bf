use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use annotext_core::{Confidence, comment_html, emit_html, emit_html_sanitized, render};
use annotext_renderer::{Renderer, Theme};

fn main() {
    let mut input: Option<String> = None;
    let mut sanitized = false;
    let mut verbatim = false;
    let mut raw_fragment = false;
    let mut theme = Theme::Auto;
    let mut confidence_mode: Option<ConfidenceMode> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--sanitized" => sanitized = true,
            "--verbatim" => verbatim = true,
            "--raw" => raw_fragment = true,
            "--theme" => {
                theme = match args.next().as_deref() {
                    Some("auto") => Theme::Auto,
                    Some("light") => Theme::Light,
                    Some("dark") => Theme::Dark,
                    _ => {
                        eprintln!("--theme expects: auto | light | dark");
                        print_usage();
                        process::exit(2);
                    }
                };
            }
            "--confidence" => {
                let mode = match args.next().as_deref() {
                    Some("json") => ConfidenceMode::Json,
                    Some("pretty") => ConfidenceMode::Pretty,
                    _ => {
                        eprintln!("--confidence expects: json | pretty");
                        print_usage();
                        process::exit(2);
                    }
                };
                confidence_mode = Some(mode);
            }
            _ => {
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

    let fragment = if verbatim {
        // Human-authored comments are reproduced as-is; the pipeline only
        // runs for assistant output.
        if let Some(mode) = confidence_mode {
            emit_confidence(None, mode);
        }
        comment_html(&source, false)
    } else {
        let document = render(&source);
        if let Some(mode) = confidence_mode {
            emit_confidence(document.confidence.as_ref(), mode);
        }
        if sanitized {
            emit_html_sanitized(&document)
        } else {
            emit_html(&document)
        }
    };

    if raw_fragment {
        print!("{}", fragment);
    } else {
        let renderer = Renderer::new(theme);
        print!("{}", renderer.embed_html(&fragment, true));
    }
}

fn print_usage() {
    eprintln!(
        "Usage: annotext-cli [--sanitized] [--verbatim] [--raw] [--theme auto|light|dark] [--confidence json|pretty] [input]"
    );
}

#[derive(Clone, Copy)]
enum ConfidenceMode {
    Json,
    Pretty,
}

fn emit_confidence(confidence: Option<&Confidence>, mode: ConfidenceMode) {
    match mode {
        ConfidenceMode::Json => eprintln!("{}", confidence_to_json(confidence)),
        ConfidenceMode::Pretty => match confidence {
            Some(confidence) => match &confidence.percentage {
                Some(percentage) => {
                    eprintln!("confidence: {} ({}%)", confidence.level, percentage);
                }
                None => eprintln!("confidence: {}", confidence.level),
            },
            None => eprintln!("confidence: none"),
        },
    }
}

fn confidence_to_json(confidence: Option<&Confidence>) -> String {
    let Some(confidence) = confidence else {
        return "null".to_string();
    };

    let mut out = String::new();
    out.push_str("{\n");
    out.push_str(&format!(
        "  \"level\": \"{}\",\n",
        escape_json(&confidence.level)
    ));
    match &confidence.percentage {
        Some(percentage) => out.push_str(&format!(
            "  \"percentage\": \"{}\",\n",
            escape_json(percentage)
        )),
        None => out.push_str("  \"percentage\": null,\n"),
    }
    out.push_str(&format!(
        "  \"rank\": \"{}\"\n",
        confidence.rank().as_str()
    ));
    out.push('}');
    out
}

fn escape_json(value: &str) -> String {
    let mut out = String::new();
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}
