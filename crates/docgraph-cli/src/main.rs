//! Verification CLI for docgraph
//!
//! Reads saved model responses from disk and prints what the core
//! recovers: the rendered tag tree, or entity/relation records as JSON.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use docgraph_narrative::extract_entities_and_relations;
use docgraph_tagtree::{recover_tag_tree, render, strip_transcript};
use std::fs;
use std::path::PathBuf;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let matches = Command::new("docgraph")
        .version("0.1.0")
        .about("Structured-data recovery from model-generated document analyses")
        .subcommand_required(true)
        .subcommand(
            Command::new("tree")
                .about("Recover and print the tag tree embedded in a model response")
                .arg(file_arg())
                .arg(raw_arg()),
        )
        .subcommand(
            Command::new("records")
                .about("Extract entity/relation records from an analysis response")
                .arg(file_arg())
                .arg(raw_arg()),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tree", sub)) => print_tree(&read_body(sub)?),
        Some(("records", sub)) => print_records(&read_body(sub)?)?,
        _ => unreachable!("subcommand is required"),
    }
    Ok(())
}

fn file_arg() -> Arg {
    Arg::new("file")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Saved model response or full transcript")
}

fn raw_arg() -> Arg {
    Arg::new("raw")
        .long("raw")
        .action(ArgAction::SetTrue)
        .help("Treat the file as the bare response; skip transcript stripping")
}

fn read_body(sub: &ArgMatches) -> Result<String> {
    let path = sub.get_one::<PathBuf>("file").expect("required arg");
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    if sub.get_flag("raw") {
        Ok(content)
    } else {
        Ok(strip_transcript(&content).to_string())
    }
}

fn print_tree(body: &str) {
    let recovery = recover_tag_tree(body);
    match recovery.root {
        Some(root) => {
            if recovery.truncated {
                tracing::warn!("recovery truncated; printing best-effort partial tree");
            }
            print!("{}", render(&root));
        }
        None => println!("No structured region found in response"),
    }
}

fn print_records(body: &str) -> Result<()> {
    let extraction = extract_entities_and_relations(body);
    let json = serde_json::to_string_pretty(&extraction).context("serializing records")?;
    println!("{json}");
    Ok(())
}
