use anyhow::Result;
use owo_colors::OwoColorize;

use crate::util::color_enabled_stdout;
use dialpad::registry::{self, Location};

pub fn handle_tools(tag: Option<String>, important: bool, json: bool) -> Result<()> {
    let tag = tag.map(|t| t.trim().to_lowercase());
    let selected: Vec<_> = registry::all()
        .filter(|op| tag.as_deref().is_none_or(|t| op.tag == t))
        .filter(|op| !important || op.important)
        .collect();

    if json {
        let defs: Vec<_> = selected.iter().map(|op| op.tool_definition()).collect();
        println!("{}", serde_json::to_string_pretty(&defs)?);
        return Ok(());
    }

    if selected.is_empty() {
        println!("No operations match.");
        return Ok(());
    }
    let ce = color_enabled_stdout();
    let width = selected.iter().map(|op| op.name.len()).max().unwrap_or(0);
    for op in &selected {
        let name = format!("{:<width$}", op.name, width = width);
        let verb = format!("{:<6}", op.verb.as_str());
        if ce {
            println!("{}  {}  {}", name.bold(), verb.cyan(), op.path);
        } else {
            println!("{}  {}  {}", name, verb, op.path);
        }
    }
    println!("\n{} operations", selected.len());
    Ok(())
}

pub fn handle_describe(name: &str) -> Result<()> {
    let op = registry::lookup(name)?;
    let ce = color_enabled_stdout();
    if ce {
        println!("{} {} {}", op.name.bold(), op.verb.as_str().cyan(), op.path);
    } else {
        println!("{} {} {}", op.name, op.verb.as_str(), op.path);
    }
    println!("{}", op.summary);
    println!("Tag: {}{}", op.tag, if op.important { " (important)" } else { "" });
    if op.params.is_empty() {
        println!("\nNo parameters.");
        return Ok(());
    }
    println!();
    for p in op.params {
        let place = match p.location {
            Location::Path => "path",
            Location::Query => "query",
            Location::Body => "body",
        };
        let req = if p.required { "required" } else { "optional" };
        println!("  {} ({}, {}, {})", p.name, p.kind.as_str(), place, req);
        if !p.description.is_empty() && p.description != p.name {
            println!("      {}", p.description);
        }
    }
    Ok(())
}
