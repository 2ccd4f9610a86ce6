//! Create/edit form: flags first, interactive prompts for the rest.

use anyhow::Result;
use clap::Args;
use dialoguer::Input;
use eventdesk_core::{EventFields, EventInput, iso_date, parse_event_date};

#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Free-form time, e.g. "10:00"
    #[arg(long)]
    pub time: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub organizer: Option<String>,
}

/// Collect all six fields, prompting for any not given on the command line.
/// When editing, prompts start from the current values.
pub fn fill(args: FieldArgs, current: Option<&EventFields>) -> Result<EventFields> {
    let input = EventInput {
        title: field(args.title, "Title", current.map(|c| c.title.clone()))?,
        description: field(
            args.description,
            "Description",
            current.map(|c| c.description.clone()),
        )?,
        date: date_field(
            args.date,
            current.map(|c| c.date.format(iso_date::FORMAT).to_string()),
        )?,
        time: field(args.time, "Time", current.map(|c| c.time.clone()))?,
        location: field(args.location, "Location", current.map(|c| c.location.clone()))?,
        organizer: field(
            args.organizer,
            "Organizer",
            current.map(|c| c.organizer.clone()),
        )?,
    };

    Ok(input.validate()?)
}

fn field(given: Option<String>, prompt: &str, default: Option<String>) -> Result<Option<String>> {
    if given.is_some() {
        return Ok(given);
    }

    let mut input = Input::<String>::new()
        .with_prompt(format!("  {prompt}"))
        .validate_with(|s: &String| -> Result<(), &'static str> {
            if s.trim().is_empty() {
                Err("required")
            } else {
                Ok(())
            }
        });
    if let Some(default) = default {
        input = input.default(default);
    }

    Ok(Some(input.interact_text()?))
}

fn date_field(given: Option<String>, default: Option<String>) -> Result<Option<String>> {
    if given.is_some() {
        return Ok(given);
    }

    let mut input = Input::<String>::new()
        .with_prompt("  Date (YYYY-MM-DD)")
        .validate_with(|s: &String| -> Result<(), &'static str> {
            match parse_event_date(s) {
                Some(_) => Ok(()),
                None => Err("expected a date like 2025-06-01"),
            }
        });
    if let Some(default) = default {
        input = input.default(default);
    }

    Ok(Some(input.interact_text()?))
}
