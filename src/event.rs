//! Typed user interactions and their line-command syntax.

use crate::catalog::{Category, PlantId};
use anyhow::{Result, anyhow, bail};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    SelectCategory(Category),
    ShowAll,
    OpenDetail(PlantId),
    CloseDetail,
    AddToCart(PlantId),
    /// 0-based position in the cart.
    RemoveFromCart(usize),
}

/// Command summary printed by front ends.
pub const COMMAND_HELP: &str = "\
Commands:
  all                 Show every plant.
  category <label>    Show plants in one category.
  show <id>           Open the detail view for a plant.
  close               Close the detail view.
  add <id>            Add one unit of a plant to the cart.
  remove <n>          Remove cart line n (as numbered in the cart).
  cart                Show the cart.
  help                Show this help.
  quit                Exit.";

impl FromStr for Event {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        match verb {
            "all" => no_argument(verb, rest, Event::ShowAll),
            "close" => no_argument(verb, rest, Event::CloseDetail),
            "category" => {
                if rest.is_empty() {
                    bail!("category requires a label");
                }
                Ok(Event::SelectCategory(Category::from(rest)))
            }
            "show" => Ok(Event::OpenDetail(required(verb, rest)?.parse()?)),
            "add" => Ok(Event::AddToCart(required(verb, rest)?.parse()?)),
            "remove" => {
                let position: usize = required(verb, rest)?
                    .parse()
                    .map_err(|_| anyhow!("invalid cart position '{rest}'"))?;
                if position == 0 {
                    bail!("cart positions start at 1");
                }
                Ok(Event::RemoveFromCart(position - 1))
            }
            "" => bail!("empty command"),
            other => bail!("unknown command: {other}"),
        }
    }
}

fn required<'a>(verb: &str, rest: &'a str) -> Result<&'a str> {
    if rest.is_empty() {
        bail!("{verb} requires a value");
    }
    Ok(rest)
}

fn no_argument(verb: &str, rest: &str, event: Event) -> Result<Event> {
    if !rest.is_empty() {
        bail!("{verb} takes no arguments (saw '{rest}')");
    }
    Ok(event)
}
