//! Command line arguments

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

/// Step replayed against the accordion, in command line order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Click the element with this id
    Click(String),
    ExpandAll,
    CollapseAll,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expand-all" => Ok(Self::ExpandAll),
            "collapse-all" => Ok(Self::CollapseAll),
            _ => match s.strip_prefix("click:") {
                Some(id) if !id.is_empty() => Ok(Self::Click(id.to_string())),
                _ => Err(format!(
                    "unknown action `{s}` (expected `click:<id>`, `expand-all` or `collapse-all`)"
                )),
            },
        }
    }
}

/// Apply an accordion to an HTML file and print the container's markup.
#[derive(Debug, Parser)]
#[command(name = "accord", version, about)]
pub struct Args {
    /// HTML file to load.
    pub input: PathBuf,

    /// JSON options file with camelCase keys.
    #[arg(short, long)]
    pub options: Option<PathBuf>,

    /// Trigger selector (default: `button`).
    #[arg(short, long)]
    pub trigger: Option<String>,

    /// Container selector (default: `.js-accordion`).
    #[arg(short, long)]
    pub body: Option<String>,

    /// Id of the container element, instead of the first selector match.
    #[arg(short, long)]
    pub container: Option<String>,

    /// Step to replay: `click:<id>`, `expand-all` or `collapse-all`. Repeatable.
    #[arg(short, long = "action", value_name = "ACTION")]
    pub actions: Vec<Action>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("accord").chain(args.iter().copied()))
    }

    #[test]
    fn test_actions_keep_order() {
        let args = parse(&[
            "page.html",
            "--action",
            "click:a",
            "-a",
            "expand-all",
            "--action",
            "click:b",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("page.html"));
        assert_eq!(
            args.actions,
            vec![
                Action::Click("a".into()),
                Action::ExpandAll,
                Action::Click("b".into())
            ]
        );
    }

    #[test]
    fn test_selectors_and_container() {
        let args = parse(&["--trigger", ".faq > button", "x.html", "--container", "faq"]).unwrap();
        assert_eq!(args.trigger.as_deref(), Some(".faq > button"));
        assert_eq!(args.container.as_deref(), Some("faq"));
        assert!(args.options.is_none());
        assert!(args.actions.is_empty());
    }

    #[test]
    fn test_action_values() {
        assert_eq!("collapse-all".parse(), Ok(Action::CollapseAll));
        assert_eq!("click:t-1".parse(), Ok(Action::Click("t-1".into())));
        assert!("click:".parse::<Action>().is_err());
        assert!("toggle".parse::<Action>().is_err());
    }

    #[test]
    fn test_errors() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["a.html", "--action"]).is_err());
        assert!(parse(&["a.html", "--action", "jump"]).is_err());
        assert!(parse(&["a.html", "--bogus"]).is_err());
        assert!(parse(&["a.html", "b.html"]).is_err());
    }
}
