//! Slash-command parser for the input box.
//!
//! Parses `/command arg1 arg2 ...` lines into typed [`ParsedCommand`] values
//! that the event handler maps onto the todo operations.

use crate::todo::model::TodoId;

/// A parsed user command. Each variant corresponds to a `/command`.
#[derive(Debug, PartialEq)]
pub enum ParsedCommand {
    Add { text: String },
    Edit { id: TodoId, text: String },
    Remove { id: TodoId },
    Clear,
    Reload,
    Help,
    Quit,
}

#[derive(Debug, PartialEq)]
pub enum CommandError {
    NotACommand,
    Unknown(String),
    Usage(&'static str),
}

pub const HELP_LINES: &[&str] = &[
    "/add <text>        add a todo (same as typing text and Enter)",
    "/edit <id> <text>  change a todo's text",
    "/rm <id>           remove a todo",
    "/clear             remove every todo locally (F8)",
    "/reload            fetch the list again (Ctrl+R)",
    "/quit              exit (Ctrl+C)",
    "Tab switches focus; in the list: e edit, d remove, D remove all",
];

/// Parse a slash-command string. Command names are case-insensitive; the
/// text arguments are kept verbatim so empty-text checks happen downstream.
pub fn parse_command(input: &str) -> Result<ParsedCommand, CommandError> {
    let input = input.trim_start();
    let Some(body) = input.strip_prefix('/') else {
        return Err(CommandError::NotACommand);
    };

    let mut parts = body.splitn(2, ' ');
    let cmd = parts.next().unwrap_or_default().to_lowercase();
    let rest = parts.next().unwrap_or_default();

    match cmd.as_str() {
        "add" | "a" => Ok(ParsedCommand::Add {
            text: rest.to_string(),
        }),
        "edit" | "e" => {
            let mut args = rest.trim_start().splitn(2, ' ');
            let id = parse_id(args.next()).ok_or(CommandError::Usage("/edit <id> <text>"))?;
            let text = args.next().unwrap_or_default().to_string();
            Ok(ParsedCommand::Edit { id, text })
        }
        "rm" | "remove" | "del" | "delete" => {
            let id = parse_id(rest.split_whitespace().next()).ok_or(CommandError::Usage("/rm <id>"))?;
            Ok(ParsedCommand::Remove { id })
        }
        "clear" | "deleteall" => Ok(ParsedCommand::Clear),
        "reload" | "refresh" => Ok(ParsedCommand::Reload),
        "help" | "h" | "?" => Ok(ParsedCommand::Help),
        "quit" | "q" | "exit" => Ok(ParsedCommand::Quit),
        _ => Err(CommandError::Unknown(cmd)),
    }
}

fn parse_id(arg: Option<&str>) -> Option<TodoId> {
    arg?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_keeps_text() {
        assert_eq!(
            parse_command("/add Buy  milk"),
            Ok(ParsedCommand::Add { text: "Buy  milk".into() })
        );
        assert_eq!(parse_command("/ADD"), Ok(ParsedCommand::Add { text: String::new() }));
    }

    #[test]
    fn test_parse_edit() {
        assert_eq!(
            parse_command("/edit 12 walk the dog"),
            Ok(ParsedCommand::Edit { id: 12, text: "walk the dog".into() })
        );
        assert_eq!(
            parse_command("/edit 3"),
            Ok(ParsedCommand::Edit { id: 3, text: String::new() })
        );
        assert_eq!(
            parse_command("/edit x y"),
            Err(CommandError::Usage("/edit <id> <text>"))
        );
    }

    #[test]
    fn test_parse_remove_and_misc() {
        assert_eq!(parse_command("/rm 4"), Ok(ParsedCommand::Remove { id: 4 }));
        assert_eq!(parse_command("/rm"), Err(CommandError::Usage("/rm <id>")));
        assert_eq!(parse_command("/clear"), Ok(ParsedCommand::Clear));
        assert_eq!(parse_command("/reload"), Ok(ParsedCommand::Reload));
        assert_eq!(parse_command("/q"), Ok(ParsedCommand::Quit));
        assert_eq!(parse_command("/help"), Ok(ParsedCommand::Help));
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(parse_command("just text"), Err(CommandError::NotACommand));
        assert_eq!(
            parse_command("/frobnicate now"),
            Err(CommandError::Unknown("frobnicate".into()))
        );
    }
}
