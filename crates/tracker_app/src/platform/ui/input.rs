use tracker_core::{JobId, Msg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Dispatch(Msg),
    Html,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<UiCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "search" | "s" => UiCommand::Dispatch(Msg::SearchInput(rest.to_string())),
        "clear" => UiCommand::Dispatch(Msg::SearchCleared),
        "source" => UiCommand::Dispatch(Msg::SourceChipSelected(require(rest, "source")?)),
        "status" => UiCommand::Dispatch(Msg::StatusChipSelected(
            require(rest, "status")?.to_ascii_lowercase(),
        )),
        "next" | "n" => UiCommand::Dispatch(Msg::NextPageClicked),
        "prev" | "p" => UiCommand::Dispatch(Msg::PrevPageClicked),
        "refresh" | "r" => UiCommand::Dispatch(Msg::RefreshClicked),
        "apply" | "a" => {
            let job_id: JobId = require(rest, "job id")?
                .parse()
                .map_err(|_| format!("'{rest}' is not a job id"))?;
            UiCommand::Dispatch(Msg::ApplyClicked { job_id })
        }
        "html" => UiCommand::Html,
        "help" | "?" => UiCommand::Help,
        "quit" | "q" | "exit" => UiCommand::Quit,
        other => return Err(format!("unknown command '{other}', type 'help'")),
    };
    Ok(Some(command))
}

fn require(value: &str, what: &str) -> Result<String, String> {
    if value.is_empty() {
        Err(format!("missing {what}"))
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_keeps_inner_spaces_and_allows_empty() {
        assert_eq!(
            parse_command("search  rust  dev "),
            Ok(Some(UiCommand::Dispatch(Msg::SearchInput("rust  dev".to_string()))))
        );
        assert_eq!(
            parse_command("search"),
            Ok(Some(UiCommand::Dispatch(Msg::SearchInput(String::new()))))
        );
    }

    #[test]
    fn source_values_keep_case_and_spaces() {
        assert_eq!(
            parse_command("source Big Tech"),
            Ok(Some(UiCommand::Dispatch(Msg::SourceChipSelected(
                "Big Tech".to_string()
            ))))
        );
    }

    #[test]
    fn apply_requires_numeric_id() {
        assert_eq!(
            parse_command("apply 42"),
            Ok(Some(UiCommand::Dispatch(Msg::ApplyClicked { job_id: 42 })))
        );
        assert!(parse_command("apply x").is_err());
        assert!(parse_command("apply").is_err());
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(parse_command("   "), Ok(None));
        assert!(parse_command("jump 3").is_err());
        assert_eq!(parse_command("Q"), Ok(Some(UiCommand::Quit)));
    }
}
