//! Parsing of interactive stdin commands.

use alert_core::RegionId;
use alert_monitor::MonitorCommand;

pub const HELP: &str = "\
commands:
  region <id>    show only locations in a region (see `regions`)
  regions        list region ids
  demo           start (or restart) demo playback
  stop           stop demo playback
  focus <name>   centre the map on a location
  sound          toggle the audio cue
  resize         refresh the map size
  help           show this help
  quit           exit";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(MonitorCommand),
    Help,
    Regions,
    Empty,
}

/// Parse a line typed by the user.
pub fn parse(line: &str) -> Result<Input, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "" => return Ok(Input::Empty),
        "help" | "?" => return Ok(Input::Help),
        "regions" => return Ok(Input::Regions),
        "region" => {
            let region: RegionId = rest.parse().map_err(|e| format!("{e}"))?;
            MonitorCommand::SelectRegion(region)
        }
        "demo" => MonitorCommand::LoadDemo,
        "stop" => MonitorCommand::StopDemo,
        "focus" if !rest.is_empty() => MonitorCommand::Focus(rest.to_string()),
        "focus" => return Err("focus needs a location name".to_string()),
        "sound" => MonitorCommand::ToggleSound,
        "resize" => MonitorCommand::Resize,
        "quit" | "exit" => MonitorCommand::Shutdown,
        other => return Err(format!("unknown command {other:?}, try `help`")),
    };
    Ok(Input::Command(command))
}

/// `id  label` lines for every region.
pub fn region_list() -> String {
    RegionId::ALL
        .iter()
        .map(|id| format!("  {:<10} {}", id.as_str(), id.region().label))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse("region haifa"),
            Ok(Input::Command(MonitorCommand::SelectRegion(RegionId::Haifa)))
        );
        assert_eq!(parse("  demo "), Ok(Input::Command(MonitorCommand::LoadDemo)));
        assert_eq!(parse("stop"), Ok(Input::Command(MonitorCommand::StopDemo)));
        assert_eq!(
            parse("focus תל אביב - יפו"),
            Ok(Input::Command(MonitorCommand::Focus("תל אביב - יפו".into())))
        );
        assert_eq!(parse("quit"), Ok(Input::Command(MonitorCommand::Shutdown)));
        assert_eq!(parse(""), Ok(Input::Empty));
        assert_eq!(parse("?"), Ok(Input::Help));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse("region atlantis").is_err());
        assert!(parse("focus").is_err());
        assert!(parse("launch").is_err());
    }

    #[test]
    fn test_region_list_has_every_region() {
        let list = region_list();
        assert_eq!(list.lines().count(), RegionId::ALL.len());
        assert!(list.contains("gush-dan"));
    }
}
