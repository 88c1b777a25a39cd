//! Command parser for the : command system

/// Which wallet row an `open` command addresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenTarget {
    /// 1-based row position
    Position(usize),
    /// Row action id, i.e. the wallet address
    Address(String),
}

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation commands
    Factory,
    Dashboard,
    Open(OpenTarget),
    Tab(String),

    // Session commands
    Reload,
    Copy,
    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        // Navigation
        "factory" | "home" => Command::Factory,
        "dashboard" | "dash" => Command::Dashboard,
        "open" | "access" | "wallet" => match args {
            Some(arg) => match arg.parse::<usize>() {
                Ok(position) if position > 0 => Command::Open(OpenTarget::Position(position)),
                Ok(_) => Command::Unknown(input.to_string()),
                Err(_) => Command::Open(OpenTarget::Address(arg)),
            },
            None => Command::Unknown(input.to_string()),
        },
        "tab" => match args {
            Some(name) => Command::Tab(name),
            None => Command::Unknown(input.to_string()),
        },

        // Session
        "reload" | "r" => Command::Reload,
        "copy" | "y" => Command::Copy,
        "help" | "?" => Command::Help,
        "quit" | "q" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(parse_command("home"), Command::Factory);
        assert_eq!(parse_command("dash"), Command::Dashboard);
        assert_eq!(
            parse_command("open 2"),
            Command::Open(OpenTarget::Position(2))
        );
        assert_eq!(
            parse_command("open 0xAA"),
            Command::Open(OpenTarget::Address("0xAA".to_string()))
        );
        assert_eq!(parse_command("tab session"), Command::Tab("session".into()));
    }

    #[test]
    fn test_parse_session_commands() {
        assert_eq!(parse_command("reload"), Command::Reload);
        assert_eq!(parse_command("copy"), Command::Copy);
        assert_eq!(parse_command("  Q  "), Command::Quit);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse_command("open"), Command::Unknown("open".to_string()));
        assert_eq!(parse_command("open 0"), Command::Unknown("open 0".to_string()));
        assert_eq!(
            parse_command("notacommand"),
            Command::Unknown("notacommand".to_string())
        );
    }
}
