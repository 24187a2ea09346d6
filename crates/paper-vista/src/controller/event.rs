//! UI events and the line syntax that produces them.

use crate::models::ExportFormat;

/// One user interaction with the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Title filter input changed.
    TitleChanged(String),
    /// Minimum citations input changed.
    MinCitationsChanged(String),
    /// Start year input changed.
    StartYearChanged(String),
    /// End year input changed.
    EndYearChanged(String),
    /// Rows-per-page selector changed.
    RowsPerPageChanged(String),
    /// "Clear filters" pressed.
    ClearFilters,
    /// "Previous" pressed.
    PrevPage,
    /// "Next" pressed.
    NextPage,
    /// "Read More" / "Read Less" on the given card (1-based, within the page).
    ToggleAbstract(usize),
    /// "Export" pressed.
    Export(ExportFormat),
    /// Redraw the current page.
    Show,
    /// Show the command reference.
    Help,
    /// End the session.
    Quit,
}

impl Event {
    /// Parse one input line. A filter keyword without a value clears that
    /// input.
    ///
    /// # Errors
    ///
    /// Returns a hint for unknown commands or malformed arguments.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let event = match command.to_ascii_lowercase().as_str() {
            "title" | "t" => Self::TitleChanged(rest.to_string()),
            "citations" | "min" | "c" => Self::MinCitationsChanged(rest.to_string()),
            "from" | "start" => Self::StartYearChanged(rest.to_string()),
            "to" | "end" => Self::EndYearChanged(rest.to_string()),
            "rows" | "r" => Self::RowsPerPageChanged(rest.to_string()),
            "clear" => Self::ClearFilters,
            "prev" | "p" => Self::PrevPage,
            "next" | "n" => Self::NextPage,
            "more" | "less" | "toggle" | "m" => {
                let card = rest
                    .parse::<usize>()
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or_else(|| format!("'{command}' needs a card number, e.g. '{command} 2'"))?;
                Self::ToggleAbstract(card)
            }
            "export" | "x" => Self::Export(rest.parse()?),
            "show" | "s" => Self::Show,
            "help" | "h" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            "" => Self::Show,
            other => return Err(format!("Unknown command '{other}'. Type 'help' for commands.")),
        };

        Ok(event)
    }

    /// Whether this event changes the filtered set or the page.
    #[must_use]
    pub const fn changes_view(&self) -> bool {
        matches!(
            self,
            Self::TitleChanged(_)
                | Self::MinCitationsChanged(_)
                | Self::StartYearChanged(_)
                | Self::EndYearChanged(_)
                | Self::RowsPerPageChanged(_)
                | Self::ClearFilters
                | Self::PrevPage
                | Self::NextPage
        )
    }
}

/// Command reference printed by `help`.
pub const HELP_TEXT: &str = "\
Commands:
  title <text>        filter by title substring (no text clears it)
  citations <n>       minimum citation count
  from <year>         start year (inclusive)
  to <year>           end year (inclusive)
  rows <n>            rows per page
  clear               clear all filters
  prev | next         change page
  more <card#>        toggle Read More / Read Less on a card
  export [json|csv|bibtex]
                      export the filtered set
  show                redraw the current page
  quit                leave
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter_inputs() {
        assert_eq!(
            Event::parse("title  deep learning "),
            Ok(Event::TitleChanged("deep learning".into()))
        );
        assert_eq!(Event::parse("citations 50"), Ok(Event::MinCitationsChanged("50".into())));
        assert_eq!(Event::parse("from 2020"), Ok(Event::StartYearChanged("2020".into())));
        assert_eq!(Event::parse("TO 2021"), Ok(Event::EndYearChanged("2021".into())));
        assert_eq!(Event::parse("rows 20"), Ok(Event::RowsPerPageChanged("20".into())));
    }

    #[test]
    fn test_keyword_alone_clears_input() {
        assert_eq!(Event::parse("title"), Ok(Event::TitleChanged(String::new())));
        assert_eq!(Event::parse("from"), Ok(Event::StartYearChanged(String::new())));
    }

    #[test]
    fn test_parse_buttons() {
        assert_eq!(Event::parse("clear"), Ok(Event::ClearFilters));
        assert_eq!(Event::parse("next"), Ok(Event::NextPage));
        assert_eq!(Event::parse("p"), Ok(Event::PrevPage));
        assert_eq!(Event::parse("quit"), Ok(Event::Quit));
    }

    #[test]
    fn test_parse_toggle() {
        assert_eq!(Event::parse("more 3"), Ok(Event::ToggleAbstract(3)));
        assert!(Event::parse("more").is_err());
        assert!(Event::parse("more 0").is_err());
        assert!(Event::parse("more two").is_err());
    }

    #[test]
    fn test_parse_export() {
        assert_eq!(Event::parse("export"), Ok(Event::Export(ExportFormat::Json)));
        assert_eq!(Event::parse("export csv"), Ok(Event::Export(ExportFormat::Csv)));
        assert!(Event::parse("export pdf").is_err());
    }

    #[test]
    fn test_unknown_command() {
        let err = Event::parse("frobnicate").unwrap_err();
        assert!(err.contains("help"));
    }

    #[test]
    fn test_changes_view() {
        assert!(Event::NextPage.changes_view());
        assert!(!Event::ToggleAbstract(1).changes_view());
        assert!(!Event::Export(ExportFormat::Json).changes_view());
    }
}
