//! The interactive lookup menu.
//!
//! One iteration prints the menu, reads a choice, runs at most one lookup
//! and prints its outcome. Lookup failures are reported and the loop goes
//! on; only console errors end it early.

use crate::base::neterror::NetError;
use crate::console::Console;
use crate::dns::{forward_lookup, reverse_lookup, Resolve};
use std::io;

pub const TITLE: &str = "DNS Lookup Program";
pub const OPTIONS: [&str; 3] = ["1. Domain to IP", "2. IP to Domain", "3. Exit"];
pub const CHOICE_PROMPT: &str = "Enter choice: ";
pub const DOMAIN_PROMPT: &str = "Enter domain name (e.g. www.google.com): ";
pub const ADDRESS_PROMPT: &str = "Enter IP address (e.g. 8.8.8.8): ";
pub const EXIT_MESSAGE: &str = "Exiting!!!";
pub const INVALID_CHOICE: &str = "Invalid choice! Try Again!!!";
pub const SEPARATOR: &str =
    "------------------------------------------------------------------------------";

/// A parsed menu selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    DomainToIp,
    IpToDomain,
    Exit,
    /// Anything else, numeric or not. Holds the trimmed input.
    Invalid(String),
}

impl MenuChoice {
    /// Parses one line of user input. Never fails: unknown input is `Invalid`.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.parse::<i64>() {
            Ok(1) => MenuChoice::DomainToIp,
            Ok(2) => MenuChoice::IpToDomain,
            Ok(3) => MenuChoice::Exit,
            Ok(_) => MenuChoice::Invalid(input.to_owned()),
            Err(e) => {
                tracing::debug!(input = %input, error = %e, "non-numeric menu choice");
                MenuChoice::Invalid(input.to_owned())
            }
        }
    }
}

/// Why [`Menu::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user picked Exit.
    Requested,
    /// Input ended before Exit was picked.
    EndOfInput,
}

/// The menu loop, over a console and a resolver.
pub struct Menu<C, R> {
    console: C,
    resolver: R,
}

impl<C: Console, R: Resolve> Menu<C, R> {
    pub fn new(console: C, resolver: R) -> Self {
        Self { console, resolver }
    }

    /// Runs iterations until Exit is picked or input ends.
    pub async fn run(&mut self) -> io::Result<ExitReason> {
        loop {
            if let Some(reason) = self.step().await? {
                tracing::debug!(?reason, "menu loop finished");
                return Ok(reason);
            }
        }
    }

    /// Runs a single iteration. Returns `Some` when the loop must stop.
    pub async fn step(&mut self) -> io::Result<Option<ExitReason>> {
        self.console.write_line(TITLE)?;
        for option in OPTIONS {
            self.console.write_line(option)?;
        }

        let Some(line) = self.prompt(CHOICE_PROMPT)? else {
            return Ok(Some(ExitReason::EndOfInput));
        };

        match MenuChoice::parse(&line) {
            MenuChoice::DomainToIp => {
                let Some(domain) = self.prompt(DOMAIN_PROMPT)? else {
                    return Ok(Some(ExitReason::EndOfInput));
                };
                match forward_lookup(&self.resolver, &domain).await {
                    Ok(ip) => self.console.write_line(&format!("IP Address: {ip}"))?,
                    Err(e) => self.report_failure(&e)?,
                }
            }
            MenuChoice::IpToDomain => {
                let Some(address) = self.prompt(ADDRESS_PROMPT)? else {
                    return Ok(Some(ExitReason::EndOfInput));
                };
                match reverse_lookup(&self.resolver, &address).await {
                    Ok(host) => self.console.write_line(&format!("Domain Name: {host}"))?,
                    Err(e) => self.report_failure(&e)?,
                }
            }
            MenuChoice::Exit => {
                self.console.write_line(EXIT_MESSAGE)?;
                return Ok(Some(ExitReason::Requested));
            }
            MenuChoice::Invalid(input) => {
                tracing::debug!(input = %input, "invalid menu choice");
                self.console.write_line(INVALID_CHOICE)?;
            }
        }

        self.console.write_line(SEPARATOR)?;
        Ok(None)
    }

    /// Consumes the menu, returning the console.
    pub fn into_console(self) -> C {
        self.console
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.console.write(text)?;
        self.console.read_line()
    }

    fn report_failure(&mut self, error: &NetError) -> io::Result<()> {
        tracing::debug!(error = %error, code = error.as_i32(), "lookup failed");
        self.console.write_line(&format!("Lookup failed: {error}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_choices() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::DomainToIp);
        assert_eq!(MenuChoice::parse(" 2 "), MenuChoice::IpToDomain);
        assert_eq!(MenuChoice::parse("3\r"), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("+1"), MenuChoice::DomainToIp);
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(MenuChoice::parse("0"), MenuChoice::Invalid("0".into()));
        assert_eq!(MenuChoice::parse("42"), MenuChoice::Invalid("42".into()));
        assert_eq!(MenuChoice::parse("-3"), MenuChoice::Invalid("-3".into()));
    }

    #[test]
    fn test_parse_non_numeric() {
        assert_eq!(MenuChoice::parse("abc"), MenuChoice::Invalid("abc".into()));
        assert_eq!(MenuChoice::parse(""), MenuChoice::Invalid(String::new()));
        assert_eq!(
            MenuChoice::parse("99999999999999999999"),
            MenuChoice::Invalid("99999999999999999999".into())
        );
    }

    #[test]
    fn test_separator_width() {
        assert_eq!(SEPARATOR.len(), 78);
        assert!(SEPARATOR.chars().all(|c| c == '-'));
    }
}
