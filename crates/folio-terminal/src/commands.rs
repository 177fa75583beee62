//! Shell command table and site sections.
//!
//! Commands are a closed enum: each variant produces a fixed list of output
//! lines and has no side effects. Navigation is not a command; it is the
//! reserved `cd <section>` form (and empty input), parsed by
//! [`parse_input`] before the table is consulted.

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// A navigable section of the site.
///
/// The key/path mapping is shared by `ls` and `cd`, so the two can never
/// disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    CaseStudies,
    DevHub,
    Gallery,
    Contact,
}

impl Section {
    /// Every section, in menu order.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::CaseStudies,
        Section::DevHub,
        Section::Gallery,
        Section::Contact,
    ];

    /// Key typed after `cd`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::CaseStudies => "casestudies",
            Self::DevHub => "devhub",
            Self::Gallery => "gallery",
            Self::Contact => "contact",
        }
    }

    /// Destination handed to the navigator.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/home",
            Self::About => "/about",
            Self::CaseStudies => "/casestudies",
            Self::DevHub => "/devhub",
            Self::Gallery => "/gallery",
            Self::Contact => "/contact",
        }
    }

    /// Human-readable page title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::CaseStudies => "Case Studies",
            Self::DevHub => "Dev Hub",
            Self::Gallery => "Gallery",
            Self::Contact => "Contact",
        }
    }

    /// Look up a section by its exact key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Look up a section by its destination path.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.path() == path)
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// A known shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellCommand {
    Help,
    Whoami,
    Stack,
    Ls,
    Socials,
    Coffee,
}

impl ShellCommand {
    pub const ALL: [ShellCommand; 6] = [
        ShellCommand::Help,
        ShellCommand::Whoami,
        ShellCommand::Stack,
        ShellCommand::Ls,
        ShellCommand::Socials,
        ShellCommand::Coffee,
    ];

    /// The command name (what the user types).
    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Whoami => "whoami",
            Self::Stack => "stack",
            Self::Ls => "ls",
            Self::Socials => "socials",
            Self::Coffee => "coffee",
        }
    }

    /// One-line description for `help`. The easter egg stays unlisted.
    pub fn description(self) -> Option<&'static str> {
        match self {
            Self::Help => Some("show this list"),
            Self::Whoami => Some("who runs this place"),
            Self::Stack => Some("languages, tools, and domains"),
            Self::Ls => Some("list site sections"),
            Self::Socials => Some("where else to find me"),
            Self::Coffee => None,
        }
    }

    /// Exact-name lookup on already normalized input.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Output lines, in display order.
    pub fn output(self) -> Vec<String> {
        match self {
            Self::Help => help_lines(),
            Self::Whoami => to_lines(&[
                "brandon gundrum: developer, designer, tinkerer.",
                "self-taught through design first, then code, then systems.",
                "started on mmorpg servers; now builds tools, game systems,",
                "web apps, and full-stack projects, usually solo.",
            ]),
            Self::Stack => to_lines(&[
                "languages  c, c++, c#, javascript, typescript, python, sql",
                "frontend   react, tailwind css, html/css, vite, electron",
                "backend    node.js, express, sqlite, mariadb, postgresql",
                "tools      git, linux, docker, cmake, nginx, vs code",
                "domains    multiplayer systems, ui architecture, build tooling",
            ]),
            Self::Ls => Section::ALL
                .iter()
                .map(|s| format!("  {:<13}{}", format!("{}/", s.key()), s.title()))
                .collect(),
            Self::Socials => to_lines(&[
                "github    https://github.com/Caibran",
                "linkedin  https://linkedin.com",
                "twitter   https://twitter.com",
            ]),
            Self::Coffee => to_lines(&[
                "brewing...",
                "error 418: i'm a teapot.",
            ]),
        }
    }
}

fn to_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

fn help_lines() -> Vec<String> {
    let mut lines = vec!["available commands:".to_string()];
    for cmd in ShellCommand::ALL {
        if let Some(desc) = cmd.description() {
            lines.push(format!("  {:<14}{desc}", cmd.name()));
        }
    }
    lines.push(format!("  {:<14}go to a section (see ls)", "cd <section>"));
    lines.push(format!("  {:<14}wipe the screen", "clear"));
    lines.push(format!("  {:<14}continue to the site", "enter / ↓"));
    lines
}

// ---------------------------------------------------------------------------
// Input classification
// ---------------------------------------------------------------------------

/// What a submitted shell line asks for, in dispatch precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellInput<'a> {
    /// Nothing typed: continue to the home page.
    Empty,
    /// `cd <target>`, target with one leading `/` removed.
    Cd(&'a str),
    /// Wipe the history.
    Clear,
    /// A command from the table.
    Command(ShellCommand),
    /// Anything else.
    Unknown(&'a str),
}

/// Normalize raw input: trimmed and lower-cased.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Classify normalized input.
///
/// The `cd` target keeps any inner whitespace: `cd  about` asks for
/// `" about"`, which matches no section.
pub fn parse_input(input: &str) -> ShellInput<'_> {
    if input.is_empty() {
        return ShellInput::Empty;
    }
    if let Some(rest) = input.strip_prefix("cd ") {
        return ShellInput::Cd(rest.strip_prefix('/').unwrap_or(rest));
    }
    if input == "clear" {
        return ShellInput::Clear;
    }
    match ShellCommand::from_name(input) {
        Some(cmd) => ShellInput::Command(cmd),
        None => ShellInput::Unknown(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_keys_and_paths_are_a_bijection() {
        let keys: HashSet<_> = Section::ALL.iter().map(|s| s.key()).collect();
        let paths: HashSet<_> = Section::ALL.iter().map(|s| s.path()).collect();
        assert_eq!(keys.len(), Section::ALL.len());
        assert_eq!(paths.len(), Section::ALL.len());
        for s in Section::ALL {
            assert_eq!(Section::from_key(s.key()), Some(s));
            assert_eq!(Section::from_path(s.path()), Some(s));
            assert_eq!(s.path(), format!("/{}", s.key()));
        }
    }

    #[test]
    fn unknown_section_key() {
        assert_eq!(Section::from_key("bogus"), None);
        assert_eq!(Section::from_key("Home"), None);
        assert_eq!(Section::from_key(""), None);
    }

    #[test]
    fn ls_lists_every_section_key() {
        let out = ShellCommand::Ls.output();
        assert_eq!(out.len(), Section::ALL.len());
        for (line, s) in out.iter().zip(Section::ALL) {
            assert!(line.contains(&format!("{}/", s.key())), "{line}");
        }
    }

    #[test]
    fn help_lists_listed_commands_only() {
        let out = ShellCommand::Help.output();
        for cmd in ShellCommand::ALL {
            let listed = out.iter().any(|l| l.trim_start().starts_with(cmd.name()));
            assert_eq!(listed, cmd.description().is_some(), "{}", cmd.name());
        }
        assert!(out.iter().any(|l| l.contains("cd <section>")));
        assert!(out.iter().any(|l| l.contains("clear")));
    }

    #[test]
    fn every_command_has_output() {
        for cmd in ShellCommand::ALL {
            assert!(!cmd.output().is_empty(), "{}", cmd.name());
            assert_eq!(ShellCommand::from_name(cmd.name()), Some(cmd));
        }
    }

    #[test]
    fn output_is_stable() {
        for cmd in ShellCommand::ALL {
            assert_eq!(cmd.output(), cmd.output());
        }
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  WhoAmI \n"), "whoami");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn parse_precedence() {
        assert_eq!(parse_input(""), ShellInput::Empty);
        assert_eq!(parse_input("cd about"), ShellInput::Cd("about"));
        assert_eq!(parse_input("clear"), ShellInput::Clear);
        assert_eq!(parse_input("help"), ShellInput::Command(ShellCommand::Help));
        assert_eq!(parse_input("rm -rf"), ShellInput::Unknown("rm -rf"));
    }

    #[test]
    fn cd_strips_one_leading_slash() {
        assert_eq!(parse_input("cd /gallery"), ShellInput::Cd("gallery"));
        assert_eq!(parse_input("cd //gallery"), ShellInput::Cd("/gallery"));
        assert_eq!(parse_input("cd /"), ShellInput::Cd(""));
    }

    #[test]
    fn cd_keeps_inner_whitespace() {
        assert_eq!(parse_input("cd  about"), ShellInput::Cd(" about"));
    }

    #[test]
    fn bare_cd_is_not_navigation() {
        assert_eq!(parse_input("cd"), ShellInput::Unknown("cd"));
    }

    #[test]
    fn command_match_is_exact() {
        assert_eq!(parse_input("help me"), ShellInput::Unknown("help me"));
        assert_eq!(parse_input("clear all"), ShellInput::Unknown("clear all"));
    }
}
