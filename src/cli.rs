use clap::{Parser, Subcommand};

/// Terminal lock board: clock, pinned memo, weather and wallpaper carousel.
#[derive(Parser)]
#[command(name = "lockboard", version, about = "Lock screen dashboard with memos and weather")]
pub struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long, global = true, default_value = "lockboard.toml")]
    pub config: String,

    /// Apply changes to an in-memory copy of the store only.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Subcommand to run, defaults to `show`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the lock screen or the dashboard.
    Show {
        /// Show the full dashboard even if the lock screen is enabled.
        #[arg(long)]
        unlock: bool,
    },
    /// Manage memos.
    #[command(subcommand)]
    Memo(MemoCommand),
    /// Manage wallpapers.
    #[command(subcommand)]
    Wallpaper(WallpaperCommand),
    /// Turn the lock screen on or off.
    Lock {
        #[arg(value_enum)]
        state: LockState,
    },
}

#[derive(Subcommand)]
pub enum MemoCommand {
    /// Add a memo.
    Add { text: String },
    /// Delete a memo by id.
    Delete { id: String },
    /// Pin a memo, or unpin it if already pinned.
    Select { id: String },
    /// List all memos.
    List,
}

#[derive(Subcommand)]
pub enum WallpaperCommand {
    /// Add one or more image URIs.
    Add {
        #[arg(required = true)]
        uris: Vec<String>,
    },
    /// Remove every occurrence of the given URIs.
    Remove {
        #[arg(required = true)]
        uris: Vec<String>,
    },
    /// List wallpapers.
    List,
    /// Print the carousel index to jump to for a wallpaper.
    Locate { uri: String },
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum LockState {
    On,
    Off,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["lockboard"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.dry_run);
        assert_eq!(cli.config, "lockboard.toml");
    }

    #[test]
    fn nested_subcommands_parse() {
        let cli = Cli::try_parse_from(["lockboard", "-c", "x.toml", "wallpaper", "add", "a", "b"]).unwrap();
        assert_eq!(cli.config, "x.toml");
        match cli.command {
            Some(Command::Wallpaper(WallpaperCommand::Add { uris })) => assert_eq!(uris, vec!["a", "b"]),
            _ => panic!("expected wallpaper add"),
        }
    }

    #[test]
    fn lock_state_parses() {
        let cli = Cli::try_parse_from(["lockboard", "lock", "on"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Lock { state: LockState::On })));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
