//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "vista",
    bin_name = "vista",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Locate and render module/controller/action views",
    long_about = "Vista resolves template references such as `admin@user/list` \
                  to view files and renders them with configurable delimiters.",
    after_help = "EXAMPLES:\n\
        \x20 vista render --controller Index --action index --data '{\"name\":\"Ann\"}'\n\
        \x20 vista resolve admin@user/list\n\
        \x20 vista display emails.welcome --data-file welcome.json\n\
        \x20 vista completions bash > /usr/share/bash-completion/completions/vista",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a template reference to stdout.
    #[command(
        visible_alias = "r",
        about = "Render a template reference",
        after_help = "EXAMPLES:\n\
            \x20 vista render                      # current controller/action\n\
            \x20 vista render edit --data '{\"id\":1}'\n\
            \x20 vista render admin@user/list --set view_suffix=tpl"
    )]
    Render(RenderArgs),

    /// Render a named view located by the finder.
    #[command(
        about = "Render a named view",
        after_help = "EXAMPLES:\n\
            \x20 vista display emails.welcome --data '{\"user\":\"ann\"}'"
    )]
    Display(DisplayArgs),

    /// Check whether a reference resolves to a template file.
    #[command(
        about = "Check that a template exists",
        after_help = "Exits with status 0 when the template exists and 3 when it does not."
    )]
    Exists(ReferenceArgs),

    /// Print the path a reference resolves to.
    #[command(
        about = "Print the resolved template path",
        after_help = "EXAMPLES:\n\
            \x20 vista resolve\n\
            \x20 vista resolve /layout/main\n\
            \x20 vista resolve admin@user/list --module index"
    )]
    Resolve(ReferenceArgs),

    /// List the views available to the current request.
    #[command(
        visible_alias = "ls",
        about = "List available views",
        after_help = "EXAMPLES:\n\
            \x20 vista list\n\
            \x20 vista list --module admin --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 vista completions bash > ~/.local/share/bash-completion/completions/vista\n\
            \x20 vista completions zsh  > ~/.zfunc/_vista\n\
            \x20 vista completions fish > ~/.config/fish/completions/vista.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 vista config get view.view_suffix\n\
            \x20 vista config list\n\
            \x20 vista config path"
    )]
    Config(ConfigCommands),
}

// ── shared argument groups ────────────────────────────────────────────────────

/// The request a reference is resolved for.
#[derive(Debug, Clone, Args)]
pub struct RequestArgs {
    /// Current module.
    #[arg(
        short = 'm',
        long = "module",
        value_name = "MODULE",
        default_value = "index",
        help = "Module of the current request"
    )]
    pub module: String,

    /// Current controller; dots separate nested controllers.
    #[arg(
        long = "controller",
        value_name = "CONTROLLER",
        default_value = "Index",
        help = "Controller of the current request (e.g. Index, admin.UserGroup)"
    )]
    pub controller: String,

    /// Current action.
    #[arg(
        long = "action",
        value_name = "ACTION",
        default_value = "index",
        help = "Action of the current request"
    )]
    pub action: String,
}

/// Option overrides applied on top of the loaded configuration.
#[derive(Debug, Clone, Default, Args)]
pub struct OverrideArgs {
    /// `key=value` view option; the value is parsed as JSON, else taken as a string.
    #[arg(
        short = 's',
        long = "set",
        value_name = "KEY=VALUE",
        help = "Override a view option (repeatable)"
    )]
    pub set: Vec<String>,
}

/// Template variables.
#[derive(Debug, Clone, Default, Args)]
pub struct DataArgs {
    /// Inline JSON object.
    #[arg(
        short = 'd',
        long = "data",
        value_name = "JSON",
        help = "Template variables as a JSON object"
    )]
    pub data: Option<String>,

    /// JSON file holding an object; `--data` keys override it.
    #[arg(
        long = "data-file",
        value_name = "FILE",
        help = "Read template variables from a JSON file"
    )]
    pub data_file: Option<PathBuf>,
}

// ── render / display ──────────────────────────────────────────────────────────

/// Arguments for `vista render`.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Template reference (`[module@]path`); empty means controller/action.
    #[arg(value_name = "REFERENCE", default_value = "")]
    pub reference: String,

    #[command(flatten)]
    pub request: RequestArgs,

    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// Arguments for `vista display`.
#[derive(Debug, Args)]
pub struct DisplayArgs {
    /// Dotted view name, e.g. `emails.welcome`.
    #[arg(value_name = "NAME")]
    pub name: String,

    #[command(flatten)]
    pub request: RequestArgs,

    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

// ── exists / resolve ──────────────────────────────────────────────────────────

/// Arguments shared by `vista exists` and `vista resolve`.
#[derive(Debug, Args)]
pub struct ReferenceArgs {
    /// Template reference (`[module@]path`); empty means controller/action.
    #[arg(value_name = "REFERENCE", default_value = "")]
    pub reference: String,

    #[command(flatten)]
    pub request: RequestArgs,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `vista list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "list",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// One name per line.
    List,
    /// Names with the file each resolves to.
    Table,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `vista completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `vista config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `view.view_suffix`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
