use std::ffi::OsString;

pub use clap::Parser;
use clap::ValueEnum;

/// How the surfaces are drawn on stdout
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Banner line followed by the display area
    #[default]
    Text,
    /// One JSON object per redraw
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Optional. Profile name to use for the lookups. Default is 'default'.
    /// If the profile is not configured, built-in defaults are used.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// API key
    /// Optional. Sent as a bearer token. Overrides the profile's api_key.
    #[clap(short = 'k', long, help = "API key sent as a bearer token")]
    api_key: Option<String>,

    /// Verbose mode
    /// Optional. Print the outgoing request before each lookup.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,

    #[clap(
        short = 'o',
        long,
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "output format"
    )]
    output: OutputFormat,

    /// Identifiers to look up. Reads one per line from stdin when omitted.
    #[clap(help = "identifiers to look up (reads stdin when omitted)")]
    identifiers: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    api_key: Option<String>,
    verbose: bool,
    output: OutputFormat,
    identifiers: Vec<String>,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            api_key: args.api_key,
            verbose: args.verbose,
            output: args.output,
            identifiers: args.identifiers,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn output(&self) -> OutputFormat {
        self.output
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }
}
