//! CLI argument parsing for pracfile.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::DEFAULT_CONFIG_FILE;
use crate::report::Section;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Default document path for `generate`.
pub const DEFAULT_OUTPUT_FILE: &str = "practical_file.html";

/// Pracfile: generate lab-report practical files.
///
/// Each selected section (apparatus, theory, procedure, ...) is written by a
/// text-generation service from the grade, subject and aim of the practical,
/// unless you supply its text yourself. Sections are generated concurrently
/// and assembled into a single markup document.
#[derive(Parser, Debug)]
#[command(name = "pracfile")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (missing file means defaults).
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for pracfile.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a practical file.
    ///
    /// Values from --request are used first; individual flags override them.
    Generate(GenerateArgs),

    /// List the available sections.
    ///
    /// Shows input order, document position and whether a section is
    /// written by the text-generation service.
    Sections,

    /// Configuration commands.
    Config(ConfigCommand),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug, Default)]
pub struct GenerateArgs {
    /// YAML file with the request (grade, subject, aim, sections, overrides, images).
    #[arg(short, long)]
    pub request: Option<PathBuf>,

    /// Class or year, e.g. "10th" or "BTech 1st year".
    #[arg(long)]
    pub grade: Option<String>,

    /// Subject, e.g. "Chemistry".
    #[arg(long)]
    pub subject: Option<String>,

    /// Aim of the practical.
    #[arg(long)]
    pub aim: Option<String>,

    /// The practical involves writing a program.
    #[arg(long)]
    pub programming: bool,

    /// Sections to include (default: all).
    #[arg(long, value_delimiter = ',')]
    pub sections: Vec<Section>,

    /// Observations text; the section is not generated.
    #[arg(long, conflicts_with = "observations_file")]
    pub observations: Option<String>,

    /// Read observations text from a file.
    #[arg(long)]
    pub observations_file: Option<PathBuf>,

    /// Program text; the Code section is not generated.
    #[arg(long, conflicts_with = "code_file")]
    pub code: Option<String>,

    /// Read program text from a file.
    #[arg(long)]
    pub code_file: Option<PathBuf>,

    /// Program output; the Output section is not generated.
    #[arg(long, conflicts_with = "code_output_file")]
    pub code_output: Option<String>,

    /// Read program output from a file.
    #[arg(long)]
    pub code_output_file: Option<PathBuf>,

    /// Attach a diagram or photo (png, jpg, jpeg). Repeatable.
    #[arg(long = "image", value_delimiter = ',')]
    pub images: Vec<PathBuf>,

    /// Output file, or "-" for stdout.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Wrap the document in the preview container.
    #[arg(long)]
    pub preview: bool,

    /// Escape markup characters in section text.
    #[arg(long)]
    pub escape_html: bool,

    /// What to do when a section fails: abort or empty.
    #[arg(long)]
    pub on_failure: Option<String>,

    /// Append an NDJSON audit record of this run to a file.
    #[arg(long)]
    pub events_log: Option<PathBuf>,

    /// Print the plan and prompts without calling the service.
    #[arg(long)]
    pub dry_run: bool,
}

/// Config subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Available config actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as YAML.
    Show,

    /// Write the default configuration file.
    Init(ConfigInitArgs),
}

/// Arguments for the `config init` command.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_minimal() {
        let cli = Cli::try_parse_from(["pracfile", "generate"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("pracfile.yaml"));
        assert_eq!(cli.verbose, 0);
        if let Command::Generate(args) = cli.command {
            assert!(args.request.is_none());
            assert!(args.sections.is_empty());
            assert!(!args.programming);
            assert_eq!(args.output, PathBuf::from("practical_file.html"));
            assert!(!args.dry_run);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn parse_generate_full() {
        let cli = Cli::try_parse_from([
            "pracfile",
            "-vv",
            "generate",
            "--grade",
            "12th",
            "--subject",
            "Computer Science",
            "--aim",
            "binary search",
            "--programming",
            "--sections",
            "aim,code,output,conclusion",
            "--code-file",
            "search.py",
            "--image",
            "a.png,b.jpg",
            "--image",
            "c.jpeg",
            "-o",
            "-",
            "--on-failure",
            "empty",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        if let Command::Generate(args) = cli.command {
            assert_eq!(args.grade.as_deref(), Some("12th"));
            assert!(args.programming);
            assert_eq!(
                args.sections,
                vec![
                    Section::Aim,
                    Section::Code,
                    Section::Output,
                    Section::Conclusion
                ]
            );
            assert_eq!(args.code_file, Some(PathBuf::from("search.py")));
            assert_eq!(args.images.len(), 3);
            assert_eq!(args.output, PathBuf::from("-"));
            assert_eq!(args.on_failure.as_deref(), Some("empty"));
            assert!(args.dry_run);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn parse_unknown_section_fails() {
        let result = Cli::try_parse_from(["pracfile", "generate", "--sections", "aim,abstract"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_code_and_code_file_conflict() {
        let result = Cli::try_parse_from([
            "pracfile",
            "generate",
            "--code",
            "print(1)",
            "--code-file",
            "a.py",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_sections() {
        let cli = Cli::try_parse_from(["pracfile", "sections"]).unwrap();
        assert!(matches!(cli.command, Command::Sections));
    }

    #[test]
    fn parse_config_init_force_with_global_config() {
        let cli =
            Cli::try_parse_from(["pracfile", "config", "init", "--force", "-c", "lab.yaml"])
                .unwrap();
        assert_eq!(cli.config, PathBuf::from("lab.yaml"));
        match cli.command {
            Command::Config(ConfigCommand {
                action: ConfigAction::Init(args),
            }) => assert!(args.force),
            other => panic!("Expected config init, got {:?}", other),
        }
    }

    #[test]
    fn parse_config_show() {
        let cli = Cli::try_parse_from(["pracfile", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand {
                action: ConfigAction::Show
            })
        ));
    }
}
