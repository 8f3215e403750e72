use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use git_flow_message::flow::GitFlow;
use git_flow_message::git::CliGitRunner;
use git_flow_message::template::{self, Substitutions};
use git_flow_message::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "git-flow-message",
    about = "Expand commit message templates from git-flow branch state"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Commit message template to expand")]
    template: Option<String>,

    #[arg(short, long, help = "Print the current branch name and exit")]
    branch: bool,

    #[arg(long, help = "Strip the configured git-flow prefix from the branch name")]
    trim: bool,

    #[arg(short, long, help = "Print a git config value and exit")]
    option: Option<String>,

    #[arg(long, help = "Report whether the repository uses git-flow")]
    flow: bool,

    #[arg(short, long, help = "Repository directory (defaults to the solution's directory)")]
    repo: Option<PathBuf>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-flow-message {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load the host snapshot
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let runner = match config.git.program.clone() {
        Some(program) => CliGitRunner::with_program(program),
        None => CliGitRunner::new(),
    };
    let repo_dir = args.repo.clone().or_else(|| config.host.repo_dir());
    let flow = GitFlow::new(&runner, repo_dir);

    if let Some(key) = args.option.as_deref() {
        println!("{}", flow.option(key));
        return Ok(());
    }

    if args.flow {
        if flow.is_git_flow() {
            println!("git-flow");
        } else {
            println!("github-flow");
        }
        return Ok(());
    }

    if args.branch {
        match flow.current_branch_name(args.trim) {
            Ok(name) => println!("{}", name),
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    if let Some(template_str) = args.template.as_deref() {
        for token in template::unrecognized_tokens(template_str) {
            ui::display_warning(&format!("Unrecognized token {} left as-is", token));
        }

        let branch_name = resolve_branch(&flow, false);
        let feature_name = resolve_branch(&flow, true);
        let subs = Substitutions::from_host(&config.host, &branch_name, &feature_name);
        println!("{}", template::expand(template_str, &subs));
        return Ok(());
    }

    ui::display_error("Nothing to do: pass --template, --branch, --option or --flow");
    std::process::exit(1);
}

/// Resolve the branch name for template expansion, surfacing failures to
/// the user and exiting non-zero.
fn resolve_branch(flow: &GitFlow, trim_prefix: bool) -> String {
    match flow.current_branch_name(trim_prefix) {
        Ok(name) => name,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
