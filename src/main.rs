use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use submods::commands::{
    BranchCommand, Command, CommandContext, MrCommand, PushCommand, StatusCommand,
    UpdateParentCommand, validators,
};
use submods::{constants, registry};

#[derive(Parser)]
#[command(name = "submods")]
#[command(about = "A cli tool to coordinate git work across the submodules of a parent repository")]
#[command(version)]
struct Cli {
    /// Path to the parent repository that hosts the submodules
    #[arg(long, global = true, default_value = ".")]
    repo_root: PathBuf,

    /// Limit actions to the given submodule names (comma- or colon-delimited,
    /// repeatable; default: operate on the dirty ones)
    #[arg(long, global = true)]
    modules: Vec<String>,

    /// Include clean submodules in the status output
    #[arg(long, global = true)]
    include_clean: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which submodules have local changes
    Status,

    /// Create or checkout a feature branch inside dirty submodules
    Branch {
        /// Name of the feature branch to use
        #[arg(long)]
        name: String,

        /// Optional base branch to update before creating the feature branch
        /// (ignored when the submodule has uncommitted changes)
        #[arg(long)]
        base: Option<String>,

        /// Remote to use when fetching the base branch
        #[arg(long, default_value_t = constants::git::DEFAULT_REMOTE.to_string())]
        remote: String,

        /// Force recreate the branch if it already exists
        #[arg(long)]
        force: bool,
    },

    /// Push feature branches in dirty submodules
    Push {
        /// Remote to push to
        #[arg(long, default_value_t = constants::git::DEFAULT_REMOTE.to_string())]
        remote: String,

        /// Set upstream when pushing (equivalent to git push -u)
        #[arg(long)]
        set_upstream: bool,
    },

    /// Create merge/pull requests for feature branches in dirty submodules
    Mr {
        /// Target branch for the merge request
        #[arg(long, default_value_t = constants::mr::DEFAULT_TARGET.to_string())]
        target: String,

        /// Title for the merge request/pr
        #[arg(long)]
        title: Option<String>,

        /// Mark the merge request as a draft when supported
        #[arg(long)]
        draft: bool,
    },

    /// Stage updated submodule hashes in the parent repository for dirty
    /// submodules
    UpdateParent,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Malformed CLI input is a plain user error: exit 1, like every
    // other fatal error (clap's default would be 2). Help and version
    // output still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    submods::git::set_verbose(cli.verbose);

    let root = registry::ensure_repo(&cli.repo_root)?;
    let submodules = registry::load_submodules(&root)?;

    if submodules.is_empty() {
        println!(
            "No submodules registered in {}.",
            constants::git::GITMODULES_FILE
        );
        return Ok(());
    }

    // Resolve the explicit selection eagerly, before any module is
    // touched, so a doomed invocation has no partial side effects.
    let tokens: Vec<String> = cli
        .modules
        .iter()
        .flat_map(|raw| validators::parse_module_list(raw))
        .collect();
    let modules = if tokens.is_empty() {
        None
    } else {
        validators::validate_selection(&submodules, &tokens)?;
        Some(tokens)
    };

    let context = CommandContext {
        root,
        submodules,
        modules,
        include_clean: cli.include_clean,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Status => StatusCommand.execute(&context).await,
        Commands::Branch {
            name,
            base,
            remote,
            force,
        } => {
            BranchCommand {
                name,
                base,
                remote,
                force,
            }
            .execute(&context)
            .await
        }
        Commands::Push {
            remote,
            set_upstream,
        } => {
            PushCommand {
                remote,
                set_upstream,
            }
            .execute(&context)
            .await
        }
        Commands::Mr {
            target,
            title,
            draft,
        } => {
            MrCommand {
                target,
                title,
                draft,
            }
            .execute(&context)
            .await
        }
        Commands::UpdateParent => UpdateParentCommand.execute(&context).await,
    }
}
