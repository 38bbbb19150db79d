use std::rc::Rc;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use appmenu::{
    actions::{ActionData, ActionRegistry, RecordingDispatcher, ShortcutRegistry},
    config,
    context::{SessionContext, SessionDocument, WorkspaceRegistry},
    menu::{display_title, layout_codes, render, MenuModel, MenuServices},
    observability,
};

#[derive(Parser, Debug)]
#[command(
    name = "appmenu",
    version,
    about = "Builds the notation editor's application menu for a simulated session"
)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the menu tree for the given session state.
    Tree {
        /// Print the tree as JSON instead of an outline.
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        session: SessionArgs,
    },
    /// Lists the configured action registry with shortcuts.
    Actions,
    /// Reports menu commands missing from the configured registry.
    Check,
    /// Dispatches an action through the menu model and prints what was sent.
    Invoke {
        /// Action code, e.g. "file-save".
        code: String,

        /// Argument passed along with the action (repeatable).
        #[arg(long = "arg")]
        args: Vec<String>,

        #[command(flatten)]
        session: SessionArgs,
    },
    /// Makes <NAME> the current workspace in the config file.
    SelectWorkspace { name: String },
    /// Prints the config path that would be used (if any).
    ConfigPath,
    /// Writes a config template if none exists and prints its path.
    InitConfig,
}

#[derive(Args, Debug, Default)]
struct SessionArgs {
    /// Simulate an open document.
    #[arg(long)]
    document: bool,

    /// The document has unsaved changes.
    #[arg(long, requires = "document")]
    modified: bool,

    /// Something is selected in the document.
    #[arg(long, requires = "document")]
    selection: bool,

    /// Note input mode is active.
    #[arg(long, requires = "document")]
    note_input: bool,

    #[arg(long, requires = "document")]
    can_undo: bool,

    #[arg(long, requires = "document")]
    can_redo: bool,
}

struct Session {
    model: MenuModel,
    dispatcher: Rc<RecordingDispatcher>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init_logging(cli.verbose);

    match cli.command {
        Command::Tree { json, session } => {
            let session = open_session(&session)?;
            let tree = session.model.current_tree();
            if json {
                let s = serde_json::to_string_pretty(&*tree).context("serialize menu tree")?;
                println!("{s}");
            } else {
                print!("{}", render::render_text(&tree));
            }
        }
        Command::Actions => {
            let resolved = config::resolve(config::load_optional()?.as_ref());
            for action in resolved.actions.descriptors() {
                let shortcut = resolved.shortcuts.lookup(&action.code).unwrap_or_default();
                println!(
                    "{:<28} {:<40} {shortcut}",
                    action.code,
                    display_title(&action.title)
                );
            }
        }
        Command::Check => {
            let resolved = config::resolve(config::load_optional()?.as_ref());
            let missing = layout_codes()
                .into_iter()
                .filter(|code| resolved.actions.resolve(code).is_none())
                .collect::<Vec<_>>();
            if !missing.is_empty() {
                bail!(
                    "{} menu command(s) are not registered and will be omitted: {}",
                    missing.len(),
                    missing.join(", ")
                );
            }
            println!("All {} menu commands are registered.", layout_codes().len());
        }
        Command::Invoke {
            code,
            args,
            session,
        } => {
            let session = open_session(&session)?;
            match session.model.current_tree().find(&code) {
                None => tracing::warn!(code = %code, "action is not present in the menu"),
                Some(entry) if !entry.enabled => {
                    tracing::warn!(code = %code, "action is currently disabled")
                }
                Some(_) => {}
            }

            let data = (!args.is_empty()).then(|| ActionData(args));
            session.model.invoke_with(&code, data.as_ref());

            for dispatched in session.dispatcher.take() {
                match dispatched.data {
                    Some(data) => println!("{} {}", dispatched.code, data.args().join(" ")),
                    None => println!("{}", dispatched.code),
                }
            }
        }
        Command::SelectWorkspace { name } => {
            let resolved = config::resolve(config::load_optional()?.as_ref());
            let workspaces = resolved.workspaces.list_workspaces()?;
            if !workspaces.iter().any(|w| w.name == name) {
                let mut known = workspaces.iter().map(|w| w.name.as_str()).collect::<Vec<_>>();
                known.sort_unstable();
                bail!(
                    "Unknown workspace '{name}'. Known workspaces: {}",
                    known.join(", ")
                );
            }
            let path = config::patch_current_workspace(&name).context("update config")?;
            println!("{}", path.display());
        }
        Command::ConfigPath => {
            if let Some(path) = config::resolve_config_path() {
                println!("{}", path.display());
            }
        }
        Command::InitConfig => {
            let path = config::ensure_config_file_exists().context("ensure config exists")?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn open_session(args: &SessionArgs) -> Result<Session> {
    let cfg = config::load_optional()?;
    let resolved = config::resolve(cfg.as_ref());

    let context = Rc::new(SessionContext::new());
    let dispatcher = Rc::new(RecordingDispatcher::new());
    let model = MenuModel::new(MenuServices {
        actions: Rc::new(resolved.actions),
        shortcuts: Rc::new(resolved.shortcuts),
        dispatcher: dispatcher.clone(),
        context: context.clone(),
        workspaces: Rc::new(resolved.workspaces),
        settings: resolved.settings,
    });

    if args.document {
        let document = Rc::new(SessionDocument::new());
        document.set_modified(args.modified);
        document.set_undo_state(args.can_undo, args.can_redo);
        document.set_selection(args.selection);
        document.set_note_input(args.note_input);
        context.open(document);
    } else {
        model.rebuild();
    }

    Ok(Session { model, dispatcher })
}
