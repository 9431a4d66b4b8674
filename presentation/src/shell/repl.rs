//! REPL (Read-Eval-Print Loop) for staging and saving settings

use crate::config::ShellConfig;
use crate::output::console::ConsoleFormatter;
use crate::shell::command::{HELP, ShellCommand};
use colored::Colorize;
use orgsettings_application::{
    CatalogFetcher, DataverseTransport, ReconcileOutcome, SettingsSession,
};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::sync::Arc;

/// Interactive edit shell over one settings session
pub struct EditShell<T, F>
where
    T: DataverseTransport + 'static,
    F: CatalogFetcher + 'static,
{
    session: Arc<SettingsSession<T, F>>,
    config: ShellConfig,
}

impl<T, F> EditShell<T, F>
where
    T: DataverseTransport + 'static,
    F: CatalogFetcher + 'static,
{
    pub fn new(session: Arc<SettingsSession<T, F>>) -> Self {
        Self {
            session,
            config: ShellConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ShellConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the shell until `quit` or Ctrl-D.
    pub async fn run(&self) -> std::io::Result<()> {
        let mut line_editor = self.line_editor();
        self.print_welcome();

        loop {
            let prompt = self.prompt();
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match ShellCommand::parse(line) {
                        Ok(ShellCommand::Quit) => break,
                        Ok(command) => self.execute(command).await,
                        Err(message) => {
                            println!("{}", message.red());
                            println!("Type help for available commands");
                        }
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => break,
                #[allow(unreachable_patterns)]
                _ => continue,
            }
        }

        let pending = self.session.snapshot().dirty_count();
        if pending > 0 {
            println!(
                "{} {} staged change(s) discarded",
                "!".yellow(),
                pending
            );
        }
        println!("Bye!");
        Ok(())
    }

    fn line_editor(&self) -> Reedline {
        let line_editor = Reedline::create();
        let Some(path) = &self.config.history_file else {
            return line_editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(self.config.history_size, path.clone()) {
            Ok(history) => line_editor.with_history(Box::new(history)),
            Err(e) => {
                tracing::warn!("Shell history unavailable at {}: {}", path.display(), e);
                line_editor
            }
        }
    }

    /// `orgsettings` or `orgsettings*` while edits are staged.
    fn prompt(&self) -> DefaultPrompt {
        let marker = if self.session.snapshot().has_pending_edits() {
            "*"
        } else {
            ""
        };
        DefaultPrompt::new(
            DefaultPromptSegment::Basic(format!("orgsettings{}", marker)),
            DefaultPromptSegment::Empty,
        )
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Organization Settings - Shell        │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        if !self.session.is_connected() {
            println!("{}", "Not connected: values are blank and saving is disabled.".yellow());
        }
        println!("{} settings loaded. Type help for commands.", self.session.snapshot().len());
        println!();
    }

    async fn execute(&self, command: ShellCommand) {
        match command {
            ShellCommand::List(options) => {
                let snapshot = self.session.snapshot();
                print!("{}", ConsoleFormatter::format_table(&options.select(&snapshot)));
            }
            ShellCommand::Show(name) => match self.session.snapshot().find(&name) {
                Some(record) => println!("{}", ConsoleFormatter::format_detail(record)),
                None => println!("{} Unknown setting: {}", "x".red(), name.trim()),
            },
            ShellCommand::Edit(name) => match self.session.begin_edit(&name).await {
                Ok(()) => println!("Editing {}", name.trim().bold()),
                Err(e) => println!("{} {}", "x".red(), e),
            },
            ShellCommand::Set { name, value } => match self.session.stage(&name, &value).await {
                Ok(stored) if stored != value => {
                    println!("{} = {} (adjusted from '{}')", name.trim(), stored.yellow(), value)
                }
                Ok(stored) => println!("{} = {}", name.trim(), stored.yellow()),
                Err(e) => println!("{} {}", "x".red(), e),
            },
            ShellCommand::Toggle(name) => match self.session.toggle(&name).await {
                Ok(stored) => println!("{} = {}", name.trim(), stored.yellow()),
                Err(e) => println!("{} {}", "x".red(), e),
            },
            ShellCommand::Revert(name) => match self.session.revert(&name).await {
                Ok(()) => println!("Reverted {}", name.trim()),
                Err(e) => println!("{} {}", "x".red(), e),
            },
            ShellCommand::Diff => {
                let payload = self.session.preview_payload().await;
                print!("{}", ConsoleFormatter::format_payload(payload.as_deref()));
            }
            ShellCommand::Save => {
                let outcome = self.session.save().await;
                print!("{}", ConsoleFormatter::format_commit(&outcome));
            }
            ShellCommand::Reload => match self.session.reload().await {
                ReconcileOutcome::Applied {
                    records,
                    live_error: None,
                } => println!("{} Reloaded {} settings", "v".green(), records),
                ReconcileOutcome::Applied {
                    live_error: Some(e),
                    ..
                } => println!("{} {}", "!".yellow(), e),
                ReconcileOutcome::Superseded | ReconcileOutcome::Unchanged => {}
            },
            ShellCommand::Help => println!("{}", HELP),
            ShellCommand::Quit => {}
        }
    }
}
