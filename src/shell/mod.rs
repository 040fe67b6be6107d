//! Prompt loop driving the user store.

pub mod action;
pub mod notify;
pub mod prompt;

use anyhow::Result;

use crate::ui::NerdFont;
use crate::users::store::{IdGenerator, UuidGenerator};
use crate::users::{FieldValue, NewUser, UserField, UserStore, UserStoreError, ValidationError};

pub use action::Action;
pub use notify::{ConsoleNotifier, Notifier};
pub use prompt::{LinePrompter, Prompter, Selection, TerminalPrompter};

pub const DEFAULT_PROMPT: &str = "How can I help you?";

#[derive(Debug, Clone)]
pub struct ShellOptions {
    pub prompt: String,
    pub banner: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            banner: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Owns the store and runs one action per prompt until quit or end of input.
pub struct Shell<P, N, G: IdGenerator = UuidGenerator> {
    store: UserStore<G>,
    prompter: P,
    notifier: N,
    options: ShellOptions,
}

impl<P: Prompter, N: Notifier, G: IdGenerator> Shell<P, N, G> {
    pub fn new(store: UserStore<G>, prompter: P, notifier: N, options: ShellOptions) -> Self {
        Self {
            store,
            prompter,
            notifier,
            options,
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &UserStore<G> {
        &self.store
    }

    pub fn run(&mut self) -> Result<()> {
        if self.options.banner {
            self.banner();
        }

        loop {
            let Some(answer) = self.prompter.text(&self.options.prompt)? else {
                self.farewell();
                break;
            };

            let flow = match answer.parse::<Action>() {
                Ok(action) => self.dispatch(action)?,
                Err(e) => {
                    self.notifier.error("shell.unknown_command", &e.to_string());
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    fn banner(&mut self) {
        self.notifier.plain("");
        self.notifier.plain(&format!(
            "{} Welcome to the UsersApp!",
            char::from(NerdFont::Hand)
        ));
        self.notifier.separator();
        self.notifier.info("shell.actions", "Available actions");
        for action in Action::ALL {
            self.notifier.plain(&format!(
                "  {} {} – {}",
                char::from(action.icon()),
                action.token(),
                action.description()
            ));
        }
        self.notifier.plain("");
    }

    fn farewell(&mut self) {
        self.notifier.info("shell.quit", "Bye bye!");
    }

    fn dispatch(&mut self, action: Action) -> Result<Flow> {
        self.notifier
            .debug("shell.action", &format!("Running action '{}'", action));
        match action {
            Action::List => {
                self.notifier.show_users(self.store.list());
                Ok(Flow::Continue)
            }
            Action::Add => self.add(),
            Action::Update => self.update(),
            Action::Remove => self.remove(),
            Action::Quit => {
                self.farewell();
                Ok(Flow::Quit)
            }
        }
    }

    /// Ask for the next answer; closed input ends the session.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer = self.prompter.text(prompt)?;
        if answer.is_none() {
            self.farewell();
        }
        Ok(answer)
    }

    fn add(&mut self) -> Result<Flow> {
        let Some(name) = self.ask("Enter name")? else {
            return Ok(Flow::Quit);
        };
        let Some(raw_age) = self.ask("Enter age")? else {
            return Ok(Flow::Quit);
        };

        let age = match UserField::Age.coerce(&raw_age) {
            FieldValue::Number(age) => age,
            FieldValue::Text(text) => {
                self.report(&UserStoreError::from(ValidationError::AgeNotANumber(text)));
                return Ok(Flow::Continue);
            }
        };

        match self.store.add(NewUser::new(name, age)) {
            Ok(user) => {
                let id = user.id.to_string();
                self.notifier
                    .debug("users.add", &format!("Stored user with id {}", id));
                self.notifier.success(
                    "users.add.ok",
                    &format!("User has been successfully added! (id: {})", id),
                );
            }
            Err(e) => self.report(&e),
        }
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> Result<Flow> {
        let Some(id) = self.ask("Enter id")? else {
            return Ok(Flow::Quit);
        };

        let fields = UserField::ALL.map(UserField::as_str);
        let field = match self.prompter.choice("What do you want to change", &fields)? {
            Selection::Picked(idx) => UserField::ALL[idx],
            Selection::Cancelled => {
                self.notifier.info("users.update.cancelled", "Update cancelled");
                return Ok(Flow::Continue);
            }
            Selection::Closed => {
                self.farewell();
                return Ok(Flow::Quit);
            }
        };

        let Some(raw_value) = self.ask("Enter new value")? else {
            return Ok(Flow::Quit);
        };
        let value = field.coerce(&raw_value);

        self.notifier.debug(
            "users.update",
            &format!("Setting {} of {} to {}", field, id.trim(), value),
        );
        match self.store.update(id.trim(), field, value) {
            Ok(_) => self
                .notifier
                .success("users.update.ok", "User successfully changed!"),
            Err(e) => self.report(&e),
        }
        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> Result<Flow> {
        let Some(name) = self.ask("Enter name")? else {
            return Ok(Flow::Quit);
        };

        match self.store.remove(&name) {
            Ok(user) => {
                self.notifier
                    .debug("users.remove", &format!("Removed user with id {}", user.id));
                self.notifier.success("users.remove.ok", "User deleted!");
            }
            Err(e) => self.report(&e),
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, err: &UserStoreError) {
        self.notifier.error(err.code(), &err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::notify::testing::RecordingNotifier;
    use super::*;
    use crate::ui::Level;
    use std::collections::VecDeque;

    /// Answers prompts from a fixed script; an exhausted script is closed input.
    /// A choice answer that is not one of the choices dismisses the picker.
    #[derive(Default)]
    struct ScriptedPrompter {
        answers: VecDeque<String>,
        prompts: Vec<String>,
    }

    impl ScriptedPrompter {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                prompts: Vec::new(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn text(&mut self, prompt: &str) -> Result<Option<String>> {
            self.prompts.push(prompt.to_string());
            Ok(self.answers.pop_front())
        }

        fn choice(&mut self, prompt: &str, choices: &[&str]) -> Result<Selection> {
            self.prompts.push(prompt.to_string());
            Ok(match self.answers.pop_front() {
                None => Selection::Closed,
                Some(a) => match choices.iter().position(|c| *c == a) {
                    Some(idx) => Selection::Picked(idx),
                    None => Selection::Cancelled,
                },
            })
        }
    }

    type TestShell = Shell<ScriptedPrompter, RecordingNotifier>;

    fn quiet() -> ShellOptions {
        ShellOptions {
            banner: false,
            ..ShellOptions::default()
        }
    }

    fn run(answers: &[&str]) -> TestShell {
        run_with(UserStore::new(), answers)
    }

    fn run_with(store: UserStore, answers: &[&str]) -> TestShell {
        let mut shell = Shell::new(
            store,
            ScriptedPrompter::new(answers),
            RecordingNotifier::default(),
            quiet(),
        );
        shell.run().unwrap();
        shell
    }

    fn last_code(shell: &TestShell) -> &str {
        &shell.notifier.last().unwrap().1
    }

    #[test]
    fn test_add_then_list() {
        let shell = run(&["add", "Alice", "30", "list", "quit"]);

        assert_eq!(shell.store().len(), 1);
        let listing = &shell.notifier.listings[0];
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].name, "Alice");
        assert_eq!(listing[0].age, 30);
        assert!(shell.notifier.codes().contains(&"users.add.ok"));
        assert_eq!(last_code(&shell), "shell.quit");
    }

    #[test]
    fn test_add_empty_name_reports_error() {
        let shell = run(&["add", "", "30", "quit"]);

        assert!(shell.store().is_empty());
        let (level, code, message) = shell.notifier.visible()[0].clone();
        assert_eq!(level, Level::Error);
        assert_eq!(code, "users.add.invalid");
        assert!(message.starts_with("Wrong data!"));
    }

    #[test]
    fn test_add_non_numeric_age_is_rejected() {
        let shell = run(&["add", "Alice", "thirty", "quit"]);

        assert!(shell.store().is_empty());
        assert!(shell.notifier.codes().contains(&"users.add.invalid"));
    }

    #[test]
    fn test_add_zero_age_is_rejected() {
        let shell = run(&["add", "Alice", "0", "quit"]);
        assert!(shell.store().is_empty());
        assert!(shell.notifier.codes().contains(&"users.add.invalid"));
    }

    #[test]
    fn test_update_age_and_type_mismatch() {
        let mut store = UserStore::new();
        let id = store.add(NewUser::new("Alice", 30)).unwrap().id.to_string();

        let shell = run_with(
            store,
            &["update", id.as_str(), "age", "31", "update", id.as_str(), "age", "x", "quit"],
        );

        assert_eq!(shell.store().get(&id).unwrap().age, 31);
        let codes = shell.notifier.codes();
        assert!(codes.contains(&"users.update.ok"));
        assert!(codes.contains(&"users.update.type_mismatch"));
    }

    #[test]
    fn test_update_name() {
        let mut store = UserStore::new();
        let id = store.add(NewUser::new("Alice", 30)).unwrap().id.to_string();

        let padded = format!(" {} ", id);
        let shell = run_with(store, &["update", padded.as_str(), "name", "Alicia", "quit"]);

        assert_eq!(shell.store().get(&id).unwrap().name, "Alicia");
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = UserStore::new();
        store.add(NewUser::new("Alice", 30)).unwrap();
        let before = store.list().to_vec();

        let shell = run_with(store, &["update", "nope", "age", "31", "quit"]);

        assert_eq!(shell.store().list(), before.as_slice());
        assert!(shell.notifier.codes().contains(&"users.update.not_found"));
    }

    #[test]
    fn test_dismissed_field_picker_keeps_session() {
        let mut store = UserStore::new();
        let id = store.add(NewUser::new("Alice", 30)).unwrap().id.to_string();

        let shell = run_with(store, &["update", id.as_str(), "<esc>", "list", "quit"]);

        assert!(shell.prompter.answers.is_empty());
        assert_eq!(
            shell.notifier.codes(),
            vec!["users.update.cancelled", "shell.quit"]
        );
        assert_eq!(shell.notifier.listings.len(), 1);
        assert_eq!(shell.notifier.listings[0][0].age, 30);
    }

    #[test]
    fn test_closed_input_at_field_picker_ends_session() {
        let mut store = UserStore::new();
        let id = store.add(NewUser::new("Alice", 30)).unwrap().id.to_string();

        let shell = run_with(store, &["update", id.as_str()]);

        assert_eq!(shell.notifier.codes(), vec!["shell.quit"]);
        assert_eq!(shell.store().list()[0].age, 30);
    }

    #[test]
    fn test_remove_on_empty_store() {
        let shell = run(&["remove", "Alice", "quit"]);

        let (level, code, _) = shell.notifier.visible()[0].clone();
        assert_eq!(level, Level::Error);
        assert_eq!(code, "users.remove.not_found");
        assert_eq!(last_code(&shell), "shell.quit");
    }

    #[test]
    fn test_remove_existing_user() {
        let shell = run(&[
            "add", "Alice", "30", "add", "Bob", "41", "remove", "Alice", "list", "quit",
        ]);

        assert_eq!(shell.store().len(), 1);
        assert_eq!(shell.notifier.listings[0][0].name, "Bob");
        assert!(shell.notifier.codes().contains(&"users.remove.ok"));
    }

    #[test]
    fn test_unknown_command_keeps_prompting() {
        let shell = run(&["delete", "list", "quit"]);

        assert_eq!(shell.notifier.codes()[0], "shell.unknown_command");
        assert_eq!(shell.notifier.visible()[0].2, "Command not found: 'delete'");
        assert_eq!(shell.notifier.listings.len(), 1);
    }

    #[test]
    fn test_quit_stops_prompting() {
        let shell = run(&["quit", "add", "Alice", "30"]);

        assert!(shell.store().is_empty());
        assert_eq!(shell.prompter.prompts, vec![DEFAULT_PROMPT.to_string()]);
        assert_eq!(shell.notifier.visible()[0].2, "Bye bye!");
    }

    #[test]
    fn test_closed_input_ends_session() {
        let shell = run(&["add", "Alice"]);

        assert!(shell.store().is_empty());
        assert_eq!(last_code(&shell), "shell.quit");
    }

    #[test]
    fn test_empty_list_shows_empty_listing() {
        let shell = run(&["list", "quit"]);
        assert_eq!(shell.notifier.listings, vec![Vec::new()]);
    }

    #[test]
    fn test_banner_lists_actions() {
        let mut shell = Shell::new(
            UserStore::new(),
            ScriptedPrompter::new(&["quit"]),
            RecordingNotifier::default(),
            ShellOptions::default(),
        );
        shell.run().unwrap();

        let text = shell.notifier.text.join("\n");
        assert!(text.contains("Welcome to the UsersApp!"));
        for action in Action::ALL {
            assert!(text.contains(&format!("{} – {}", action.token(), action.description())));
        }
        assert_eq!(shell.notifier.codes()[0], "shell.actions");
    }

    #[test]
    fn test_custom_prompt() {
        let mut shell = Shell::new(
            UserStore::new(),
            ScriptedPrompter::new(&["quit"]),
            RecordingNotifier::default(),
            ShellOptions {
                prompt: "users>".to_string(),
                banner: false,
            },
        );
        shell.run().unwrap();
        assert_eq!(shell.prompter.prompts, vec!["users>".to_string()]);
    }
}
