use crate::ui::prelude::*;
use crate::users::UserRecord;
use crate::users::table;

/// Where the shell sends status messages and listings.
pub trait Notifier {
    fn notify(&mut self, level: Level, code: &str, message: &str);

    /// Display all users, or a "no data" notice when there are none.
    fn show_users(&mut self, records: &[UserRecord]);

    /// Untagged text such as the banner.
    fn plain(&mut self, text: &str);

    fn separator(&mut self) {}

    fn success(&mut self, code: &str, message: &str) {
        self.notify(Level::Success, code, message);
    }

    fn info(&mut self, code: &str, message: &str) {
        self.notify(Level::Info, code, message);
    }

    fn error(&mut self, code: &str, message: &str) {
        self.notify(Level::Error, code, message);
    }

    fn debug(&mut self, code: &str, message: &str) {
        self.notify(Level::Debug, code, message);
    }
}

/// Terminal output through the global renderer.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, level: Level, code: &str, message: &str) {
        emit(level, code, message, None);
    }

    fn show_users(&mut self, records: &[UserRecord]) {
        match get_output_format() {
            OutputFormat::Json => {
                let data = serde_json::to_value(records).ok();
                emit(Level::Info, "users.list", "Users data", data);
            }
            OutputFormat::Text => {
                emit(Level::Info, "users.list", "Users data", None);
                plain(&table::render(records));
            }
        }
    }

    fn plain(&mut self, text: &str) {
        plain(text);
    }

    fn separator(&mut self) {
        separator();
    }
}
