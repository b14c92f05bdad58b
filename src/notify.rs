use log::info;

/// Title attached to every notification.
pub const NOTIFICATION_TITLE: &str = "Guess the Number";

/// Something that can tell the player a game has ended, outside of the game screen itself.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Sends notifications to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str) {
        info!("[{}] {}", NOTIFICATION_TITLE, message);
    }
}

/// Keeps every notification so tests can inspect them.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub messages: Vec<String>,
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}
