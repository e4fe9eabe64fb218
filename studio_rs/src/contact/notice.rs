/// Feedback shown to the visitor after a submit attempt settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Sent => "Thank you for your message! We'll get back to you soon.",
            Notice::Failed => "There was an error sending your message. Please try again.",
        }
    }
}

/// User-visible notification channel (alert dialog, terminal, test recorder).
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice)
    }
}

/// Success to stdout, failure to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice {
            Notice::Sent => println!("{}", notice.message()),
            Notice::Failed => eprintln!("{}", notice.message()),
        }
    }
}
