use rustyline::{error::ReadlineError, Editor};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error<E> {
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error("Command failed: {0:?}")]
    Command(E),
}

pub trait Repl {
    type Error: std::fmt::Debug;
    const PROMPT: &'static str = ">> ";
    const CONTINUATION_PROMPT: &'static str = ".. ";
    const HISTORY: Option<&'static str> = None;
    fn greeting(&self) -> Option<String> {
        None
    }
    /// Called once per complete, non-blank input.
    fn evaluate(&mut self, input: &str) -> Result<(), Self::Error>;
}

/// Concatenates lines ending with `\` into a single input.
#[derive(Default, Debug)]
struct Pending(Option<String>);

impl Pending {
    fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the whole input once a line without a trailing `\` arrives.
    fn push(&mut self, line: &str) -> Option<String> {
        let (line, more) = match line.strip_suffix('\\') {
            Some(head) => (head, true),
            None => (line, false),
        };
        let input = match self.0.take() {
            Some(mut input) => {
                input.push_str(line);
                input
            }
            None => line.to_string(),
        };
        if more {
            self.0 = Some(input);
            None
        } else {
            Some(input)
        }
    }
}

pub fn start_repl<R: Repl>(mut repl: R) -> Result<(), Error<R::Error>> {
    let mut editor = Editor::<()>::new();
    if let Some(history) = R::HISTORY {
        editor.load_history(history).ok();
    }
    if let Some(greeting) = repl.greeting() {
        println!("{greeting}");
    }
    let mut pending = Pending::default();
    loop {
        let prompt = if pending.is_empty() {
            R::PROMPT
        } else {
            R::CONTINUATION_PROMPT
        };
        match editor.readline(prompt) {
            Ok(line) => {
                let input = match pending.push(&line) {
                    Some(input) if !input.trim().is_empty() => input,
                    _ => continue,
                };
                editor.add_history_entry(input.as_str());
                repl.evaluate(&input).map_err(Error::Command)?;
                if let Some(history) = R::HISTORY {
                    editor.save_history(history)?;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("Bye!");
                break Ok(());
            }
            Err(e) => break Err(e.into()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_continuation() {
        let mut pending = Pending::default();
        assert_eq!(pending.push("SK\\"), None);
        assert!(!pending.is_empty());
        assert_eq!(pending.push("K\\"), None);
        assert_eq!(pending.push("S"), Some("SKKS".to_string()));
        assert!(pending.is_empty());
        assert_eq!(pending.push("KS"), Some("KS".to_string()));
    }
}
