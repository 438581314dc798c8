use anyhow::{Context, Result, bail};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io::{self, BufRead, IsTerminal, Write};

/// Ask for a secret without echoing it.
///
/// Falls back to reading a plain line when stdin is not a terminal, so the
/// key can be piped in.
pub fn prompt_secret(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let secret = if io::stdin().is_terminal() {
        read_hidden_line()?
    } else {
        let mut buf = String::new();
        io::stdin()
            .lock()
            .read_line(&mut buf)
            .context("failed to read from stdin")?;
        buf
    };

    Ok(secret.trim().to_string())
}

fn read_hidden_line() -> Result<String> {
    terminal::enable_raw_mode().context("failed to switch terminal to raw mode")?;
    let result = collect_keys();
    // Restore the terminal before reporting any read error.
    terminal::disable_raw_mode().context("failed to restore terminal")?;
    println!();
    result
}

fn collect_keys() -> Result<String> {
    let mut secret = String::new();
    loop {
        if let Event::Key(key) = event::read().context("failed to read key")? {
            match apply_key(&mut secret, key) {
                KeyOutcome::Continue => {}
                KeyOutcome::Done => return Ok(secret),
                KeyOutcome::Aborted => bail!("aborted"),
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum KeyOutcome {
    Continue,
    Done,
    Aborted,
}

fn apply_key(secret: &mut String, key: KeyEvent) -> KeyOutcome {
    if key.kind == KeyEventKind::Release {
        return KeyOutcome::Continue;
    }

    match key.code {
        KeyCode::Enter => KeyOutcome::Done,
        KeyCode::Esc => KeyOutcome::Aborted,
        KeyCode::Char('c') | KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyOutcome::Aborted
        }
        // Editing chords like Ctrl-U or Alt-B are not part of the secret.
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            KeyOutcome::Continue
        }
        KeyCode::Backspace => {
            secret.pop();
            KeyOutcome::Continue
        }
        KeyCode::Char(c) => {
            secret.push(c);
            KeyOutcome::Continue
        }
        _ => KeyOutcome::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_and_backspace() {
        let mut secret = String::new();
        for key in [
            press(KeyCode::Char('s')),
            press(KeyCode::Char('k')),
            press(KeyCode::Char('x')),
            press(KeyCode::Backspace),
        ] {
            assert_eq!(apply_key(&mut secret, key), KeyOutcome::Continue);
        }
        assert_eq!(apply_key(&mut secret, press(KeyCode::Enter)), KeyOutcome::Done);
        assert_eq!(secret, "sk");
    }

    #[test]
    fn ctrl_c_aborts() {
        let mut secret = String::new();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(apply_key(&mut secret, key), KeyOutcome::Aborted);
        assert!(secret.is_empty());
    }

    #[test]
    fn modified_chars_are_not_typed() {
        let mut secret = String::from("sk");
        for key in [
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT),
        ] {
            assert_eq!(apply_key(&mut secret, key), KeyOutcome::Continue);
        }
        let shifted = KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SHIFT);
        assert_eq!(apply_key(&mut secret, shifted), KeyOutcome::Continue);
        assert_eq!(secret, "skK");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut secret = String::new();
        let key = KeyEvent::new_with_kind(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(apply_key(&mut secret, key), KeyOutcome::Continue);
        assert!(secret.is_empty());
    }
}
