use crate::render;
use colored::Colorize;
use mayi_core::{Decider, Decision, MeldCandidate, Question, Reply};
use std::io::{BufRead, Write};

/// Answers round questions from a line-based terminal.
///
/// Menus are numbered from 1, card and group indices from 0. End of input
/// or `q` leaves the table.
pub struct ConsoleDecider<R, W> {
    input: R,
    output: W,
    /// Rendered seat names, used when naming meld targets. Seat 0 is the
    /// player at this console.
    seats: Vec<String>,
}

impl<R: BufRead, W: Write> ConsoleDecider<R, W> {
    pub fn new(input: R, output: W, seats: Vec<String>) -> Self {
        Self {
            input,
            output,
            seats,
        }
    }

    fn say(&mut self, text: &str) {
        // a closed terminal surfaces as end of input on the next read
        let _ = writeln!(self.output, "{text}");
    }

    /// Prints `prompt` and reads one trimmed line; `None` means leave.
    fn ask(&mut self, prompt: &str) -> Option<String> {
        write!(self.output, "{prompt}").ok()?;
        self.output.flush().ok()?;
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let line = line.trim().to_string();
                if matches!(line.as_str(), "q" | "quit" | "exit") {
                    None
                } else {
                    Some(line)
                }
            }
        }
    }

    fn invalid<T>(&mut self, text: &str) -> Reply<T> {
        self.say(&render::warning(text));
        Reply::Invalid
    }

    fn menu(&mut self, prompt: &str, options: usize) -> Reply<usize> {
        let Some(line) = self.ask(prompt) else {
            return Reply::Quit;
        };
        match parse_menu(&line, options) {
            Some(index) => Reply::Valid(index),
            None => self.invalid("Invalid entry. Please try again.\n"),
        }
    }

    fn index(&mut self, prompt: &str, len: usize) -> Reply<usize> {
        let Some(line) = self.ask(prompt) else {
            return Reply::Quit;
        };
        if line.is_empty() {
            return self.invalid("Please select a card.\n");
        }
        match parse_index(&line, len) {
            Some(index) => Reply::Valid(index),
            None => self.invalid("Invalid entry. Please try again.\n"),
        }
    }

    fn yes_no(&mut self, prompt: &str) -> Reply<Decision> {
        let prompt = format!("{prompt}\n1. Yes\n2. No\n");
        match self.menu(&prompt, 2) {
            Reply::Valid(0) => Reply::Valid(Decision::Yes),
            Reply::Valid(_) => Reply::Valid(Decision::No),
            Reply::Invalid => Reply::Invalid,
            Reply::Quit => Reply::Quit,
        }
    }

    /// Possessive label of the stack a candidate would join.
    fn target(&self, candidate: &MeldCandidate) -> String {
        match candidate.onto {
            0 => "your".to_string(),
            seat => match self.seats.get(seat) {
                Some(name) => format!("{name}'s"),
                None => format!("seat {seat}'s"),
            },
        }
    }
}

/// 1-based menu entry to a 0-based option.
fn parse_menu(line: &str, options: usize) -> Option<usize> {
    let choice: usize = line.trim().parse().ok()?;
    (1..=options).contains(&choice).then(|| choice - 1)
}

fn parse_index(line: &str, len: usize) -> Option<usize> {
    let index: usize = line.trim().parse().ok()?;
    (index < len).then_some(index)
}

impl<R: BufRead, W: Write> Decider for ConsoleDecider<R, W> {
    fn confirm(&mut self, question: &Question<'_>) -> Reply<Decision> {
        match question {
            Question::GoDown { victory } => {
                self.say(&format!(
                    "{}\n{}",
                    "You may go down using a subset of the following cards:".bright_blue(),
                    render::cards(victory)
                ));
                self.yes_no(&"Will you go down?".cyan().to_string())
            }
            Question::AddWilds { wilds } => {
                self.say(&render::cards(wilds));
                self.yes_no("Would you like to add your wild card(s) to your down cards?")
            }
            Question::MeldAll { candidates } => {
                let lines: String = candidates
                    .iter()
                    .map(|c| {
                        format!(
                            "{} onto {} down cards\n",
                            render::card(&c.card),
                            self.target(c)
                        )
                    })
                    .collect();
                self.say(&format!("You can meld:\n{lines}"));
                self.yes_no("Meld all of them?")
            }
            Question::Meld { candidate } => {
                let prompt = format!(
                    "Meld {} onto {} down cards?",
                    render::card(&candidate.card),
                    self.target(candidate)
                );
                self.yes_no(&prompt)
            }
            _ => Reply::Invalid,
        }
    }

    fn choose(&mut self, question: &Question<'_>) -> Reply<usize> {
        match question {
            Question::DrawSource {
                top_discard,
                deck_available,
                ..
            } => {
                let pile = match top_discard {
                    Some(top) => format!("The discard pile ({})?", render::card(top)),
                    None => "The discard pile (empty)?".to_string(),
                };
                let reply = self.menu(
                    &format!("Will you draw a card from:\n1. The deck?\n2. {pile}\n"),
                    2,
                );
                if reply == Reply::Valid(1) && top_discard.is_none() {
                    return self.invalid("The discard pile is empty.\n");
                }
                if reply == Reply::Valid(0) && !*deck_available {
                    return self.invalid("The deck is empty.\n");
                }
                reply
            }
            Question::DownGroup {
                groups,
                picked,
                pick,
                needed,
            } => {
                let lines: Vec<String> = groups
                    .iter()
                    .enumerate()
                    .map(|(index, group)| {
                        render::group_line(index, group, picked.contains(&index))
                    })
                    .collect();
                self.say(&lines.join("\n"));
                let prompt = format!(
                    "Choose a set of cards with which to go down. (Set {pick} of {needed})\n"
                );
                match self.index(&prompt, groups.len()) {
                    Reply::Valid(index) if !groups[index].selectable() => {
                        self.invalid("Wild cards cannot be picked on their own.\n")
                    }
                    Reply::Valid(index) if picked.contains(&index) => {
                        self.invalid("That set is already picked.\n")
                    }
                    reply => reply,
                }
            }
            Question::Discard { hand, .. } => {
                self.say(&format!("Discard one card.\n{}", render::indexed_cards(hand)));
                self.index("Which card will you discard?\n", hand.len())
            }
            _ => Reply::Invalid,
        }
    }
}
