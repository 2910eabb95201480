use colored::{ColoredString, Colorize};
use mayi_core::{round_scores, Card, DrawSource, Event, Player, RankGroup, RoundState, SeatColor};

/// Suit symbol plus card name, hearts and diamonds in red.
pub fn card(card: &Card) -> String {
    let text = card.to_string();
    if card.suit.is_red() {
        text.red().to_string()
    } else {
        text
    }
}

pub fn cards(cards: &[Card]) -> String {
    cards.iter().map(|c| format!("{}\n", card(c))).collect()
}

pub fn indexed_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(index, c)| format!("{index}: {}\n", card(c)))
        .collect()
}

fn paint(text: &str, color: SeatColor) -> ColoredString {
    match color {
        SeatColor::Red => text.bright_red(),
        SeatColor::Pink => text.bright_magenta(),
        SeatColor::Blue => text.bright_blue(),
        SeatColor::Orange => text.yellow(),
        SeatColor::Green => text.bright_green(),
        SeatColor::Cyan => text.bright_cyan(),
    }
}

pub fn seat_name(player: &Player) -> String {
    match player.color {
        Some(color) => paint(&player.name, color).to_string(),
        None => player.name.bold().to_string(),
    }
}

/// One line of the go-down group picker. Wild groups get `X` instead of an index.
pub fn group_line(index: usize, group: &RankGroup, picked: bool) -> String {
    let names = group
        .cards
        .iter()
        .map(|c| c.rank.name())
        .collect::<Vec<_>>()
        .join(", ");
    if !group.selectable() {
        format!("X: [{names}] (Wild cards, not yet selectable)")
    } else if picked {
        format!("{index}: [{names}] (picked)")
    } else {
        format!("{index}: [{names}]")
    }
}

pub fn warning(text: &str) -> String {
    text.yellow().to_string()
}

/// Turns an event into console text; `human` is the seat whose draws are shown.
pub fn event_line(event: &Event, players: &[Player], human: usize) -> Option<String> {
    let name = |seat: usize| {
        players
            .get(seat)
            .map(seat_name)
            .unwrap_or_else(|| format!("seat {seat}"))
    };
    let owner = |seat: usize| {
        if seat == human {
            "your".to_string()
        } else {
            format!("{}'s", name(seat))
        }
    };
    let line = match event {
        Event::RoundStarted { round, name: title, .. } => {
            format!("Round {round}: {title}").bold().to_string()
        }
        Event::TurnStarted { seat } if *seat == human => return None,
        Event::TurnStarted { seat } => format!("\n{}'s turn.", name(*seat)),
        Event::Drew { seat, source, card: drawn } => match source {
            DrawSource::Deck if *seat == human => {
                format!("You picked up: {} from the deck.", card(drawn))
            }
            DrawSource::Deck => format!("{} draws a card from the deck.", name(*seat)),
            DrawSource::DiscardPile => format!(
                "{} takes {} from the discard pile.",
                name(*seat),
                card(drawn)
            ),
        },
        Event::DeckReshuffled { cards } => warning(&format!(
            "The deck ran out. {cards} discards were shuffled back in."
        )),
        Event::WentDown { seat, cards: down, auto } => {
            let how = if *auto { " (auto-selected)" } else { "" };
            format!("{} went down{how}:\n{}", name(*seat), cards(down).trim_end())
        }
        Event::Melded { seat, card: melded, onto } => format!(
            "{} melds {} onto {} down cards.",
            name(*seat),
            card(melded),
            owner(*onto)
        ),
        Event::Discarded { seat, card: thrown } if *seat == human => {
            format!("You discarded: {}.", card(thrown))
        }
        Event::Discarded { seat, card: thrown } => {
            format!("{} discards: {}.", name(*seat), card(thrown))
        }
        Event::WentOut { seat } => format!("{} went out!", name(*seat)).bold().to_string(),
    };
    Some(line)
}

/// The seat's view of the table: hand with points, down cards, discard pile.
pub fn table(round: &RoundState, seat: usize, verbose: bool) -> String {
    let mut out = String::new();
    let Some(player) = round.players.get(seat) else {
        return out;
    };
    out.push_str(&format!(
        "\nYour hand ({} points):\n{}",
        player.hand_points(),
        cards(player.hand.cards())
    ));
    if !player.down_cards.is_empty() {
        out.push_str(&format!(
            "\nYour down cards:\n{}",
            cards(player.down_cards.cards())
        ));
    }
    for (other, opponent) in round.players.iter().enumerate() {
        if other != seat && opponent.down {
            out.push_str(&format!(
                "\n{}'s down cards:\n{}",
                seat_name(opponent),
                cards(opponent.down_cards.cards())
            ));
        }
    }
    if verbose {
        out.push_str(&format!(
            "\nDiscard pile (bottom to top):\n{}",
            cards(round.discard_pile.cards())
        ));
    } else {
        match round.discard_pile.top() {
            Some(top) => out.push_str(&format!("\nDiscard pile:\n{}\n", card(top))),
            None => out.push_str("\nDiscard pile is empty.\n"),
        }
    }
    out
}

/// Points left in every hand; the seat that went out holds none.
pub fn scores(round: &RoundState) -> String {
    let mut out = String::from("\nRound over.\n");
    for score in round_scores(&round.players) {
        let marker = if round.winner == Some(score.seat) {
            " (went out)"
        } else {
            ""
        };
        out.push_str(&format!(
            "{}: {} points{marker}\n",
            seat_name(&round.players[score.seat]),
            score.points
        ));
    }
    out
}
