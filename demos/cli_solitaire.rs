//! CLI solitaire example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use klrs::{Card, Solitaire, TABLEAU_PILES};

fn main() {
    println!("Klondike CLI example (type '?' for help, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Solitaire::new(seed);
    game.new_game();

    loop {
        print_table(&game);

        if game.is_won() {
            println!("You won! Type 'n' for a new game or 'q' to quit.");
        }

        let line = prompt_line("> ");
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");

        let result = match command {
            "d" | "draw" => game.draw_card().map(|_| ()).map_err(describe),
            "r" | "recycle" => game.shuffle_discard_pile().map_err(describe),
            "f" | "foundation" => game.play_discard_to_foundation().map(|_| ()).map_err(describe),
            "t" | "tableau" => match parse_index(parts.next()) {
                Some(target) => game
                    .play_discard_to_tableau(target)
                    .map(|_| ())
                    .map_err(describe),
                None => Err("usage: t <pile 1-7>".to_string()),
            },
            "m" | "move" => match parse_index(parts.next()) {
                Some(source) => game
                    .move_tableau_card_to_foundation(source)
                    .map(|_| ())
                    .map_err(describe),
                None => Err("usage: m <pile 1-7>".to_string()),
            },
            "v" | "run" => {
                match (
                    parse_index(parts.next()),
                    parts.next().and_then(|s| s.parse::<usize>().ok()),
                    parse_index(parts.next()),
                ) {
                    (Some(source), Some(card_number), Some(target)) if card_number > 0 => game
                        .move_tableau_run(source, card_number - 1, target)
                        .map_err(describe),
                    _ => Err("usage: v <source 1-7> <card number> <target 1-7>".to_string()),
                }
            }
            "x" | "flip" => match parse_index(parts.next()) {
                Some(pile) => game.flip_top_tableau_card(pile).map_err(describe),
                None => Err("usage: x <pile 1-7>".to_string()),
            },
            "n" | "new" => {
                game.new_game();
                Ok(())
            }
            "?" | "help" => {
                print_help();
                Ok(())
            }
            "q" | "quit" => return,
            "" => Ok(()),
            _ => Err(format!("unknown command: {command}")),
        };

        if let Err(message) = result {
            println!("{message}");
        }
    }
}

fn describe<E: std::error::Error>(err: E) -> String {
    format!("Move rejected: {err}")
}

fn parse_index(arg: Option<&str>) -> Option<usize> {
    let number: usize = arg?.parse().ok()?;
    (1..=TABLEAU_PILES).contains(&number).then(|| number - 1)
}

fn print_help() {
    println!("  d              draw a card onto the discard pile");
    println!("  r              recycle the discard pile into the draw pile");
    println!("  f              play the top discard card to its foundation");
    println!("  t <pile>       play the top discard card onto a tableau pile");
    println!("  m <pile>       move a tableau pile's top card to its foundation");
    println!("  v <s> <c> <t>  move the run starting at card c from pile s to pile t");
    println!("  x <pile>       flip a tableau pile's exposed top card");
    println!("  n              start a new game");
    println!("  q              quit");
}

fn render(card: Card) -> String {
    if card.is_face_up() {
        format!("{card}")
    } else {
        "##".to_string()
    }
}

fn print_table(game: &Solitaire) {
    let foundations = game.foundations();
    let summary: Vec<String> = foundations
        .iter()
        .map(|pile| format!("{}:{:2}", pile.suit().short_char(), pile.value()))
        .collect();

    let discard = game
        .discard_top()
        .map_or_else(|| "--".to_string(), render);

    println!();
    println!(
        "stock: {:2}   waste: {}   foundations: {}",
        game.cards_remaining(),
        discard,
        summary.join("  ")
    );

    for (index, pile) in game.tableau_piles().iter().enumerate() {
        let cards: Vec<String> = pile.iter().map(|&card| render(card)).collect();
        println!("  {}: {}", index + 1, cards.join(" "));
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
    line.trim().to_string()
}
