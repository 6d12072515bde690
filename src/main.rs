//! Same-device two-player terminal game.
//!
//! Commands: `e2e4` / `e2 e4` / `e7e8n` to move, `moves e2` to list legal
//! destinations, `history`, `reset`, `quit`.

#[macro_use]
extern crate clap;

use std::io::{self, BufRead, Write};
use std::process;

use clap::{App, Arg};
use log::info;

use plum_rules::game_state::chess_rules::RulesConfig;
use plum_rules::game_state::chess_types::GameState;
use plum_rules::utils::algebraic::{algebraic_to_position, parse_coordinate_move};
use plum_rules::utils::render_game_state::{render_game_state, PieceStyle};

fn main() {
    env_logger::init();
    let matches = App::new("plum_rules")
        .version(crate_version!())
        .about("Two-player chess in the terminal")
        .arg(
            Arg::with_name("ascii")
                .help("Draw pieces as letters instead of Unicode glyphs")
                .long("ascii"),
        )
        .arg(
            Arg::with_name("fifty-move-limit")
                .help("Half-moves without capture or pawn move before a draw")
                .value_name("HALF_MOVES")
                .long("fifty-move-limit")
                .takes_value(true),
        )
        .get_matches();

    let style = if matches.is_present("ascii") {
        PieceStyle::Ascii
    } else {
        PieceStyle::Unicode
    };

    let mut config = RulesConfig::default();
    if matches.is_present("fifty-move-limit") {
        config.fifty_move_limit = value_t_or_exit!(matches, "fifty-move-limit", u16);
    }

    if let Err(err) = run(GameState::new_game_with_config(config), style) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(mut game: GameState, style: PieceStyle) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", render_game_state(&game, style));
    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim();

        match command {
            "" => {}
            "quit" | "exit" => break,
            "reset" => {
                info!("game reset");
                game = game.reset();
                println!("{}", render_game_state(&game, style));
            }
            "history" => {
                for (index, pair) in game.move_history.chunks(2).enumerate() {
                    let moves: Vec<String> = pair.iter().map(ToString::to_string).collect();
                    println!("{}. {}", index + 1, moves.join(" "));
                }
            }
            _ if command.starts_with("moves ") => {
                match algebraic_to_position(command["moves ".len()..].trim()) {
                    Ok(square) => {
                        game = game.select_square(square);
                        println!("{}", render_game_state(&game, style));
                        let names: Vec<String> =
                            game.possible_moves.iter().map(ToString::to_string).collect();
                        println!("{square}: {}", names.join(" "));
                    }
                    Err(err) => println!("{err}"),
                }
            }
            _ => match parse_coordinate_move(command) {
                Ok((from, to, promotion)) => match game.apply_move(from, to, promotion) {
                    Ok(next) => {
                        game = next;
                        println!("{}", render_game_state(&game, style));
                    }
                    Err(err) => println!("{err}"),
                },
                Err(err) => println!("{err}"),
            },
        }

        stdout.flush()?;
    }

    Ok(())
}
