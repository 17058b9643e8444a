//! A small line-oriented REPL (§10) for exercising the four entry points in §6 by hand: set
//! a board, set a deck, set a next-card hint, and ask for the best move. It reads neither a
//! physical game nor a file, and it does not batch self-play games — see §1/§6.

mod options;

use std::process::exit;

use itertools::Itertools;
pub use options::BotServerOptions;

use crate::eval;
use crate::prelude::*;

pub struct BotServer {
    bot: Bot,
    board: Option<PackedBoard>,
    deck: DeckCounter,
    hint: NextCardHint,
}

impl BotServer {
    pub fn new(options: &BotServerOptions) -> Result<BotServer> {
        Ok(BotServer {
            bot: Bot::new(options.search_config()?),
            board: None,
            deck: DeckCounter::FULL,
            hint: NextCardHint::One,
        })
    }

    /// Runs the REPL: reads commands from stdin, one per line, until EOF or `quit`.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let mut cmdstr = String::new();
            let bytes_read = std::io::stdin().read_line(&mut cmdstr)?;
            if bytes_read == 0 {
                return Ok(());
            }

            let args: Vec<&str> = cmdstr.split_whitespace().filter(|s| !s.is_empty()).collect();
            let cmd = *args.first().unwrap_or(&"");

            self.apply(cmd, &args[1..])?;
        }
    }

    fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()> {
        let result = match cmd {
            "" => Ok(()),
            "board" => self.set_board(args),
            "deck" => self.set_deck(args),
            "hint" => self.set_hint(args),
            "bestmove" => self.best_move(),
            "info" => self.info(),
            "quit" => exit(0),
            _ => Err(anyhow!("unrecognized command {cmd}")),
        };

        match result {
            Ok(_) => {
                log::debug!("command completed successfully: {cmd} {}", args.join(" "));
                self.ok()
            }
            Err(err) => {
                log::warn!("encountered recoverable error:\n{err}");
                self.err(&err)
            }
        }
    }

    /// `board <v0>,<v1>,...,<v15>`: sets the board from sixteen comma-separated, row-major
    /// face values.
    fn set_board(&mut self, args: &[&str]) -> Result<()> {
        let literal = args.join(" ");
        let values: Vec<u32> = literal
            .split(',')
            .map(|s| s.trim().parse::<u32>().map_err(Error::from))
            .collect::<Result<_>>()?;
        let cells: LogicalBoard = values
            .try_into()
            .map_err(|values: Vec<u32>| anyhow!("expected 16 cells, got {}", values.len()))?;

        self.board = Some(packed_board_from_logical(cells)?);
        println!("{}", self.board.unwrap());
        Ok(())
    }

    /// `deck <ones> <twos> <threes>`: sets the remaining low-card counts.
    fn set_deck(&mut self, args: &[&str]) -> Result<()> {
        if args.len() != 3 {
            return Err(anyhow!("expected three counts: ones twos threes"));
        }
        let ones = args[0].parse::<u8>()?;
        let twos = args[1].parse::<u8>()?;
        let threes = args[2].parse::<u8>()?;
        self.deck = DeckCounter::new(ones, twos, threes);
        println!("{} {} {}", self.deck.ones(), self.deck.twos(), self.deck.threes());
        Ok(())
    }

    /// `hint <one|two|three|bonus>`: sets what is known about the next card.
    fn set_hint(&mut self, args: &[&str]) -> Result<()> {
        let hint = match args.first().copied().unwrap_or("") {
            "one" => NextCardHint::One,
            "two" => NextCardHint::Two,
            "three" => NextCardHint::Three,
            "bonus" => NextCardHint::Bonus,
            other => return Err(anyhow!("unrecognized hint {other}")),
        };
        self.hint = hint;
        println!("{:?}", self.hint);
        Ok(())
    }

    /// `bestmove`: searches from the current board/deck/hint and prints the chosen
    /// direction, or `none` if the game is over.
    fn best_move(&mut self) -> Result<()> {
        let board = self.board.ok_or_else(|| anyhow!("no board set"))?;
        match self.bot.get_next_move_with_evaluations(board, self.deck, self.hint) {
            Some((direction, evaluations)) => {
                log::debug!("searched {evaluations} leaves ({})", self.bot.description());
                println!("{direction}");
            }
            None => println!("none"),
        }
        Ok(())
    }

    /// `info`: prints the server's identity and search configuration.
    fn info(&self) -> Result<()> {
        println!("id {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        println!("{}", self.bot.description());
        println!("evaluators: {}", eval::NAMES.iter().join(", "));
        Ok(())
    }

    fn err(&self, err: &Error) -> Result<()> {
        println!("err\n{err}");
        self.ok()
    }

    fn ok(&self) -> Result<()> {
        println!("ok");
        Ok(())
    }
}
