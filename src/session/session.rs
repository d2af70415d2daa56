use crate::*;

/// Where the round loop currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Waiting for the human's next token.
    AwaitingInput,
    /// The human committed to a move; the round is about to be played out.
    RoundResolved(Move),
    /// No further rounds. Terminal.
    Terminated,
}

/// How an export ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Export {
    /// Nothing was played, so nothing was written.
    Empty,
    /// Rows handed to the sink.
    Written(usize),
}

/// One game against the computer, from first prompt to final export.
///
/// Owns all mutable state for the run. The transition model is updated
/// before the round's moves join the history, so each count pairs the
/// previous human move with the current one.
pub struct Session {
    cap: usize,
    round: usize,
    locale: Locale,
    state: State,
    tally: Tally,
    history: History,
    transitions: Transitions,
    log: Vec<Record>,
    opponent: Box<dyn Opponent>,
}

impl Session {
    pub fn new(config: &Config, opponent: Box<dyn Opponent>) -> Self {
        Self {
            cap: config.rounds.max(1),
            round: 1,
            locale: config.locale,
            state: State::AwaitingInput,
            tally: Tally::default(),
            history: History::default(),
            transitions: Transitions::default(),
            log: Vec::new(),
            opponent,
        }
    }

    /// Runs rounds until the player exits or the cap is hit.
    pub fn play(&mut self, player: &mut dyn Player) {
        while self.step(player) != State::Terminated {}
        log::info!(
            "session over after {} rounds (human {}, opponent {}, ties {})",
            self.log.len(),
            self.tally.human,
            self.tally.opponent,
            self.tally.ties
        );
        log::info!("human moves: {}", self.history.human_counts());
    }

    /// Advances the state machine by one transition.
    pub fn step(&mut self, player: &mut dyn Player) -> State {
        self.state = match self.state {
            State::AwaitingInput => self.read(player),
            State::RoundResolved(human) => self.resolve(human, player),
            State::Terminated => State::Terminated,
        };
        self.state
    }

    /// Hands the log to `sink`. An empty log never reaches the sink. The
    /// log survives a failed export, so a caller may retry elsewhere.
    pub fn export(&self, sink: &mut dyn Sink) -> anyhow::Result<Export> {
        if self.log.is_empty() {
            log::info!("no rounds played, nothing to export");
            return Ok(Export::Empty);
        }
        sink.export(&self.log)?;
        Ok(Export::Written(self.log.len()))
    }

    pub fn summary(&self) -> Summary {
        Summary::from((&self.history, self.tally))
    }
    pub fn state(&self) -> State {
        self.state
    }
    /// Number of the round being (or about to be) played.
    pub fn round(&self) -> usize {
        self.round
    }
    pub fn cap(&self) -> usize {
        self.cap
    }
    pub fn locale(&self) -> Locale {
        self.locale
    }
    pub fn tally(&self) -> Tally {
        self.tally
    }
    pub fn history(&self) -> &History {
        &self.history
    }
    pub fn transitions(&self) -> &Transitions {
        &self.transitions
    }
    pub fn log(&self) -> &[Record] {
        &self.log
    }
}

impl Session {
    fn read(&mut self, player: &mut dyn Player) -> State {
        let Some(input) = player.decide(self.round) else {
            log::debug!("input exhausted in round {}", self.round);
            player.notify(&Event::Exited);
            return State::Terminated;
        };
        match self.locale.parse(&input) {
            Some(Token::Play(human)) => State::RoundResolved(human),
            Some(Token::Exit) => {
                log::debug!("exit requested in round {}", self.round);
                player.notify(&Event::Exited);
                State::Terminated
            }
            None => {
                log::debug!("invalid move {:?} in round {}", input.trim(), self.round);
                player.notify(&Event::Invalid(input));
                State::AwaitingInput
            }
        }
    }

    fn resolve(&mut self, human: Move, player: &mut dyn Player) -> State {
        let opponent = self.opponent.choose(&self.history, &self.transitions);
        self.tally.add(judge(human, opponent));
        self.transitions.record(self.history.last(), human);
        self.history.push(human, opponent);
        let record = Record::new(self.round, (human, opponent), &self.history);
        log::debug!("{}", record);
        log::debug!("transitions after round {}\n{}", self.round, self.transitions);
        player.notify(&Event::Resolved(record.clone()));
        self.log.push(record);
        self.round += 1;
        if self.round > self.cap {
            log::debug!("round cap {} reached", self.cap);
            player.notify(&Event::Capped(self.cap));
            State::Terminated
        } else {
            State::AwaitingInput
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Memory(Vec<Record>);
    impl Sink for Memory {
        fn export(&mut self, records: &[Record]) -> anyhow::Result<()> {
            self.0.extend_from_slice(records);
            Ok(())
        }
    }

    struct Broken;
    impl Sink for Broken {
        fn export(&mut self, _: &[Record]) -> anyhow::Result<()> {
            anyhow::bail!("disk on fire")
        }
    }

    fn session(rounds: usize) -> Session {
        let config = Config {
            rounds,
            seed: Some(42),
            ..Config::default()
        };
        Session::new(&config, config.opponent())
    }

    fn cycle(n: usize) -> Scripted {
        ["rock", "paper", "scissors"]
            .into_iter()
            .cycle()
            .take(n)
            .collect()
    }

    #[test]
    fn round_cap_ends_session() {
        let mut game = session(ROUND_CAP);
        let mut player = cycle(60);
        game.play(&mut player);
        assert_eq!(game.state(), State::Terminated);
        assert_eq!(game.log().len(), 50);
        assert_eq!(player.remaining(), 10);
        assert_eq!(player.events().last(), Some(&Event::Capped(50)));
        assert_eq!(game.tally().rounds(), 50);
        assert_eq!(
            game.log().iter().map(Record::round).collect::<Vec<_>>(),
            (1..=50).collect::<Vec<_>>()
        );
    }

    #[test]
    fn invalid_input_does_not_advance() {
        let mut game = session(ROUND_CAP);
        let mut player = ["rock", "banana", "", "  PAPER ", "quit", "rock"]
            .into_iter()
            .collect::<Scripted>();
        game.play(&mut player);
        assert_eq!(game.log().len(), 2);
        assert_eq!(game.history().human(), &[Move::Rock, Move::Paper]);
        assert_eq!(game.round(), 3);
        assert_eq!(player.remaining(), 1);
        let invalid = player
            .events()
            .iter()
            .filter(|e| matches!(e, Event::Invalid(_)))
            .collect::<Vec<_>>();
        assert_eq!(invalid, vec![&Event::Invalid("banana".into()), &Event::Invalid("".into())]);
        assert_eq!(player.events().last(), Some(&Event::Exited));
    }

    #[test]
    fn garbled_line_is_an_invalid_move() {
        let mut game = session(ROUND_CAP);
        let mut player = Lines::from(&b"rock\n\xff\xfe\npaper\nscissors\n"[..]);
        game.play(&mut player);
        assert_eq!(game.log().len(), 3);
        assert_eq!(
            game.history().human(),
            &[Move::Rock, Move::Paper, Move::Scissors]
        );
    }

    #[test]
    fn random_opponent_plays_to_cap() {
        let config = Config {
            rounds: 20,
            strategy: Strategy::Random,
            seed: Some(3),
            ..Config::default()
        };
        let mut game = Session::new(&config, config.opponent());
        let mut player = cycle(30);
        game.play(&mut player);
        assert_eq!(game.state(), State::Terminated);
        assert_eq!(game.log().len(), 20);
        assert_eq!(player.remaining(), 10);
        assert_eq!(player.events().last(), Some(&Event::Capped(20)));
        for record in game.log() {
            assert_eq!(record.outcome(), judge(record.human(), record.opponent()));
        }
    }

    #[test]
    fn exhausted_input_exits() {
        let mut game = session(ROUND_CAP);
        let mut player = ["scissors"].into_iter().collect::<Scripted>();
        game.play(&mut player);
        assert_eq!(game.log().len(), 1);
        assert_eq!(player.events().last(), Some(&Event::Exited));
    }

    #[test]
    fn step_walks_the_state_machine() {
        let mut game = session(1);
        let mut player = ["lizard", "paper", "rock"].into_iter().collect::<Scripted>();
        assert_eq!(game.state(), State::AwaitingInput);
        assert_eq!(game.step(&mut player), State::AwaitingInput);
        assert_eq!(game.step(&mut player), State::RoundResolved(Move::Paper));
        assert!(game.log().is_empty());
        assert_eq!(game.step(&mut player), State::Terminated);
        assert_eq!(game.log().len(), 1);
        assert_eq!(game.step(&mut player), State::Terminated);
        assert_eq!(player.remaining(), 1);
    }

    #[test]
    fn transitions_trail_rounds_by_one() {
        for n in [0, 1, 2, 7, 23] {
            let mut game = session(ROUND_CAP);
            game.play(&mut cycle(n));
            assert_eq!(game.history().len(), n);
            assert_eq!(game.transitions().total(), n.saturating_sub(1));
        }
    }

    #[test]
    fn cumulative_percentages_sum_to_hundred() {
        let mut game = session(ROUND_CAP);
        let mut player = ["rock", "rock", "paper", "scissors", "paper", "rock", "rock"]
            .into_iter()
            .collect::<Scripted>();
        game.play(&mut player);
        for record in game.log() {
            assert!((record.human_freq().sum() - 100.).abs() < 1e-6);
            assert!((record.opponent_freq().sum() - 100.).abs() < 1e-6);
        }
        let third = &game.log()[2];
        assert!((third.human_freq().get(Move::Rock) - 66.666).abs() < 1e-2);
        assert!((third.human_freq().get(Move::Paper) - 33.333).abs() < 1e-2);
    }

    #[test]
    fn markov_beats_a_cycle() {
        let mut game = session(ROUND_CAP);
        game.play(&mut cycle(ROUND_CAP));
        assert!(
            game.log()[4..]
                .iter()
                .all(|r| r.outcome() == Outcome::OpponentWins)
        );
        assert!(game.tally().opponent >= 46);
    }

    #[test]
    fn records_match_judge() {
        let mut game = session(ROUND_CAP);
        game.play(&mut cycle(12));
        for record in game.log() {
            assert_eq!(record.outcome(), judge(record.human(), record.opponent()));
        }
    }

    #[test]
    fn empty_log_skips_sink() {
        let mut game = session(ROUND_CAP);
        game.play(&mut ["quit"].into_iter().collect::<Scripted>());
        assert_eq!(game.export(&mut Broken).expect("empty export"), Export::Empty);
    }

    #[test]
    fn failed_export_keeps_log() {
        let mut game = session(ROUND_CAP);
        game.play(&mut cycle(5));
        let error = game.export(&mut Broken).expect_err("broken sink");
        assert!(error.to_string().contains("disk on fire"));
        assert_eq!(game.log().len(), 5);
        let mut memory = Memory::default();
        assert_eq!(game.export(&mut memory).expect("retry"), Export::Written(5));
        assert_eq!(memory.0, game.log());
    }

    #[test]
    fn exports_csv_file() {
        let path = std::env::temp_dir()
            .join(format!("roshambo-{}-session", std::process::id()))
            .join("results.csv");
        let mut game = session(3);
        game.play(&mut cycle(10));
        let written = game.export(&mut CsvSink::from(path.clone())).expect("export");
        assert_eq!(written, Export::Written(3));
        let text = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(text.lines().count(), 4);
        std::fs::remove_dir_all(path.parent().expect("parent")).ok();
    }

    #[test]
    fn spanish_session() {
        let config = Config {
            locale: Locale::Spanish,
            seed: Some(1),
            ..Config::default()
        };
        let mut game = Session::new(&config, config.opponent());
        let mut player = ["piedra", "rock", "tijera", "salir"]
            .into_iter()
            .collect::<Scripted>();
        game.play(&mut player);
        assert_eq!(game.history().human(), &[Move::Rock, Move::Scissors]);
        assert_eq!(player.events()[1], Event::Invalid("rock".into()));
    }
}
