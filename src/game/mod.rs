use std::collections::HashMap;

use poise::serenity_prelude::{ChannelId, UserId};

/// Wrong guesses allowed before a user gets the maximum-warnings message.
pub const MAX_WARNINGS: u32 = 3;

/// What the game decided about one piece of a message, in the order the
/// pieces appeared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The guess matched the expected number.
    Correct,
    /// The guess missed. `expected` is the number that was wanted,
    /// `remaining` the author's leftover warning allowance.
    Wrong { expected: i64, remaining: u32 },
    /// The guess missed and the author has no warnings left.
    MaxWarnings,
    /// The message contained no parseable number at all.
    Noise,
}

/// The count-up game: a single expected-number register, the one channel
/// it is played in, and the per-user wrong-guess tally.
///
/// State lives in memory only and resets with the process.
#[derive(Debug)]
pub struct SequenceGame {
    expected: i64,
    channel: Option<ChannelId>,
    warnings: HashMap<UserId, u32>,
}

impl Default for SequenceGame {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGame {
    pub fn new() -> Self {
        Self {
            expected: 1,
            channel: None,
            warnings: HashMap::new(),
        }
    }

    pub const fn expected(&self) -> i64 {
        self.expected
    }

    /// Whether messages in `channel` should be fed to the game. With no
    /// channel configured the game is entirely inactive.
    pub fn accepts(&self, channel: ChannelId) -> bool {
        self.channel == Some(channel)
    }

    /// Activates the game in `channel` and starts the count over.
    pub fn set_channel(&mut self, channel: ChannelId) {
        self.channel = Some(channel);
        self.expected = 1;
    }

    /// Resets the register to `start`, or to 1 when absent. Values below 1
    /// are clamped to keep the count positive. Returns the new register.
    pub fn reset(&mut self, start: Option<i64>) -> i64 {
        self.expected = start.unwrap_or(1).max(1);
        self.expected
    }

    /// Drops a user's warning tally. Returns whether they had one.
    pub fn clear_warnings(&mut self, user: UserId) -> bool {
        self.warnings.remove(&user).is_some()
    }

    /// Runs one chat message through the game and returns a verdict per
    /// parsed number, in order of appearance.
    ///
    /// Tokens that don't parse as integers are discarded; a message with
    /// no parseable number yields a single [`Verdict::Noise`]. Every
    /// number is evaluated against the register as it advances, so one
    /// message can move the count (or collect warnings) several times.
    pub fn observe(&mut self, author: UserId, content: &str) -> Vec<Verdict> {
        let numbers: Vec<i64> = content
            .split_whitespace()
            .filter_map(|token| token.parse().ok())
            .collect();

        if numbers.is_empty() {
            return vec![Verdict::Noise];
        }

        numbers
            .into_iter()
            .map(|number| self.guess(author, number))
            .collect()
    }

    fn guess(&mut self, author: UserId, number: i64) -> Verdict {
        if number == self.expected {
            self.expected += 1;
            return Verdict::Correct;
        }

        let count = self
            .warnings
            .entry(author)
            .and_modify(|count| *count += 1)
            .or_insert(1);

        let remaining = MAX_WARNINGS.saturating_sub(*count);

        if remaining > 0 {
            Verdict::Wrong {
                expected: self.expected,
                remaining,
            }
        } else {
            Verdict::MaxWarnings
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use super::{SequenceGame, Verdict};
    use poise::serenity_prelude::{ChannelId, UserId};

    const PLAYER: UserId = UserId::new(101);
    const OTHER: UserId = UserId::new(102);

    #[test]
    #[traced_test]
    fn counting_up_advances_the_register() {
        let mut game = SequenceGame::new();

        for n in 1..=5 {
            let verdicts = game.observe(PLAYER, &n.to_string());
            assert_eq!(verdicts, vec![Verdict::Correct]);
        }

        assert_eq!(game.expected(), 6);
    }

    #[test]
    fn wrong_guess_never_moves_the_register() {
        let mut game = SequenceGame::new();

        let verdicts = game.observe(PLAYER, "42");
        assert_eq!(
            verdicts,
            vec![Verdict::Wrong {
                expected: 1,
                remaining: 2
            }]
        );
        assert_eq!(game.expected(), 1);
    }

    #[test]
    fn warnings_count_down_then_cap() {
        let mut game = SequenceGame::new();

        assert_eq!(
            game.observe(PLAYER, "9"),
            vec![Verdict::Wrong {
                expected: 1,
                remaining: 2
            }]
        );
        assert_eq!(
            game.observe(PLAYER, "9"),
            vec![Verdict::Wrong {
                expected: 1,
                remaining: 1
            }]
        );
        assert_eq!(game.observe(PLAYER, "9"), vec![Verdict::MaxWarnings]);

        // past the cap it stays capped
        assert_eq!(game.observe(PLAYER, "9"), vec![Verdict::MaxWarnings]);
    }

    #[test]
    fn warnings_are_tallied_per_user() {
        let mut game = SequenceGame::new();

        game.observe(PLAYER, "9");
        game.observe(PLAYER, "9");

        assert_eq!(
            game.observe(OTHER, "9"),
            vec![Verdict::Wrong {
                expected: 1,
                remaining: 2
            }]
        );
    }

    #[test]
    fn clearing_warnings_restarts_the_tally() {
        let mut game = SequenceGame::new();

        game.observe(PLAYER, "9");
        game.observe(PLAYER, "9");

        assert!(game.clear_warnings(PLAYER));
        assert!(!game.clear_warnings(PLAYER));

        assert_eq!(
            game.observe(PLAYER, "9"),
            vec![Verdict::Wrong {
                expected: 1,
                remaining: 2
            }]
        );
    }

    #[test]
    fn unparseable_message_is_noise() {
        let mut game = SequenceGame::new();

        assert_eq!(game.observe(PLAYER, "hello world"), vec![Verdict::Noise]);
        assert_eq!(game.expected(), 1);
        assert!(!game.clear_warnings(PLAYER));
    }

    #[test]
    fn several_numbers_play_against_the_advancing_register() {
        let mut game = SequenceGame::new();
        game.reset(Some(5));

        assert_eq!(
            game.observe(PLAYER, "5 6"),
            vec![Verdict::Correct, Verdict::Correct]
        );
        assert_eq!(game.expected(), 7);
    }

    #[test]
    fn one_message_can_both_score_and_warn() {
        let mut game = SequenceGame::new();
        game.reset(Some(5));

        assert_eq!(
            game.observe(PLAYER, "5 9"),
            vec![
                Verdict::Correct,
                Verdict::Wrong {
                    expected: 6,
                    remaining: 2
                }
            ]
        );
        assert_eq!(game.expected(), 6);
    }

    #[test]
    fn non_number_tokens_are_discarded() {
        let mut game = SequenceGame::new();

        assert_eq!(game.observe(PLAYER, "uhh 1 sorry"), vec![Verdict::Correct]);
        assert_eq!(game.expected(), 2);
    }

    #[test]
    fn reset_defaults_to_one_and_clamps() {
        let mut game = SequenceGame::new();

        assert_eq!(game.reset(Some(10)), 10);
        assert_eq!(game.expected(), 10);

        assert_eq!(game.reset(None), 1);
        assert_eq!(game.reset(Some(0)), 1);
        assert_eq!(game.reset(Some(-3)), 1);
    }

    #[test]
    fn inactive_game_accepts_no_channel() {
        let game = SequenceGame::new();
        assert!(!game.accepts(ChannelId::new(1)));
    }

    #[test]
    fn setting_the_channel_restarts_the_count() {
        let mut game = SequenceGame::new();
        game.reset(Some(40));

        game.set_channel(ChannelId::new(7));

        assert_eq!(game.expected(), 1);
        assert!(game.accepts(ChannelId::new(7)));
        assert!(!game.accepts(ChannelId::new(8)));
    }
}
