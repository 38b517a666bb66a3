use crate::game::GameState;
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that selects uniformly at random from legal moves.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, state: &GameState) -> Option<usize> {
        if state.has_win() {
            return None;
        }
        let moves = state.legal_moves();
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..moves.len());
        Some(moves[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MinimaxAgent;
    use crate::game::Player;

    #[test]
    fn test_random_agent_selects_legal_move() {
        let mut agent = RandomAgent::new();
        let state: GameState = "000000".parse().unwrap();
        let legal = state.legal_moves();

        for _ in 0..100 {
            let action = agent.select_move(&state).unwrap();
            assert!(legal.contains(&action), "Action {} is not legal", action);
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::with_seed(1);
        let mut agent2 = RandomAgent::with_seed(2);
        let mut state = GameState::initial();

        let mut turn = 0;
        while !state.is_game_over() {
            let action = if turn % 2 == 0 {
                agent1.select_move(&state)
            } else {
                agent2.select_move(&state)
            };
            state = state.apply_move(action.unwrap()).unwrap();
            turn += 1;
        }

        assert!(state.is_game_over());
        assert_eq!(agent1.select_move(&state), None);
    }

    #[test]
    fn test_seeded_agents_agree() {
        let state = GameState::initial();
        let mut a = RandomAgent::with_seed(42);
        let mut b = RandomAgent::with_seed(42);
        for _ in 0..20 {
            assert_eq!(a.select_move(&state), b.select_move(&state));
        }
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }

    #[test]
    fn minimax_beats_random_agent() {
        let games_per_color = 5;
        let mut minimax_wins = 0;

        for game in 0..games_per_color * 2 {
            let minimax_color = if game % 2 == 0 { Player::Red } else { Player::Yellow };
            let mut minimax = MinimaxAgent::new(3);
            let mut random = RandomAgent::with_seed(game as u64);
            let mut state = GameState::initial();

            while !state.is_game_over() {
                let action = if state.current_player() == minimax_color {
                    minimax.select_move(&state)
                } else {
                    random.select_move(&state)
                };
                state = state.apply_move(action.unwrap()).unwrap();
            }

            if state.winner() == Some(minimax_color) {
                minimax_wins += 1;
            }
        }

        assert!(
            minimax_wins >= 8,
            "Minimax should beat random most of the time, won {minimax_wins}/{}",
            games_per_color * 2
        );
    }
}
