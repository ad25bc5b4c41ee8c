//! Game plugin - drives the state machine on the fixed tick.

use bevy::prelude::*;

use super::flow;
use super::session::{GameRng, GameSession};
use crate::core::{GameConfig, GameState, PendingInput, SfxEvent, VictoryMusicFinished};

/// Game plugin - owns the session and advances it once per fixed tick.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameSession>()
            .init_resource::<GameRng>()
            .add_systems(FixedUpdate, run_game_tick)
            .add_systems(Update, note_victory_music);
    }
}

/// Feed queued input into the game flow, then advance it one tick.
///
/// Several fixed ticks can run before Bevy applies a queued transition, so
/// a pending `NextState` counts as the active state.
#[allow(clippy::too_many_arguments)]
fn run_game_tick(
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    config: Res<GameConfig>,
    mut session: ResMut<GameSession>,
    mut rng: ResMut<GameRng>,
    mut pending: ResMut<PendingInput>,
    mut sfx: EventWriter<SfxEvent>,
    mut exit: EventWriter<AppExit>,
) {
    let before = match &*next_state {
        NextState::Pending(queued) => *queued,
        NextState::Unchanged => *state.get(),
    };
    let mut current = before;
    let inputs = pending.drain();
    let mut cues = Vec::new();

    let quit = flow::step(&mut current, &mut session, &config, &mut rng.0, &inputs, &mut cues);

    for cue in cues {
        sfx.send(SfxEvent(cue));
    }
    if quit {
        info!("Quit requested");
        exit.send(AppExit::Success);
        return;
    }
    if current != before {
        next_state.set(current);
    }
}

fn note_victory_music(
    mut finished: EventReader<VictoryMusicFinished>,
    state: Res<State<GameState>>,
    mut session: ResMut<GameSession>,
) {
    if finished.read().count() > 0 && *state.get() == GameState::Victory {
        debug!("Victory music finished");
        session.victory_music_finished = true;
    }
}
