//! Arcade Cabinet entry point
//!
//! Headless demo runner: picks one of the two games, drives it at a fixed
//! 60 Hz with a small autopilot policy, and records the final score in the
//! high-score file. Rendering is out of scope; this exercises the full
//! session/flow/high-score path end to end.
//!
//! Usage: arcade-cabinet [racer|catch] [seed] [highscore-file]

use std::path::PathBuf;
use std::time::{Duration, Instant};

use rand::Rng;

use arcade_cabinet::catch::{self, CatchInput, CatchState};
use arcade_cabinet::consts::TICK_MS;
use arcade_cabinet::racer::{self, RacerInput, RacerState};
use arcade_cabinet::{CatchTuning, Flow, FlowCommand, HighScore, MenuEvent, RacerTuning, Screen};

fn main() -> std::io::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let game = args.next().unwrap_or_else(|| "racer".to_string());
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| rand::rng().random());
    let score_path: PathBuf = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("highscore_{}.txt", game)));

    log::info!("starting {} demo, seed {}", game, seed);
    let mut scores = HighScore::load(&score_path);
    log::info!("stored high score: {}", scores.best());

    let final_score = match game.as_str() {
        "catch" => run_catch(seed),
        "racer" => run_racer(seed),
        other => {
            eprintln!("unknown game {:?}; expected \"racer\" or \"catch\"", other);
            std::process::exit(2);
        }
    };

    let improved = scores.submit(final_score)?;
    println!(
        "{} finished with score {} (high score: {}{})",
        game,
        final_score,
        scores.best(),
        if improved { ", new record!" } else { "" }
    );
    Ok(())
}

/// Block until the next 60 Hz tick boundary
fn pace(start: Instant, ticks: u64) {
    let target = Duration::from_secs_f64(ticks as f64 * TICK_MS / 1000.0);
    let elapsed = start.elapsed();
    if target > elapsed {
        std::thread::sleep(target - elapsed);
    }
}

fn run_racer(seed: u64) -> u32 {
    let mut flow = Flow::new();
    assert_eq!(flow.dispatch(MenuEvent::Confirm), FlowCommand::NewSession);
    let mut state = RacerState::new(seed, RacerTuning::default());

    let start = Instant::now();
    let mut ticks: u64 = 0;
    while flow.is_playing() {
        let now_ms = start.elapsed().as_secs_f64() * 1000.0;
        let input = racer_autopilot(&state, now_ms);
        racer::tick(&mut state, &input);

        if let Some(outcome) = state.outcome {
            log::info!("session over after {} ticks: {:?}", ticks, outcome);
            flow.session_over(state.score);
        } else if ticks % 60 == 0 {
            log::debug!(
                "tick {}: score {} fuel {:.1} powered {}",
                ticks,
                state.score,
                state.fuel,
                state.player.powered
            );
        }

        ticks += 1;
        pace(start, ticks);
    }

    match flow.screen {
        Screen::GameOver { score } => score,
        _ => state.score,
    }
}

/// Steer away from the nearest threatening enemy, otherwise chase fuel
fn racer_autopilot(state: &RacerState, now_ms: f64) -> RacerInput {
    let player = &state.player;
    let threat = state
        .enemies
        .iter()
        .filter(|e| e.rect.bottom() > 0.0 && e.rect.pos.y < player.rect.bottom())
        .filter(|e| (e.rect.pos.x - player.rect.pos.x).abs() < e.rect.size.x + 20.0)
        .max_by(|a, b| a.rect.pos.y.total_cmp(&b.rect.pos.y));

    let target_x = match threat {
        // Dodge: run for whichever side has more road
        Some(enemy) => {
            if enemy.rect.pos.x > racer::state::SCREEN_W / 2.0 {
                0.0
            } else {
                racer::state::SCREEN_W - player.rect.size.x
            }
        }
        None => state.fuel_can.rect.pos.x,
    };

    RacerInput {
        left: target_x < player.rect.pos.x - 1.0,
        right: target_x > player.rect.pos.x + 1.0,
        boost: false,
        now_ms,
    }
}

fn run_catch(seed: u64) -> u32 {
    let mut flow = Flow::new();
    assert_eq!(flow.dispatch(MenuEvent::Confirm), FlowCommand::NewSession);
    let mut state = CatchState::new(seed, CatchTuning::default());

    let start = Instant::now();
    let mut ticks: u64 = 0;
    while flow.is_playing() {
        let input = catch_autopilot(&state);
        catch::tick(&mut state, &input);

        if let Some(outcome) = state.outcome {
            log::info!("session over after {} ticks: {:?}", ticks, outcome);
            flow.session_over(state.score);
        } else if ticks % 60 == 0 {
            log::debug!(
                "tick {}: score {} objects {}",
                ticks,
                state.score,
                state.objects.len()
            );
        }

        ticks += 1;
        pace(start, ticks);
    }

    match flow.screen {
        Screen::GameOver { score } => score,
        _ => state.score,
    }
}

/// Track the object closest to the floor
fn catch_autopilot(state: &CatchState) -> CatchInput {
    let target_x = state
        .objects
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|o| o.pos.x + o.size.x / 2.0 - state.paddle.size.x / 2.0)
        .unwrap_or(state.paddle.pos.x);

    CatchInput {
        left: target_x < state.paddle.pos.x - 1.0,
        right: target_x > state.paddle.pos.x + 1.0,
    }
}
