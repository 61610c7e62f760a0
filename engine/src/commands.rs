use search::{evaluate, TimeControl};

use crate::engine::Engine;

/// Dispatches one command line. Returns `false` when the session should end.
pub fn execute(engine: &mut Engine, command: &str) -> bool {
    let tokens = command.split_whitespace().collect::<Vec<_>>();

    match tokens.as_slice() {
        ["new"] => engine.new_game(),

        ["setboard", fen @ ..] => setboard(engine, fen),
        ["usermove", text] => usermove(engine, text),
        ["go"] => go(engine),
        ["playrandom"] => play_random(engine),

        ["random"] => engine.search.random_mode = !engine.search.random_mode,
        ["sd", depth] => set_depth(engine, depth),
        ["st", ms] => set_move_time(engine, ms),
        ["level", mps, base, inc] => set_level(engine, mps, base, inc),

        ["perft", depth] => run_depth(engine, depth, Engine::perft),
        ["divide", depth] => run_depth(engine, depth, Engine::divide),
        ["eval"] => println!("{}", evaluate(&engine.board)),
        ["result"] => println!("{}", engine.game_result().unwrap_or_else(|| "*".to_string())),
        ["display"] => println!("{}", engine.board),

        ["quit"] => return false,
        [] => {}

        _ => eprintln!("Unknown command: '{}'", command.trim_end()),
    }

    true
}

fn setboard(engine: &mut Engine, fen: &[&str]) {
    if let Err(error) = engine.set_position(&fen.join(" ")) {
        eprintln!("Illegal position: {error}");
    }
}

fn usermove(engine: &mut Engine, text: &str) {
    if !engine.play_move(text) {
        println!("Illegal move: {text}");
        return;
    }

    announce_result(engine);
}

fn go(engine: &mut Engine) {
    match engine.think() {
        Some(notation) => {
            println!("move {notation}");
            announce_result(engine);
        }
        None => announce_result(engine),
    }
}

fn play_random(engine: &mut Engine) {
    if let Some(notation) = engine.random_move() {
        println!("move {notation}");
    }
    announce_result(engine);
}

fn announce_result(engine: &mut Engine) {
    if let Some(result) = engine.game_result() {
        println!("{result}");
    }
}

fn set_depth(engine: &mut Engine, depth: &str) {
    match depth.parse() {
        Ok(depth) => engine.search.max_depth = depth,
        Err(_) => eprintln!("Invalid depth: '{depth}'"),
    }
}

fn set_move_time(engine: &mut Engine, ms: &str) {
    match ms.parse() {
        Ok(remaining_ms) => engine.search.clock = TimeControl::TimePerMove { remaining_ms },
        Err(_) => eprintln!("Invalid move time: '{ms}'"),
    }
}

/// `level <moves-per-control> <base-ms> <increment-ms>`: a non-zero increment
/// selects the incremental clock, anything else the conventional one.
fn set_level(engine: &mut Engine, mps: &str, base: &str, inc: &str) {
    let (Ok(moves_per_control), Ok(remaining_ms), Ok(increment_ms)) =
        (mps.parse::<u32>(), base.parse::<i64>(), inc.parse::<i64>())
    else {
        eprintln!("Invalid level: '{mps} {base} {inc}'");
        return;
    };

    engine.search.clock = match increment_ms > 0 {
        true => TimeControl::Incremental {
            remaining_ms,
            increment_ms,
        },
        false => TimeControl::Conventional {
            moves_per_control,
            remaining_ms,
        },
    };
}

fn run_depth(engine: &mut Engine, depth: &str, run: fn(&mut Engine, u32)) {
    match depth.parse() {
        Ok(depth) => run(engine, depth),
        Err(_) => eprintln!("Invalid depth: '{depth}'"),
    }
}
