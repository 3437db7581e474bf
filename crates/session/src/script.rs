//! Line-based session scripts for headless runs and tests.
//!
//! One command per line or `;`-separated; `#` starts a comment.
//!
//! ```text
//! fwd 0.5          # hold forward for 0.5 s (one tick)
//! look 100 -20     # mouse delta
//! place; remove; undo; redo
//! wait 1.0         # tick with nothing held
//! dump             # ask the front end to print the world
//! ```

use blockworld_input::{Action, MoveKey, MovementKeys};

use crate::error::SessionError;
use crate::session::{ActionOutcome, Session};

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStep {
    /// One tick of `dt` seconds with `keys` held.
    Move { keys: MovementKeys, dt: f32 },
    Act(Action),
    Dump,
}

pub fn parse(text: &str) -> Result<Vec<ScriptStep>, SessionError> {
    let mut steps = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default();
        for cmd in line.split(';') {
            let words: Vec<&str> = cmd.split_whitespace().collect();
            if words.is_empty() {
                continue;
            }
            let step = parse_command(&words).map_err(|message| SessionError::Script {
                line: idx + 1,
                message,
            })?;
            steps.push(step);
        }
    }
    Ok(steps)
}

fn parse_command(words: &[&str]) -> Result<ScriptStep, String> {
    let (name, args) = (words[0], &words[1..]);
    let moving = |key: Option<MoveKey>| -> Result<ScriptStep, String> {
        let [dt] = numbers::<1>(name, args)?;
        let keys = key.map_or_else(MovementKeys::none, |k| MovementKeys::holding(&[k]));
        Ok(ScriptStep::Move { keys, dt })
    };
    let bare = |step: ScriptStep| -> Result<ScriptStep, String> {
        if args.is_empty() {
            Ok(step)
        } else {
            Err(format!("`{name}` takes no arguments"))
        }
    };

    match name {
        "fwd" | "forward" => moving(Some(MoveKey::Forward)),
        "back" => moving(Some(MoveKey::Back)),
        "left" => moving(Some(MoveKey::StrafeLeft)),
        "right" => moving(Some(MoveKey::StrafeRight)),
        "wait" => moving(None),
        "look" => {
            let [dx, dy] = numbers::<2>(name, args)?;
            Ok(ScriptStep::Act(Action::Look { dx, dy }))
        }
        "place" => bare(ScriptStep::Act(Action::PlaceBlock)),
        "remove" => bare(ScriptStep::Act(Action::RemoveBlock)),
        "undo" => bare(ScriptStep::Act(Action::Undo)),
        "redo" => bare(ScriptStep::Act(Action::Redo)),
        "dump" => bare(ScriptStep::Dump),
        other => Err(format!("unknown command `{other}`")),
    }
}

fn numbers<const N: usize>(name: &str, args: &[&str]) -> Result<[f32; N], String> {
    if args.len() != N {
        return Err(format!("`{name}` takes {N} number(s), got {}", args.len()));
    }
    let mut out = [0.0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        let value: f32 = arg
            .parse()
            .map_err(|_| format!("`{name}`: `{arg}` is not a number"))?;
        if !value.is_finite() {
            return Err(format!("`{name}`: `{arg}` is not a finite number"));
        }
        *slot = value;
    }
    Ok(out)
}

/// Run one step. `Dump` is left to the caller and reports [`ActionOutcome::Nothing`].
pub fn apply(session: &mut Session, step: &ScriptStep) -> ActionOutcome {
    match step {
        ScriptStep::Move { keys, dt } => {
            session.tick(*dt, keys);
            ActionOutcome::Nothing
        }
        ScriptStep::Act(action) => session.handle(*action),
        ScriptStep::Dump => ActionOutcome::Nothing,
    }
}
