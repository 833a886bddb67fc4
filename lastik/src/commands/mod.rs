pub mod eval;
pub mod explore;
pub mod gallery;
pub mod scenes;

use lastik_scene::{Evaluation, Scene};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fmt::Write, io::{self, BufRead}};

/// Formats the evaluation of a scene as the scene's equation followed by its soup, cancelled
/// terms and remainder.
pub fn summary(scene: &Scene, evaluation: &Evaluation) -> String {
    let mut out = format!("{} = {}\n", scene.name, scene.formula());
    let rows = [
        ("soup", &evaluation.soup),
        ("cancelled", &evaluation.cancellation.cancelled),
        ("remaining", &evaluation.cancellation.remaining),
    ];
    for (name, molecule) in rows {
        // writing to a `String` cannot fail
        let _ = writeln!(out, "  {:<9} ({:>2}): {}", name, molecule.len(), molecule);
    }
    out
}

/// Runs `process` on every non-empty line of input.
///
/// Lines are read interactively with `rustyline` if `interactive` is set, and from stdin
/// otherwise. The interactive session ends on Ctrl-C or Ctrl-D.
pub fn for_each_line(interactive: bool, prompt: &str, mut process: impl FnMut(&str)) {
    if !interactive {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) if line.trim().is_empty() => (),
                Ok(line) => process(&line),
                Err(err) => {
                    eprintln!("{}", err);
                    break;
                },
            }
        }
        return;
    }

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{}", err);
            return;
        },
    };

    fn process_line(
        rl: &mut DefaultEditor,
        prompt: &str,
        process: &mut impl FnMut(&str),
    ) -> Result<(), ReadlineError> {
        let input = rl.readline(prompt)?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        process(&input);
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl, prompt, &mut process) {
            match err {
                ReadlineError::Eof | ReadlineError::Interrupted => (),
                _ => eprintln!("{}", err),
            }
            break;
        }
    }
}
