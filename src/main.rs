//! Interactive prompt session for building scales and glyph strings
//!
//! Thin line-based I/O over the library: every answer is parsed by the
//! library entry points, invalid answers re-prompt, and an empty answer at
//! the mode prompt (or end of input) exits.

use std::io::{self, Write};

use ambitus::{build_scale, render_glyphs, Clef, GlyphOptions, Notehead, Pitch};

const SEPARATORS: [&str; 5] = [";", ":", "/", "?", "_"];

/// Prompt for one trimmed line; `None` on end of input
fn ask(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn main() -> io::Result<()> {
    loop {
        let Some(mode) = ask(
            "Choose mode (first two letters: IO(nian), DO(rian), PH(rygian), LY, MI, AE or LO) or <Enter> to quit: ",
        )?
        else {
            break;
        };
        if mode.is_empty() {
            println!("Exiting...");
            break;
        }
        if let Err(err) = ambitus::mode_pattern(&mode) {
            println!("{err}");
            continue;
        }

        let notes = loop {
            let Some(start) = ask("Begin scale at (default: C4)? ")? else {
                return Ok(());
            };
            let start = if start.is_empty() { "C4".to_string() } else { start };
            let Some(stop) = ask("End scale at or below (default: one octave above the beginning)? ")?
            else {
                return Ok(());
            };

            let start = match Pitch::parse(&start) {
                Ok(pitch) => pitch,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            };
            let stop = if stop.is_empty() {
                None
            } else {
                match Pitch::parse(&stop) {
                    Ok(pitch) => Some(pitch),
                    Err(err) => {
                        println!("{err}");
                        continue;
                    }
                }
            };

            match build_scale(&mode, start, stop) {
                Ok(notes) => break notes,
                Err(err) => println!("{err}"),
            }
        };

        let rendered: Vec<String> = notes.iter().map(Pitch::to_string).collect();
        println!("Scale: [{}]", rendered.join(", "));

        let clef = loop {
            let Some(answer) = ask("Which clef should be used (treble (default), bass, alto or tenor)? ")?
            else {
                return Ok(());
            };
            if answer.is_empty() {
                break Clef::Treble;
            }
            match answer.parse::<Clef>() {
                Ok(clef) => break clef,
                Err(_) => println!("Invalid clef!"),
            }
        };

        let separator = loop {
            let Some(answer) = ask("Choose separator (one of ;:/?_ (default ':')): ")? else {
                return Ok(());
            };
            if answer.is_empty() {
                break ":".to_string();
            }
            if SEPARATORS.contains(&answer.as_str()) {
                break answer;
            }
            println!("Invalid separator!");
        };

        let notehead = loop {
            let Some(answer) = ask("Choose notehead (one of q (default), h, w): ")? else {
                return Ok(());
            };
            if answer.is_empty() {
                break Notehead::Quarter;
            }
            match answer.parse::<Notehead>() {
                Ok(notehead) => break notehead,
                Err(_) => println!("Invalid notehead!"),
            }
        };

        let mut with_stem = true;
        if notehead.has_stem() {
            let Some(answer) = ask("Remove stems (default: No)? ")? else {
                return Ok(());
            };
            if answer.to_ascii_lowercase().starts_with('y') {
                with_stem = false;
            }
        }

        let Some(prefix) = ask("Any additional spacing in front of the scale (one of ;:/?_ or leave blank)? ")?
        else {
            return Ok(());
        };
        let Some(suffix) = ask("Any additional characters at the end (default ':|')? ")? else {
            return Ok(());
        };
        let suffix = if suffix.is_empty() { ":|".to_string() } else { suffix };

        let options = GlyphOptions {
            clef,
            notehead,
            with_stem,
            separator,
            prefix,
            suffix,
        };
        let output = render_glyphs(&notes, &options);
        for warning in &output.warnings {
            println!("{warning}");
        }
        println!();
        println!("{}", output.text);
        println!();
    }
    Ok(())
}
