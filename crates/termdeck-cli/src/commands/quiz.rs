//! The `termdeck quiz` command.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use termdeck_core::model::Entry;
use termdeck_core::quiz::{QuizScore, QuizSession};

use super::AppContext;

pub fn execute(
    ctx: &AppContext,
    workbook: Option<String>,
    questions: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let pool = match &workbook {
        Some(name) => ctx.store.load_by_workbook(name),
        None => ctx.store.load_all(),
    };
    let questions = questions.unwrap_or(ctx.config.default_questions);

    anyhow::ensure!(questions >= 1, "questions must be at least 1");
    if pool.is_empty() {
        match workbook {
            Some(name) => println!("No terms found in workbook '{}'.", name.trim()),
            None => println!("No terms available. Add some with `termdeck add`."),
        }
        return Ok(());
    }
    if pool.len() < 2 {
        eprintln!("Only one term available, every statement will be true.");
    }

    let rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let score = run_interactive(&pool, questions, rng, &mut stdin.lock(), &mut io::stdout())?;
    println!(
        "\nFinal score: {}/{} ({}%)",
        score.score,
        score.total,
        score.percent()
    );
    Ok(())
}

/// Drive a quiz session over `input`/`output`.
fn run_interactive<R, I, O>(
    pool: &[Entry],
    questions: usize,
    rng: R,
    input: &mut I,
    output: &mut O,
) -> Result<QuizScore>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    let mut session = QuizSession::new(pool, questions, rng)?;

    while let Some(question) = session.next_question()? {
        writeln!(
            output,
            "\nQ{}/{}: Does this definition match '{}'?",
            question.number, question.total, question.term
        )?;
        writeln!(output, "  {}", question.shown_definition)?;
        let judgment = read_judgment(input, output)?;

        let grade = session.submit(judgment)?;
        if grade.correct {
            writeln!(output, "Correct!")?;
        } else {
            writeln!(output, "Incorrect.")?;
        }
        writeln!(output, "{} means: {}", grade.term, grade.correct_definition)?;
    }

    Ok(session.score())
}

/// Prompt until a true/false answer is read. EOF is an error.
fn read_judgment<I: BufRead, O: Write>(input: &mut I, output: &mut O) -> Result<bool> {
    let mut line = String::new();
    loop {
        write!(output, "(true/false): ")?;
        output.flush()?;

        line.clear();
        let read = input.read_line(&mut line).context("failed to read answer")?;
        if read == 0 {
            anyhow::bail!("quiz aborted: no more input");
        }
        match parse_judgment(&line) {
            Some(judgment) => return Ok(judgment),
            None => writeln!(output, "Please answer true or false.")?,
        }
    }
}

fn parse_judgment(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "true" | "t" | "yes" | "y" => Some(true),
        "false" | "f" | "no" | "n" => Some(false),
        _ => None,
    }
}
