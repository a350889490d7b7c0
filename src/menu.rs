//! Interactive terminal menu

use crate::report::render_report;
use std::io::{self, BufRead, Write};
use trustrank_api::{CheckError, Checker};
use trustrank_storage::AddOutcome;

const RULE_WIDTH: usize = 50;

/// Run the menu loop until the user quits or input ends
pub async fn run_menu<R, W>(checker: &Checker, input: &mut R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output)?;
        writeln!(output, "Main menu")?;
        writeln!(output, "1. Check news (URL)")?;
        writeln!(output, "2. Check news (text)")?;
        writeln!(output, "3. Add trusted article")?;
        writeln!(output, "4. Quit")?;

        let Some(choice) = prompt(input, output, "Choice (1/2/3/4): ")? else {
            break;
        };

        match choice.trim() {
            "1" => check_url(checker, input, output).await?,
            "2" => check_text(checker, input, output)?,
            "3" => add_article(checker, input, output).await?,
            "4" => {
                writeln!(output, "Goodbye!")?;
                break;
            }
            _ => writeln!(output, "Invalid choice. Try again.")?,
        }
    }
    Ok(())
}

/// Print `message` and read one line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> io::Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

/// Lines up to the first empty one (or end of input), joined with newlines
fn read_block<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut lines = Vec::new();
    for line in input.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            break;
        }
        lines.push(line.to_string());
    }
    Ok(lines.join("\n"))
}

async fn check_url<R: BufRead, W: Write>(checker: &Checker, input: &mut R, output: &mut W) -> io::Result<()> {
    let url = prompt(input, output, "News URL to check: ")?.unwrap_or_default();
    let url = url.trim();
    if url.is_empty() {
        writeln!(output, "URL is empty. Try again.")?;
        return Ok(());
    }

    if checker.is_trusted(url) {
        writeln!(output, "Source is on the trusted list, fetching text...")?;
    } else {
        writeln!(output, "Source is not on the trusted list, checking its content...")?;
    }

    match checker.check_url(url).await {
        Ok(report) => writeln!(output, "{}", render_report(&report)),
        Err(CheckError::ExtractionFailed(_)) => writeln!(output, "Could not fetch text from this page."),
        Err(e) => writeln!(output, "Error: {}", e),
    }
}

fn check_text<R: BufRead, W: Write>(checker: &Checker, input: &mut R, output: &mut W) -> io::Result<()> {
    writeln!(output, "Paste the news text, finish with an empty line:")?;
    writeln!(output, "{}", "-".repeat(RULE_WIDTH))?;
    output.flush()?;
    let text = read_block(input)?;
    writeln!(output, "{}", "-".repeat(RULE_WIDTH))?;

    match checker.check_text(&text) {
        Ok(report) => writeln!(output, "{}", render_report(&report)),
        Err(CheckError::EmptyInput(_)) => writeln!(output, "Text is empty. Try again."),
        Err(e) => writeln!(output, "Error: {}", e),
    }
}

async fn add_article<R: BufRead, W: Write>(checker: &Checker, input: &mut R, output: &mut W) -> io::Result<()> {
    let url = prompt(input, output, "URL of the trusted article: ")?.unwrap_or_default();

    match checker.add_article(&url).await {
        Ok(added) => match added.outcome {
            AddOutcome::Added => writeln!(output, "Article added: {}", added.title),
            AddOutcome::AlreadyExists => writeln!(output, "Article already in the database: {}", added.title),
        },
        Err(CheckError::EmptyInput(_)) => writeln!(output, "URL is empty. Try again."),
        Err(CheckError::ExtractionFailed(_)) => writeln!(output, "Could not fetch text from this page."),
        Err(e) => writeln!(output, "Failed to save article: {}", e),
    }
}
