use super::InputCollector;
use crate::catalogue::select_ingredient;
use crate::error::{CatalogueError, Result};
use crate::recipe::RecipeDraft;
use std::io::{self, BufRead, Write};

/// Collects recipes by prompting on a line-oriented reader and writer.
///
/// All retry behaviour lives here: each field is asked for again until it is
/// valid, so the drafts handed to the catalogue are always well-formed.
pub struct PromptCollector<R, W> {
    reader: R,
    writer: W,
    remaining: usize,
    collected: usize,
}

impl PromptCollector<io::StdinLock<'static>, io::Stdout> {
    /// A collector on the process's stdin and stdout.
    pub fn stdio(count: usize) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), count)
    }
}

impl<R: BufRead, W: Write> PromptCollector<R, W> {
    /// Creates a collector that will hand out `count` recipes.
    pub fn new(reader: R, writer: W, count: usize) -> Self {
        Self {
            reader,
            writer,
            remaining: count,
            collected: 0,
        }
    }

    /// Changes how many more recipes the collector will ask for.
    pub fn set_remaining(&mut self, count: usize) {
        self.remaining = count;
    }

    /// Asks how many recipes the user wants to enter. Accepts zero.
    pub fn prompt_count(&mut self) -> Result<usize> {
        loop {
            let line = self.ask("How many recipes would you like to enter?: ")?;
            match line.trim().parse::<usize>() {
                Ok(count) => return Ok(count),
                Err(_) => self.say("\nInvalid input! Please enter a whole number.")?,
            }
        }
    }

    /// Asks for a 1-based pick from `sorted` until a valid one is given.
    pub fn prompt_selection<'a, S: AsRef<str>>(&mut self, sorted: &'a [S]) -> Result<&'a str> {
        if sorted.is_empty() {
            return Err(CatalogueError::invalid("there are no ingredients to choose from"));
        }
        loop {
            let line = self.ask("\nEnter the number of the ingredient to search: ")?;
            match select_ingredient(&line, sorted) {
                Ok(token) => return Ok(token),
                Err(CatalogueError::OutOfRange { len, .. }) => {
                    self.say(&format!("Please enter a number between 1 and {}.", len))?
                }
                Err(_) => self.say("Invalid input! Please enter a number.")?,
            }
        }
    }

    fn read_cooking_time(&mut self) -> Result<u32> {
        loop {
            let line = self.ask("Enter the cooking time (in minutes): ")?;
            match line.trim().parse::<i64>() {
                Ok(minutes) if minutes > 0 => match u32::try_from(minutes) {
                    Ok(minutes) => return Ok(minutes),
                    Err(_) => self.say("\nThat cooking time is too large.")?,
                },
                Ok(_) => self.say("\nPlease enter a positive number for the cooking time.")?,
                Err(_) => self.say("\nInvalid input! Please enter a number.")?,
            }
        }
    }

    fn read_ingredients(&mut self) -> Result<Vec<String>> {
        loop {
            let line = self.ask("Enter your ingredients, separated by a comma: ")?;
            let ingredients = split_ingredients(&line);
            if !ingredients.is_empty() {
                return Ok(ingredients);
            }
            self.say("\nPlease enter at least one ingredient.")?;
        }
    }

    /// Writes the prompt and reads one line. End of input is an error here.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.try_ask(prompt)?.ok_or_else(|| {
            CatalogueError::io(
                "<input>",
                io::Error::new(io::ErrorKind::UnexpectedEof, "input ended unexpectedly"),
            )
        })
    }

    /// Writes the prompt and reads one line, returning `None` at end of input.
    fn try_ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", prompt).map_err(output_error)?;
        self.writer.flush().map_err(output_error)?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| CatalogueError::io("<input>", e))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{}", message).map_err(output_error)
    }
}

impl<R: BufRead, W: Write> InputCollector for PromptCollector<R, W> {
    fn next_recipe(&mut self) -> Result<Option<RecipeDraft>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.say(&format!("\n---- Recipe #{} ----", self.collected + 1))?;

        let name = loop {
            match self.try_ask("Enter your recipe name: ")? {
                None => return Ok(None),
                Some(line) if !line.trim().is_empty() => break line.trim().to_string(),
                Some(_) => self.say("\nPlease enter a valid recipe name.")?,
            }
        };
        let cooking_time = self.read_cooking_time()?;
        let ingredients = self.read_ingredients()?;

        self.remaining -= 1;
        self.collected += 1;
        Ok(Some(RecipeDraft {
            name,
            cooking_time,
            ingredients,
        }))
    }
}

/// Splits a comma-separated line into trimmed, non-empty ingredient tokens.
pub fn split_ingredients(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn output_error(e: io::Error) -> CatalogueError {
    CatalogueError::io("<output>", e)
}
