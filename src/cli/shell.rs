//! Line sources and completion for the MoneyFlow shell.

use std::{
    borrow::Cow,
    fmt,
    io::{self, BufRead, Lines, StdinLock},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use shell_words::split;

use crate::cli::core::{CliError, CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::output::info as output_info;
use crate::config::CONFIG_KEYS;
use crate::core::services::CategoryService;
use crate::export::ExportFormat;
use crate::ledger::TransactionKind;

/// Setting this variable makes the shell read commands from stdin without
/// line editing or confirmation prompts.
pub const SCRIPT_ENV: &str = "MONEYFLOW_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    let mut source = LineSource::open(&context)?;
    if mode == CliMode::Interactive {
        output_info(format!(
            "MoneyFlow {}. Transactions are kept in memory for this session; type `help` for commands.",
            env!("CARGO_PKG_VERSION")
        ));
    }

    while context.running {
        match source.read(&context.prompt())? {
            Input::Line(line) => match execute(&mut context, &line) {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Exit) => break,
                Err(err) => context.report_error(err)?,
            },
            Input::Interrupted => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Input::End => {
                if mode == CliMode::Interactive {
                    output_info("Exiting shell.");
                }
                break;
            }
        }
    }
    Ok(())
}

enum Input {
    Line(String),
    Interrupted,
    End,
}

/// Where commands come from: the line editor or piped stdin.
enum LineSource {
    Editor(Box<Editor<ShellCompleter, DefaultHistory>>),
    Stdin(Lines<StdinLock<'static>>),
}

impl LineSource {
    fn open(context: &ShellContext) -> Result<Self, CliError> {
        if !context.can_prompt() {
            return Ok(LineSource::Stdin(io::stdin().lock().lines()));
        }
        let mut editor = Editor::<ShellCompleter, DefaultHistory>::new()?;
        editor.set_helper(Some(ShellCompleter::new(context.command_names())));
        editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);
        Ok(LineSource::Editor(Box::new(editor)))
    }

    fn read(&mut self, prompt: &str) -> Result<Input, CliError> {
        match self {
            LineSource::Stdin(lines) => match lines.next() {
                Some(line) => Ok(Input::Line(line?)),
                None => Ok(Input::End),
            },
            LineSource::Editor(editor) => match editor.readline(prompt) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        editor.add_history_entry(trimmed).ok();
                    }
                    Ok(Input::Line(line))
                }
                Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
                Err(ReadlineError::Eof) => Ok(Input::End),
                Err(err) => Err(err.into()),
            },
        }
    }
}

/// Runs one line. Blank lines and `#` comments are skipped.
pub(crate) fn execute(context: &mut ShellContext, line: &str) -> Result<LoopControl, CommandError> {
    let tokens = match parse_command_line(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            context.print_warning(&err.to_string());
            return Ok(LoopControl::Continue);
        }
    };
    let Some((raw, rest)) = tokens.split_first() else {
        return Ok(LoopControl::Continue);
    };
    if raw.starts_with('#') {
        return Ok(LoopControl::Continue);
    }

    let args: Vec<&str> = rest.iter().map(String::as_str).collect();
    context.last_command = Some(line.trim().to_string());
    let control = context.dispatch(&raw.to_lowercase(), raw, &args)?;
    if control == LoopControl::Exit {
        context.running = false;
    }
    Ok(control)
}

/// Completes command names, then the fixed vocabularies their arguments use.
struct ShellCompleter {
    commands: Vec<String>,
}

impl ShellCompleter {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names.into_iter().map(str::to_string).collect();
        commands.sort();
        Self { commands }
    }

    fn candidates(&self, words: &[&str]) -> Vec<String> {
        let Some((command, args)) = words.split_first() else {
            return self.commands.clone();
        };
        let list = |items: &[&str]| -> Vec<String> {
            items.iter().map(|item| item.to_string()).collect()
        };
        let kinds = || -> Vec<String> {
            TransactionKind::ALL.iter().map(ToString::to_string).collect()
        };

        match (command.to_lowercase().as_str(), args) {
            ("add", []) | ("breakdown", []) | ("categories", []) => kinds(),
            ("add", [kind, _]) => match kind.parse::<TransactionKind>() {
                Ok(kind) => CategoryService::options(kind)
                    .iter()
                    .map(|option| option.value.to_string())
                    .collect(),
                Err(_) => Vec::new(),
            },
            ("clear", []) => list(&["all", "income", "expense"]),
            ("filter", []) => list(&["all", "range", "month"]),
            ("export", []) => ExportFormat::ALL.iter().map(|f| f.to_string()).collect(),
            ("config", []) => list(&["show", "set"]),
            ("config", [action]) if action.eq_ignore_ascii_case("set") => list(&CONFIG_KEYS),
            ("help", []) => self.commands.clone(),
            _ => Vec::new(),
        }
    }
}

impl Helper for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix.rfind(char::is_whitespace).map_or(0, |idx| idx + 1);
        let finished: Vec<&str> = prefix[..start].split_whitespace().collect();
        let needle = prefix[start..].to_lowercase();

        let pairs = self
            .candidates(&finished)
            .into_iter()
            .filter(|candidate| candidate.starts_with(&needle))
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for ShellCompleter {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    split(input).map_err(|err| ParseError(err.to_string()))
}

#[derive(Debug)]
pub(crate) struct ParseError(String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(line: &str) -> (usize, Vec<String>) {
        let completer = ShellCompleter::new(vec!["summary", "add", "export", "config"]);
        let history = DefaultHistory::new();
        let ctx = ReadlineContext::new(&history);
        let (start, pairs) = completer.complete(line, line.len(), &ctx).unwrap();
        (start, pairs.into_iter().map(|pair| pair.replacement).collect())
    }

    #[test]
    fn parses_quoted_arguments() {
        let tokens = parse_command_line("add expense \"Rent, January\" rent 1200").unwrap();
        assert_eq!(tokens, vec!["add", "expense", "Rent, January", "rent", "1200"]);
        assert!(parse_command_line("add \"unterminated").is_err());
    }

    #[test]
    fn completes_command_names() {
        assert_eq!(complete("su"), (0, vec!["summary".to_string()]));
        assert_eq!(complete("").1.len(), 4);
    }

    #[test]
    fn completes_arguments_from_their_vocabulary() {
        assert_eq!(complete("export j"), (7, vec!["json".to_string()]));
        assert_eq!(complete("add inc").1, vec!["income"]);
        assert_eq!(complete("add expense Lunch di").1, vec!["dining"]);
        assert_eq!(complete("config set rec").1, vec!["recent_limit"]);
        assert!(complete("summary x").1.is_empty());
        assert!(complete("add expense Lunch dining 1").1.is_empty());
    }
}
