use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use course_catalog_server::course_store::{validate_draft, Course, CourseDraft, CourseStore};
use course_catalog_server::SqliteCourseStore;

use rustyline::{
    completion::Completer, highlight::Highlighter, history::FileHistory, validate::Validator,
    CompletionType, Config, Editor, Helper,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the courses database file, created if missing.
    #[clap(value_parser = parse_path)]
    pub path: PathBuf,
}

#[derive(Parser)]
#[command(name = "")]
struct InnerCli {
    #[command(subcommand)]
    command: InnerCommand,
}

#[derive(Subcommand)]
enum InnerCommand {
    /// Validates and stores a new course.
    Add {
        title: String,
        #[arg(allow_negative_numbers = true)]
        duration_hours: i64,
        #[arg(long)]
        category: Option<String>,
    },

    /// Shows all courses.
    List,

    /// Shows the courses whose title contains the given term, ignoring case.
    Search { term: String },

    /// Shows a single course.
    Show { id: i64 },

    /// Shows how many courses are stored.
    Count,

    /// Shows the path of the current courses db.
    Where,

    /// Close this program.
    Exit,
}

enum CommandExecutionResult {
    Ok,
    Exit,
    Error(String),
}

const PROMPT: &str = ">> ";

fn print_course(course: &Course) {
    println!(
        "#{} {} [{}] {}h",
        course.id,
        course.title,
        course.category.as_deref().unwrap_or("-"),
        course.duration_hours
    );
}

fn print_courses(courses: &[Course]) {
    if courses.is_empty() {
        println!("No courses.");
    }
    for course in courses {
        print_course(course);
    }
}

fn execute_command(line: String, store: &SqliteCourseStore) -> CommandExecutionResult {
    if line.is_empty() {
        return CommandExecutionResult::Ok;
    }

    let args =
        shlex::split(&line).unwrap_or_else(|| line.split_whitespace().map(String::from).collect());

    let cli = InnerCli::try_parse_from(std::iter::once(" ").chain(args.iter().map(String::as_str)));

    match cli {
        Ok(cli) => {
            println!("{} {}", PROMPT, &line);
            match cli.command {
                InnerCommand::Add {
                    title,
                    duration_hours,
                    category,
                } => {
                    let draft = CourseDraft::new(&title, category.as_deref(), duration_hours);
                    let new_course = match validate_draft(draft) {
                        Ok(x) => x,
                        Err(err) => return CommandExecutionResult::Error(format!("{}", err)),
                    };
                    match store.insert_course(&new_course) {
                        Ok(course) => print_course(&course),
                        Err(err) => return CommandExecutionResult::Error(format!("{:#}", err)),
                    }
                }
                InnerCommand::List => match store.list_courses() {
                    Ok(courses) => print_courses(&courses),
                    Err(err) => return CommandExecutionResult::Error(format!("{:#}", err)),
                },
                InnerCommand::Search { term } => match store.search_courses_by_title(&term) {
                    Ok(courses) => print_courses(&courses),
                    Err(err) => return CommandExecutionResult::Error(format!("{:#}", err)),
                },
                InnerCommand::Show { id } => match store.get_course(id) {
                    Ok(Some(course)) => print_course(&course),
                    Ok(None) => {
                        return CommandExecutionResult::Error(format!("Course {} not found.", id))
                    }
                    Err(err) => return CommandExecutionResult::Error(format!("{:#}", err)),
                },
                InnerCommand::Count => match store.count_courses() {
                    Ok(count) => println!("{}", count),
                    Err(err) => return CommandExecutionResult::Error(format!("{:#}", err)),
                },
                InnerCommand::Where => {
                    println!("{}", store.db_path().display());
                }
                InnerCommand::Exit => return CommandExecutionResult::Exit,
            }
        }

        Err(e) => {
            if e.print().is_err() {
                println!("{}", e);
            }
        }
    }
    CommandExecutionResult::Ok
}

#[derive(rustyline_derive::Hinter)]
struct CommandsHelper {
    commands_names: Vec<String>,
}

impl CommandsHelper {
    pub fn new() -> Self {
        let commands_names: Vec<String> = InnerCli::command()
            .get_subcommands()
            .map(|sc| sc.get_name().to_string())
            .collect();

        CommandsHelper { commands_names }
    }
}

impl Completer for CommandsHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        if line.contains(' ') {
            return Ok((0, Vec::with_capacity(0)));
        }
        let matches = self
            .commands_names
            .iter()
            .filter(|c| c.starts_with(line))
            .cloned()
            .collect::<Vec<_>>();

        Ok((0, matches))
    }
}

impl Highlighter for CommandsHelper {}
impl Validator for CommandsHelper {}
impl Helper for CommandsHelper {}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    let store = SqliteCourseStore::new(&cli_args.path)
        .with_context(|| format!("Could not open courses DB at {:?}", cli_args.path))?;

    InnerCli::command().print_long_help()?;

    let config = Config::builder()
        .completion_type(CompletionType::List)
        .build();

    let mut rl = Editor::<CommandsHelper, FileHistory>::with_config(config)?;
    rl.set_helper(Some(CommandsHelper::new()));

    loop {
        let readline = rl.readline(PROMPT);

        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                match execute_command(line, &store) {
                    CommandExecutionResult::Ok => {}
                    CommandExecutionResult::Exit => {
                        break;
                    }
                    CommandExecutionResult::Error(err) => {
                        eprintln!("Error: {}", err);
                        continue;
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("CTRL-D: exiting.");
                break;
            }
            Err(e) => {
                println!("Error: {:?}", e);
                break;
            }
        }
    }
    Ok(())
}
