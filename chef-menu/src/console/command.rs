//! Console command grammar

use clap::{Args, Parser, Subcommand};

/// One line typed at the console
#[derive(Debug, Parser)]
#[command(
    name = "chef-menu",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{subcommands}"
)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in (`login "Chef Sam"`)
    Login {
        #[arg(required = true, num_args = 1..)]
        username: Vec<String>,
    },
    /// Show menu items passing the course filter
    Home,
    /// Show the average price per course
    Averages,
    /// List known courses and whether each is selected
    Courses,
    /// Change the course filter
    #[command(subcommand)]
    Filter(FilterCommand),
    /// List every menu item with its id
    List,
    /// Add a menu item
    Add(FormArgs),
    /// Edit a menu item; omitted fields keep their value
    Edit {
        id: i64,
        #[command(flatten)]
        form: FormArgs,
    },
    /// Delete a menu item
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Leave the console
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Subcommand)]
pub enum FilterCommand {
    /// Show the pending selection
    Show,
    /// Select or deselect a course
    Toggle { course: String },
    /// Select every course
    Clear,
    /// Apply the pending selection to the home screen
    Apply,
    /// Discard the pending selection
    Cancel,
}

#[derive(Debug, Default, Args)]
pub struct FormArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub course: Option<String>,
    /// Raw price text, validated on save
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,
}

impl FormArgs {
    /// Overwrite the form fields that were given on the command line
    pub fn apply_to(self, form: &mut menu_shared::MenuItemForm) {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(course) = self.course {
            form.course = course;
        }
        if let Some(price) = self.price {
            form.price = price;
        }
    }
}

/// Split a console line shell-style and parse it
pub fn parse_line(line: &str) -> Result<Option<CommandLine>, ParseLineError> {
    let words = shell_words::split(line)?;
    if words.is_empty() {
        return Ok(None);
    }
    Ok(Some(CommandLine::try_parse_from(words)?))
}

#[derive(Debug, thiserror::Error)]
pub enum ParseLineError {
    #[error("{0}")]
    Quote(#[from] shell_words::ParseError),
    #[error("{0}")]
    Clap(#[from] clap::Error),
}
