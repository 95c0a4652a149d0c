use menu_shared::models::DEFAULT_COURSES;
use menu_shared::{AppError, AppResult, ErrorCode};
use std::path::PathBuf;
use std::str::FromStr;

/// How the menu store assigns ids to new items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// One past the largest id in the menu
    #[default]
    Sequential,
    /// Time-based snowflake id (see `menu_shared::util::snowflake_id`)
    Snowflake,
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "snowflake" => Ok(Self::Snowflake),
            other => Err(format!("unknown id strategy: {other}")),
        }
    }
}

/// Application configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CHEF_LOG_LEVEL | info | Log level |
/// | CHEF_LOG_JSON | false | JSON console logs |
/// | CHEF_LOG_DIR | (unset) | Directory for rolling log files |
/// | CHEF_MENU_FILE | (unset) | JSON seed menu |
/// | CHEF_COURSES | Burgers,Pizza,Dessert,Beverages | Known courses |
/// | CHEF_ID_STRATEGY | sequential | `sequential` or `snowflake` |
/// | CHEF_CURRENCY | R | Price prefix |
///
/// # Example
///
/// ```ignore
/// CHEF_LOG_LEVEL=debug CHEF_COURSES="Starters,Mains" cargo run -p chef-menu
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_json: bool,
    /// Enables file logging when set
    pub log_dir: Option<PathBuf>,
    /// Seed menu; the built-in menu is used when unset
    pub menu_file: Option<PathBuf>,
    /// Known courses, in display order (drives the filter screen)
    pub courses: Vec<String>,
    pub id_strategy: IdStrategy,
    pub currency: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Missing values fall back to defaults. A value that is set but does
    /// not parse fails with `ConfigError`.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let log_json = match lookup("CHEF_LOG_JSON") {
            Some(raw) => raw
                .trim()
                .parse::<bool>()
                .map_err(|_| config_error("CHEF_LOG_JSON", &raw, "expected true or false"))?,
            None => false,
        };
        let id_strategy = match lookup("CHEF_ID_STRATEGY") {
            Some(raw) => raw
                .parse::<IdStrategy>()
                .map_err(|e| config_error("CHEF_ID_STRATEGY", &raw, &e))?,
            None => IdStrategy::default(),
        };

        Ok(Self {
            log_level: lookup("CHEF_LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json,
            log_dir: lookup("CHEF_LOG_DIR").map(PathBuf::from),
            menu_file: lookup("CHEF_MENU_FILE").map(PathBuf::from),
            courses: lookup("CHEF_COURSES")
                .map(|v| parse_courses(&v))
                .filter(|c| !c.is_empty())
                .unwrap_or_else(default_courses),
            id_strategy,
            currency: lookup("CHEF_CURRENCY").unwrap_or_else(|| "R".into()),
        })
    }

    /// Override the course list
    ///
    /// Used by tests and embedders that don't go through the environment.
    pub fn with_courses<S: Into<String>>(mut self, courses: impl IntoIterator<Item = S>) -> Self {
        self.courses = courses.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_id_strategy(mut self, id_strategy: IdStrategy) -> Self {
        self.id_strategy = id_strategy;
        self
    }

    pub fn with_menu_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.menu_file = Some(path.into());
        self
    }

    /// Course preselected on the "add item" form
    pub fn default_course(&self) -> &str {
        self.courses
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_COURSES[0])
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            menu_file: None,
            courses: default_courses(),
            id_strategy: IdStrategy::default(),
            currency: "R".into(),
        }
    }
}

fn default_courses() -> Vec<String> {
    DEFAULT_COURSES.iter().map(|c| c.to_string()).collect()
}

fn config_error(variable: &str, value: &str, reason: &str) -> AppError {
    AppError::with_message(
        ErrorCode::ConfigError,
        format!("Invalid {variable}={value:?}: {reason}"),
    )
    .with_detail("variable", variable)
}

/// Split a comma separated course list, dropping blanks and repeats
fn parse_courses(raw: &str) -> Vec<String> {
    let mut courses: Vec<String> = Vec::new();
    for course in raw.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        if !courses.iter().any(|c| c == course) {
            courses.push(course.to_string());
        }
    }
    courses
}
