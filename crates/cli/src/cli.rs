use clap::{Parser, Subcommand, ValueEnum};

/// Output format for the listing subcommands.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Priority filter for recommendation requests.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PriorityFilter {
    High,
    Medium,
    Low,
}

impl PriorityFilter {
    /// Wire value the upstream filter expects (lowercase).
    pub fn as_request_value(&self) -> &'static str {
        match self {
            PriorityFilter::High => "high",
            PriorityFilter::Medium => "medium",
            PriorityFilter::Low => "low",
        }
    }
}

/// Command-line interface for the `skillgap` application.
#[derive(Debug, Parser)]
#[command(
    name = "skillgap",
    about = "Terminal dashboard for the Skills Gap Analyzer API"
)]
pub struct Cli {
    /// API base URL (overrides `SKILLGAP_API_BASE`).
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available `skillgap` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Launches the interactive dashboard (default).
    Dash,
    /// Lists employees.
    Employees {
        /// Output format: text or json.
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Lists skills.
    Skills {
        /// Only show skills in this category.
        #[arg(long)]
        category: Option<String>,
        /// Output format: text or json.
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Lists the distinct skill categories.
    Categories {
        /// Output format: text or json.
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Runs the skill gap analysis and prints the deficits.
    Analyze {
        /// Analyze a single employee by database id.
        #[arg(long, value_name = "ID")]
        employee_id: Option<u64>,
        /// Output format: text or json.
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Fetches training recommendations with cost and duration totals.
    Recommend {
        /// Limit to a single employee by database id.
        #[arg(long, value_name = "ID")]
        employee_id: Option<u64>,
        /// Filter by priority.
        #[arg(long, value_enum)]
        priority: Option<PriorityFilter>,
        /// Output format: text or json.
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Shows skill development predictions for an employee.
    Predictions {
        /// Employee database id.
        #[arg(long, value_name = "ID")]
        employee_id: u64,
        /// Output format: text or json.
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Checks that the API is reachable.
    Health,
}
