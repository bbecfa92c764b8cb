mod client;
mod error;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use contract::{Role, SkillLevel, StudentProfile, UploadKind};
use serde_json::Value;

use crate::client::{ApiClient, Reply};
use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "readiness-cli", about = "Industry-Readiness Combat Simulator terminal client")]
struct Cli {
    #[arg(long, env = "READINESS_API_URL", default_value = contract::DEFAULT_API_URL)]
    base_url: String,

    /// Print raw server JSON instead of the formatted report.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check backend liveness.
    Health,
    /// Upload a scenarios or training-resources CSV.
    Upload {
        #[arg(value_parser = parse_upload_kind)]
        kind: UploadKind,
        file: PathBuf,
    },
    /// Generate scenarios for a student profile.
    Generate(StudentArgs),
    /// Submit a response to one scenario.
    Submit {
        #[command(flatten)]
        student: StudentArgs,
        #[arg(long)]
        scenario_id: String,
        #[command(flatten)]
        response: ResponseArgs,
    },
    /// Look up stored results for a simulation.
    Results { simulation_id: String },
    /// Generate, pick a scenario, submit, and print the report.
    Run {
        #[command(flatten)]
        student: StudentArgs,
        /// 1-based index into the generated scenario list.
        #[arg(long, default_value_t = 1)]
        scenario: usize,
        #[command(flatten)]
        response: ResponseArgs,
    },
}

#[derive(Args, Debug)]
struct StudentArgs {
    #[arg(long)]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    /// Student id; a random one is generated when omitted.
    #[arg(long)]
    id: Option<String>,
    /// frontend, backend, data_analyst or fullstack.
    #[arg(long)]
    role: Role,
    /// beginner, intermediate or advanced.
    #[arg(long)]
    skill_level: SkillLevel,
}

impl StudentArgs {
    fn to_profile(&self) -> Result<StudentProfile, CliError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CliError::MissingName);
        }
        let id = match self.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_owned(),
            _ => uuid::Uuid::new_v4().to_string(),
        };
        Ok(StudentProfile {
            id,
            name: name.to_owned(),
            email: self.email.trim().to_owned(),
            role: self.role,
            skill_level: self.skill_level,
        })
    }
}

#[derive(Args, Debug)]
struct ResponseArgs {
    /// Response text.
    #[arg(long, conflicts_with = "response_file")]
    response: Option<String>,
    /// Read the response text from a file.
    #[arg(long)]
    response_file: Option<PathBuf>,
    /// Attach a file (repeatable).
    #[arg(long = "attach")]
    attachments: Vec<PathBuf>,
}

impl ResponseArgs {
    async fn content(&self) -> Result<String, CliError> {
        match (&self.response, &self.response_file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => tokio::fs::read_to_string(path)
                .await
                .map_err(|source| CliError::Io { path: path.clone(), source }),
            (None, None) => Err(CliError::EmptyResponse),
        }
    }
}

fn parse_upload_kind(raw: &str) -> Result<UploadKind, String> {
    UploadKind::from_value(raw.trim()).ok_or_else(|| format!("expected `scenarios` or `training`, got `{raw}`"))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("{}", e.exit_message());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let api = ApiClient::new(cli.base_url);
    let json = cli.json;

    match cli.command {
        Command::Health => {
            let reply = api.health().await?;
            emit(json, &reply, |body| format!("{}: {}", body.status, body.message))
        }
        Command::Upload { kind, file } => {
            eprintln!("uploading {} as {}", file.display(), kind.label());
            let reply = api.upload_csv(kind, &file).await?;
            emit(json, &reply, |body| format!("Success: {}", body.message))
        }
        Command::Generate(student) => {
            let reply = api.generate_scenarios(&student.to_profile()?).await?;
            emit(json, &reply, |body| report::render_scenarios(&body.scenarios))
        }
        Command::Submit { student, scenario_id, response } => {
            let content = response.content().await?;
            eprintln!("Submitting response...");
            let reply = api
                .submit_response(&student.to_profile()?, &scenario_id, &content, &response.attachments)
                .await?;
            emit(json, &reply, report::render_result)
        }
        Command::Results { simulation_id } => {
            let reply = api.simulation_results(&simulation_id).await?;
            emit(json, &reply, report::render_lookup)
        }
        Command::Run { student, scenario, response } => run_assessment(&api, json, &student, scenario, &response).await,
    }
}

async fn run_assessment(
    api: &ApiClient,
    json: bool,
    student: &StudentArgs,
    index: usize,
    response: &ResponseArgs,
) -> Result<(), CliError> {
    let content = response.content().await?;
    if content.trim().is_empty() {
        return Err(CliError::EmptyResponse);
    }
    let profile = student.to_profile()?;

    eprintln!("generating scenarios for {} ({})", profile.name, profile.role.label());
    let generated = api.generate_scenarios(&profile).await?.body;
    if generated.scenarios.is_empty() {
        return Err(CliError::NoScenarios);
    }
    eprint!("{}", report::render_scenarios(&generated.scenarios));

    let available = generated.scenarios.len();
    let chosen = index
        .checked_sub(1)
        .and_then(|i| generated.scenarios.get(i))
        .ok_or(CliError::ScenarioIndex { index, available })?;
    eprintln!("selected scenario {index}: {}", chosen.title);
    eprintln!("Submitting response...");

    let reply = api
        .submit_response(&profile, &chosen.id, &content, &response.attachments)
        .await?;
    emit(json, &reply, report::render_result)
}

fn emit<T>(json: bool, reply: &Reply<T>, render: impl FnOnce(&T) -> String) -> Result<(), CliError> {
    if json {
        print_json(&reply.raw)
    } else {
        let text = render(&reply.body);
        println!("{}", text.trim_end());
        Ok(())
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
