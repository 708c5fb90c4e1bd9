use clap::Parser;

use sis::config::{Cli, Command};
use sis::domain::model::ConstituentQuery;
use sis::utils::logger;
use sis::{Credentials, Result, SisEngine};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose, cli.debug);

    match run(cli).await {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            tracing::error!("query failed: {e}");
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<Vec<String>> {
    let path = cli
        .credentials
        .clone()
        .unwrap_or_else(Credentials::default_path);
    let credentials = Credentials::load(&path)?;
    let engine = SisEngine::over_http(&credentials)?;

    match cli.command {
        Command::People {
            term,
            year,
            semester,
            section,
            constituents,
            identifier,
            exact,
        } => {
            let term = engine.resolve_term(term.as_deref(), year, semester).await?;
            let query = ConstituentQuery {
                term,
                section_number: section,
                exact,
                constituent: constituents,
                identifier,
            };
            let values = engine.people(&query).await?;
            Ok(values.into_iter().map(|value| value.to_string()).collect())
        }
        Command::Section {
            term,
            year,
            semester,
            section,
            attribute,
        } => {
            let term = engine.resolve_term(term.as_deref(), year, semester).await?;
            engine.section(&term, section, attribute).await
        }
        Command::Student {
            id,
            id_type,
            attribute,
        } => engine.student(&id, id_type, attribute).await,
        Command::Courses {
            id,
            id_type,
            year,
            semester,
            attribute,
            include_waitlisted,
        } => {
            let term = engine
                .resolve_term(None, Some(year), Some(semester))
                .await?;
            engine
                .courses(&term, &id, id_type, attribute, include_waitlisted)
                .await
        }
        Command::Term {
            position,
            year,
            semester,
        } => {
            let explicit = position.map(|position| position.as_str().to_string());
            let term = engine
                .resolve_term(explicit.as_deref(), year, semester)
                .await?;
            Ok(vec![term.to_string()])
        }
    }
}
