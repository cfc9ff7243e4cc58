use cinema_recipe::config::CinemaConfig;
use cinema_recipe::lifecycle::{setup_tracing, Category, Cinema};
use cinema_recipe::names::{NameBook, NameSource};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = CinemaConfig::from_env().map_err(|e| {
        error!(category = %Category::Cinema, "{}", e);
        e.to_string()
    })?;
    info!(
        category = %Category::Cinema,
        config = %serde_json::to_string(&config).map_err(|e| e.to_string())?,
        "Starting the day"
    );

    let mut names: Box<dyn NameSource> = match &config.names_file {
        Some(path) => Box::new(NameBook::from_csv(path).map_err(|e| e.to_string())?),
        None => Box::new(NameBook::built_in()),
    };

    let cinema = Cinema::open(config, names.as_mut())
        .await
        .map_err(|e| e.to_string())?;
    let summary = cinema.run_to_completion().await.map_err(|e| e.to_string())?;

    for (name, outcome) in &summary.outcomes {
        info!(category = %Category::Cinema, name = %name, ?outcome, "Visit");
    }
    info!(
        category = %Category::Cinema,
        report = %serde_json::to_string(&summary.operator).map_err(|e| e.to_string())?,
        "Operator report"
    );
    info!(
        category = %Category::Cinema,
        shows = summary.operator.cycles.len(),
        audience = summary.operator.total_audience(),
        tickets_remaining = summary.tickets_remaining,
        "Goodbye"
    );
    Ok(())
}
