use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use funnel_core::{FunnelAction, WizardState};
use shared::{
    catalog::group_by_category,
    domain::{BuildingCount, Category, FacilityId},
    summary::FunnelSummary,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List facilities grouped by display group.
    Catalog {
        #[arg(long)]
        json: bool,
    },
    /// Drive the funnel non-interactively and print the resulting summary as JSON.
    Run {
        #[arg(long)]
        category: Category,
        #[arg(long)]
        building_count: Option<BuildingCount>,
        #[arg(long = "facility")]
        facilities: Vec<FacilityId>,
    },
}

fn run_funnel(
    category: Category,
    building_count: Option<BuildingCount>,
    facilities: &[FacilityId],
) -> Result<FunnelSummary> {
    let mut state = WizardState::new();
    state.apply(FunnelAction::SelectCategory(category))?;

    if let Some(count) = building_count {
        if !funnel_core::shows_building_count_step(Some(category)) {
            anyhow::bail!("{category} does not take a building count");
        }
        state.apply(FunnelAction::EditBuildingCount(count.get()))?;
        state.apply(FunnelAction::SubmitBuildingCount)?;
    }

    if !facilities.is_empty() && !funnel_core::shows_facility_step(Some(category)) {
        anyhow::bail!("{category} does not take facilities");
    }
    for id in facilities {
        if !state.is_selected(*id) {
            state.apply(FunnelAction::ToggleFacility(*id))?;
        }
    }

    Ok(state.summary())
}

fn render_summary(summary: &FunnelSummary) -> Result<String> {
    let json = serde_json::to_string_pretty(summary).context("serializing summary")?;
    info!(summary = %json, "building overview summary");
    Ok(json)
}

fn print_catalog(json: bool) -> Result<()> {
    let groups = group_by_category();
    if json {
        let rendered: serde_json::Map<String, serde_json::Value> = groups
            .into_iter()
            .map(|(group, items)| {
                serde_json::to_value(items).map(|value| (group.label().to_string(), value))
            })
            .collect::<Result<_, serde_json::Error>>()
            .context("serializing catalog")?;
        println!("{}", serde_json::to_string_pretty(&rendered)?);
        return Ok(());
    }

    for (group, items) in groups {
        println!("{}", group.label());
        for item in items {
            println!(
                "  {:<26} {} - {}",
                item.id,
                item.name,
                item.description.unwrap_or_default()
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Catalog { json } => print_catalog(json)?,
        Command::Run {
            category,
            building_count,
            facilities,
        } => {
            let summary = run_funnel(category, building_count, &facilities)?;
            println!("{}", render_summary(&summary)?);
        }
    }

    Ok(())
}
