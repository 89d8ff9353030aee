use anyhow::Result;
use clap::{arg, ArgAction, ArgMatches, Command};
use loadout_runtime::{load_catalog, run};
use loadout_structs::config::RunConfig;
use loadout_utils::jsonify_pretty;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    let common_args = [
        arg!(--config [CONFIG] "Config json string or path to json file")
            .value_parser(clap::value_parser!(String)),
        arg!(--url [URL] "Page holding the equipment table")
            .value_parser(clap::value_parser!(String)),
        arg!(--scaling [SCALING] "Offset added to weight in the value density denominator")
            .value_parser(clap::value_parser!(f64)),
        arg!(--lenient "Skip catalog entries that fail to parse instead of aborting")
            .action(ArgAction::SetTrue),
        arg!(-v --verbose "Log trial promotions and skipped rows").action(ArgAction::SetTrue),
    ];

    Command::new("loadout")
        .about("Picks a high value equipment loadout under a gold and weight budget")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Searches for the best loadout and prints it")
                .args(common_args.clone())
                .arg(
                    arg!(--gold [GOLD] "Cost budget in gold pieces")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    arg!(--lbs [LBS] "Weight budget in pounds")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    arg!(--attempts [ATTEMPTS] "Number of independent trials")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--violations [VIOLATIONS] "Consecutive rejections that end a trial")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--"p-uniform" [P_UNIFORM] "Chance of a uniform rather than density weighted draw")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    arg!(--seed [SEED] "Seed string, for reproducible runs")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(--parallel "Run trials on all cores").action(ArgAction::SetTrue))
                .arg(
                    arg!(--"catalog-file" [CATALOG_FILE] "Read the catalog from a file written by `catalog --output`")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(arg!(--json "Print the report as json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("catalog")
                .about("Scrapes and prints the parsed catalog")
                .args(common_args)
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the catalog is saved to this path (json if *.json, zlib otherwise)")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "loadout=debug" } else { "loadout=info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

/// Defaults, then `--config`, then the flags shared by every subcommand.
fn load_config(sub_m: &ArgMatches) -> Result<RunConfig> {
    let mut config = match sub_m.get_one::<String>("config") {
        Some(config) => RunConfig::load(config)?,
        None => RunConfig::default(),
    };
    if let Some(url) = sub_m.get_one::<String>("url") {
        config.url = url.clone();
    }
    if let Some(scaling) = sub_m.get_one::<f64>("scaling") {
        config.scaling_constant = *scaling;
    }
    if sub_m.get_flag("lenient") {
        config.lenient = true;
    }
    Ok(config)
}

fn apply_run_args(config: &mut RunConfig, sub_m: &ArgMatches) {
    if let Some(gold) = sub_m.get_one::<f64>("gold") {
        config.cost_budget_gold = *gold;
    }
    if let Some(lbs) = sub_m.get_one::<f64>("lbs") {
        config.weight_budget_lbs = *lbs;
    }
    if let Some(attempts) = sub_m.get_one::<usize>("attempts") {
        config.max_attempts = *attempts;
    }
    if let Some(violations) = sub_m.get_one::<usize>("violations") {
        config.max_violations = *violations;
    }
    if let Some(p_uniform) = sub_m.get_one::<f64>("p-uniform") {
        config.p_uniform = *p_uniform;
    }
    if let Some(seed) = sub_m.get_one::<String>("seed") {
        config.seed = Some(seed.clone());
    }
    if sub_m.get_flag("parallel") {
        config.parallel = true;
    }
}

#[tokio::main]
async fn main() {
    let matches = cli().get_matches();

    let result = match matches.subcommand() {
        Some(("run", sub_m)) => {
            init_tracing(sub_m.get_flag("verbose"));
            run_loadout(sub_m).await
        }
        Some(("catalog", sub_m)) => {
            init_tracing(sub_m.get_flag("verbose"));
            print_catalog(sub_m).await
        }
        _ => Err(anyhow::anyhow!("Invalid subcommand")),
    };
    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_loadout(sub_m: &ArgMatches) -> Result<()> {
    let mut config = load_config(sub_m)?;
    apply_run_args(&mut config, sub_m);
    let catalog_file = sub_m.get_one::<PathBuf>("catalog-file");
    let catalog = load_catalog(&config, catalog_file.map(PathBuf::as_path)).await?;
    let report = run(&catalog, &config)?;
    if sub_m.get_flag("json") {
        println!("{}", jsonify_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

async fn print_catalog(sub_m: &ArgMatches) -> Result<()> {
    let config = load_config(sub_m)?;
    let catalog = load_catalog(&config, None).await?;
    match sub_m.get_one::<PathBuf>("output") {
        Some(path) => {
            loadout_catalog::save_catalog(path, &catalog)?;
            println!("catalog written to: {:?}", path);
        }
        None => println!("{}", jsonify_pretty(&catalog.items())?),
    }
    Ok(())
}
