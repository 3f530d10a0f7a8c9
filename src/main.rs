use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use klara_report::cli::{Cli, Commands};
use klara_report::ctx::Ctx;
use klara_report::io;
use klara_report::pipeline::Pipeline;
use klara_report::samples;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => {
            let mut ctx = Ctx::new(
                args.out,
                args.seed,
                args.rows,
                args.json,
                args.tsv,
                env!("CARGO_PKG_VERSION"),
            );
            let pipeline = Pipeline::render();
            pipeline.run(&mut ctx)?;
            print_summary(&ctx)?;
        }
        Commands::Columns => print_columns(),
    }

    Ok(())
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn print_columns() {
    println!("columns:");
    for spec in samples::clinical_columns() {
        println!("{}\tmean={}\tsd={}", spec.name, spec.mean, spec.sd);
    }
}
