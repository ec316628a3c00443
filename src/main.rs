use clap::Parser;
use schematic_search::cli::{Cli, Commands};
use schematic_search::config::Settings;
use schematic_search::types::{IndexStatus, SearchResponse};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    schematic_search::tracing::init_with(cli.log_format);

    let settings = Settings::load(cli.config.as_deref())?;
    let engine = settings.build_engine()?;

    match cli.command {
        Commands::Index { document } => {
            let Some(index) = engine.index(&settings.provider(), &document) else {
                println!("{document} is served from precomputed tables and is not indexed");
                return Ok(());
            };
            println!(
                "{}: {} ({}/{} pages, {} components)",
                index.document_id,
                index.status,
                index.success_pages,
                index.total_pages,
                index.total_components
            );
            if index.status == IndexStatus::Failed {
                anyhow::bail!(index.error.unwrap_or_else(|| "indexing failed".into()));
            }
        }
        Commands::Search {
            document,
            keyword,
            json,
        } => {
            let response = engine.search(&document, &keyword);
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_response(&response);
            }
        }
        Commands::SearchAll { keyword } => {
            let responses = engine.search_all(&keyword);
            println!("{}", serde_json::to_string_pretty(&responses)?);
        }
        Commands::List => {
            for summary in engine.document_summaries() {
                let status = summary
                    .status
                    .map_or_else(|| "unreadable".to_string(), |s| s.to_string());
                let kind = if summary.specialized { " [specialized]" } else { "" };
                println!(
                    "{}{}: {} ({}/{} pages, {} components)",
                    summary.document_id,
                    kind,
                    status,
                    summary.success_pages,
                    summary.total_pages,
                    summary.total_components
                );
            }
        }
    }

    Ok(())
}

fn print_response(response: &SearchResponse) {
    println!(
        "{} results for {}",
        response.total,
        response.search_terms.join(" | ")
    );
    for result in &response.results {
        println!(
            "  p{:<4} {:>4.1}  [{}] {}",
            result.page_num, result.relevance_score, result.text_type, result.highlighted_text
        );
    }
}
