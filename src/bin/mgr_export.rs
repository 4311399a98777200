use clap::Parser;
use metagrust::CatalogCache;
use std::path::PathBuf;

/// MetaGrust snapshot exporter
#[derive(Parser, Debug)]
#[command(name = "mgr_export")]
#[command(about = "Export a MetaGrust catalog snapshot to JSON", long_about = None)]
struct Args {
    /// Snapshot cache directory
    #[arg(short = 'c', long)]
    cache_dir: Option<PathBuf>,

    /// Output JSON file
    #[arg(short = 'o', long, default_value = "catalog.json")]
    out: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let cache_dir = args
        .cache_dir
        .unwrap_or_else(CatalogCache::default_cache_dir);

    let cache = CatalogCache::new(&cache_dir)?;
    let catalog = match cache.load_snapshot()? {
        Some(catalog) => catalog,
        None => {
            eprintln!("✗ No snapshot in {}", cache_dir.display());
            eprintln!("  Run mgr_cli first to create one.");
            std::process::exit(1);
        }
    };

    CatalogCache::export_json(&catalog, &args.out)?;
    println!("✓ Exported snapshot {} to {}", catalog.snapshot_id, args.out.display());
    println!("  - Source: {} {}", catalog.datasource.engine, catalog.datasource.version);
    println!("  - Schemas: {}", catalog.schemas.len());
    Ok(())
}
