use clap::Parser;
use comfy_table::{Cell, Table as ComfyTable, presets::UTF8_FULL};
use config::{Config, Environment, File};
use metagrust::configure::{ConsoleEditDialog, ConstraintConfigurator, ObjectConfigurator};
use metagrust::core::fields;
use metagrust::loader::{self, VecRowSource};
use metagrust::parser::parse_qualified_name;
use metagrust::{
    Catalog, CatalogCache, CatalogRow, ConstraintKind, DataSourceInfo, Engine, ProgressMonitor,
    Schema, ServerVersion, Table, TableConstraint, UiExecutor,
};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// MetaGrust catalog browser
#[derive(Parser, Debug)]
#[command(name = "mgr_cli")]
#[command(about = "MetaGrust interactive catalog browser", long_about = None)]
struct Args {
    /// Snapshot cache directory
    #[arg(short = 'c', long)]
    cache_dir: Option<String>,

    /// Schema to browse initially
    #[arg(short = 's', long)]
    schema: Option<String>,

    /// Engine of the demo catalog created when no snapshot exists
    #[arg(short = 'e', long)]
    engine: Option<String>,

    /// Server version of the demo catalog
    #[arg(short = 'v', long)]
    version: Option<String>,
}

/// Конфигурация браузера каталога
#[derive(Debug, Deserialize)]
struct BrowserConfig {
    #[serde(default = "default_cache_dir")]
    cache_dir: String,
    #[serde(default = "default_schema")]
    schema: String,
    #[serde(default = "default_engine")]
    engine: String,
    #[serde(default = "default_version")]
    version: String,
}

fn default_cache_dir() -> String {
    CatalogCache::default_cache_dir().display().to_string()
}
fn default_schema() -> String { "shop".to_string() }
fn default_engine() -> String { "mysql".to_string() }
fn default_version() -> String { "8.0.36".to_string() }

impl BrowserConfig {
    /// Load configuration with priority: CLI args > ENV > config file > defaults
    fn load(args: &Args) -> Self {
        let config_paths = ["/etc/metagrust/metagrust.toml", "./metagrust.toml"];

        let mut builder = Config::builder();
        for path in &config_paths {
            if Path::new(path).exists() {
                builder = builder.add_source(File::with_name(path));
                eprintln!("Loaded config from: {}", path);
                break;
            }
        }

        builder = builder.add_source(Environment::with_prefix("METAGRUST").separator("_"));

        let config = builder.build().ok();
        let base_config = config
            .and_then(|c| c.try_deserialize::<BrowserConfig>().ok())
            .unwrap_or_else(|| BrowserConfig {
                cache_dir: default_cache_dir(),
                schema: default_schema(),
                engine: default_engine(),
                version: default_version(),
            });

        Self {
            cache_dir: args.cache_dir.clone().unwrap_or(base_config.cache_dir),
            schema: args.schema.clone().unwrap_or(base_config.schema),
            engine: args.engine.clone().unwrap_or(base_config.engine),
            version: args.version.clone().unwrap_or(base_config.version),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = BrowserConfig::load(&args);

    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║              MetaGrust Catalog Browser                   ║");
    println!("╚══════════════════════════════════════════════════════════╝");

    let cache = CatalogCache::new(&config.cache_dir)?;
    let mut catalog = match cache.load_snapshot()? {
        Some(catalog) => {
            println!("✓ Loaded catalog snapshot");
            println!("  - Source: {} {}", catalog.datasource.engine, catalog.datasource.version);
            println!("  - Schemas: {}", catalog.schemas.len());
            catalog
        }
        None => {
            println!("✓ No snapshot found, creating demo catalog");
            bootstrap_demo_catalog(&config)?
        }
    };

    let ui = Arc::new(UiExecutor::new()?);
    let mut current_schema = config.schema.clone();
    let monitor = ProgressMonitor::new();

    let mut rl = DefaultEditor::new()?;
    let history_file = dirs::home_dir().map(|mut p| {
        p.push(".mgr_cli_history");
        p
    });
    if let Some(ref path) = history_file {
        let _ = rl.load_history(path); // Ignore error if file doesn't exist
    }

    println!("\nCurrent schema: {current_schema}");
    println!("Type \\? for command help, \\q to quit.\n");

    loop {
        let readline = rl.readline("mgr_cli> ");
        let line = match readline {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("✗ Input error: {}", e);
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line);

        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let rest: Vec<&str> = parts.collect();

        let outcome = match command {
            "\\q" | "\\quit" => break,
            "\\?" | "\\h" | "\\help" => {
                print_help();
                Ok(())
            }
            "\\l" | "\\list" => {
                list_schemas(&catalog);
                Ok(())
            }
            "\\use" => match rest.first() {
                Some(name) => {
                    if catalog.get_schema(name).is_some() {
                        current_schema = (*name).to_string();
                        println!("Current schema: {current_schema}");
                        Ok(())
                    } else {
                        Err(format!("schema '{name}' not found"))
                    }
                }
                None => Err("usage: \\use <schema>".to_string()),
            },
            "\\dt" => list_tables(&catalog, &current_schema),
            "\\d" => match rest.first() {
                Some(name) => describe_table(&catalog, &current_schema, name),
                None => Err("usage: \\d <table>".to_string()),
            },
            "\\dup" => match (rest.first(), rest.get(1)) {
                (Some(name), Some(new_name)) => {
                    duplicate_table(&mut catalog, &monitor, &current_schema, name, new_name)
                }
                _ => Err("usage: \\dup <table> <new_name>".to_string()),
            },
            "\\cc" => match rest.first() {
                Some(name) => create_constraint(
                    &mut catalog,
                    &monitor,
                    &ui,
                    &current_schema,
                    name,
                    rest.get(1).copied(),
                ),
                None => Err("usage: \\cc <table> [pk|unique|check|fk]".to_string()),
            },
            "\\save" => match cache.save_snapshot(&catalog) {
                Ok(()) => {
                    println!("✓ Snapshot saved");
                    Ok(())
                }
                Err(e) => Err(e.to_string()),
            },
            _ => Err(format!("unknown command: {line}. Use \\? for help.")),
        };

        if let Err(message) = outcome {
            eprintln!("✗ {}", message);
        }
    }

    cache.save_snapshot(&catalog)?;
    println!("✓ Snapshot saved");
    if let Some(ref path) = history_file {
        let _ = rl.save_history(path);
    }
    println!("Goodbye!");
    Ok(())
}

fn print_help() {
    println!("Meta-commands:");
    println!("  \\l, \\list            - List schemas");
    println!("  \\use <schema>        - Switch current schema");
    println!("  \\dt                  - List tables of current schema");
    println!("  \\d <table>           - Describe table (columns + constraints)");
    println!("  \\dup <table> <name>  - Duplicate table under a new name");
    println!("  \\cc <table> [kind]   - Create constraint interactively");
    println!("  \\save                - Save catalog snapshot");
    println!("  \\q, \\quit            - Quit (saves snapshot)");
}

fn list_schemas(catalog: &Catalog) {
    let mut table = ComfyTable::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["Schema", "Owner", "Tables"].map(Cell::new));
    let mut names: Vec<&String> = catalog.schemas.keys().collect();
    names.sort();
    for name in names {
        let schema = &catalog.schemas[name];
        table.add_row(vec![
            Cell::new(&schema.name),
            Cell::new(&schema.owner),
            Cell::new(schema.tables.len()),
        ]);
    }
    println!("{table}");
}

fn list_tables(catalog: &Catalog, schema_name: &str) -> Result<(), String> {
    let schema = catalog
        .get_schema(schema_name)
        .ok_or_else(|| format!("schema '{schema_name}' not found"))?;
    let mut table = ComfyTable::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["Table", "Columns", "Constraints", "Persisted"].map(Cell::new));
    let mut names: Vec<&String> = schema.tables.keys().collect();
    names.sort();
    for name in names {
        let t = &schema.tables[name];
        table.add_row(vec![
            Cell::new(&t.name),
            Cell::new(t.columns.len()),
            Cell::new(t.constraints().len()),
            Cell::new(t.persisted),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn describe_table(catalog: &Catalog, current_schema: &str, name: &str) -> Result<(), String> {
    let qname = parse_qualified_name(name).map_err(|e| e.to_string())?;
    let schema_name = qname.schema.as_deref().unwrap_or(current_schema);
    let schema = catalog
        .get_schema(schema_name)
        .ok_or_else(|| format!("schema '{schema_name}' not found"))?;
    let table = schema
        .get_table(&qname.object)
        .ok_or_else(|| format!("table '{}' not found", qname.object))?;

    println!("Table {}", table.fully_qualified_name(schema_name));
    if let Some(comment) = &table.comment {
        println!("  {comment}");
    }

    let mut columns = ComfyTable::new();
    columns.load_preset(UTF8_FULL);
    columns.set_header(["#", "Column", "Type", "Nullable", "Default"].map(Cell::new));
    for column in &table.columns {
        columns.add_row(vec![
            Cell::new(column.ordinal_position),
            Cell::new(&column.name),
            Cell::new(&column.data_type),
            Cell::new(column.nullable),
            Cell::new(
                column
                    .default_value
                    .as_ref()
                    .map_or(String::new(), ToString::to_string),
            ),
        ]);
    }
    println!("{columns}");

    if !table.constraints().is_empty() {
        let supports_check = catalog.datasource.supports_check_constraints();
        let mut constraints = ComfyTable::new();
        constraints.load_preset(UTF8_FULL);
        constraints.set_header(["Constraint", "Kind", "Columns", "Check clause"].map(Cell::new));
        for constraint in table.constraints() {
            let key: Vec<&str> = constraint
                .attribute_references()
                .iter()
                .map(|r| r.column_name.as_str())
                .collect();
            // The clause column is capability-gated, same as in the editor
            let clause = if supports_check {
                constraint.check_clause().unwrap_or("")
            } else {
                ""
            };
            constraints.add_row(vec![
                Cell::new(&constraint.name),
                Cell::new(constraint.kind),
                Cell::new(key.join(", ")),
                Cell::new(clause),
            ]);
        }
        println!("{constraints}");
    }
    Ok(())
}

fn duplicate_table(
    catalog: &mut Catalog,
    monitor: &ProgressMonitor,
    schema_name: &str,
    name: &str,
    new_name: &str,
) -> Result<(), String> {
    let schema = catalog
        .get_schema_mut(schema_name)
        .ok_or_else(|| format!("schema '{schema_name}' not found"))?;
    schema
        .duplicate_table(monitor, name, new_name)
        .map_err(|e| e.to_string())?;
    println!("✓ Table '{name}' duplicated as '{new_name}'");
    Ok(())
}

fn create_constraint(
    catalog: &mut Catalog,
    monitor: &ProgressMonitor,
    ui: &Arc<UiExecutor>,
    schema_name: &str,
    table_name: &str,
    kind: Option<&str>,
) -> Result<(), String> {
    let kind = match kind.unwrap_or("check") {
        "pk" => ConstraintKind::PrimaryKey,
        "unique" => ConstraintKind::Unique,
        "check" => ConstraintKind::Check,
        "fk" => ConstraintKind::ForeignKey,
        other => return Err(format!("unknown constraint kind '{other}'")),
    };

    let datasource = catalog.datasource.clone();
    let schema = catalog
        .get_schema_mut(schema_name)
        .ok_or_else(|| format!("schema '{schema_name}' not found"))?;
    let table = schema
        .get_table_mut(table_name)
        .ok_or_else(|| format!("table '{table_name}' not found"))?;

    let draft_name = format!("{}_{}", table_name, kind.to_string().to_lowercase().replace(' ', "_"));
    let target = TableConstraint::new(draft_name, kind, false);

    let configurator = ConstraintConfigurator::new(
        Arc::clone(ui),
        Arc::new(ConsoleEditDialog),
        datasource,
    );
    let configured = configurator
        .configure_object(monitor, None, Some(table_name), target, &HashMap::new())
        .map_err(|e| e.to_string())?;

    match configured {
        Some(constraint) => {
            let qualified = constraint.fully_qualified_name(schema_name, table_name);
            table.add_constraint(constraint).map_err(|e| e.to_string())?;
            println!("✓ Constraint {qualified} created (not persisted)");
            Ok(())
        }
        None => {
            println!("Cancelled");
            Ok(())
        }
    }
}

/// Строит демонстрационный каталог через загрузчик, как при живом чтении
fn bootstrap_demo_catalog(config: &BrowserConfig) -> Result<Catalog, Box<dyn std::error::Error>> {
    let engine = Engine::from_str(&config.engine)?;
    let version = ServerVersion::from_str(&config.version)?;
    let mut catalog = Catalog::new(DataSourceInfo::new(engine, version));
    let monitor = ProgressMonitor::new();

    let mut schema = Schema::new(config.schema.clone(), "admin".to_string());

    let mut orders = Table::new("orders".to_string(), "admin".to_string());
    orders.persisted = true;
    let mut columns = VecRowSource::new(vec![
        demo_row(&[
            (fields::COL_COLUMN_NAME, "id"),
            (fields::COL_ORDINAL_POSITION, "1"),
            (fields::COL_COLUMN_TYPE, "int"),
            (fields::COL_IS_NULLABLE, "NO"),
            (fields::COL_EXTRA, "auto_increment"),
        ]),
        demo_row(&[
            (fields::COL_COLUMN_NAME, "total"),
            (fields::COL_ORDINAL_POSITION, "2"),
            (fields::COL_COLUMN_TYPE, "numeric(10,2)"),
            (fields::COL_IS_NULLABLE, "NO"),
            (fields::COL_COLUMN_DEFAULT, "0"),
        ]),
        demo_row(&[
            (fields::COL_COLUMN_NAME, "status"),
            (fields::COL_ORDINAL_POSITION, "3"),
            (fields::COL_COLUMN_TYPE, "enum('new','paid','shipped')"),
            (fields::COL_IS_NULLABLE, "NO"),
        ]),
    ]);
    loader::load_columns(&monitor, &mut orders, &mut columns)?;

    let mut constraints = VecRowSource::new(vec![
        demo_row(&[
            (fields::COL_CONSTRAINT_NAME, "pk_orders"),
            (fields::COL_CONSTRAINT_TYPE, "PRIMARY KEY"),
        ]),
        demo_row(&[
            (fields::COL_CONSTRAINT_NAME, "chk_total"),
            (fields::COL_CONSTRAINT_TYPE, "CHECK"),
            (fields::COL_CHECK_CLAUSE, "total >= 0"),
        ]),
    ]);
    loader::load_constraints(&monitor, &mut orders, &mut constraints)?;

    let mut keys = VecRowSource::new(vec![demo_row(&[
        (fields::COL_CONSTRAINT_NAME, "pk_orders"),
        (fields::COL_COLUMN_NAME, "id"),
        (fields::COL_ORDINAL_POSITION, "1"),
    ])]);
    loader::load_key_columns(&monitor, &mut orders, &mut keys)?;

    schema.create_table(orders)?;
    catalog.create_schema(schema)?;
    println!("  - Demo schema '{}' with table 'orders'", config.schema);
    Ok(catalog)
}

fn demo_row(fields: &[(&str, &str)]) -> CatalogRow {
    CatalogRow::new(
        fields
            .iter()
            .map(|(name, value)| ((*name).to_string(), Some((*value).to_string())))
            .collect(),
    )
}
