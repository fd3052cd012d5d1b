use crate::cli::parser::{Commands, SourceArgs};
use crate::config::Config;
use crate::core::PrettyTable;
use crate::errors::{AppError, AppResult};
use crate::import::SourceKind;
use crate::render::{self, OutputFormat};
use crate::ui::messages::{info, warning};
use std::path::Path;

/// Handle the `show` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        source,
        sort,
        desc,
        delete,
        format,
        attr,
    } = cmd
    {
        let (kind, path) = resolve_source(source)?;

        let mut table = PrettyTable::new();
        kind.load(&mut table, path)?;
        info(format!(
            "Loaded {} rows from {} file {}",
            table.row_count(),
            kind.as_str(),
            path.display()
        ));

        if let Some(column) = sort {
            table.sort_by(column, *desc)?;
        }

        for position in delete {
            table.delete_row(*position)?;
        }

        match format.unwrap_or(cfg.default_format) {
            OutputFormat::Text => print(&table, cfg.warn_on_empty),
            OutputFormat::Html => {
                let raw = if attr.is_empty() {
                    &cfg.html_attributes
                } else {
                    attr
                };
                let attributes = parse_attributes(raw)?;
                println!("{}", render::html::render(&table, attributes)?);
            }
        }
    }
    Ok(())
}

/// Print the text grid to stdout.
pub fn print(table: &PrettyTable, warn_on_empty: bool) {
    if !table.has_columns() && warn_on_empty {
        warning("Table is empty or has no columns defined");
    }
    print!("{}", render::text::render(table));
}

/// Split `key=value` items, keeping their order.
pub fn parse_attributes(items: &[String]) -> AppResult<Vec<(String, String)>> {
    items
        .iter()
        .map(|item| {
            item.split_once('=')
                .filter(|(k, _)| !k.trim().is_empty())
                .map(|(k, v)| (k.trim().to_string(), v.to_string()))
                .ok_or_else(|| {
                    AppError::InvalidArgument(format!(
                        "HTML attribute must be in key=value form, got '{item}'"
                    ))
                })
        })
        .collect()
}

fn resolve_source(source: &SourceArgs) -> AppResult<(SourceKind, &Path)> {
    match (&source.csv, &source.json) {
        (Some(p), None) => Ok((SourceKind::Csv, p.as_path())),
        (None, Some(p)) => Ok((SourceKind::Json, p.as_path())),
        _ => Err(AppError::InvalidArgument(
            "Exactly one of --csv or --json must be given".into(),
        )),
    }
}
