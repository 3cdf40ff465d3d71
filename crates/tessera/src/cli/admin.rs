//! Admin console command handlers.

use super::commands::{AdminCommands, Entity, ListArgs, OutputFormat};
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;
use tessera_admin::{CategoryFilter, DashboardStats, Listing, Manager, SortOrder};
use tessera_content::Catalog;
use tessera_error::{JsonError, TesseraResult, ValidationError, ValidationErrorKind};

/// Handle admin commands against the bundled catalog.
pub fn handle_admin_command(cmd: AdminCommands) -> TesseraResult<()> {
    let catalog = Catalog::bundled()?;
    match cmd {
        AdminCommands::List {
            entity,
            args,
            format,
        } => {
            let output = match entity {
                Entity::Articles => render_list(catalog.articles(), &args, format)?,
                Entity::Faqs => render_list(catalog.faqs(), &args, format)?,
                Entity::Users => render_list(catalog.users(), &args, format)?,
                Entity::Waitlist => render_list(catalog.waitlist(), &args, format)?,
            };
            println!("{}", output);
        }
        AdminCommands::Dashboard { format } => {
            println!("{}", render_dashboard(&DashboardStats::from_catalog(&catalog), format)?);
        }
    }
    Ok(())
}

/// Apply `args` to `items` and render the resulting view.
pub fn render_list<T>(items: &[T], args: &ListArgs, format: OutputFormat) -> TesseraResult<String>
where
    T: Listing + Serialize,
    T::SortField: FromStr + Display,
{
    let mut manager = Manager::new(items);
    let state = manager.state_mut();

    if let Some(search) = &args.search {
        state.set_search(search.clone());
    }
    if let Some(category) = args.category.as_deref() {
        state.set_category(category.parse::<CategoryFilter>().unwrap_or_default());
    }
    if let Some(status) = args.status.as_deref() {
        state.set_status(status.parse::<CategoryFilter>().unwrap_or_default());
    }

    let (default_field, default_order) = T::default_sort();
    let field = match args.sort.as_deref() {
        Some(raw) => raw.parse::<T::SortField>().map_err(|_| invalid("sort", raw))?,
        None => default_field,
    };
    let order = match args.order.as_deref() {
        Some(raw) => raw.parse::<SortOrder>().map_err(|_| invalid("order", raw))?,
        None if args.sort.is_some() => SortOrder::Asc,
        None => default_order,
    };
    state.set_sort(field, order);

    let view = manager.view();
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&view)
            .map_err(|e| JsonError::new(e.to_string()).into()),
        OutputFormat::Human => {
            let mut out = format!("{} {}s, sorted by {} {}\n", view.len(), T::KIND, field, order);
            out.push_str(&format!("{:-<80}\n", ""));
            for item in &view {
                let status = item
                    .status()
                    .map(|s| format!(" [{}]", s))
                    .unwrap_or_default();
                out.push_str(&format!(
                    "{:>4}  {}  ({}){}\n",
                    item.id(),
                    item.label(),
                    item.category(),
                    status
                ));
            }
            out.push_str(&format!("Total: {} of {}", view.len(), items.len()));
            Ok(out)
        }
    }
}

fn render_dashboard(stats: &DashboardStats, format: OutputFormat) -> TesseraResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(stats)
            .map_err(|e| JsonError::new(e.to_string()).into()),
        OutputFormat::Human => {
            let mut out = String::new();
            out.push_str(&format!(
                "Articles: {} ({} featured)\n",
                stats.articles, stats.featured_articles
            ));
            out.push_str(&format!("FAQs: {}\n", stats.faqs));
            out.push_str(&format!(
                "Users: {} ({} verified)\n",
                stats.users, stats.verified_users
            ));
            for (status, count) in &stats.users_by_status {
                out.push_str(&format!("  {}: {}\n", status, count));
            }
            out.push_str(&format!("Total investment: ${:.2}\n", stats.total_investment));
            out.push_str("Waitlist:\n");
            for (priority, count) in &stats.waitlist_by_priority {
                out.push_str(&format!("  {}: {}\n", priority, count));
            }
            out.push_str("Recent articles:");
            for article in &stats.recent_articles {
                out.push_str(&format!("\n  {}  {}", article.date, article.title));
            }
            Ok(out)
        }
    }
}

fn invalid(field: &str, value: &str) -> ValidationError {
    ValidationError::new(ValidationErrorKind::InvalidField {
        field: field.to_string(),
        reason: format!("unrecognized value '{}'", value),
    })
}
