//! Search suggestion command.

use anyhow::Result;
use serde::Serialize;
use storefront_commerce::catalog::seed;
use storefront_commerce::listing::ListingState;
use storefront_commerce::search::{SearchBox, SuggestionGroup};

use super::SuggestArgs;
use crate::context::Context;

#[derive(Serialize)]
struct SuggestReport<'a> {
    query: &'a str,
    groups: Vec<SuggestionGroup<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    breadcrumb: Option<String>,
}

/// Run the suggest command.
pub fn run(args: SuggestArgs, ctx: &Context) -> Result<()> {
    let source = seed::suggestions();
    let mut search = SearchBox::new();
    search.set_input(args.query.as_str());
    search.focus();

    let groups = search.visible(&source);
    let breadcrumb = if args.submit {
        search
            .submit()
            .map(|term| ListingState::new().with_search(term).breadcrumb().to_string())
    } else {
        None
    };

    if ctx.output.is_json() {
        ctx.output.json(&SuggestReport {
            query: &args.query,
            groups,
            breadcrumb,
        });
        return Ok(());
    }

    if groups.is_empty() {
        ctx.output.info("No suggestions found.");
    }
    for group in &groups {
        ctx.output.header(group.group);
        for suggestion in &group.suggestions {
            ctx.output.list_item(&suggestion.label);
        }
    }

    if args.submit {
        match breadcrumb {
            Some(crumb) => ctx.output.success(&format!("Home / {}", crumb)),
            None => ctx.output.warn("Nothing to search for."),
        }
    }

    Ok(())
}
