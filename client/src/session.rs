//! Interactive session shell
//!
//! Parses line commands and drives the controllers, printing rendered
//! views. This is the minimal stand-in for the page/routing scaffolding
//! the storefront would normally wrap around the core.

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app::{DetailController, DetailState, ListingState, ListingStore, SearchController};
use crate::config::Config;
use crate::domain::entities::ProductId;
use crate::domain::ports::CatalogApi;
use crate::error::ParseError;
use crate::render::{self, MarkupPolicy};

/// Commands a user can issue at the prompt
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Show the browse view (full listing or active search results)
    List,
    /// Issue a search; a blank query clears instead
    Search { query: String },
    /// Drop the active search and revert to the full listing
    Clear,
    /// Open the detail view for one product
    View { id: ProductId },
    /// Submit a review against the open product
    Review { text: String },
    /// Leave the detail view
    Back,
    Help,
    Quit,
}

/// Parse a command from one input line
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ParseError::UnknownCommand("empty input".to_string()));
    }

    let (command, rest) = match input.split_once(char::is_whitespace) {
        Some((command, rest)) => (command.to_lowercase(), rest.trim()),
        None => (input.to_lowercase(), ""),
    };

    match command.as_str() {
        "list" | "home" => Ok(Command::List),

        // An empty query is a valid search input - the controller
        // treats it as a clear
        "search" | "find" => Ok(Command::Search {
            query: rest.to_string(),
        }),

        "clear" => Ok(Command::Clear),

        "view" | "open" => {
            if rest.is_empty() {
                return Err(ParseError::MissingArgument("view".to_string()));
            }
            let id = rest.parse::<ProductId>().map_err(|_| {
                ParseError::InvalidArgument(format!("'{rest}' is not a valid product id"))
            })?;
            Ok(Command::View { id })
        }

        // Blank text passes through so the submission validation can
        // reject it in one place
        "review" => Ok(Command::Review {
            text: rest.to_string(),
        }),

        "back" => Ok(Command::Back),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),

        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn help_text() -> &'static str {
    "Commands:\n\
     - `list` - show the catalog (or active search results)\n\
     - `search <text>` - search products; empty text clears\n\
     - `clear` - drop the active search\n\
     - `view <id>` - open a product\n\
     - `review <text>` - post a review on the open product\n\
     - `back` - return to the catalog\n\
     - `quit` - exit"
}

/// Run the interactive session until `quit` or end of input.
pub async fn run<C: CatalogApi>(api: Arc<C>, config: &Config) -> anyhow::Result<()> {
    let policy = config.markup_policy();

    let mut listing = ListingStore::new(api.clone());
    if let Err(e) = listing.load_all().await {
        println!("Failed to load products: {e}");
    }
    let mut search = SearchController::new(api.clone());
    let mut detail: Option<DetailController<C>> = None;

    print_browse(&listing, &search);
    println!("Type `help` for commands.");
    prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                prompt();
                continue;
            }
        };

        match command {
            Command::Quit => break,

            Command::Help => println!("{}", help_text()),

            Command::List | Command::Back => {
                detail = None;
                print_browse(&listing, &search);
            }

            Command::Clear => {
                detail = None;
                search.clear();
                print_browse(&listing, &search);
            }

            Command::Search { query } => match search.search(&query).await {
                Ok(()) => {
                    detail = None;
                    print_browse(&listing, &search);
                }
                // Prior results stay; the query can be retried as-is
                Err(e) => println!("Search failed: {e}"),
            },

            Command::View { id } => {
                let mut controller = DetailController::new(api.clone(), id);
                controller.load().await;
                print_detail(&controller, policy);
                detail = Some(controller);
            }

            Command::Review { text } => match detail.as_mut() {
                None => println!("Open a product first: view <id>"),
                Some(controller) => {
                    controller.set_draft(text);
                    match controller.submit_review(config.user_id).await {
                        Ok(()) => print_detail(controller, policy),
                        Err(e) if e.is_local() => println!("Review not sent: {e}"),
                        Err(e) => {
                            println!("Failed to post review: {e}");
                            println!("Your text is kept; resend with `review {}`", controller.draft());
                        }
                    }
                }
            },
        }
        prompt();
    }

    Ok(())
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

fn print_browse<C: CatalogApi>(listing: &ListingStore<C>, search: &SearchController<C>) {
    if *listing.state() == ListingState::Failed && !search.is_active() {
        println!("Could not load the catalog. Search is still available.");
        return;
    }

    let records = search.display(listing.records());
    let active_query = search.is_active().then(|| search.query());
    println!("{}", render::render_listing(records, active_query));
}

fn print_detail<C: CatalogApi>(detail: &DetailController<C>, policy: MarkupPolicy) {
    match detail.state() {
        DetailState::Loading => println!("Loading product..."),
        DetailState::NotFound => {
            println!("Product not found.");
            println!("Type `back` to return to the catalog.");
        }
        DetailState::Ready(item) => {
            println!("{}", render::render_item_detail(item));
            println!("{}", render::render_reviews(detail.reviews(), policy));
            println!("Write a review with: review <text>");
        }
    }
}
