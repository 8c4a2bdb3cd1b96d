use crate::preview;
use crate::prompts::{StdinPrompter, read_line};
use crate::settings::Settings;
use athenaeum_core::catalog::client::CatalogHttpClient;
use athenaeum_core::catalog::controller::CatalogController;
use athenaeum_core::catalog::types::CommentForm;
use std::io::Write as _;

const HELP: &str = "\
Commands:
  all                 clear all filters and show every book
  search <term>       filter titles by substring (case-insensitive)
  category [name]     filter by exact category; no name clears it
  open <book-id>      show a book's details and load its comments
  comment <text>      add a comment to the open book
  edit <comment-id>   edit one of your comments on the open book
  delete <comment-id> delete one of your comments on the open book
  help                show this text
  quit                leave the session";

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    All,
    Search(String),
    Category(String),
    Open(i64),
    Comment(String),
    Edit(i64),
    Delete(i64),
    Help,
    Quit,
}

fn parse_id(argument: &str, usage: &str) -> Result<i64, String> {
    argument
        .trim()
        .parse()
        .map_err(|_| format!("usage: {usage}"))
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (keyword, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match keyword {
        "all" => Ok(Command::All),
        "search" => Ok(Command::Search(rest.to_owned())),
        "category" => Ok(Command::Category(rest.to_owned())),
        "open" => parse_id(rest, "open <book-id>").map(Command::Open),
        "comment" => {
            if rest.is_empty() {
                Err(String::from("usage: comment <text>"))
            } else {
                Ok(Command::Comment(rest.to_owned()))
            }
        }
        "edit" => parse_id(rest, "edit <comment-id>").map(Command::Edit),
        "delete" => parse_id(rest, "delete <comment-id>").map(Command::Delete),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        unknown => Err(format!("Unknown command '{unknown}', try 'help'")),
    }
}

/// The rendered fragments currently embedded in the preview file.
struct View {
    cards: String,
    detail: String,
    comments: String,
}

impl View {
    fn write_preview(&self, settings: &Settings) {
        if let Err(error) =
            preview::write_page(&settings.preview_path, &self.cards, &self.detail, &self.comments)
        {
            tracing::error!("Failed to write the preview file: {error}");
        }
    }
}

/// Read-eval loop on stdin. Every successful operation rewrites the preview
/// file; failures are logged and the previous view stays untouched.
#[allow(
    clippy::print_stdout,
    reason = "The session talks to the user on stdout"
)]
#[allow(clippy::too_many_lines, reason = "One arm per command, all trivial")]
pub async fn run(
    controller: &mut CatalogController<CatalogHttpClient, StdinPrompter>,
    settings: &Settings,
) -> anyhow::Result<()> {
    let mut term = String::new();
    let mut category = String::new();
    let mut open_book: Option<i64> = None;
    let mut view = View {
        cards: controller.filter_and_render("", ""),
        detail: String::new(),
        comments: String::new(),
    };

    println!("{} books in the catalog, type 'help' for commands", controller.books().len());

    loop {
        print!("athenaeum> ");
        std::io::stdout().flush()?;
        let Some(line) = read_line() else {
            // stdin closed
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match command {
            Command::All => {
                term.clear();
                category.clear();
                view.cards = controller.filter_and_render(&term, &category);
                view.write_preview(settings);
                println!("Showing all {} books", controller.books().len());
            }
            Command::Search(new_term) => {
                term = new_term;
                view.cards = controller.filter_and_render(&term, &category);
                view.write_preview(settings);
            }
            Command::Category(new_category) => {
                category = new_category;
                view.cards = controller.filter_and_render(&term, &category);
                view.write_preview(settings);
            }
            Command::Open(book_id) => match controller.open_detail(book_id).await {
                Ok((detail, comments)) => {
                    open_book = Some(book_id);
                    view.detail = detail;
                    view.comments = comments;
                    view.write_preview(settings);
                    println!("Opened book {book_id}");
                }
                Err(error) => tracing::error!("Failed to open book {book_id}: {error}"),
            },
            Command::Comment(text) => {
                let Some(book_id) = open_book else {
                    println!("Open a book first");
                    continue;
                };
                let form = CommentForm::new(book_id, settings.username.clone(), text);
                match controller.add_comment(&form).await {
                    Ok(comments) => {
                        view.comments = comments;
                        view.write_preview(settings);
                        println!("Comment added");
                    }
                    Err(error) => tracing::error!("Failed to add the comment: {error}"),
                }
            }
            Command::Edit(comment_id) => {
                let Some(book_id) = open_book else {
                    println!("Open a book first");
                    continue;
                };
                match controller.edit_comment(comment_id, book_id).await {
                    Ok(Some(comments)) => {
                        view.comments = comments;
                        view.write_preview(settings);
                        println!("Comment updated");
                    }
                    Ok(None) => println!("Edit cancelled, nothing sent"),
                    Err(error) => {
                        tracing::error!("Failed to edit comment {comment_id}: {error}");
                    }
                }
            }
            Command::Delete(comment_id) => {
                let Some(book_id) = open_book else {
                    println!("Open a book first");
                    continue;
                };
                match controller.delete_comment(comment_id, book_id).await {
                    Ok(Some(comments)) => {
                        view.comments = comments;
                        view.write_preview(settings);
                        println!("Comment deleted");
                    }
                    Ok(None) => println!("Delete cancelled, nothing sent"),
                    Err(error) => {
                        tracing::error!("Failed to delete comment {comment_id}: {error}");
                    }
                }
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "Tests are predefined and guaranteed to be Some/Ok"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_bare_commands() {
        assert_eq!(parse_command("all").unwrap(), Command::All);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn parses_search_with_term() {
        assert_eq!(
            parse_command("search the hobbit").unwrap(),
            Command::Search(String::from("the hobbit"))
        );
    }

    #[test]
    fn bare_category_clears_the_filter() {
        assert_eq!(
            parse_command("category").unwrap(),
            Command::Category(String::new())
        );
    }

    #[test]
    fn parses_ids() {
        assert_eq!(parse_command("open 3").unwrap(), Command::Open(3));
        assert_eq!(parse_command("edit 12").unwrap(), Command::Edit(12));
        assert_eq!(parse_command("delete 12").unwrap(), Command::Delete(12));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert_eq!(
            parse_command("open dune").unwrap_err(),
            String::from("usage: open <book-id>")
        );
    }

    #[test]
    fn rejects_empty_comment() {
        assert_eq!(
            parse_command("comment").unwrap_err(),
            String::from("usage: comment <text>")
        );
    }

    #[test]
    fn rejects_unknown_commands() {
        assert_eq!(
            parse_command("frobnicate 1").unwrap_err(),
            String::from("Unknown command 'frobnicate', try 'help'")
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            parse_command("  search dune  ").unwrap(),
            Command::Search(String::from("dune"))
        );
    }
}
