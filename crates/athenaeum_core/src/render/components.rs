use crate::catalog::types::{Book, Comment, Viewer};
use crate::render::html::{clean_text, escape_html};
use core::fmt::Write as _;

/// Render the card grid for the given books. An empty input renders the
/// page's "Empty search results" placeholder block instead of a bare grid.
#[allow(
    clippy::missing_inline_in_public_items,
    reason = "Runs once per render, never hot"
)]
#[must_use]
pub fn book_cards<'book, Books>(books: Books) -> String
where
    Books: IntoIterator<Item = &'book Book>,
{
    let mut cards = String::new();
    for book in books {
        let _ = write!(
            cards,
            r##"
<div class="col-12 col-lg-3 col-md-4 mb-3">
  <div class="card">
    <img src="./assets/img/{image}" class="card-img-top" alt="...">
    <div class="card-body">
      <h5 class="card-title">{title}</h5>
      <p class="text-muted">{writer}</p>
      <div class="d-grid grid-gap-2">
        <a href="#" class="btn btn-primary" data-book-id="{id}" data-bs-toggle="modal" data-bs-target="#filter">Show filter</a>
      </div>
    </div>
  </div>
</div>
"##,
            image = escape_html(&book.image),
            title = escape_html(&book.title),
            writer = escape_html(&book.writer),
            id = book.id,
        );
    }

    if cards.is_empty() {
        return String::from(
            r#"
<div class="col-12 col-md-6 col-lg-4 text-center">
  <img src="./assets/img/questions-animate.svg" alt="" />
  <p>Empty search results</p>
</div>
"#,
        );
    }

    cards
}

/// Render the detail panel fields for one book.
#[allow(
    clippy::missing_inline_in_public_items,
    reason = "Runs once per render, never hot"
)]
#[must_use]
pub fn book_detail(book: &Book) -> String {
    format!(
        r#"
<img src="./assets/img/{image}" class="img-fluid" alt="{title}" />
<p><b>Title :</b> {title}</p>
<p><b>Written by :</b> {writer}</p>
<p><b>Category :</b> {category}</p>
<p class="text-justify">{description}</p>
"#,
        image = escape_html(&book.image),
        title = escape_html(&book.title),
        writer = escape_html(&book.writer),
        category = escape_html(&book.category),
        description = escape_html(&clean_text(&book.description)),
    )
}

/// Render the comment list for the given viewer. Rows carry Edit/Delete
/// controls only when the viewer owns the comment; an empty list renders the
/// "no comments yet" placeholder.
#[allow(
    clippy::missing_inline_in_public_items,
    reason = "Runs once per render, never hot"
)]
#[must_use]
pub fn comment_list(comments: &[Comment], viewer: &Viewer) -> String {
    if comments.is_empty() {
        return String::from("<p>no comments yet</p>\n");
    }

    let mut list_items = String::new();
    for comment in comments {
        let controls = if viewer.can_manage(comment) {
            format!(
                r#"  <small>
    <span class="badge text-bg-warning text-decoration-none hoverable" data-action="edit" data-comment-id="{id}" data-book-id="{book_id}">Edit</span>
    <span class="badge text-bg-danger text-decoration-none hoverable" data-action="delete" data-comment-id="{id}" data-book-id="{book_id}">Delete</span>
  </small>
"#,
                id = comment.id,
                book_id = comment.book_id,
            )
        } else {
            String::new()
        };

        let _ = write!(
            list_items,
            r#"
<div class="list-group-item list-group-item-action" aria-current="true">
  <div class="d-flex w-100 justify-content-between">
    <h5 class="mb-1">{username}</h5>
  </div>
  <p class="mb-5 text-muted">{body}</p>
{controls}</div>
"#,
            username = escape_html(&comment.username),
            body = escape_html(&clean_text(&comment.body)),
        );
    }

    list_items
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "Tests are predefined and guaranteed to be Some/Ok"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scraper::{Html, Selector};

    fn book() -> Book {
        Book::new(
            1,
            String::from("Dune"),
            String::from("Frank Herbert"),
            String::from("scifi"),
            String::from("dune.jpg"),
            String::from("Spice   and\n\nsand."),
        )
    }

    fn comment() -> Comment {
        Comment::new(7, 1, String::from("selin"), String::from("loved it"))
    }

    #[test]
    fn cards_render_one_card_per_book() {
        let books = vec![book()];
        let fragment = Html::parse_fragment(&book_cards(&books));

        let titles = Selector::parse(".card-title").unwrap();
        let found = fragment
            .select(&titles)
            .map(|title| title.text().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(found, vec![String::from("Dune")]);

        let buttons = Selector::parse(r#"a[data-book-id="1"]"#).unwrap();
        assert_eq!(fragment.select(&buttons).count(), 1);
    }

    #[test]
    fn empty_cards_render_placeholder() {
        let rendered = book_cards(&[]);
        let fragment = Html::parse_fragment(&rendered);

        let paragraphs = Selector::parse("p").unwrap();
        let text = fragment
            .select(&paragraphs)
            .flat_map(|p| p.text())
            .collect::<String>();
        assert_eq!(text, "Empty search results");
    }

    #[test]
    fn hostile_title_is_escaped() {
        let mut hostile = book();
        hostile.title = String::from("<script>alert(1)</script>");
        let rendered = book_cards(core::iter::once(&hostile));

        let fragment = Html::parse_fragment(&rendered);
        let scripts = Selector::parse("script").unwrap();
        assert_eq!(fragment.select(&scripts).count(), 0);
        assert!(rendered.contains("&lt;script&gt;"));
    }

    #[test]
    fn detail_renders_all_fields() {
        let rendered = book_detail(&book());

        assert!(rendered.contains("<b>Title :</b> Dune"));
        assert!(rendered.contains("<b>Written by :</b> Frank Herbert"));
        assert!(rendered.contains("<b>Category :</b> scifi"));
        assert!(rendered.contains("Spice and sand."));
        assert!(rendered.contains(r#"src="./assets/img/dune.jpg""#));
    }

    #[test]
    fn empty_comments_render_placeholder() {
        let viewer = Viewer::new(String::from("selin"));
        assert_eq!(comment_list(&[], &viewer), "<p>no comments yet</p>\n");
    }

    #[test]
    fn owner_row_carries_controls() {
        let viewer = Viewer::new(String::from("selin"));
        let rendered = comment_list(&[comment()], &viewer);
        let fragment = Html::parse_fragment(&rendered);

        let rows = Selector::parse(".list-group-item").unwrap();
        assert_eq!(fragment.select(&rows).count(), 1);

        let edit = Selector::parse(r#"span[data-action="edit"][data-comment-id="7"]"#).unwrap();
        let delete = Selector::parse(r#"span[data-action="delete"][data-comment-id="7"]"#).unwrap();
        assert_eq!(fragment.select(&edit).count(), 1);
        assert_eq!(fragment.select(&delete).count(), 1);
    }

    #[test]
    fn foreign_row_carries_no_controls() {
        let viewer = Viewer::new(String::from("murat"));
        let rendered = comment_list(&[comment()], &viewer);
        let fragment = Html::parse_fragment(&rendered);

        let controls = Selector::parse("span[data-action]").unwrap();
        assert_eq!(fragment.select(&controls).count(), 0);
    }

    #[test]
    fn anonymous_rows_carry_no_controls() {
        let viewer = Viewer::new(String::from("Anonymous"));
        let anonymous = Comment::new(8, 1, String::from("Anonymous"), String::from("hi"));
        let rendered = comment_list(&[anonymous], &viewer);

        assert!(!rendered.contains("data-action"));
    }

    #[test]
    fn hostile_body_is_escaped() {
        let viewer = Viewer::new(String::from("murat"));
        let mut hostile = comment();
        hostile.body = String::from(r#"<img src=x onerror="alert(1)">"#);
        let rendered = comment_list(&[hostile], &viewer);

        let fragment = Html::parse_fragment(&rendered);
        let images = Selector::parse("img").unwrap();
        assert_eq!(fragment.select(&images).count(), 0);
    }
}
