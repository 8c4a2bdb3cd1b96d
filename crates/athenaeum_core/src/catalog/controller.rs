use crate::catalog::api::CatalogApi;
use crate::catalog::errors::CatalogError;
use crate::catalog::filter::filter_books;
use crate::catalog::types::{Book, Comment, CommentEdit, CommentForm, Viewer};
use crate::render::components;
use async_trait::async_trait;
use log::{error, info};

/// Modal interaction needed by the comment operations. The original page used
/// alert dialogs for this; frontends inject their own implementation here so
/// the controller stays free of any UI toolkit.
#[async_trait]
pub trait CommentPrompter: Sync + Send {
    /// Ask the user to confirm a comment deletion. `false` aborts silently.
    async fn confirm_delete(&self) -> bool;

    /// Ask the user for replacement comment text, prefilled with the current
    /// body. `None` means the user cancelled.
    async fn edit_body(&self, current_body: &str) -> Option<String>;
}

/// Drives the catalog against a [`CatalogApi`]. Owns the fetched book list
/// and the latest comment list; every comment mutation replaces that list
/// wholesale with the server's authoritative response, there is no local
/// merge. Operations return the re-rendered HTML fragments.
pub struct CatalogController<Api, Prompter> {
    api: Api,
    prompter: Prompter,
    viewer: Viewer,
    books: Vec<Book>,
    comments: Vec<Comment>,
}

impl<Api, Prompter> CatalogController<Api, Prompter>
where
    Api: CatalogApi,
    Prompter: CommentPrompter,
{
    #[must_use]
    #[inline]
    pub const fn new(api: Api, prompter: Prompter, viewer: Viewer) -> Self {
        Self {
            api,
            prompter,
            viewer,
            books: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// The book list as fetched, in server response order.
    #[must_use]
    #[inline]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Fetch the book list and render the card grid. On failure the previous
    /// list (usually empty) stays untouched; there is no retry.
    /// # Errors
    /// Fails if the book list request fails.
    #[allow(clippy::missing_inline_in_public_items, reason = "Called rarely")]
    pub async fn load_books(&mut self) -> Result<String, CatalogError> {
        let books = match self.api.fetch_books().await {
            Ok(books) => books,
            Err(error) => {
                error!("Failed to load the book list: {error}");
                return Err(error);
            }
        };
        info!("Loaded {} books from the catalog", books.len());

        self.books = books;
        Ok(components::book_cards(&self.books))
    }

    /// Render the card grid for the books matching `term` and `category`,
    /// purely from the in-memory list. Both filters are optional, empty
    /// strings mean "no filter".
    #[must_use]
    #[allow(
        clippy::missing_inline_in_public_items,
        reason = "Runs once per keystroke at most"
    )]
    pub fn filter_and_render(&self, term: &str, category: &str) -> String {
        components::book_cards(filter_books(&self.books, term, category))
    }

    /// Render the detail panel for one book and fetch its comments. Returns
    /// the detail fragment and the comment list fragment.
    /// # Errors
    /// Fails if the book id is not in the fetched list or the comment
    /// request fails.
    #[allow(clippy::missing_inline_in_public_items, reason = "Called rarely")]
    pub async fn open_detail(&mut self, book_id: i64) -> Result<(String, String), CatalogError> {
        let Some(book) = self.books.iter().find(|book| book.id == book_id) else {
            error!("Cannot open detail view, book {book_id} is not in the catalog");
            return Err(CatalogError::UnknownBook(book_id));
        };
        let detail = components::book_detail(book);

        self.comments = self.api.fetch_comments(book_id).await?;
        Ok((detail, self.render_comments()))
    }

    /// Render the latest comment list for the current viewer.
    #[must_use]
    #[inline]
    pub fn render_comments(&self) -> String {
        components::comment_list(&self.comments, &self.viewer)
    }

    /// Post a new comment and render the server's updated list. The caller
    /// owns clearing its form input afterwards.
    /// # Errors
    /// Fails if the add request fails.
    #[allow(clippy::missing_inline_in_public_items, reason = "Called rarely")]
    pub async fn add_comment(&mut self, form: &CommentForm) -> Result<String, CatalogError> {
        self.comments = self.api.add_comment(form).await?;
        Ok(self.render_comments())
    }

    /// Prompt for replacement text and post the edit. A cancelled prompt or
    /// whitespace-only input sends no request and returns `None`.
    /// # Errors
    /// Fails if the comment id is not in the latest list or the edit request
    /// fails.
    #[allow(clippy::missing_inline_in_public_items, reason = "Called rarely")]
    pub async fn edit_comment(
        &mut self,
        comment_id: i64,
        book_id: i64,
    ) -> Result<Option<String>, CatalogError> {
        let Some(current_body) = self
            .comments
            .iter()
            .find(|comment| comment.id == comment_id)
            .map(|comment| comment.body.clone())
        else {
            error!("Cannot edit comment {comment_id}, it is not in the latest comment list");
            return Err(CatalogError::UnknownComment(comment_id));
        };

        let Some(body) = self.prompter.edit_body(&current_body).await else {
            return Ok(None);
        };
        if body.trim().is_empty() {
            return Ok(None);
        }

        let edit = CommentEdit::new(comment_id, book_id, body);
        self.comments = self.api.edit_comment(&edit).await?;
        Ok(Some(self.render_comments()))
    }

    /// Ask for confirmation and delete the comment. A declined confirmation
    /// sends no request and returns `None`, leaving the panel untouched.
    /// # Errors
    /// Fails if the delete request fails.
    #[allow(clippy::missing_inline_in_public_items, reason = "Called rarely")]
    pub async fn delete_comment(
        &mut self,
        comment_id: i64,
        book_id: i64,
    ) -> Result<Option<String>, CatalogError> {
        if !self.prompter.confirm_delete().await {
            return Ok(None);
        }

        self.comments = self.api.delete_comment(comment_id, book_id).await?;
        Ok(Some(self.render_comments()))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "Tests are predefined and guaranteed to be Some/Ok"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    struct ScriptedApi {
        books: Vec<Book>,
        comments: Vec<Comment>,
        fail_books: bool,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedApi {
        fn new(books: Vec<Book>, comments: Vec<Comment>) -> Self {
            Self {
                books,
                comments,
                fail_books: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    fn http_error() -> CatalogError {
        let error = reqwest::Client::new()
            .get("not a url")
            .build()
            .expect_err("building a request from an invalid URL must fail");
        CatalogError::Http(error)
    }

    #[async_trait]
    impl CatalogApi for ScriptedApi {
        async fn fetch_books(&self) -> Result<Vec<Book>, CatalogError> {
            self.record(String::from("fetch_books"));
            if self.fail_books {
                return Err(http_error());
            }
            Ok(self.books.clone())
        }

        async fn fetch_comments(&self, book_id: i64) -> Result<Vec<Comment>, CatalogError> {
            self.record(format!("fetch_comments({book_id})"));
            Ok(self.comments.clone())
        }

        async fn add_comment(&self, form: &CommentForm) -> Result<Vec<Comment>, CatalogError> {
            self.record(format!("add_comment({}, {})", form.book_id, form.body));
            Ok(self.comments.clone())
        }

        async fn edit_comment(&self, edit: &CommentEdit) -> Result<Vec<Comment>, CatalogError> {
            self.record(format!("edit_comment({}, {})", edit.comment_id, edit.body));
            Ok(self.comments.clone())
        }

        async fn delete_comment(
            &self,
            comment_id: i64,
            book_id: i64,
        ) -> Result<Vec<Comment>, CatalogError> {
            self.record(format!("delete_comment({comment_id}, {book_id})"));
            Ok(self.comments.clone())
        }
    }

    struct ScriptedPrompter {
        confirm: bool,
        reply: Option<String>,
    }

    #[async_trait]
    impl CommentPrompter for ScriptedPrompter {
        async fn confirm_delete(&self) -> bool {
            self.confirm
        }

        async fn edit_body(&self, _current_body: &str) -> Option<String> {
            self.reply.clone()
        }
    }

    fn sample_books() -> Vec<Book> {
        vec![
            Book::new(
                1,
                String::from("Dune"),
                String::from("Frank Herbert"),
                String::from("scifi"),
                String::from("dune.jpg"),
                String::from("Spice and sand."),
            ),
            Book::new(
                2,
                String::from("The Hobbit"),
                String::from("J. R. R. Tolkien"),
                String::from("fantasy"),
                String::from("hobbit.jpg"),
                String::from("There and back again."),
            ),
        ]
    }

    fn sample_comments() -> Vec<Comment> {
        vec![Comment::new(
            7,
            1,
            String::from("selin"),
            String::from("loved it"),
        )]
    }

    fn controller(
        api: ScriptedApi,
        prompter: ScriptedPrompter,
    ) -> CatalogController<ScriptedApi, ScriptedPrompter> {
        CatalogController::new(api, prompter, Viewer::new(String::from("selin")))
    }

    #[tokio::test]
    async fn load_books_replaces_list() {
        let api = ScriptedApi::new(sample_books(), Vec::new());
        let prompter = ScriptedPrompter {
            confirm: false,
            reply: None,
        };
        let mut controller = controller(api, prompter);

        let cards = controller.load_books().await.unwrap();

        assert_eq!(controller.books(), sample_books());
        assert!(cards.contains("Dune"));
        assert!(cards.contains("The Hobbit"));
    }

    #[tokio::test]
    async fn failed_load_keeps_previous_books() {
        let api = ScriptedApi::new(sample_books(), Vec::new());
        let prompter = ScriptedPrompter {
            confirm: false,
            reply: None,
        };
        let mut controller = controller(api, prompter);
        controller.load_books().await.unwrap();

        controller.api.fail_books = true;
        let result = controller.load_books().await;

        assert!(result.is_err());
        assert_eq!(controller.books(), sample_books());
    }

    #[tokio::test]
    async fn filter_to_empty_renders_placeholder() {
        let api = ScriptedApi::new(sample_books(), Vec::new());
        let prompter = ScriptedPrompter {
            confirm: false,
            reply: None,
        };
        let mut controller = controller(api, prompter);
        controller.load_books().await.unwrap();

        let cards = controller.filter_and_render("xyz", "");

        assert!(cards.contains("Empty search results"));
        assert!(!cards.contains("card-title"));
    }

    #[tokio::test]
    async fn open_detail_fetches_comments() {
        let api = ScriptedApi::new(sample_books(), sample_comments());
        let prompter = ScriptedPrompter {
            confirm: false,
            reply: None,
        };
        let mut controller = controller(api, prompter);
        controller.load_books().await.unwrap();

        let (detail, comments) = controller.open_detail(1).await.unwrap();

        assert!(detail.contains("Dune"));
        assert!(comments.contains("loved it"));
        assert_eq!(
            controller.api.calls(),
            vec![String::from("fetch_books"), String::from("fetch_comments(1)")]
        );
    }

    #[tokio::test]
    async fn open_detail_rejects_unknown_book() {
        let api = ScriptedApi::new(sample_books(), sample_comments());
        let prompter = ScriptedPrompter {
            confirm: false,
            reply: None,
        };
        let mut controller = controller(api, prompter);
        controller.load_books().await.unwrap();

        let result = controller.open_detail(99).await;

        assert!(matches!(result, Err(CatalogError::UnknownBook(99))));
        assert_eq!(controller.api.calls(), vec![String::from("fetch_books")]);
    }

    #[tokio::test]
    async fn add_comment_replaces_list_with_response() {
        let api = ScriptedApi::new(sample_books(), sample_comments());
        let prompter = ScriptedPrompter {
            confirm: false,
            reply: None,
        };
        let mut controller = controller(api, prompter);

        let form = CommentForm::new(1, String::from("selin"), String::from("brilliant"));
        let panel = controller.add_comment(&form).await.unwrap();

        assert_eq!(controller.comments, sample_comments());
        assert!(panel.contains("loved it"));
        assert_eq!(
            controller.api.calls(),
            vec![String::from("add_comment(1, brilliant)")]
        );
    }

    #[tokio::test]
    async fn cancelled_edit_sends_no_request() {
        let api = ScriptedApi::new(sample_books(), sample_comments());
        let prompter = ScriptedPrompter {
            confirm: false,
            reply: None,
        };
        let mut controller = controller(api, prompter);
        controller.comments = sample_comments();

        let result = controller.edit_comment(7, 1).await.unwrap();

        assert_eq!(result, None);
        assert_eq!(controller.api.calls(), Vec::<String>::new());
    }

    #[tokio::test]
    async fn blank_edit_reply_sends_no_request() {
        let api = ScriptedApi::new(sample_books(), sample_comments());
        let prompter = ScriptedPrompter {
            confirm: false,
            reply: Some(String::from("   ")),
        };
        let mut controller = controller(api, prompter);
        controller.comments = sample_comments();

        let result = controller.edit_comment(7, 1).await.unwrap();

        assert_eq!(result, None);
        assert_eq!(controller.api.calls(), Vec::<String>::new());
    }

    #[tokio::test]
    async fn edit_posts_replacement_body() {
        let api = ScriptedApi::new(sample_books(), sample_comments());
        let prompter = ScriptedPrompter {
            confirm: false,
            reply: Some(String::from("even better")),
        };
        let mut controller = controller(api, prompter);
        controller.comments = sample_comments();

        let panel = controller.edit_comment(7, 1).await.unwrap();

        assert!(panel.is_some());
        assert_eq!(
            controller.api.calls(),
            vec![String::from("edit_comment(7, even better)")]
        );
    }

    #[tokio::test]
    async fn edit_rejects_unknown_comment() {
        let api = ScriptedApi::new(sample_books(), sample_comments());
        let prompter = ScriptedPrompter {
            confirm: false,
            reply: Some(String::from("ghost")),
        };
        let mut controller = controller(api, prompter);

        let result = controller.edit_comment(99, 1).await;

        assert!(matches!(result, Err(CatalogError::UnknownComment(99))));
        assert_eq!(controller.api.calls(), Vec::<String>::new());
    }

    #[tokio::test]
    async fn declined_delete_sends_no_request() {
        let api = ScriptedApi::new(sample_books(), sample_comments());
        let prompter = ScriptedPrompter {
            confirm: false,
            reply: None,
        };
        let mut controller = controller(api, prompter);
        controller.comments = sample_comments();
        let panel_before = controller.render_comments();

        let result = controller.delete_comment(7, 1).await.unwrap();

        assert_eq!(result, None);
        assert_eq!(controller.api.calls(), Vec::<String>::new());
        assert_eq!(controller.render_comments(), panel_before);
    }

    #[tokio::test]
    async fn confirmed_delete_replaces_list_with_response() {
        let api = ScriptedApi::new(sample_books(), Vec::new());
        let prompter = ScriptedPrompter {
            confirm: true,
            reply: None,
        };
        let mut controller = controller(api, prompter);
        controller.comments = sample_comments();

        let panel = controller.delete_comment(7, 1).await.unwrap().unwrap();

        assert_eq!(controller.comments, Vec::<Comment>::new());
        assert!(panel.contains("no comments yet"));
        assert_eq!(
            controller.api.calls(),
            vec![String::from("delete_comment(7, 1)")]
        );
    }
}
