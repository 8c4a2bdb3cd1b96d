use serde::{Deserialize, Serialize};

/// Username the service assigns to visitors who never logged in. Comments by
/// this user can be read by everyone but managed by no one.
pub const ANONYMOUS: &str = "Anonymous";

/// A catalog entry as returned by the service. Immutable once fetched; the
/// full set is held in one `Vec` in server response order.
#[non_exhaustive]
#[derive(Serialize, Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Book {
    /// Unique book identifier
    #[serde(rename = "id_book")]
    pub id: i64,
    /// Book title, matched case-insensitively by the search filter
    pub title: String,
    /// Author name as the service stores it
    pub writer: String,
    /// Category used for exact (case-insensitive) filter matching
    pub category: String,
    /// Image file name, rendered under the page's fixed `assets/img/` prefix
    #[serde(rename = "img")]
    pub image: String,
    /// Description text. The legacy service really calls this field `filter`.
    #[serde(rename = "filter")]
    pub description: String,
}

impl Book {
    #[must_use]
    #[inline]
    pub const fn new(
        id: i64,
        title: String,
        writer: String,
        category: String,
        image: String,
        description: String,
    ) -> Self {
        Self {
            id,
            title,
            writer,
            category,
            image,
            description,
        }
    }
}

/// A user-authored remark attached to one book. The client never keeps a
/// canonical copy across mutations, the server's latest response always wins.
#[non_exhaustive]
#[derive(Serialize, Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Unique comment identifier
    #[serde(rename = "id_comment")]
    pub id: i64,
    /// Identifier of the book this comment belongs to
    #[serde(rename = "id_book")]
    pub book_id: i64,
    /// Author username
    pub username: String,
    /// Comment text
    pub body: String,
}

impl Comment {
    #[must_use]
    #[inline]
    pub const fn new(id: i64, book_id: i64, username: String, body: String) -> Self {
        Self {
            id,
            book_id,
            username,
            body,
        }
    }
}

/// Payload for adding a comment, mirroring the page's comment form fields.
#[non_exhaustive]
#[derive(Serialize, Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CommentForm {
    /// Identifier of the book the comment is for
    #[serde(rename = "id_book")]
    pub book_id: i64,
    /// Author username
    pub username: String,
    /// Comment text
    pub body: String,
}

impl CommentForm {
    #[must_use]
    #[inline]
    pub const fn new(book_id: i64, username: String, body: String) -> Self {
        Self {
            book_id,
            username,
            body,
        }
    }
}

/// Payload for replacing the body of an existing comment.
#[non_exhaustive]
#[derive(Serialize, Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CommentEdit {
    /// Identifier of the comment being edited
    #[serde(rename = "id_comment")]
    pub comment_id: i64,
    /// Identifier of the book the comment belongs to
    #[serde(rename = "id_book")]
    pub book_id: i64,
    /// Replacement comment text
    pub body: String,
}

impl CommentEdit {
    #[must_use]
    #[inline]
    pub const fn new(comment_id: i64, book_id: i64, body: String) -> Self {
        Self {
            comment_id,
            book_id,
            body,
        }
    }
}

/// The currently logged-in user, passed explicitly into the controller
/// instead of being read out of ambient page state.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    /// Username shown on comments this viewer writes
    pub username: String,
}

impl Viewer {
    #[must_use]
    #[inline]
    pub const fn new(username: String) -> Self {
        Self { username }
    }

    /// Whether this viewer may edit or delete the given comment. Only the
    /// comment's own author qualifies, and never the [`ANONYMOUS`] sentinel
    /// since every visitor without an account shares that name.
    #[must_use]
    #[inline]
    pub fn can_manage(&self, comment: &Comment) -> bool {
        self.username == comment.username && self.username != ANONYMOUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn comment_by(username: &str) -> Comment {
        Comment::new(7, 1, username.to_owned(), String::from("loved it"))
    }

    #[test]
    fn owner_can_manage_own_comment() {
        let viewer = Viewer::new(String::from("selin"));
        assert!(viewer.can_manage(&comment_by("selin")));
    }

    #[test]
    fn viewer_cannot_manage_foreign_comment() {
        let viewer = Viewer::new(String::from("selin"));
        assert!(!viewer.can_manage(&comment_by("murat")));
    }

    #[test]
    fn anonymous_cannot_manage_anonymous_comment() {
        let viewer = Viewer::new(String::from(ANONYMOUS));
        assert!(!viewer.can_manage(&comment_by(ANONYMOUS)));
    }

    #[test]
    fn book_uses_legacy_wire_names() {
        let json = r#"{
            "id_book": 3,
            "title": "Dune",
            "writer": "Frank Herbert",
            "category": "scifi",
            "img": "dune.jpg",
            "filter": "A desert planet."
        }"#;

        let book: Book = serde_json::from_str(json).expect("book JSON must parse");

        assert_eq!(
            book,
            Book::new(
                3,
                String::from("Dune"),
                String::from("Frank Herbert"),
                String::from("scifi"),
                String::from("dune.jpg"),
                String::from("A desert planet."),
            )
        );
    }

    #[test]
    fn comment_edit_serializes_legacy_wire_names() {
        let edit = CommentEdit::new(12, 3, String::from("updated"));
        let json = serde_json::to_value(&edit).expect("edit must serialize");

        assert_eq!(
            json,
            serde_json::json!({"id_comment": 12, "id_book": 3, "body": "updated"})
        );
    }
}
