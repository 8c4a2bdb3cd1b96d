use crate::catalog::types::Book;

/// Filter the book list by search term and category, preserving the original
/// fetch order. The category must match exactly (ignoring case), the term
/// matches as a substring of the title (ignoring case, surrounding whitespace
/// trimmed). An empty string disables the respective predicate, so two empty
/// strings return the full list.
#[must_use]
#[allow(
    clippy::missing_inline_in_public_items,
    reason = "Runs once per keystroke at most"
)]
pub fn filter_books<'books>(books: &'books [Book], term: &str, category: &str) -> Vec<&'books Book> {
    let term = term.trim().to_lowercase();
    let category = category.to_lowercase();

    books
        .iter()
        .filter(|book| category.is_empty() || book.category.to_lowercase() == category)
        .filter(|book| term.is_empty() || book.title.to_lowercase().contains(&term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

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
            Book::new(
                3,
                String::from("Dune Messiah"),
                String::from("Frank Herbert"),
                String::from("scifi"),
                String::from("messiah.jpg"),
                String::from("The sequel."),
            ),
        ]
    }

    #[test]
    fn empty_term_and_category_return_full_list() {
        let books = sample_books();
        let filtered = filter_books(&books, "", "");

        assert_eq!(filtered, books.iter().collect::<Vec<_>>());
    }

    #[test]
    fn term_matches_title_substring_ignoring_case() {
        let books = sample_books();
        let filtered = filter_books(&books, "du", "");

        let ids = filtered.iter().map(|book| book.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn category_matches_exactly_ignoring_case() {
        let books = sample_books();
        let filtered = filter_books(&books, "", "FANTASY");

        let ids = filtered.iter().map(|book| book.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn term_and_category_compose() {
        let books = sample_books();
        let filtered = filter_books(&books, "messiah", "scifi");

        let ids = filtered.iter().map(|book| book.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn partial_category_does_not_match() {
        let books = sample_books();
        let filtered = filter_books(&books, "", "sci");

        assert_eq!(filtered, Vec::<&Book>::new());
    }

    #[test]
    fn term_is_trimmed_before_matching() {
        let books = sample_books();
        let filtered = filter_books(&books, "  hobbit  ", "");

        let ids = filtered.iter().map(|book| book.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn unmatched_term_returns_empty() {
        let books = sample_books();
        let filtered = filter_books(&books, "xyz", "");

        assert_eq!(filtered, Vec::<&Book>::new());
    }

    #[test]
    fn result_keeps_fetch_order() {
        let books = sample_books();
        let filtered = filter_books(&books, "", "scifi");

        let ids = filtered.iter().map(|book| book.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 3]);
    }
}
