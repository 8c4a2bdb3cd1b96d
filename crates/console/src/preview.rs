use std::fs;
use std::io;
use std::path::Path;

/// Write the preview page, a minimal shell around the rendered fragments
/// using the same container ids and classes as the real page markup.
pub(crate) fn write_page(
    path: &Path,
    cards: &str,
    detail: &str,
    comments: &str,
) -> io::Result<()> {
    let page = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Athenaeum</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet">
</head>
<body>
    <main class="container py-4">
        <section id="books">
            <div class="row" id="books_container">
{cards}
            </div>
        </section>
        <section id="filter" class="py-4">
            <div class="details">
{detail}
            </div>
        </section>
        <section class="comments py-4">
            <div class="list-group">
{comments}
            </div>
        </section>
    </main>
</body>
</html>
"#
    );

    fs::write(path, page)
}
