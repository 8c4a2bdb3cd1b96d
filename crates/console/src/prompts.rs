use async_trait::async_trait;
use athenaeum_core::catalog::controller::CommentPrompter;
use std::io::{BufRead as _, Write as _};

/// Prompter that asks on stdout and reads the answer from stdin, standing in
/// for the modal dialogs of the original page.
pub struct StdinPrompter;

pub(crate) fn read_line() -> Option<String> {
    let mut line = String::new();
    let bytes = std::io::stdin().lock().read_line(&mut line).ok()?;
    if bytes == 0 {
        // stdin closed
        return None;
    }
    Some(line.trim_end_matches(['\r', '\n']).to_owned())
}

#[allow(
    clippy::print_stdout,
    reason = "Interactive prompts are the whole point of this type"
)]
fn ask(question: &str) -> Option<String> {
    print!("{question}");
    std::io::stdout().flush().ok()?;
    read_line()
}

#[async_trait]
impl CommentPrompter for StdinPrompter {
    async fn confirm_delete(&self) -> bool {
        ask("Delete the comment? It will be gone forever [y/N]: ")
            .is_some_and(|answer| matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
    }

    #[allow(
        clippy::print_stdout,
        reason = "Interactive prompts are the whole point of this type"
    )]
    async fn edit_body(&self, current_body: &str) -> Option<String> {
        println!("Edit your comment (empty line cancels)");
        println!("Current: {current_body}");
        let reply = ask("New text: ")?;
        if reply.trim().is_empty() {
            return None;
        }
        Some(reply)
    }
}
