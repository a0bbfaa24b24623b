//! The `lex` command: tokenize a file and display the stream.

use xq_lexer::{XPathLexer, XQueryLexer};
use xq_tokens::Token;

/// Tokenize a file and print one `kind @ span` line per token.
///
/// `xpath_only` selects the base expression lexer instead of the
/// superset lexer.
pub fn lex_file(path: &str, xpath_only: bool) {
    let content = read_file(path);
    let (tokens, depth) = if xpath_only {
        let mut lexer = XPathLexer::new(&content);
        let tokens: Vec<Token> = lexer.by_ref().collect();
        (tokens, lexer.state_depth())
    } else {
        let mut lexer = XQueryLexer::new(&content);
        let tokens: Vec<Token> = lexer.by_ref().collect();
        (tokens, lexer.state_depth())
    };
    tracing::debug!(bytes = content.len(), tokens = tokens.len(), "lexed file");

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in &tokens {
        println!("  {token:?}");
    }
    if depth > 1 {
        eprintln!("note: unterminated construct at end of file");
    }
}

fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}
