use std::io;
use std::path::Path;
use tokenizers::{Tokenizer, TruncationParams};

/// Loads `tokenizer.json` from a model directory with truncation at `max_len` tokens.
pub fn load_tokenizer_with_truncation(model_dir: &Path, max_len: usize) -> io::Result<Tokenizer> {
    let tokenizer_path = model_dir.join("tokenizer.json");
    let mut tokenizer = Tokenizer::from_file(&tokenizer_path).map_err(io::Error::other)?;

    let truncation = TruncationParams {
        max_length: max_len,
        ..Default::default()
    };

    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| io::Error::other(format!("Failed to configure truncation: {}", e)))?;

    Ok(tokenizer)
}
