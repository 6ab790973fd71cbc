pub mod blocks;
pub mod inline;

use blocks::{Block, BlockBuilder, MarkdownLineClassifier};

/// Scans a full message into its ordered blocks.
///
/// `\r\n` line endings are treated as `\n`.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in text.lines() {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    let blocks = builder.finish();
    log::trace!("scanned {} blocks from {} bytes", blocks.len(), text.len());
    blocks
}
