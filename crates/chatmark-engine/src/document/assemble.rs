use crate::{
    links::{LinkResolver, NavigationContext},
    parsing::{blocks::Block, inline::parse_inline_with, parse_blocks},
    payload::{Payload, dispatch},
};

use super::{Document, Rendered, RenderedBlock};

/// Renders a message into a [`Document`].
///
/// Pure and infallible: any input, including the empty string, yields a tree.
/// Help pseudo-links are redirected through `navigation` when it carries a
/// rewrite callback; all other hrefs are only sanitized.
pub fn render(text: &str, navigation: Option<&NavigationContext>) -> Document {
    let links = LinkResolver::new(navigation);

    let blocks = parse_blocks(text)
        .into_iter()
        .map(|block| {
            let rendered = render_block(&block, &links);
            RenderedBlock { block, rendered }
        })
        .collect();

    Document { blocks }
}

fn render_block(block: &Block, links: &LinkResolver<'_>) -> Rendered {
    match block {
        Block::Paragraph { text } | Block::Heading { text, .. } | Block::Blockquote { text } => {
            Rendered::Inline {
                nodes: parse_inline_with(text, links),
            }
        }
        Block::UnorderedList { items } | Block::OrderedList { items } => Rendered::Items {
            items: items
                .iter()
                .map(|item| parse_inline_with(item, links))
                .collect(),
        },
        Block::FencedBlock { body, tag } => match dispatch(tag.as_deref(), body) {
            Payload::Unrecognized { tag, code } => Rendered::Code { tag, body: code },
            payload => Rendered::Payload { payload },
        },
    }
}
