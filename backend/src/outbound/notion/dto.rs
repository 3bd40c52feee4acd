//! DTOs for the Notion page-creation endpoint.
//!
//! The adapter serialises [`CreatePageRequestDto`] from a domain topic and
//! decodes [`PageResponseDto`] from successful responses. Only the fields the
//! gateway reads are modelled.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::Topic;

#[derive(Debug, Serialize)]
pub(super) struct CreatePageRequestDto<'a> {
    parent: ParentDto<'a>,
    properties: BTreeMap<&'a str, TitlePropertyDto<'a>>,
    children: [BlockDto<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ParentDto<'a> {
    database_id: &'a str,
}

#[derive(Debug, Serialize)]
struct TitlePropertyDto<'a> {
    title: [RichTextDto<'a>; 1],
}

#[derive(Debug, Serialize)]
struct BlockDto<'a> {
    object: &'static str,
    #[serde(rename = "type")]
    block_type: &'static str,
    paragraph: ParagraphDto<'a>,
}

#[derive(Debug, Serialize)]
struct ParagraphDto<'a> {
    rich_text: [RichTextDto<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RichTextDto<'a> {
    #[serde(rename = "type")]
    text_type: &'static str,
    text: TextDto<'a>,
}

#[derive(Debug, Serialize)]
struct TextDto<'a> {
    content: &'a str,
}

impl<'a> RichTextDto<'a> {
    fn plain(content: &'a str) -> Self {
        Self {
            text_type: "text",
            text: TextDto { content },
        }
    }
}

impl<'a> CreatePageRequestDto<'a> {
    /// Build a page under `database_id` titled with the topic name and holding
    /// the topic content as a single paragraph.
    pub(super) fn for_topic(database_id: &'a str, title_property: &'a str, topic: &'a Topic) -> Self {
        let mut properties = BTreeMap::new();
        properties.insert(
            title_property,
            TitlePropertyDto {
                title: [RichTextDto::plain(topic.name())],
            },
        );
        Self {
            parent: ParentDto { database_id },
            properties,
            children: [BlockDto {
                object: "block",
                block_type: "paragraph",
                paragraph: ParagraphDto {
                    rich_text: [RichTextDto::plain(topic.content())],
                },
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct PageResponseDto {
    pub(super) id: Option<String>,
    pub(super) url: Option<String>,
}
