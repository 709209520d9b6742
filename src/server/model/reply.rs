//! Reply domain models and reply tree assembly.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::{
    model::reply::{CreateReplyDto, ReplyDto, UpdateReplyDto},
    server::model::member::Author,
};

/// Content shown in place of a removed reply that still has visible children.
pub const REPLY_TOMBSTONE: &str = "This reply has been deleted.";

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub id: i32,
    pub post_id: i32,
    pub parent_id: Option<i32>,
    pub author: Author,
    pub content: String,
    pub removed: bool,
    pub created_at: DateTime<Utc>,
}

impl Reply {
    pub fn from_entity(entity: entity::reply::Model, author: Option<entity::member::Model>) -> Self {
        Self {
            id: entity.id,
            post_id: entity.post_id,
            parent_id: entity.parent_id,
            author: Author::from_entity(entity.author_id, author),
            content: entity.content,
            removed: entity.removed,
            created_at: entity.created_at,
        }
    }

    /// Renders a freshly written reply; it has no children yet.
    pub fn into_dto(self) -> ReplyDto {
        ReplyDto {
            id: self.id,
            author: self.author.into_dto(),
            content: self.content,
            removed: self.removed,
            created_at: self.created_at,
            children: Vec::new(),
        }
    }
}

/// A reply as rendered in a post's reply tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyNode {
    pub id: i32,
    pub author: Author,
    pub content: String,
    pub removed: bool,
    pub created_at: DateTime<Utc>,
    pub children: Vec<ReplyNode>,
}

impl ReplyNode {
    fn leaf(reply: Reply) -> Self {
        Self {
            id: reply.id,
            author: reply.author,
            content: reply.content,
            removed: reply.removed,
            created_at: reply.created_at,
            children: Vec::new(),
        }
    }

    pub fn into_dto(self) -> ReplyDto {
        ReplyDto {
            id: self.id,
            author: self.author.into_dto(),
            content: self.content,
            removed: self.removed,
            created_at: self.created_at,
            children: self.children.into_iter().map(ReplyNode::into_dto).collect(),
        }
    }
}

/// Assembles the one-level reply tree of a post.
///
/// Top-level replies keep their real content while not removed. A removed top-level
/// reply stays in the tree with tombstone content when at least one of its children
/// survives, otherwise it is omitted. Removed children are always omitted. Replies
/// are ordered by id within each level.
pub fn build_reply_tree(mut replies: Vec<Reply>) -> Vec<ReplyNode> {
    replies.sort_by_key(|r| r.id);

    let mut children: HashMap<i32, Vec<ReplyNode>> = HashMap::new();
    let mut roots = Vec::new();

    for reply in replies {
        match reply.parent_id {
            None => roots.push(reply),
            Some(parent_id) => {
                if !reply.removed {
                    children
                        .entry(parent_id)
                        .or_default()
                        .push(ReplyNode::leaf(reply));
                }
            }
        }
    }

    roots
        .into_iter()
        .filter_map(|root| {
            let kids = children.remove(&root.id).unwrap_or_default();
            if root.removed && kids.is_empty() {
                return None;
            }

            let mut node = ReplyNode::leaf(root);
            if node.removed {
                node.content = REPLY_TOMBSTONE.to_string();
            }
            node.children = kids;
            Some(node)
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct CreateReplyParams {
    pub post_id: i32,
    pub author_id: i32,
    pub parent_id: Option<i32>,
    pub content: String,
}

impl CreateReplyParams {
    pub fn from_dto(post_id: i32, author_id: i32, dto: CreateReplyDto) -> Self {
        Self {
            post_id,
            author_id,
            parent_id: dto.parent_id,
            content: dto.content,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateReplyParams {
    pub content: String,
}

impl UpdateReplyParams {
    pub fn from_dto(dto: UpdateReplyDto) -> Self {
        Self {
            content: dto.content,
        }
    }
}
