//! Domain model for the community feed: posts, comments, reactions.
//!
//! Everything in here is plain content state. Ephemeral view concerns
//! (which posts have their comment threads expanded, scroll positions)
//! live in the UI state modules instead and are never serialized.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author identity stamped onto comments written from this client.
pub const LOCAL_AUTHOR: &str = "Guest Supporter";
pub const LOCAL_AVATAR: &str = "💙";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Impact,
    Scholarship,
    Healthcare,
    Empowerment,
    News,
    Story,
    Urgent,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Impact,
        Category::Scholarship,
        Category::Healthcare,
        Category::Empowerment,
        Category::News,
        Category::Story,
        Category::Urgent,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Impact => "Impact",
            Category::Scholarship => "Scholarship",
            Category::Healthcare => "Healthcare",
            Category::Empowerment => "Empowerment",
            Category::News => "News",
            Category::Story => "Story",
            Category::Urgent => "Urgent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionKind {
    Like,
    Love,
    Laugh,
    Sad,
    Angry,
}

impl ReactionKind {
    pub const ALL: [ReactionKind; 5] = [
        ReactionKind::Like,
        ReactionKind::Love,
        ReactionKind::Laugh,
        ReactionKind::Sad,
        ReactionKind::Angry,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReactionKind::Like => "Like",
            ReactionKind::Love => "Love",
            ReactionKind::Laugh => "Laugh",
            ReactionKind::Sad => "Sad",
            ReactionKind::Angry => "Angry",
        }
    }

    pub fn glyph(&self) -> &'static str {
        let shortcode = match self {
            ReactionKind::Like => "+1",
            ReactionKind::Love => "heart",
            ReactionKind::Laugh => "joy",
            ReactionKind::Sad => "cry",
            ReactionKind::Angry => "angry",
        };
        emojis::get_by_shortcode(shortcode)
            .map(|e| e.as_str())
            .unwrap_or("·")
    }
}

/// One reaction counter plus whether the local user currently holds it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionState {
    pub count: u32,
    pub user_reacted: bool,
}

impl ReactionState {
    pub fn seeded(count: u32) -> Self {
        Self { count, user_reacted: false }
    }
}

/// The fixed set of reaction counters carried by every post.
///
/// Kinds are independent: a user may hold several at once, and toggling
/// one never touches another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reactions {
    pub like: ReactionState,
    pub love: ReactionState,
    pub laugh: ReactionState,
    pub sad: ReactionState,
    pub angry: ReactionState,
}

impl Reactions {
    pub fn get(&self, kind: ReactionKind) -> &ReactionState {
        match kind {
            ReactionKind::Like => &self.like,
            ReactionKind::Love => &self.love,
            ReactionKind::Laugh => &self.laugh,
            ReactionKind::Sad => &self.sad,
            ReactionKind::Angry => &self.angry,
        }
    }

    pub fn get_mut(&mut self, kind: ReactionKind) -> &mut ReactionState {
        match kind {
            ReactionKind::Like => &mut self.like,
            ReactionKind::Love => &mut self.love,
            ReactionKind::Laugh => &mut self.laugh,
            ReactionKind::Sad => &mut self.sad,
            ReactionKind::Angry => &mut self.angry,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ReactionKind, &ReactionState)> {
        ReactionKind::ALL.iter().map(move |kind| (*kind, self.get(*kind)))
    }

    pub fn total(&self) -> u32 {
        self.iter().map(|(_, state)| state.count).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Document,
}

/// Reference to an attached asset. The client renders these as labeled
/// placeholders; no asset pipeline exists on this side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub kind: MediaKind,
    pub source: String,
}

/// Call-to-action attached to a post (label plus a link target).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cta {
    pub label: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: String,
    #[serde(default)]
    pub role: Option<String>,
    pub content: String,
    pub date: NaiveDate,
    pub avatar: String,
    pub likes: u32,
    /// One level of nesting only; replies never carry replies of their own.
    #[serde(default)]
    pub replies: Vec<Comment>,
}

impl Comment {
    /// Build a comment authored by the local user, dated today.
    pub fn from_local_user(content: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author: LOCAL_AUTHOR.to_string(),
            role: None,
            content: content.to_string(),
            date: chrono::Local::now().date_naive(),
            avatar: LOCAL_AVATAR.to_string(),
            likes: 0,
            replies: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: String,
    pub role: String,
    pub avatar: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub location: Option<String>,
    pub content: String,
    #[serde(default)]
    pub media: Option<MediaRef>,
    pub category: Category,
    pub tags: Vec<String>,
    pub pinned: bool,
    pub likes: u32,
    pub user_liked: bool,
    pub bookmarked: bool,
    pub views: u32,
    pub shares: u32,
    pub reactions: Reactions,
    pub comments: Vec<Comment>,
    /// Static 0–100 display score used for sorting and badges. Not
    /// recomputed when likes or comments change.
    pub engagement: u8,
    #[serde(default)]
    pub cta: Option<Cta>,
}

impl Post {
    pub fn comment_count(&self) -> usize {
        self.comments.iter().map(|c| 1 + c.replies.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaction_accessors_hit_the_matching_field() {
        let mut reactions = Reactions::default();
        reactions.get_mut(ReactionKind::Love).count = 7;
        assert_eq!(reactions.love.count, 7);
        assert_eq!(reactions.get(ReactionKind::Love).count, 7);
        assert_eq!(reactions.get(ReactionKind::Like).count, 0);
    }

    #[test]
    fn reactions_iterate_in_fixed_kind_order() {
        let reactions = Reactions::default();
        let kinds: Vec<ReactionKind> = reactions.iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, ReactionKind::ALL.to_vec());
    }

    #[test]
    fn local_comments_start_clean() {
        let comment = Comment::from_local_user("thank you!");
        assert_eq!(comment.author, LOCAL_AUTHOR);
        assert_eq!(comment.likes, 0);
        assert!(comment.replies.is_empty());
        assert!(!comment.id.is_empty());
    }

    #[test]
    fn comment_count_includes_replies() {
        let mut top = Comment::from_local_user("top level");
        top.replies.push(Comment::from_local_user("reply"));
        let mut post = crate::seed::seed_posts().remove(0);
        post.comments = vec![top];
        assert_eq!(post.comment_count(), 2);
    }
}
