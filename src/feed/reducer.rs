//! Pure transforms over the post collection.
//!
//! Every function takes the current collection and returns the next one;
//! callers replace the store's contents wholesale. A missing post id is a
//! silent no-op: rapid double-presses and stale selections must never
//! corrupt state or crash the event loop. None of the transforms change
//! a post's position in the collection.

use crate::model::{Comment, Post, ReactionKind};

/// Everything the UI can ask the feed to do.
///
/// `ToggleComments` is part of the vocabulary for completeness, but flips
/// presentation state only: the content collection passes through
/// untouched and nothing is persisted for it.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedAction {
    Like { post_id: String },
    React { post_id: String, kind: ReactionKind },
    Bookmark { post_id: String },
    ToggleComments { post_id: String },
    AddComment { post_id: String, text: String },
}

pub fn apply(posts: &[Post], action: &FeedAction) -> Vec<Post> {
    match action {
        FeedAction::Like { post_id } => like(posts, post_id),
        FeedAction::React { post_id, kind } => react(posts, post_id, *kind),
        FeedAction::Bookmark { post_id } => bookmark(posts, post_id),
        FeedAction::ToggleComments { .. } => posts.to_vec(),
        FeedAction::AddComment { post_id, text } => add_comment(posts, post_id, text),
    }
}

/// Clone the collection and run `mutate` on the post matching `post_id`,
/// if any.
fn with_post(posts: &[Post], post_id: &str, mutate: impl FnOnce(&mut Post)) -> Vec<Post> {
    let mut next = posts.to_vec();
    if let Some(post) = next.iter_mut().find(|p| p.id == post_id) {
        mutate(post);
    }
    next
}

/// Toggle the local user's like. The counter moves by exactly one in the
/// direction of the toggle and never goes below zero.
pub fn like(posts: &[Post], post_id: &str) -> Vec<Post> {
    with_post(posts, post_id, |post| {
        post.user_liked = !post.user_liked;
        if post.user_liked {
            post.likes += 1;
        } else {
            post.likes = post.likes.saturating_sub(1);
        }
    })
}

/// Toggle one reaction kind. Kinds are independent; the other four
/// counters are untouched.
pub fn react(posts: &[Post], post_id: &str, kind: ReactionKind) -> Vec<Post> {
    with_post(posts, post_id, |post| {
        let reaction = post.reactions.get_mut(kind);
        reaction.user_reacted = !reaction.user_reacted;
        if reaction.user_reacted {
            reaction.count += 1;
        } else {
            reaction.count = reaction.count.saturating_sub(1);
        }
    })
}

/// Flip the local bookmark flag. No counter is attached.
pub fn bookmark(posts: &[Post], post_id: &str) -> Vec<Post> {
    with_post(posts, post_id, |post| {
        post.bookmarked = !post.bookmarked;
    })
}

/// Append a comment authored by the local user. Empty or whitespace-only
/// text is rejected without touching the collection. Replies to existing
/// comments are not supported from this client; new comments always land
/// at top level, in last position.
pub fn add_comment(posts: &[Post], post_id: &str, text: &str) -> Vec<Post> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return posts.to_vec();
    }
    with_post(posts, post_id, |post| {
        post.comments.push(Comment::from_local_user(trimmed));
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_posts;

    fn post<'a>(posts: &'a [Post], id: &str) -> &'a Post {
        posts.iter().find(|p| p.id == id).expect("post exists")
    }

    const WELLS: &str = "post-impact-wells";

    #[test]
    fn like_toggle_moves_counter_by_exactly_one() {
        let posts = seed_posts();
        let initial = post(&posts, WELLS).likes;

        let liked = like(&posts, WELLS);
        assert_eq!(post(&liked, WELLS).likes, initial + 1);
        assert!(post(&liked, WELLS).user_liked);

        let unliked = like(&liked, WELLS);
        assert_eq!(post(&unliked, WELLS).likes, initial);
        assert!(!post(&unliked, WELLS).user_liked);
    }

    #[test]
    fn likes_never_go_negative() {
        let mut posts = seed_posts();
        // force a pathological starting point: already-liked with a zero counter
        posts[0].likes = 0;
        posts[0].user_liked = true;
        let id = posts[0].id.clone();

        let next = like(&posts, &id);
        assert_eq!(post(&next, &id).likes, 0);
        assert!(!post(&next, &id).user_liked);
    }

    #[test]
    fn reacting_leaves_other_kinds_untouched() {
        let posts = seed_posts();
        let before = post(&posts, WELLS).reactions.clone();

        let next = react(&posts, WELLS, ReactionKind::Love);
        let after = &post(&next, WELLS).reactions;

        assert_eq!(after.love.count, before.love.count + 1);
        assert!(after.love.user_reacted);
        assert_eq!(after.like, before.like);
        assert_eq!(after.laugh, before.laugh);
        assert_eq!(after.sad, before.sad);
        assert_eq!(after.angry, before.angry);
        // the post-level like counter is a separate mechanism entirely
        assert_eq!(post(&next, WELLS).likes, post(&posts, WELLS).likes);
    }

    #[test]
    fn simultaneous_reactions_of_different_kinds_are_allowed() {
        let posts = seed_posts();
        let next = react(&react(&posts, WELLS, ReactionKind::Love), WELLS, ReactionKind::Sad);
        let reactions = &post(&next, WELLS).reactions;
        assert!(reactions.love.user_reacted);
        assert!(reactions.sad.user_reacted);
    }

    #[test]
    fn bookmark_flips_without_counter_side_effects() {
        let posts = seed_posts();
        let likes_before = post(&posts, WELLS).likes;

        let next = bookmark(&posts, WELLS);
        assert!(post(&next, WELLS).bookmarked);
        assert_eq!(post(&next, WELLS).likes, likes_before);

        let back = bookmark(&next, WELLS);
        assert!(!post(&back, WELLS).bookmarked);
    }

    #[test]
    fn every_action_is_a_noop_on_a_missing_id() {
        let posts = seed_posts();
        let actions = [
            FeedAction::Like { post_id: "ghost".into() },
            FeedAction::React { post_id: "ghost".into(), kind: ReactionKind::Angry },
            FeedAction::Bookmark { post_id: "ghost".into() },
            FeedAction::ToggleComments { post_id: "ghost".into() },
            FeedAction::AddComment { post_id: "ghost".into(), text: "hello".into() },
        ];
        for action in &actions {
            assert_eq!(apply(&posts, action), posts, "{:?} mutated state", action);
        }
    }

    #[test]
    fn comments_append_in_order() {
        let mut posts = seed_posts();
        posts[0].comments.clear();
        let id = posts[0].id.clone();

        let mut current = posts;
        for text in ["A", "B", "C"] {
            current = add_comment(&current, &id, text);
        }

        let contents: Vec<&str> = post(&current, &id)
            .comments
            .iter()
            .map(|c| c.content.as_str())
            .collect();
        assert_eq!(contents, vec!["A", "B", "C"]);
    }

    #[test]
    fn blank_comment_text_is_rejected() {
        let posts = seed_posts();
        let count = post(&posts, WELLS).comments.len();
        for text in ["", "   ", "\n\t  "] {
            let next = add_comment(&posts, WELLS, text);
            assert_eq!(post(&next, WELLS).comments.len(), count);
            assert_eq!(next, posts);
        }
    }

    #[test]
    fn comment_text_is_trimmed_and_stamped() {
        let posts = seed_posts();
        let next = add_comment(&posts, WELLS, "  well done!  ");
        let added = post(&next, WELLS).comments.last().expect("comment added");
        assert_eq!(added.content, "well done!");
        assert_eq!(added.author, crate::model::LOCAL_AUTHOR);
        assert_eq!(added.likes, 0);
        assert!(added.replies.is_empty());
    }

    #[test]
    fn toggle_comments_passes_content_through() {
        let posts = seed_posts();
        let next = apply(&posts, &FeedAction::ToggleComments { post_id: WELLS.into() });
        assert_eq!(next, posts);
    }

    #[test]
    fn mutations_never_reorder_the_collection() {
        let posts = seed_posts();
        let next = like(&bookmark(&posts, WELLS), "post-scholarship-naomi");
        let ids: Vec<&str> = next.iter().map(|p| p.id.as_str()).collect();
        let original: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, original);
    }
}
