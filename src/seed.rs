//! Fixed seed content for the community feed.
//!
//! This is the collection the content store falls back to when no usable
//! snapshot exists on disk. Order matters: the filter/sort view breaks
//! ties by this original order.

use chrono::NaiveDate;

use crate::model::{
    Category, Comment, Cta, MediaKind, MediaRef, Post, ReactionState, Reactions,
};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn comment(
    id: &str,
    author: &str,
    role: Option<&str>,
    content: &str,
    date: NaiveDate,
    avatar: &str,
    likes: u32,
) -> Comment {
    Comment {
        id: id.to_string(),
        author: author.to_string(),
        role: role.map(str::to_string),
        content: content.to_string(),
        date,
        avatar: avatar.to_string(),
        likes,
        replies: Vec::new(),
    }
}

pub fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: "post-urgent-river-flood".to_string(),
            author: "Amara Osei".to_string(),
            role: "Emergency Response Lead".to_string(),
            avatar: "🚨".to_string(),
            date: day(2025, 7, 28),
            location: Some("Riverside District".to_string()),
            content: "Flash flooding has displaced 40 families along the river \
                      settlements overnight. Our response team is on the ground \
                      distributing clean water, blankets, and emergency food parcels. \
                      Every contribution today goes straight to flood relief."
                .to_string(),
            media: Some(MediaRef {
                kind: MediaKind::Image,
                source: "media/flood-response-team.jpg".to_string(),
            }),
            category: Category::Urgent,
            tags: vec![
                "floodrelief".to_string(),
                "emergency".to_string(),
                "riverside".to_string(),
            ],
            pinned: true,
            likes: 212,
            user_liked: false,
            bookmarked: false,
            views: 4830,
            shares: 164,
            reactions: Reactions {
                like: ReactionState::seeded(96),
                love: ReactionState::seeded(148),
                laugh: ReactionState::seeded(0),
                sad: ReactionState::seeded(57),
                angry: ReactionState::seeded(4),
            },
            comments: vec![
                comment(
                    "c-flood-1",
                    "Daniel Mensah",
                    Some("Volunteer"),
                    "Heading to the distribution point after work. What's most needed?",
                    day(2025, 7, 28),
                    "🧢",
                    18,
                ),
                {
                    let mut c = comment(
                        "c-flood-2",
                        "Amara Osei",
                        Some("Emergency Response Lead"),
                        "Blankets and bottled water above all. Thank you, Daniel.",
                        day(2025, 7, 28),
                        "🚨",
                        25,
                    );
                    c.replies = vec![comment(
                        "c-flood-2-r1",
                        "Daniel Mensah",
                        Some("Volunteer"),
                        "On it. See you there.",
                        day(2025, 7, 29),
                        "🧢",
                        9,
                    )];
                    c
                },
            ],
            engagement: 97,
            cta: Some(Cta {
                label: "Give to flood relief".to_string(),
                target: "donate/flood-relief".to_string(),
            }),
        },
        Post {
            id: "post-scholarship-naomi".to_string(),
            author: "Naomi Adjei".to_string(),
            role: "Scholarship Alumna".to_string(),
            avatar: "🎓".to_string(),
            date: day(2025, 7, 21),
            location: Some("Cape Coast".to_string()),
            content: "Five years ago a Harborlight scholarship paid my secondary \
                      school fees. Last week I graduated with a nursing degree, and \
                      next month I start at the district hospital. To everyone who \
                      gives: you are not funding tuition, you are funding futures."
                .to_string(),
            media: Some(MediaRef {
                kind: MediaKind::Image,
                source: "media/naomi-graduation.jpg".to_string(),
            }),
            category: Category::Scholarship,
            tags: vec![
                "scholarship".to_string(),
                "education".to_string(),
                "alumni".to_string(),
            ],
            pinned: false,
            likes: 341,
            user_liked: false,
            bookmarked: false,
            views: 6120,
            shares: 98,
            reactions: Reactions {
                like: ReactionState::seeded(120),
                love: ReactionState::seeded(230),
                laugh: ReactionState::seeded(3),
                sad: ReactionState::seeded(0),
                angry: ReactionState::seeded(0),
            },
            comments: vec![comment(
                "c-naomi-1",
                "Grace Owusu",
                None,
                "Congratulations Naomi! Stories like this are why I give monthly.",
                day(2025, 7, 22),
                "🌸",
                31,
            )],
            engagement: 92,
            cta: Some(Cta {
                label: "Sponsor a scholar".to_string(),
                target: "donate/scholarship-fund".to_string(),
            }),
        },
        Post {
            id: "post-health-mobile-clinic".to_string(),
            author: "Dr. Kwame Boateng".to_string(),
            role: "Medical Director".to_string(),
            avatar: "🩺".to_string(),
            date: day(2025, 7, 14),
            location: Some("Northern Villages Circuit".to_string()),
            content: "Our mobile clinic crossed a milestone this week: 10,000 \
                      patient visits since the program launched. The van now covers \
                      twelve villages on a two-week rotation, offering maternal \
                      checkups, vaccinations, and malaria screening."
                .to_string(),
            media: None,
            category: Category::Healthcare,
            tags: vec![
                "mobileclinic".to_string(),
                "healthcare".to_string(),
                "milestone".to_string(),
            ],
            pinned: false,
            likes: 187,
            user_liked: false,
            bookmarked: false,
            views: 3410,
            shares: 45,
            reactions: Reactions {
                like: ReactionState::seeded(101),
                love: ReactionState::seeded(84),
                laugh: ReactionState::seeded(0),
                sad: ReactionState::seeded(0),
                angry: ReactionState::seeded(0),
            },
            comments: vec![
                comment(
                    "c-clinic-1",
                    "Efua Asante",
                    Some("Community Nurse"),
                    "The vaccination day in Tanoso was the busiest yet. Proud of this team.",
                    day(2025, 7, 15),
                    "💉",
                    14,
                ),
                comment(
                    "c-clinic-2",
                    "Samuel Tetteh",
                    None,
                    "Is the rotation schedule published anywhere? My grandmother is in Abofour.",
                    day(2025, 7, 16),
                    "🌾",
                    6,
                ),
            ],
            engagement: 84,
            cta: None,
        },
        Post {
            id: "post-empowerment-coop".to_string(),
            author: "Abena Sarpong".to_string(),
            role: "Programs Coordinator".to_string(),
            avatar: "🧵".to_string(),
            date: day(2025, 7, 8),
            location: Some("Ashanti Region".to_string()),
            content: "Eighteen women completed our tailoring cooperative training \
                      this month and received starter sewing machines. The \
                      cooperative has already taken its first bulk order: school \
                      uniforms for two local primaries."
                .to_string(),
            media: Some(MediaRef {
                kind: MediaKind::Video,
                source: "media/coop-graduation.mp4".to_string(),
            }),
            category: Category::Empowerment,
            tags: vec![
                "womensempowerment".to_string(),
                "cooperative".to_string(),
                "livelihoods".to_string(),
            ],
            pinned: false,
            likes: 156,
            user_liked: false,
            bookmarked: false,
            views: 2980,
            shares: 37,
            reactions: Reactions {
                like: ReactionState::seeded(77),
                love: ReactionState::seeded(92),
                laugh: ReactionState::seeded(5),
                sad: ReactionState::seeded(0),
                angry: ReactionState::seeded(0),
            },
            comments: vec![],
            engagement: 76,
            cta: Some(Cta {
                label: "Fund a starter kit".to_string(),
                target: "donate/empowerment-fund".to_string(),
            }),
        },
        Post {
            id: "post-news-annual-report".to_string(),
            author: "Harborlight Foundation".to_string(),
            role: "Official".to_string(),
            avatar: "🏮".to_string(),
            date: day(2025, 6, 30),
            location: None,
            content: "Our 2024 annual report is out. Highlights: 312 scholarships \
                      awarded, 41 wells drilled, and 87 cents of every dollar spent \
                      directly on programs. Thank you for a remarkable year."
                .to_string(),
            media: Some(MediaRef {
                kind: MediaKind::Document,
                source: "docs/annual-report-2024.pdf".to_string(),
            }),
            category: Category::News,
            tags: vec!["annualreport".to_string(), "transparency".to_string()],
            pinned: false,
            likes: 98,
            user_liked: false,
            bookmarked: false,
            views: 5240,
            shares: 120,
            reactions: Reactions {
                like: ReactionState::seeded(64),
                love: ReactionState::seeded(30),
                laugh: ReactionState::seeded(0),
                sad: ReactionState::seeded(0),
                angry: ReactionState::seeded(1),
            },
            comments: vec![comment(
                "c-report-1",
                "Kofi Annor",
                Some("Monthly Donor"),
                "The program-spend ratio is what keeps me giving here. Well done.",
                day(2025, 7, 1),
                "📖",
                22,
            )],
            engagement: 71,
            cta: Some(Cta {
                label: "Read the report".to_string(),
                target: "docs/annual-report-2024.pdf".to_string(),
            }),
        },
        Post {
            id: "post-story-volunteer-yaw".to_string(),
            author: "Yaw Darko".to_string(),
            role: "Volunteer".to_string(),
            avatar: "🛠".to_string(),
            date: day(2025, 6, 18),
            location: Some("Volta Region".to_string()),
            content: "Spent my annual leave helping the well-drilling crew this \
                      year. Watching a village tap run clear for the first time is \
                      something I will never forget. If you have been thinking about \
                      volunteering: do it."
                .to_string(),
            media: None,
            category: Category::Story,
            tags: vec!["volunteering".to_string(), "cleanwater".to_string()],
            pinned: false,
            likes: 143,
            user_liked: false,
            bookmarked: false,
            views: 2150,
            shares: 28,
            reactions: Reactions {
                like: ReactionState::seeded(66),
                love: ReactionState::seeded(71),
                laugh: ReactionState::seeded(2),
                sad: ReactionState::seeded(0),
                angry: ReactionState::seeded(0),
            },
            comments: vec![],
            engagement: 63,
            cta: Some(Cta {
                label: "Join as a volunteer".to_string(),
                target: "get-involved/volunteer".to_string(),
            }),
        },
        Post {
            id: "post-impact-wells".to_string(),
            author: "Harborlight Foundation".to_string(),
            role: "Official".to_string(),
            avatar: "🏮".to_string(),
            date: day(2025, 6, 5),
            location: None,
            content: "Well #41 is flowing. Combined, our wells now serve an \
                      estimated 23,000 people with safe drinking water every day. \
                      Each well is maintained by a trained local water committee."
                .to_string(),
            media: Some(MediaRef {
                kind: MediaKind::Image,
                source: "media/well-41-first-draw.jpg".to_string(),
            }),
            category: Category::Impact,
            tags: vec![
                "cleanwater".to_string(),
                "wells".to_string(),
                "impact".to_string(),
            ],
            pinned: false,
            likes: 201,
            user_liked: false,
            bookmarked: false,
            views: 3890,
            shares: 74,
            reactions: Reactions {
                like: ReactionState::seeded(110),
                love: ReactionState::seeded(95),
                laugh: ReactionState::seeded(0),
                sad: ReactionState::seeded(0),
                angry: ReactionState::seeded(0),
            },
            comments: vec![],
            engagement: 88,
            cta: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_covers_every_category() {
        let posts = seed_posts();
        for category in Category::ALL {
            assert!(
                posts.iter().any(|p| p.category == category),
                "no seed post for {:?}",
                category
            );
        }
    }

    #[test]
    fn exactly_one_seed_post_is_pinned() {
        let pinned = seed_posts().iter().filter(|p| p.pinned).count();
        assert_eq!(pinned, 1);
    }

    #[test]
    fn seed_ids_are_unique() {
        let posts = seed_posts();
        for (i, a) in posts.iter().enumerate() {
            for b in posts.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn seed_state_is_untouched_by_the_local_user() {
        for post in seed_posts() {
            assert!(!post.user_liked);
            assert!(!post.bookmarked);
            for (_, reaction) in post.reactions.iter() {
                assert!(!reaction.user_reacted);
            }
        }
    }
}
